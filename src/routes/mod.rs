pub mod article;
pub mod auth;
pub mod health_checks;
pub mod product;
pub mod quote;
pub mod video;
pub mod webinar;

pub use health_checks::*;
