pub mod article;
pub mod product;
pub mod quote;
pub mod user;
pub mod video;
pub mod webinar;
