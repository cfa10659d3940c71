mod article;
mod product;
mod quote;
pub mod user;
mod video;
mod webinar;

pub use article::*;
pub use product::*;
pub use quote::*;
pub use user::*;
pub use video::*;
pub use webinar::*;
