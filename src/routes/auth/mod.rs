pub mod login;
pub mod me;
pub mod password;
pub mod register;

pub use login::*;
pub use me::*;
pub use password::*;
pub use register::*;
