pub mod booking;
pub mod config;
pub mod error;
pub mod notice;
pub mod room;
pub mod user;

pub use booking::*;
pub use config::*;
pub use error::*;
pub use notice::*;
pub use room::*;
pub use user::*;
