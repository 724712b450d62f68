pub mod booking;
pub mod settings;
pub mod user;
pub mod vehicle;

pub use booking::*;
pub use settings::*;
pub use user::*;
pub use vehicle::*;
