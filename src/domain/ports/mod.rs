pub mod auth_context;
pub mod booking_api;
pub mod catalog_api;
pub mod clock;
pub mod notifier;

pub use auth_context::{Anonymous, AuthContext};
pub use booking_api::BookingApi;
pub use catalog_api::{AdminApi, VehicleCatalog};
pub use clock::Clock;
pub use notifier::{Notification, NotificationLevel, Notifier};
