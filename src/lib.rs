pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod shared;

pub use config::Config;
pub use domain::errors::{ApiError, ApiResult};
pub use shared::Locale;
