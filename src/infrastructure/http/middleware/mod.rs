pub mod auth;
pub mod error;
pub mod locale;

pub use auth::{require_admin_token, AdminToken};
pub use error::{WebError, WebResult};
pub use locale::{negotiate_locale, RequestLocale};

use crate::domain::ports::{AdminApi, VehicleCatalog};
use crate::services::{
    BookingRateLimiter, BookingService, DashboardService, PricingService, WhatsAppService,
};
use crate::shared::Locale;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub default_locale: Locale,
    pub catalog: Arc<dyn VehicleCatalog>,
    pub admin_api: Arc<dyn AdminApi>,
    pub booking_service: BookingService,
    pub pricing_service: PricingService,
    pub dashboard_service: DashboardService,
    pub whatsapp_service: WhatsAppService,
    pub rate_limiter: BookingRateLimiter,
}
