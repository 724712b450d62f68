use crate::config::Config;
use crate::domain::ports::{AdminApi, BookingApi, Clock, Notifier, VehicleCatalog};
use crate::infrastructure::api_client::RestApiClient;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::providers::LogNotifier;
use crate::infrastructure::runtime::SystemClock;
use crate::services::{
    BookingRateLimiter, BookingService, DashboardService, PricingService, WhatsAppService,
};
use std::sync::Arc;

/// Backend ports shared by the services.
#[derive(Clone)]
pub struct Backends {
    pub bookings: Arc<dyn BookingApi>,
    pub catalog: Arc<dyn VehicleCatalog>,
    pub admin: Arc<dyn AdminApi>,
}

impl Backends {
    pub fn from_client(client: RestApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            bookings: client.clone(),
            catalog: client.clone(),
            admin: client,
        }
    }
}

/// Wire the services over the given backends. Starts no background task.
pub fn assemble_state(
    backends: Backends,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    config: &Config,
) -> AppState {
    let booking_service = BookingService::new(backends.bookings.clone(), notifier, clock);
    let pricing_service = PricingService::new(backends.catalog.clone());
    let dashboard_service = DashboardService::new(
        backends.catalog.clone(),
        backends.admin.clone(),
        backends.bookings,
    );
    let whatsapp_service = WhatsAppService::new(config.whatsapp_number.as_deref());
    let rate_limiter = BookingRateLimiter::per_hour(config.booking_rate_limit_per_hour);

    AppState {
        default_locale: config.default_locale,
        catalog: backends.catalog,
        admin_api: backends.admin,
        booking_service,
        pricing_service,
        dashboard_service,
        whatsapp_service,
        rate_limiter,
    }
}

pub async fn build_app_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let client = RestApiClient::new(&config.api_base_url, config.api_timeout)?;
    tracing::info!("REST client initialized for {}", client.base_url());

    let clock = Arc::new(SystemClock::new(config.business_timezone)) as Arc<dyn Clock>;
    tracing::info!("Business calendar set to {}", config.business_timezone);

    let notifier = Arc::new(LogNotifier) as Arc<dyn Notifier>;

    let state = assemble_state(Backends::from_client(client), clock, notifier, config);
    tracing::info!(
        "Booking rate limiter initialized ({} requests per hour per contact)",
        config.booking_rate_limit_per_hour
    );

    if state.whatsapp_service.is_configured() {
        tracing::info!("WhatsApp contact links enabled");
    } else {
        tracing::warn!("WHATSAPP_NUMBER not set, contact links disabled");
    }

    // Start rate limiter cleanup background task
    {
        let limiter = state.rate_limiter.clone();
        tokio::spawn(async move {
            use tokio::time::{interval, Duration};
            let mut cleanup_interval = interval(Duration::from_secs(60 * 60)); // 1 hour

            tracing::info!("Rate limiter cleanup task started (1-hour interval)");

            loop {
                cleanup_interval.tick().await;
                limiter.cleanup().await;
                tracing::debug!("Rate limiter cleanup completed");
            }
        });
    }

    Ok(state)
}
