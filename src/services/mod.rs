pub mod booking_service;
pub mod booking_validator;
pub mod conflict_parser;
pub mod dashboard_service;
pub mod pricing;
pub mod rate_limiter;
pub mod rental_duration;
pub mod submission_state;
pub mod whatsapp;

pub use booking_service::{BookingService, SubmissionOutcome, SubmissionReport};
pub use dashboard_service::DashboardService;
pub use pricing::PricingService;
pub use rate_limiter::BookingRateLimiter;
pub use whatsapp::WhatsAppService;
