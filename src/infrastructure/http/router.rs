use crate::infrastructure::http::controllers::{admin, bookings, contact, vehicles};
use crate::infrastructure::http::middleware::{negotiate_locale, require_admin_token, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    // Back-office routes (bearer token forwarded to the backend)
    let admin_routes = Router::new()
        .route(
            "/api/admin/bookings",
            get(admin::list_bookings).post(admin::create_booking),
        )
        .route("/api/admin/dashboard", get(admin::dashboard))
        .route("/api/admin/settings", get(admin::settings))
        .route_layer(axum::middleware::from_fn(require_admin_token));

    // Public website routes
    let public_routes = Router::new()
        .route("/health", get(health_handler))
        .route("/", get(root_handler))
        .route("/api/vehicles", get(vehicles::list_vehicles))
        .route("/api/vehicles/:id", get(vehicles::get_vehicle))
        .route("/api/bookings/quote", post(bookings::quote))
        .route("/api/bookings/validate", post(bookings::validate_booking))
        .route(
            "/api/bookings/availability/:vehicle_id",
            get(bookings::check_availability),
        )
        .route(
            "/api/bookings/website",
            post(bookings::create_website_booking),
        )
        .route("/api/contact/whatsapp", post(contact::whatsapp_link))
        .route("/api/admin/login", post(admin::login));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            negotiate_locale,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn root_handler() -> &'static str {
    "Rentadrive booking gateway"
}
