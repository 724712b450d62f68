use crate::domain::entities::{
    BookingForm, BookingFormInput, BookingRecord, LoginRequest, LoginResponse, SiteSettings,
};
use crate::infrastructure::http::controllers::bookings::report_status;
use crate::infrastructure::http::middleware::{
    AdminToken, AppState, RequestLocale, WebError, WebResult,
};
use crate::services::dashboard_service::Dashboard;
use crate::services::SubmissionReport;
use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AdminBookingRequest {
    #[serde(flatten)]
    pub booking: BookingFormInput,
    #[serde(default, rename = "customerId")]
    pub customer_id: String,
}

/// POST /api/admin/login - Exchange credentials for a backend token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> WebResult<Json<LoginResponse>> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(WebError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let response = state.admin_api.login(&request).await?;
    tracing::info!("Back-office login succeeded");
    Ok(Json(response))
}

/// POST /api/admin/bookings - Booking created by staff for an existing customer
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(token): Extension<AdminToken>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
    Json(request): Json<AdminBookingRequest>,
) -> (StatusCode, Json<SubmissionReport>) {
    let form = BookingForm::admin(request.booking, request.customer_id);
    let report = state.booking_service.submit(form, &token, locale).await;
    (report_status(&report), Json(report))
}

/// GET /api/admin/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(token): Extension<AdminToken>,
) -> WebResult<Json<Vec<BookingRecord>>> {
    let bookings = state.booking_service.list_bookings(&token).await?;
    Ok(Json(bookings))
}

/// GET /api/admin/dashboard - Cars, users and bookings at a glance
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(token): Extension<AdminToken>,
) -> Json<Dashboard> {
    Json(state.dashboard_service.load(&token).await)
}

/// GET /api/admin/settings
pub async fn settings(
    State(state): State<AppState>,
    Extension(token): Extension<AdminToken>,
) -> WebResult<Json<SiteSettings>> {
    let settings = state.admin_api.get_settings(&token).await?;
    Ok(Json(settings))
}
