use crate::domain::entities::{
    Availability, AvailabilityQuery, BookingForm, BookingFormInput, CustomerIdentity,
    ValidationResult,
};
use crate::domain::ports::Anonymous;
use crate::infrastructure::http::middleware::{AppState, RequestLocale, WebError, WebResult};
use crate::infrastructure::observability::BOOKINGS_THROTTLED;
use crate::services::pricing::{Quote, QuoteRequest};
use crate::services::{SubmissionOutcome, SubmissionReport};
use crate::shared::Locale;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct WebsiteBookingRequest {
    #[serde(flatten)]
    pub booking: BookingFormInput,
    #[serde(flatten)]
    pub customer: CustomerIdentity,
}

pub fn report_status(report: &SubmissionReport) -> StatusCode {
    match report.outcome {
        SubmissionOutcome::Created { .. } => StatusCode::CREATED,
        SubmissionOutcome::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionOutcome::Failed { .. } => StatusCode::BAD_REQUEST,
    }
}

fn throttled_message(wait: Duration, locale: Locale) -> String {
    let minutes = wait.as_secs().div_ceil(60).max(1);
    match locale {
        Locale::En => format!(
            "Too many booking requests. Please try again in {} minute(s).",
            minutes
        ),
        Locale::Fr => format!(
            "Trop de demandes de réservation. Veuillez réessayer dans {} minute(s).",
            minutes
        ),
    }
}

/// POST /api/bookings/quote - Rental days and price for a window
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> WebResult<Json<Quote>> {
    let quote = state.pricing_service.quote(&request).await?;
    Ok(Json(quote))
}

/// POST /api/bookings/validate - Check a booking form without submitting it
pub async fn validate_booking(
    State(state): State<AppState>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
    Json(input): Json<BookingFormInput>,
) -> Json<ValidationResult> {
    Json(state.booking_service.validate(&input, locale))
}

/// GET /api/bookings/availability/:vehicle_id - Backend conflict check
pub async fn check_availability(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> WebResult<Json<Availability>> {
    let availability = state
        .booking_service
        .check_availability(&vehicle_id, &query)
        .await?;
    Ok(Json(availability))
}

/// POST /api/bookings/website - Public booking request
pub async fn create_website_booking(
    State(state): State<AppState>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
    Json(request): Json<WebsiteBookingRequest>,
) -> WebResult<(StatusCode, Json<SubmissionReport>)> {
    let contact = request.customer.phone.trim().to_string();
    let form = BookingForm::website(request.booking, request.customer);

    // Only well-formed requests count against the contact's quota
    if state.booking_service.validate_form(&form, locale).is_valid {
        if let Err(wait) = state.rate_limiter.check(&contact).await {
            tracing::warn!("Throttled website booking for contact {}", contact);
            metrics::counter!(BOOKINGS_THROTTLED).increment(1);
            return Err(WebError::TooManyRequests(throttled_message(wait, locale)));
        }
    }

    let report = state.booking_service.submit(form, &Anonymous, locale).await;
    Ok((report_status(&report), Json(report)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttled_message_rounds_up_minutes() {
        assert_eq!(
            throttled_message(Duration::from_secs(61), Locale::En),
            "Too many booking requests. Please try again in 2 minute(s)."
        );
        assert_eq!(
            throttled_message(Duration::from_secs(0), Locale::Fr),
            "Trop de demandes de réservation. Veuillez réessayer dans 1 minute(s)."
        );
    }

    #[test]
    fn test_website_request_reads_flat_json() {
        let request: WebsiteBookingRequest = serde_json::from_value(serde_json::json!({
            "vehicleId": "car-1",
            "pickupDate": "2025-06-01",
            "returnDate": "2025-06-04",
            "pickupTime": "10:00",
            "returnTime": "10:00",
            "pickupLocation": "Marrakech",
            "returnLocation": "Marrakech",
            "firstName": "Nadia",
            "lastName": "Alaoui",
            "email": "nadia@example.com",
            "phone": "+212622222222"
        }))
        .unwrap();

        assert_eq!(request.booking.vehicle_id, "car-1");
        assert_eq!(request.customer.first_name, "Nadia");
    }
}
