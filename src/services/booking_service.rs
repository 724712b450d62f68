use crate::domain::entities::{
    Availability, AvailabilityQuery, BookingChannel, BookingForm, BookingFormInput, BookingRecord,
    CustomerRef, ValidationResult,
};
use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::ports::{AuthContext, BookingApi, Clock, Notification, Notifier};
use crate::infrastructure::observability::BOOKINGS_SUBMITTED;
use crate::services::booking_validator::{normalize_identity, validate, validate_form};
use crate::services::conflict_parser::parse_conflict;
use crate::services::submission_state::{Submission, SubmissionState};
use crate::shared::Locale;
use serde::Serialize;
use std::sync::Arc;

/// What the caller gets back from a submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Validation failed; nothing was sent.
    Rejected { errors: Vec<String> },
    /// The backend created the booking.
    Created {
        booking: BookingRecord,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        bookings: Option<Vec<BookingRecord>>,
    },
    /// The backend or the transport failed. The user has to resubmit.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReport {
    pub state: SubmissionState,
    #[serde(flatten)]
    pub outcome: SubmissionOutcome,
}

/// Turns an API failure into the text shown to the user.
pub fn describe_api_error(err: &ApiError, locale: Locale) -> String {
    match err {
        ApiError::Validation { fields } => fields.join(", "),
        ApiError::Network { message } => message.clone(),
        ApiError::Server { message, .. } => parse_conflict(message, locale),
    }
}

fn success_message(record: &BookingRecord, locale: Locale) -> String {
    let base = match locale {
        Locale::En => "Booking created successfully",
        Locale::Fr => "Réservation créée avec succès",
    };

    match record.booking_number.as_deref() {
        Some(number) if !number.is_empty() => format!("{} (#{})", base, number),
        _ => base.to_string(),
    }
}

/// Validates booking forms and submits them to the backend.
#[derive(Clone)]
pub struct BookingService {
    api: Arc<dyn BookingApi>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(api: Arc<dyn BookingApi>, notifier: Arc<dyn Notifier>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            notifier,
            clock,
        }
    }

    /// Validate the shared booking fields against today's date.
    pub fn validate(&self, input: &BookingFormInput, locale: Locale) -> ValidationResult {
        validate(input, self.clock.today(), locale)
    }

    /// Validate a full submission, customer included.
    pub fn validate_form(&self, form: &BookingForm, locale: Locale) -> ValidationResult {
        validate_form(form, self.clock.today(), locale)
    }

    /// Run one submission attempt: validate, send, notify, refresh.
    ///
    /// The form only reaches the API when validation passed for this exact
    /// value. No retry is attempted on failure.
    pub async fn submit(
        &self,
        form: BookingForm,
        auth: &dyn AuthContext,
        locale: Locale,
    ) -> SubmissionReport {
        let channel = form.channel();
        let mut submission = Submission::new();

        let form = BookingForm {
            customer: match form.customer {
                CustomerRef::Guest(identity) => CustomerRef::Guest(normalize_identity(identity)),
                existing => existing,
            },
            ..form
        };

        advance(&mut submission, SubmissionState::Validating);
        let validation = self.validate_form(&form, locale);

        if !validation.is_valid {
            tracing::info!(
                "Booking form rejected ({} channel): {} error(s)",
                channel,
                validation.errors.len()
            );
            for error in &validation.errors {
                self.notifier.notify(Notification::error(error.clone()));
            }
            advance(&mut submission, SubmissionState::Idle);
            record_outcome(channel, "rejected");

            return SubmissionReport {
                state: submission.state(),
                outcome: SubmissionOutcome::Rejected {
                    errors: validation.errors,
                },
            };
        }

        advance(&mut submission, SubmissionState::Submitting);
        tracing::info!(
            "Submitting booking for vehicle {} ({} channel)",
            form.input.vehicle_id,
            channel
        );

        match self.api.create_booking(&form, auth).await {
            Ok(booking) => {
                advance(&mut submission, SubmissionState::Success);
                record_outcome(channel, "created");

                let message = success_message(&booking, locale);
                self.notifier.notify(Notification::success(message.clone()));
                tracing::info!(
                    "Booking {} created (number: {})",
                    booking.id,
                    booking.booking_number.as_deref().unwrap_or("n/a")
                );

                let bookings = match channel {
                    BookingChannel::Admin => self.refresh_bookings(auth).await,
                    BookingChannel::Website => None,
                };

                SubmissionReport {
                    state: submission.state(),
                    outcome: SubmissionOutcome::Created {
                        booking,
                        message,
                        bookings,
                    },
                }
            }
            Err(err) => {
                advance(&mut submission, SubmissionState::Failed);
                record_outcome(channel, "failed");

                tracing::warn!("Booking submission failed: {}", err);
                let message = describe_api_error(&err, locale);
                self.notifier.notify(Notification::error(message.clone()));

                SubmissionReport {
                    state: submission.state(),
                    outcome: SubmissionOutcome::Failed { message },
                }
            }
        }
    }

    pub async fn check_availability(
        &self,
        vehicle_id: &str,
        query: &AvailabilityQuery,
    ) -> ApiResult<Availability> {
        self.api.check_availability(vehicle_id, query).await
    }

    pub async fn list_bookings(&self, auth: &dyn AuthContext) -> ApiResult<Vec<BookingRecord>> {
        self.api.list_bookings(auth).await
    }

    async fn refresh_bookings(&self, auth: &dyn AuthContext) -> Option<Vec<BookingRecord>> {
        match self.api.list_bookings(auth).await {
            Ok(bookings) => Some(bookings),
            Err(e) => {
                tracing::warn!("Failed to refresh booking list after creation: {}", e);
                None
            }
        }
    }
}

fn advance(submission: &mut Submission, to: SubmissionState) {
    if let Err(e) = submission.transition(to) {
        tracing::error!("Booking submission state error: {}", e);
    }
}

fn record_outcome(channel: BookingChannel, outcome: &'static str) {
    metrics::counter!(
        BOOKINGS_SUBMITTED,
        "channel" => channel.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
