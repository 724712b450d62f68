use crate::domain::entities::{BookingForm, BookingFormInput, CustomerIdentity, CustomerRef, ValidationResult};
use crate::services::rental_duration::{adjusted_days, parse_date, MINIMUM_RENTAL_DAYS};
use crate::shared::utils::email_validator::validate_and_normalize_email;
use crate::shared::Locale;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// A single problem found in a booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    VehicleRequired,
    PickupDateRequired,
    ReturnDateRequired,
    PickupTimeRequired,
    ReturnTimeRequired,
    PickupLocationRequired,
    ReturnLocationRequired,
    InvalidTimeFormat,
    InvalidPickupDate,
    InvalidReturnDate,
    PickupDateInPast,
    ReturnNotAfterPickup,
    MinimumDuration,
    MinimumDurationWithTimes,
    CustomerRequired,
    FirstNameRequired,
    LastNameRequired,
    EmailRequired,
    InvalidEmail,
    PhoneRequired,
}

impl ValidationIssue {
    pub fn message(&self, locale: Locale) -> &'static str {
        use ValidationIssue::*;

        match (self, locale) {
            (VehicleRequired, Locale::En) => "Vehicle is required",
            (VehicleRequired, Locale::Fr) => "Le véhicule est obligatoire",
            (PickupDateRequired, Locale::En) => "Pickup date is required",
            (PickupDateRequired, Locale::Fr) => "La date de prise en charge est obligatoire",
            (ReturnDateRequired, Locale::En) => "Return date is required",
            (ReturnDateRequired, Locale::Fr) => "La date de retour est obligatoire",
            (PickupTimeRequired, Locale::En) => "Pickup time is required",
            (PickupTimeRequired, Locale::Fr) => "L'heure de prise en charge est obligatoire",
            (ReturnTimeRequired, Locale::En) => "Return time is required",
            (ReturnTimeRequired, Locale::Fr) => "L'heure de retour est obligatoire",
            (PickupLocationRequired, Locale::En) => "Pickup location is required",
            (PickupLocationRequired, Locale::Fr) => "Le lieu de prise en charge est obligatoire",
            (ReturnLocationRequired, Locale::En) => "Return location is required",
            (ReturnLocationRequired, Locale::Fr) => "Le lieu de retour est obligatoire",
            (InvalidTimeFormat, Locale::En) => "Time must be in HH:MM format (24-hour)",
            (InvalidTimeFormat, Locale::Fr) => "L'heure doit être au format HH:MM (24 heures)",
            (InvalidPickupDate, Locale::En) => "Pickup date is not a valid date",
            (InvalidPickupDate, Locale::Fr) => "La date de prise en charge n'est pas valide",
            (InvalidReturnDate, Locale::En) => "Return date is not a valid date",
            (InvalidReturnDate, Locale::Fr) => "La date de retour n'est pas valide",
            (PickupDateInPast, Locale::En) => "Pickup date cannot be in the past",
            (PickupDateInPast, Locale::Fr) => {
                "La date de prise en charge ne peut pas être dans le passé"
            }
            (ReturnNotAfterPickup, Locale::En) => "Return date must be after pickup date",
            (ReturnNotAfterPickup, Locale::Fr) => {
                "La date de retour doit être postérieure à la date de prise en charge"
            }
            (MinimumDuration, Locale::En) => "Minimum rental period is 2 days",
            (MinimumDuration, Locale::Fr) => "La durée minimale de location est de 2 jours",
            (MinimumDurationWithTimes, Locale::En) => {
                "Minimum rental period is 2 days including pickup and return times"
            }
            (MinimumDurationWithTimes, Locale::Fr) => {
                "La durée minimale de location est de 2 jours, heures comprises"
            }
            (CustomerRequired, Locale::En) => "Customer is required",
            (CustomerRequired, Locale::Fr) => "Le client est obligatoire",
            (FirstNameRequired, Locale::En) => "First name is required",
            (FirstNameRequired, Locale::Fr) => "Le prénom est obligatoire",
            (LastNameRequired, Locale::En) => "Last name is required",
            (LastNameRequired, Locale::Fr) => "Le nom est obligatoire",
            (EmailRequired, Locale::En) => "Email is required",
            (EmailRequired, Locale::Fr) => "L'adresse e-mail est obligatoire",
            (InvalidEmail, Locale::En) => "Email address is invalid",
            (InvalidEmail, Locale::Fr) => "L'adresse e-mail n'est pas valide",
            (PhoneRequired, Locale::En) => "Phone number is required",
            (PhoneRequired, Locale::Fr) => "Le numéro de téléphone est obligatoire",
        }
    }
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks the shared booking fields in a fixed order.
pub fn booking_issues(input: &BookingFormInput, today: NaiveDate) -> Vec<ValidationIssue> {
    use ValidationIssue::*;

    let mut issues = Vec::new();

    let required = [
        (&input.vehicle_id, VehicleRequired),
        (&input.pickup_date, PickupDateRequired),
        (&input.return_date, ReturnDateRequired),
        (&input.pickup_time, PickupTimeRequired),
        (&input.return_time, ReturnTimeRequired),
        (&input.pickup_location, PickupLocationRequired),
        (&input.return_location, ReturnLocationRequired),
    ];
    for (value, issue) in required {
        if is_blank(value) {
            issues.push(issue);
        }
    }

    let pickup_time = Some(input.pickup_time.trim()).filter(|t| !t.is_empty());
    let return_time = Some(input.return_time.trim()).filter(|t| !t.is_empty());

    let times_malformed = [pickup_time, return_time]
        .iter()
        .flatten()
        .any(|t| !time_pattern().is_match(t));
    if times_malformed {
        issues.push(InvalidTimeFormat);
    }

    let pickup_date = parse_present_date(&input.pickup_date, InvalidPickupDate, &mut issues);
    let return_date = parse_present_date(&input.return_date, InvalidReturnDate, &mut issues);

    if let Some(pickup) = pickup_date {
        if pickup < today {
            issues.push(PickupDateInPast);
        }
    }

    if let (Some(pickup), Some(ret)) = (pickup_date, return_date) {
        if ret <= pickup {
            issues.push(ReturnNotAfterPickup);
        }

        let calendar_days = (ret - pickup).num_days();
        if calendar_days < i64::from(MINIMUM_RENTAL_DAYS) {
            issues.push(MinimumDuration);
        } else if pickup_time.is_some() && return_time.is_some() {
            let with_times = adjusted_days(pickup, ret, pickup_time, return_time);
            if with_times < MINIMUM_RENTAL_DAYS {
                issues.push(MinimumDurationWithTimes);
            }
        }
    }

    issues
}

fn parse_present_date(
    value: &str,
    invalid: ValidationIssue,
    issues: &mut Vec<ValidationIssue>,
) -> Option<NaiveDate> {
    if is_blank(value) {
        return None;
    }

    let parsed = parse_date(value);
    if parsed.is_none() {
        issues.push(invalid);
    }
    parsed
}

/// Checks the identity a guest supplies on the public booking form.
pub fn customer_issues(identity: &CustomerIdentity) -> Vec<ValidationIssue> {
    use ValidationIssue::*;

    let mut issues = Vec::new();

    if is_blank(&identity.first_name) {
        issues.push(FirstNameRequired);
    }
    if is_blank(&identity.last_name) {
        issues.push(LastNameRequired);
    }
    if is_blank(&identity.email) {
        issues.push(EmailRequired);
    } else if validate_and_normalize_email(&identity.email).is_err() {
        issues.push(InvalidEmail);
    }
    if is_blank(&identity.phone) {
        issues.push(PhoneRequired);
    }

    issues
}

/// Trims the guest's fields and lowercases a well-formed email, the form the
/// backend stores them in. A malformed email is left for validation to report.
pub fn normalize_identity(identity: CustomerIdentity) -> CustomerIdentity {
    let email = validate_and_normalize_email(&identity.email)
        .unwrap_or_else(|_| identity.email.trim().to_string());

    CustomerIdentity {
        first_name: identity.first_name.trim().to_string(),
        last_name: identity.last_name.trim().to_string(),
        email,
        phone: identity.phone.trim().to_string(),
    }
}

fn render(issues: &[ValidationIssue], locale: Locale) -> ValidationResult {
    ValidationResult::from_errors(
        issues
            .iter()
            .map(|issue| issue.message(locale).to_string())
            .collect(),
    )
}

/// Validates the shared booking fields.
pub fn validate(input: &BookingFormInput, today: NaiveDate, locale: Locale) -> ValidationResult {
    render(&booking_issues(input, today), locale)
}

/// Validates a full submission: booking fields first, then the customer.
pub fn validate_form(form: &BookingForm, today: NaiveDate, locale: Locale) -> ValidationResult {
    let mut issues = booking_issues(&form.input, today);

    match &form.customer {
        CustomerRef::Existing { customer_id } => {
            if is_blank(customer_id) {
                issues.push(ValidationIssue::CustomerRequired);
            }
        }
        CustomerRef::Guest(identity) => issues.extend(customer_issues(identity)),
    }

    render(&issues, locale)
}
