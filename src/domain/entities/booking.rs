use serde::{Deserialize, Serialize};

/// Raw booking form fields as typed by the user.
///
/// Every field is kept as the string the form produced so that validation can
/// report missing or malformed values instead of failing at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingFormInput {
    pub vehicle_id: String,
    pub pickup_date: String,
    pub return_date: String,
    pub pickup_time: String,
    pub return_time: String,
    pub pickup_location: String,
    pub return_location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Who the booking is for: an existing customer picked in the back-office, or
/// a guest filling the public form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Existing {
        #[serde(rename = "customerId")]
        customer_id: String,
    },
    Guest(CustomerIdentity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingChannel {
    Admin,
    Website,
}

impl std::fmt::Display for BookingChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingChannel::Admin => write!(f, "admin"),
            BookingChannel::Website => write!(f, "website"),
        }
    }
}

/// A complete booking submission: the shared form fields plus the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    #[serde(flatten)]
    pub input: BookingFormInput,
    #[serde(flatten)]
    pub customer: CustomerRef,
}

impl BookingForm {
    pub fn admin(input: BookingFormInput, customer_id: impl Into<String>) -> Self {
        Self {
            input,
            customer: CustomerRef::Existing {
                customer_id: customer_id.into(),
            },
        }
    }

    pub fn website(input: BookingFormInput, identity: CustomerIdentity) -> Self {
        Self {
            input,
            customer: CustomerRef::Guest(identity),
        }
    }

    pub fn channel(&self) -> BookingChannel {
        match self.customer {
            CustomerRef::Existing { .. } => BookingChannel::Admin,
            CustomerRef::Guest(_) => BookingChannel::Website,
        }
    }
}

/// Outcome of validating a booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Booking as returned by the backend. Only the fields shown after a
/// submission are modelled; anything else is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub booking_number: Option<String>,
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub pickup_date: String,
    pub return_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedWindow {
    pub pickup_date: String,
    pub return_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub available: bool,
    #[serde(default)]
    pub conflicts: Vec<BookedWindow>,
}
