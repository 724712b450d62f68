use crate::domain::errors::ApiError;
use crate::domain::ports::VehicleCatalog;
use crate::services::rental_duration::compute_days_from_strings;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub vehicle_id: Option<String>,
    pub pickup_date: String,
    pub return_date: String,
    pub pickup_time: Option<String>,
    pub return_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Pickup and return dates must be YYYY-MM-DD")]
    InvalidDates,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Rental total for a number of days at a daily rate, rounded to cents.
pub fn rental_total(days: u32, daily_rate: f64) -> f64 {
    (f64::from(days) * daily_rate * 100.0).round() / 100.0
}

#[derive(Clone)]
pub struct PricingService {
    catalog: Arc<dyn VehicleCatalog>,
}

impl PricingService {
    pub fn new(catalog: Arc<dyn VehicleCatalog>) -> Self {
        Self { catalog }
    }

    /// Day count for the requested window, priced when a vehicle is named.
    pub async fn quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
        let days = compute_days_from_strings(
            &request.pickup_date,
            &request.return_date,
            request.pickup_time.as_deref(),
            request.return_time.as_deref(),
        )
        .ok_or(QuoteError::InvalidDates)?;

        let vehicle_id = match request.vehicle_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Ok(Quote {
                    days,
                    daily_rate: None,
                    total: None,
                })
            }
        };

        let vehicle = self.catalog.get_vehicle(vehicle_id).await?;

        Ok(Quote {
            days,
            daily_rate: Some(vehicle.daily_price),
            total: Some(rental_total(days, vehicle.daily_price)),
        })
    }
}
