use crate::domain::entities::{
    AdminUser, Availability, AvailabilityQuery, BookingChannel, BookingForm, BookingRecord,
    LoginRequest, LoginResponse, SiteSettings, Vehicle,
};
use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::ports::{AdminApi, AuthContext, BookingApi, VehicleCatalog};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the car-rental backend REST API.
///
/// Every response is run through [`decode_response`], so callers only ever
/// see [`ApiError`] and never a transport error or a panic.
#[derive(Clone)]
pub struct RestApiClient {
    base_url: Url,
    http_client: Client,
}

impl RestApiClient {
    /// Create a client rooted at `base_url` (e.g. `https://api.example.com/api`).
    ///
    /// `timeout` of `None` leaves outbound requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| ApiError::network(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ApiError::network(format!("Invalid backend URL: {}", base_url)))?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Append `segments` to the base URL, percent-encoding each one so an id
    /// can never add path levels or a query string.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| matches!(s.trim(), "" | "." | ".."))
        {
            return Err(ApiError::server(400, format!("Invalid resource id: {:?}", bad)));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::network("Invalid backend URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(request: RequestBuilder, auth: &dyn AuthContext) -> RequestBuilder {
        match auth.get_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(describe_transport_error(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("Failed to read response body: {}", e)))?;

        debug!("Backend responded with status {}", status);
        decode_response(status, &body)
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    let message = if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connect() {
        format!("Could not reach the booking server: {}", e)
    } else {
        format!("Network error: {}", e)
    };

    warn!("Backend request failed: {}", message);
    message
}

#[derive(Debug, Default, Deserialize)]
struct FieldError {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    errors: Option<Vec<FieldError>>,
}

impl ErrorBody {
    fn into_api_error(self, status: u16) -> ApiError {
        let fields: Vec<String> = self
            .errors
            .unwrap_or_default()
            .into_iter()
            .filter_map(|f| f.msg.or(f.message))
            .filter(|m| !m.trim().is_empty())
            .collect();

        if !fields.is_empty() {
            return ApiError::Validation { fields };
        }

        let message = self
            .message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        ApiError::server(status, message)
    }
}

/// Classify a backend response body.
///
/// Successful bodies may be the payload itself or an envelope
/// `{ "success": true, "data": ... }`. An envelope with `"success": false` is
/// a failure even under a 2xx status.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let value: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let is_success_status = (200..300).contains(&status);

    let value = match value {
        Some(value) => value,
        None if is_success_status => {
            return Err(ApiError::network("Invalid response from server"));
        }
        None => {
            return Err(ApiError::server(
                status,
                format!("Request failed with status {}", status),
            ));
        }
    };

    let flagged_failure = value.get("success").and_then(|s| s.as_bool()) == Some(false);

    if !is_success_status || flagged_failure {
        let body: ErrorBody = serde_json::from_value(value).unwrap_or_default();
        let status = if is_success_status { 400 } else { status };
        return Err(body.into_api_error(status));
    }

    let payload = match value {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    };

    serde_json::from_value(payload)
        .map_err(|e| ApiError::network(format!("Unexpected response format: {}", e)))
}

#[async_trait]
impl BookingApi for RestApiClient {
    async fn create_booking(
        &self,
        form: &BookingForm,
        auth: &dyn AuthContext,
    ) -> ApiResult<BookingRecord> {
        let url = match form.channel() {
            BookingChannel::Admin => self.endpoint(&["bookings"])?,
            BookingChannel::Website => self.endpoint(&["bookings", "website"])?,
        };

        let request = self.http_client.post(url).json(form);
        self.send(Self::authorize(request, auth)).await
    }

    async fn check_availability(
        &self,
        vehicle_id: &str,
        query: &AvailabilityQuery,
    ) -> ApiResult<Availability> {
        let request = self
            .http_client
            .get(self.endpoint(&["bookings", "availability", vehicle_id])?)
            .query(&[
                ("pickupDate", query.pickup_date.as_str()),
                ("returnDate", query.return_date.as_str()),
            ]);
        self.send(request).await
    }

    async fn list_bookings(&self, auth: &dyn AuthContext) -> ApiResult<Vec<BookingRecord>> {
        let request = self.http_client.get(self.endpoint(&["bookings"])?);
        self.send(Self::authorize(request, auth)).await
    }
}

#[async_trait]
impl VehicleCatalog for RestApiClient {
    async fn list_vehicles(&self) -> ApiResult<Vec<Vehicle>> {
        self.send(self.http_client.get(self.endpoint(&["cars"])?))
            .await
    }

    async fn get_vehicle(&self, id: &str) -> ApiResult<Vehicle> {
        self.send(self.http_client.get(self.endpoint(&["cars", id])?))
            .await
    }
}

#[async_trait]
impl AdminApi for RestApiClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let url = self.endpoint(&["auth", "login"])?;
        self.send(self.http_client.post(url).json(request)).await
    }

    async fn list_users(&self, auth: &dyn AuthContext) -> ApiResult<Vec<AdminUser>> {
        let request = self.http_client.get(self.endpoint(&["users"])?);
        self.send(Self::authorize(request, auth)).await
    }

    async fn get_settings(&self, auth: &dyn AuthContext) -> ApiResult<SiteSettings> {
        let request = self.http_client.get(self.endpoint(&["settings"])?);
        self.send(Self::authorize(request, auth)).await
    }
}
