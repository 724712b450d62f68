use crate::domain::errors::ApiError;
use crate::services::pricing::QuoteError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    TooManyRequests(String),
    /// The backend answered, but with an error of its own.
    Upstream { status: StatusCode, message: String },
    /// The backend could not be reached or answered gibberish.
    BadGateway(String),
    ServiceUnavailable(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not found: {}", msg),
            WebError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            WebError::Unauthorized => write!(f, "Unauthorized"),
            WebError::TooManyRequests(msg) => write!(f, "Too many requests: {}", msg),
            WebError::Upstream { status, message } => {
                write!(f, "Backend error ({}): {}", status, message)
            }
            WebError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            WebError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
        }
    }
}

impl std::error::Error for WebError {}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            WebError::TooManyRequests(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            WebError::Upstream { status, message } => (status, message),
            WebError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            WebError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<ApiError> for WebError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation { fields } => WebError::BadRequest(fields.join(", ")),
            ApiError::Network { message } => WebError::BadGateway(message),
            ApiError::Server { status: 401, .. } => WebError::Unauthorized,
            ApiError::Server { status: 404, message } => WebError::NotFound(message),
            ApiError::Server { status, message } => match StatusCode::from_u16(status) {
                Ok(status) if status.is_client_error() || status.is_server_error() => {
                    WebError::Upstream { status, message }
                }
                _ => WebError::BadGateway(message),
            },
        }
    }
}

impl From<QuoteError> for WebError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::InvalidDates => {
                WebError::BadRequest(QuoteError::InvalidDates.to_string())
            }
            QuoteError::Api(api) => api.into(),
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_mapping() {
        assert!(matches!(
            WebError::from(ApiError::server(401, "expired")),
            WebError::Unauthorized
        ));
        assert!(matches!(
            WebError::from(ApiError::server(404, "Car not found")),
            WebError::NotFound(_)
        ));
        assert!(matches!(
            WebError::from(ApiError::network("refused")),
            WebError::BadGateway(_)
        ));
        match WebError::from(ApiError::server(409, "taken")) {
            WebError::Upstream { status, message } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(message, "taken");
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_error_response_status() {
        let response = WebError::TooManyRequests("slow down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
