use thiserror::Error;

/// Failure reported by the backend REST API, classified once at the client
/// boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected individual fields.
    #[error("Validation failed: {}", .fields.join(", "))]
    Validation { fields: Vec<String> },

    /// The request never produced a usable response (connection, timeout,
    /// unreadable body).
    #[error("Network error: {message}")]
    Network { message: String },

    /// The backend answered with an error status and a message.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        ApiError::Server {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Server { status: 401, .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
