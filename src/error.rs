//! API error types.
//!
//! Every failure is logged and swallowed by the UI; the variants only
//! exist so the log line says what actually went wrong.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Server(u16),

    #[error("not found")]
    NotFound,

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify an HTTP status. Success codes are not errors.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(ApiError::NotFound),
            other => Some(ApiError::Server(other)),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
