//! The single error kind of a characters fetch.

use thiserror::Error;

use crate::traits::HttpError;

/// The message shown whenever characters could not be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "No se pudieron cargar los personajes 😢";

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Why a characters fetch failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("server returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("malformed payload: {0}")]
    InvalidPayload(String),

    /// The fetch task ended without producing an outcome (panic or abort)
    #[error("fetch task aborted: {0}")]
    Aborted(String),
}

impl FetchError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "E_FETCH_NET",
            FetchError::Timeout(_) => "E_FETCH_TIMEOUT",
            FetchError::HttpStatus { .. } => "E_FETCH_HTTP",
            FetchError::InvalidPayload(_) => "E_FETCH_PAYLOAD",
            FetchError::Aborted(_) => "E_FETCH_ABORTED",
        }
    }

    /// The user-facing message. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(msg) => FetchError::Timeout(msg),
            HttpError::ConnectionFailed(msg)
            | HttpError::InvalidUrl(msg)
            | HttpError::Other(msg) => FetchError::Network(msg),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::InvalidPayload(err.to_string())
    }
}
