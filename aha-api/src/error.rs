use aha_http::TransportError;
use thiserror::Error;

use crate::operation::ValidationError;

/// Errors returned by AHA session operations
///
/// The variants mirror the way the gateway signals problems. Argument
/// problems are caught before a request is sent, the `inval` sentinel on
/// telemetry commands becomes [`ApiError::ProviderNotFound`], and bodies
/// that do not parse as the expected number become
/// [`ApiError::NumberFormat`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// A parameter was rejected before any request was sent
    #[error("Invalid parameter: {0}")]
    Validation(#[from] ValidationError),

    /// The device answered `inval`: it has no provider for this function
    #[error("Function not supported by device: {0}")]
    ProviderNotFound(String),

    /// A plain-text body could not be read as the expected number or flag
    #[error("Number format error: {0}")]
    NumberFormat(String),

    /// An XML body was malformed or missed a required attribute
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The request never produced a response
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The gateway answered with a non-2xx status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The login challenge uses a scheme this client does not implement
    #[error("Unsupported login challenge: {0}")]
    UnsupportedChallenge(String),

    /// Session configuration could not be assembled
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Network(msg) => ApiError::NetworkError(msg),
            TransportError::Body(msg) => ApiError::NetworkError(msg),
        }
    }
}

impl From<xmltree::ParseError> for ApiError {
    fn from(error: xmltree::ParseError) -> Self {
        ApiError::ParseError(error.to_string())
    }
}
