//! Error types for the HTTP transport

use thiserror::Error;

/// Errors that can occur while talking to the gateway over HTTP
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The response body could not be read as text
    #[error("Failed to read response body: {0}")]
    Body(String),
}
