//! Error types for the web client

use thiserror::Error;

/// Errors that can occur during HTTP communication
#[derive(Debug, Error)]
pub enum WebError {
    /// Network or transport-level error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Non-success HTTP status returned by the server
    #[error("HTTP status {0}")]
    Status(u16),
}
