use thiserror::Error;
use web_client::WebError;

/// High-level API errors for play-zones operations
///
/// This enum provides domain-specific error types that abstract away the
/// underlying HTTP details and provide meaningful error information for
/// the failure scenarios the play-zones server can produce.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// This error occurs when there are network-level issues communicating
    /// with the server, such as connection timeouts, DNS resolution
    /// failures, or the server being unreachable.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status returned by the server
    ///
    /// The play-zones server reports its own failures (for example an
    /// upstream Spotify error) as a 5xx status with a plain-text body.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Response parsing error
    ///
    /// This error occurs when the server returns a success status but the
    /// response body cannot be parsed into the expected JSON shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from WebError to ApiError
impl From<WebError> for ApiError {
    fn from(error: WebError) -> Self {
        match error {
            WebError::Network(msg) => ApiError::Network(msg),
            WebError::Status(code) => ApiError::Status(code),
        }
    }
}
