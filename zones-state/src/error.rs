//! Error types for zones-state

use std::fmt;

/// Result type for zones-state operations
pub type Result<T> = std::result::Result<T, StateError>;

/// Errors that can occur during state management
#[derive(Debug)]
pub enum StateError {
    /// Error from zones-api
    Api(zones_api::ApiError),

    /// The sync loop has already been started
    AlreadyRunning,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Api(err) => write!(f, "API error: {}", err),
            StateError::AlreadyRunning => write!(f, "Sync loop is already running"),
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<zones_api::ApiError> for StateError {
    fn from(err: zones_api::ApiError) -> Self {
        StateError::Api(err)
    }
}
