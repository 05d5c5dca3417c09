use serde::{de::DeserializeOwned, Serialize};

use crate::error::ApiError;

/// HTTP method used by an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Base trait for all play-zones API operations
///
/// This trait defines the common interface that all operations against the
/// play-zones server must implement. It provides type safety through
/// associated types and ensures consistent patterns for request/response
/// handling across all operations.
pub trait ZonesOperation {
    /// The request type for this operation, must be serializable
    type Request: Serialize;

    /// The response type for this operation, must be deserializable
    type Response: DeserializeOwned;

    /// The HTTP method this operation is issued with
    const METHOD: HttpMethod;

    /// The endpoint path relative to the service base URL
    const PATH: &'static str;

    /// Build the JSON request body from the request data
    ///
    /// Returns `None` for operations without a body (GET requests).
    fn build_body(request: &Self::Request) -> Result<Option<String>, ApiError>;

    /// Parse the response body into the typed response
    ///
    /// The default implementation deserializes the body as JSON; a parse
    /// failure is reported as `ApiError::Parse`.
    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
