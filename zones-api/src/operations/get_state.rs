//! GetState operation - fetch the full state document

use serde::Serialize;

use crate::operation::{HttpMethod, ZonesOperation};
use crate::payload::WebStatePayload;
use crate::ApiError;

/// GetState operation
///
/// Fetches the currently playing track together with the full device
/// list, as one atomic document.
pub struct GetStateOperation;

/// Request for GetState operation (carries no parameters)
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetStateRequest;

impl ZonesOperation for GetStateOperation {
    type Request = GetStateRequest;
    type Response = WebStatePayload;

    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "devices.json";

    fn build_body(_request: &Self::Request) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}
