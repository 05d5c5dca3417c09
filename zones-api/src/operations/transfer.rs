//! Transfer operation - redirect playback to a device

use serde::Serialize;

use crate::operation::{HttpMethod, ZonesOperation};
use crate::payload::DevicePayload;
use crate::ApiError;

/// Transfer operation
///
/// Asks the server to move playback to the identified device. The
/// response is the refreshed device list only - the track document is
/// not part of a transfer response.
pub struct TransferOperation;

/// Request for Transfer operation
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    /// Identifier of the device playback should move to
    pub id: String,
}

impl ZonesOperation for TransferOperation {
    type Request = TransferRequest;
    type Response = Vec<DevicePayload>;

    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "transfer.json";

    fn build_body(request: &Self::Request) -> Result<Option<String>, ApiError> {
        serde_json::to_string(request)
            .map(Some)
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
