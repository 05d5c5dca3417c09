//! Playback device type

use super::DeviceId;
use serde::{Deserialize, Serialize};
use zones_api::DevicePayload;

/// Information about a playback device ("zone")
///
/// Owned by the server; the client holds an immutable snapshot copy
/// that is replaced wholesale on every applied response, never mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Unique device identifier
    pub id: DeviceId,
    /// Friendly name of the device
    pub name: String,
    /// Device category (e.g. "Speaker", "Computer")
    pub kind: String,
    /// Volume as a percentage, 0-100
    pub volume_percent: u8,
    /// Whether playback currently targets this device
    pub is_active: bool,
}

impl Device {
    /// Get the device ID
    pub fn get_id(&self) -> &DeviceId {
        &self.id
    }
}

impl From<DevicePayload> for Device {
    fn from(payload: DevicePayload) -> Self {
        Self {
            id: DeviceId::new(payload.id),
            name: payload.name,
            kind: payload.kind,
            volume_percent: payload.volume_percent,
            is_active: payload.is_active,
        }
    }
}
