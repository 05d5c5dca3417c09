//! Snapshot type - the atomic unit of client state

use super::{Device, DeviceId, Track};
use serde::{Deserialize, Serialize};
use zones_api::WebStatePayload;

/// The latest known server state: current track plus device list
///
/// A snapshot is the unit of atomicity. Track and devices are replaced
/// together from a single sync response; a transfer response replaces
/// the device list while carrying the track over unchanged. Readers
/// never observe a device list from one point in time next to a track
/// from another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Currently playing track
    pub track: Track,
    /// All known playback devices, in server order
    pub devices: Vec<Device>,
}

impl Snapshot {
    /// Create a new empty snapshot (pre-first-sync state)
    pub fn new() -> Self {
        Self::default()
    }

    /// The device playback currently targets, if any
    pub fn active_device(&self) -> Option<&Device> {
        self.devices.iter().find(|d| d.is_active)
    }

    /// Look up a device by ID
    pub fn find_device(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == *id)
    }

    /// Number of known devices
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Check if the snapshot has received no data yet
    pub fn is_empty(&self) -> bool {
        self.track.is_empty() && self.devices.is_empty()
    }
}

impl From<WebStatePayload> for Snapshot {
    fn from(payload: WebStatePayload) -> Self {
        Self {
            track: Track::from(payload.playing),
            devices: payload.devices.into_iter().map(Device::from).collect(),
        }
    }
}
