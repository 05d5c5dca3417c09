//! Zone handle with selection support
//!
//! Provides a DOM-like interface over a playback device row.

use zones_state::{CommandDispatcher, Device, DeviceId};

use crate::SdkError;

/// Handle to a playback zone
///
/// A Zone is a value snapshot of one device row plus the ability to
/// redirect playback to it. The descriptive fields reflect the snapshot
/// the handle was created from; re-read the system after a change event
/// for fresh handles.
///
/// # Example
///
/// ```rust,ignore
/// for zone in system.zones() {
///     println!("{} ({}) vol={}", zone.name, zone.kind, zone.volume_percent);
/// }
///
/// if let Some(zone) = system.get_zone_by_name("Kitchen") {
///     zone.select()?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Zone {
    /// Unique device identifier
    pub id: DeviceId,
    /// Friendly device name
    pub name: String,
    /// Device category (e.g. "Speaker", "Computer")
    pub kind: String,
    /// Volume as a percentage, 0-100
    pub volume_percent: u8,
    /// Whether playback currently targets this zone
    pub is_active: bool,

    dispatcher: CommandDispatcher,
}

impl Zone {
    /// Create a zone handle from a device snapshot entry
    pub(crate) fn from_device(device: Device, dispatcher: CommandDispatcher) -> Self {
        Self {
            id: device.id,
            name: device.name,
            kind: device.kind,
            volume_percent: device.volume_percent,
            is_active: device.is_active,
            dispatcher,
        }
    }

    /// Redirect playback to this zone
    ///
    /// Blocks until the server responds. On success the shared snapshot
    /// store receives the refreshed device list; on failure nothing is
    /// applied and the error is returned.
    pub fn select(&self) -> Result<(), SdkError> {
        self.dispatcher.select_device(&self.id).map_err(SdkError::from)
    }
}
