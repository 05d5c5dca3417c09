//! Command dispatcher for device selection
//!
//! The dispatcher sends transfer commands to the server and applies the
//! returned device list to the SnapshotStore. It is intentionally
//! stateless: no queueing, no de-duplication, no retry.

use tracing::debug;

use zones_api::{TransferOperation, TransferRequest, ZonesClient};

use crate::model::{Device, DeviceId};
use crate::store::SnapshotStore;
use crate::Result;

/// Dispatches device-selection commands
///
/// On success the server returns the refreshed device list (the track
/// is unaffected by a transfer), and the dispatcher replaces only the
/// device portion of the current snapshot. On failure the store is left
/// untouched and the error propagates to the caller.
///
/// Concurrent invocations are independent: two rapid selections produce
/// two in-flight requests, each applying its own response when it
/// resolves. The store keeps whichever response arrives last.
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    client: ZonesClient,
    store: SnapshotStore,
}

impl CommandDispatcher {
    /// Create a dispatcher over the given client and store
    pub fn new(client: ZonesClient, store: SnapshotStore) -> Self {
        Self { client, store }
    }

    /// Redirect playback to the identified device
    ///
    /// Blocks until the server responds. On success the snapshot's
    /// device list is replaced with the response array while the track
    /// is preserved unchanged; on failure nothing is applied and the
    /// error is returned (no automatic retry).
    pub fn select_device(&self, device_id: &DeviceId) -> Result<()> {
        let request = TransferRequest {
            id: device_id.as_str().to_string(),
        };

        let payload = self.client.execute::<TransferOperation>(&request)?;

        let devices: Vec<Device> = payload.into_iter().map(Device::from).collect();
        debug!(
            device = %device_id,
            count = devices.len(),
            "transfer applied, device list replaced"
        );

        self.store.replace_devices(devices);
        Ok(())
    }
}
