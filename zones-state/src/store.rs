//! Snapshot store - typed wrapper over the generic state store
//!
//! The SnapshotStore is the central repository for the client's mirror
//! of server state. It holds exactly one `Snapshot` and notifies
//! consumers on every applied update.
//!
//! # Usage
//!
//! ```rust
//! use zones_state::SnapshotStore;
//!
//! let store = SnapshotStore::new();
//!
//! // Query current value (instant)
//! let snapshot = store.get();
//! assert!(snapshot.is_empty());
//!
//! // Consume change events (blocking)
//! // for event in store.iter() { ... }
//! ```

use state_store::{ChangeIterator, StateStore};

use crate::model::{Device, Snapshot};

/// Store holding the latest known snapshot of server state
///
/// Always contains the most recently *applied* response, regardless of
/// whether a periodic sync or a transfer command produced it. Updates
/// are atomic: readers see either the previous snapshot or the new one,
/// never a mixture. Clones share the underlying cell and notification
/// channel.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    inner: StateStore<Snapshot>,
}

impl SnapshotStore {
    /// Create a new store holding the empty pre-sync snapshot
    pub fn new() -> Self {
        Self {
            inner: StateStore::new(Snapshot::new()),
        }
    }

    /// Get a clone of the current snapshot
    pub fn get(&self) -> Snapshot {
        self.inner.get()
    }

    /// Replace the whole snapshot atomically
    ///
    /// Used by the sync loop, which always receives track and devices
    /// together. Every call is observable via `iter()`.
    pub fn set(&self, snapshot: Snapshot) {
        self.inner.set(snapshot);
    }

    /// Replace the device list, leaving the track untouched
    ///
    /// Used by the command dispatcher: a transfer response carries only
    /// devices, so the track is carried over from the current snapshot.
    /// The splice happens under the store's write lock, so readers never
    /// observe a torn snapshot.
    pub fn replace_devices(&self, devices: Vec<Device>) {
        self.inner.update(|snapshot| {
            snapshot.devices = devices;
        });
    }

    /// Number of snapshot replacements applied since creation
    pub fn revision(&self) -> u64 {
        self.inner.revision()
    }

    /// Create a blocking iterator over change events
    ///
    /// Emits one event for every applied update.
    pub fn iter(&self) -> ChangeIterator {
        self.inner.iter()
    }
}
