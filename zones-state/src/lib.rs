//! Zone State Management
//!
//! A lightweight state synchronization system for play-zones clients.
//!
//! # Features
//!
//! - **Local Mirror**: One atomic snapshot of current track + device list
//! - **Periodic Sync**: Fixed-cadence re-fetch of the full snapshot
//! - **Optimistic Commands**: Device selection applies the server's
//!   response directly, preserving the track
//! - **Change Notification**: Consume updates via blocking iterators
//!
//! # Architecture
//!
//! ```text
//! SyncLoop ──────┐
//!                ├──> SnapshotStore ──> ChangeIterator (consumers)
//! Dispatcher ────┘
//! ```
//!
//! The sync loop replaces whole snapshots; the dispatcher replaces the
//! device list while carrying the track over. Both writers apply
//! whichever response they receive - there is no sequencing, request
//! cancellation, or staleness check between them, so a slow sync
//! response that resolves after a transfer response overwrites it.
//! The store keeps the last response applied, not the last request
//! issued.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zones_api::ZonesClient;
//! use zones_state::{CommandDispatcher, SnapshotStore, SyncLoop};
//!
//! let store = SnapshotStore::new();
//! let client = ZonesClient::new("http://localhost:9090/spotify");
//!
//! // Start periodic sync (runs for the life of the process)
//! let _handle = SyncLoop::new(client.clone(), store.clone()).spawn();
//!
//! // Redirect playback on demand
//! let dispatcher = CommandDispatcher::new(client, store.clone());
//!
//! // React to every applied update
//! for _event in store.iter() {
//!     let snapshot = store.get();
//!     if let Some(active) = snapshot.active_device() {
//!         println!("playing on {}", active.name);
//!     } else if let Some(first) = snapshot.devices.first() {
//!         dispatcher.select_device(&first.id)?;
//!     }
//! }
//! # Ok::<(), zones_state::StateError>(())
//! ```

// Core modules
pub mod dispatcher;
pub mod model;
pub mod store;
pub mod sync;

// Error types
pub mod error;

// Logging infrastructure
pub mod logging;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Store
pub use store::SnapshotStore;

// Sync loop
pub use sync::{SyncConfig, SyncHandle, SyncLoop};

// Command dispatcher
pub use dispatcher::CommandDispatcher;

// Model types
pub use model::{Device, DeviceId, Snapshot, Track};

// Change notification types (from the generic store)
pub use state_store::{ChangeEvent, ChangeIterator};

// ============================================================================
// Re-exports - Error types
// ============================================================================

pub use error::{Result, StateError};

// ============================================================================
// Re-exports - Logging
// ============================================================================

pub use logging::{init_logging, init_logging_from_env, init_silent, LoggingError, LoggingMode};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::dispatcher::CommandDispatcher;
    pub use crate::model::{Device, DeviceId, Snapshot, Track};
    pub use crate::store::SnapshotStore;
    pub use crate::sync::{SyncConfig, SyncHandle, SyncLoop};
    pub use crate::{Result, StateError};
}
