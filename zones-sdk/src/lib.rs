//! # Zones SDK - Mirror and switch playback zones
//!
//! Provides a clean, synchronous API over a play-zones server: a local
//! snapshot of the current track and device list, kept fresh by a
//! fixed-cadence sync loop, plus one-call playback redirection:
//!
//! ```rust,no_run
//! use zones_sdk::ZoneSystem;
//!
//! fn main() -> Result<(), zones_sdk::SdkError> {
//!     let system = ZoneSystem::new("http://localhost:9090/spotify");
//!     let _handle = system.start()?;
//!
//!     // Wait for the first snapshot to land
//!     system.iter().recv();
//!
//!     let track = system.track();
//!     println!("{} - {}", track.artist_line(), track.name.unwrap_or_default());
//!
//!     if let Some(zone) = system.get_zone_by_name("Kitchen") {
//!         zone.select()?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Properties
//!
//! - **Atomic snapshots**: track and device list always come from a
//!   single server response; consumers never see a torn pair
//! - **Fixed cadence**: the sync loop polls on a constant interval,
//!   retries failures indefinitely, and cannot be stopped; the
//!   process lifetime bounds it
//! - **Optimistic commands**: selecting a zone applies the server's
//!   returned device list directly, preserving the current track
//! - **Last-response-wins**: sync and command responses are not
//!   sequenced against each other; whichever resolves last is kept
//!
//! ## Architecture
//!
//! ```text
//! zones-sdk (ZoneSystem + Zone handles)
//!     ↓
//! zones-state (SnapshotStore / SyncLoop / CommandDispatcher)
//!     ↓
//! zones-api (typed operations)
//!     ↓
//! web-client (HTTP)
//! ```

// Main exports
pub use error::SdkError;
pub use system::{SystemConfig, ZoneSystem};
pub use zone::Zone;

// Re-export commonly used types from zones-state
pub use zones_state::{ChangeEvent, ChangeIterator, Device, DeviceId, Snapshot, SyncHandle, Track};

// Internal modules
mod error;
mod system;
mod zone;
