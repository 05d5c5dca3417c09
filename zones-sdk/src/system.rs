//! ZoneSystem - Main entry point for the SDK
//!
//! Composes the snapshot store, sync loop, and command dispatcher into
//! one root object, and hands out zone handles.

use std::sync::Mutex;
use std::time::Duration;

use tracing::debug;

use zones_api::ZonesClient;
use zones_state::{
    ChangeIterator, CommandDispatcher, DeviceId, Snapshot, SnapshotStore, StateError, SyncConfig,
    SyncHandle, SyncLoop, Track,
};

use crate::{SdkError, Zone};

/// Configuration for a ZoneSystem
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Base URL of the play-zones server (e.g. "http://host:9090/spotify")
    pub base_url: String,
    /// Fixed delay between sync cycles
    pub sync_interval: Duration,
}

impl SystemConfig {
    /// Create a configuration with the default 10 second sync interval
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            sync_interval: Duration::from_secs(10),
        }
    }
}

/// Main system entry point
///
/// ZoneSystem is fully synchronous - no async/await required. It owns
/// the snapshot store that mirrors server state, the sync loop that
/// keeps it fresh, and the dispatcher that redirects playback.
///
/// # Example
///
/// ```rust,no_run
/// use zones_sdk::ZoneSystem;
///
/// fn main() -> Result<(), zones_sdk::SdkError> {
///     let system = ZoneSystem::new("http://localhost:9090/spotify");
///
///     // Begin periodic sync; runs for the life of the process
///     let _handle = system.start()?;
///
///     // React to every applied update
///     for _event in system.iter() {
///         let track = system.track();
///         println!("Playing: {}", track.name.unwrap_or_default());
///         for zone in system.zones() {
///             let marker = if zone.is_active { "*" } else { " " };
///             println!("{} {} ({})", marker, zone.name, zone.kind);
///         }
///     }
///
///     Ok(())
/// }
/// ```
pub struct ZoneSystem {
    /// Shared mirror of server state
    store: SnapshotStore,

    /// Dispatcher for transfer commands
    dispatcher: CommandDispatcher,

    /// Armed sync loop, consumed by the first `start()`
    sync_loop: Mutex<Option<SyncLoop>>,
}

impl ZoneSystem {
    /// Create a system for the server at `base_url` with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(SystemConfig::new(base_url))
    }

    /// Create a system from an explicit configuration
    pub fn with_config(config: SystemConfig) -> Self {
        let store = SnapshotStore::new();
        let client = ZonesClient::new(config.base_url);

        let dispatcher = CommandDispatcher::new(client.clone(), store.clone());
        let sync_loop = SyncLoop::with_config(
            client,
            store.clone(),
            SyncConfig {
                interval: config.sync_interval,
            },
        );

        Self {
            store,
            dispatcher,
            sync_loop: Mutex::new(Some(sync_loop)),
        }
    }

    /// Start the periodic sync loop
    ///
    /// The first fetch is issued immediately, then one per interval.
    /// Callable exactly once; the returned handle has no stop operation
    /// and the loop runs until the process exits.
    pub fn start(&self) -> Result<SyncHandle, SdkError> {
        let mut armed = self
            .sync_loop
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match armed.take() {
            Some(sync_loop) => {
                debug!(interval = ?sync_loop.interval(), "starting sync loop");
                Ok(sync_loop.spawn())
            }
            None => Err(SdkError::State(StateError::AlreadyRunning)),
        }
    }

    /// Get the current snapshot (sync)
    pub fn snapshot(&self) -> Snapshot {
        self.store.get()
    }

    /// Get the currently playing track (sync)
    pub fn track(&self) -> Track {
        self.store.get().track
    }

    /// Get handles to all known zones (sync)
    pub fn zones(&self) -> Vec<Zone> {
        self.store
            .get()
            .devices
            .into_iter()
            .map(|device| Zone::from_device(device, self.dispatcher.clone()))
            .collect()
    }

    /// Get a zone by name (sync)
    ///
    /// Returns `None` if no zone with that name exists in the current
    /// snapshot.
    pub fn get_zone_by_name(&self, name: &str) -> Option<Zone> {
        self.zones().into_iter().find(|z| z.name == name)
    }

    /// Get a zone by ID (sync)
    pub fn get_zone_by_id(&self, id: &DeviceId) -> Option<Zone> {
        self.zones().into_iter().find(|z| z.id == *id)
    }

    /// The zone playback currently targets, if any (sync)
    pub fn active_zone(&self) -> Option<Zone> {
        self.zones().into_iter().find(|z| z.is_active)
    }

    /// Redirect playback to the identified device
    ///
    /// Equivalent to `get_zone_by_id(..).select()` but does not require
    /// the device to be present in the current snapshot.
    pub fn select_device(&self, id: &DeviceId) -> Result<(), SdkError> {
        self.dispatcher.select_device(id).map_err(SdkError::from)
    }

    /// Get the snapshot store for advanced usage
    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Get a blocking iterator over change events
    ///
    /// Emits one event for every applied update, whether a sync or a
    /// transfer produced it.
    pub fn iter(&self) -> ChangeIterator {
        self.store.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_system_is_empty() {
        let system = ZoneSystem::new("http://localhost:9090/spotify");

        assert!(system.snapshot().is_empty());
        assert!(system.track().is_empty());
        assert!(system.zones().is_empty());
        assert!(system.active_zone().is_none());
    }

    #[test]
    fn test_config_default_interval() {
        let config = SystemConfig::new("http://localhost:9090");
        assert_eq!(config.sync_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_zone_lookup_on_seeded_store() {
        use zones_state::{Device, Snapshot, Track};

        let system = ZoneSystem::new("http://localhost:9090/spotify");
        system.store().set(Snapshot {
            track: Track::new(),
            devices: vec![
                Device {
                    id: DeviceId::new("1"),
                    name: "Kitchen".to_string(),
                    kind: "Speaker".to_string(),
                    volume_percent: 50,
                    is_active: true,
                },
                Device {
                    id: DeviceId::new("2"),
                    name: "Desk".to_string(),
                    kind: "Computer".to_string(),
                    volume_percent: 100,
                    is_active: false,
                },
            ],
        });

        assert_eq!(system.zones().len(), 2);
        assert_eq!(system.get_zone_by_name("Desk").unwrap().id.as_str(), "2");
        assert!(system.get_zone_by_name("Garage").is_none());
        assert_eq!(system.active_zone().unwrap().name, "Kitchen");
        assert_eq!(
            system.get_zone_by_id(&DeviceId::new("2")).unwrap().name,
            "Desk"
        );
    }

    #[test]
    fn test_start_twice_fails() {
        let system = ZoneSystem::with_config(SystemConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            sync_interval: Duration::from_secs(3600),
        });

        let _handle = system.start().unwrap();
        let second = system.start();

        assert!(matches!(
            second.unwrap_err(),
            SdkError::State(StateError::AlreadyRunning)
        ));
    }
}
