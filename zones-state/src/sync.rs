//! Periodic synchronization loop
//!
//! The SyncLoop keeps the SnapshotStore fresh by re-fetching the full
//! state document from the server on a fixed cadence. It is the only
//! writer that replaces whole snapshots; transfer commands go through
//! the dispatcher instead.

use std::thread;
use std::time::Duration;

use tracing::{trace, warn};

use zones_api::{GetStateOperation, GetStateRequest, ZonesClient};

use crate::model::Snapshot;
use crate::store::SnapshotStore;
use crate::Result;

/// Configuration for the sync loop
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Delay between the end of one fetch and the start of the next.
    /// The cadence is constant and never adapts to failures.
    pub interval: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
        }
    }
}

/// Periodic fetch-and-apply loop
///
/// On each cycle the loop fetches the state document, applies it to the
/// store on success, and sleeps the configured interval. Cycles are
/// strictly sequential: the next fetch is issued only after the
/// previous one has fully resolved, so at most one sync request is in
/// flight at any time.
///
/// A failed cycle (network error, non-success status, malformed body)
/// leaves the store untouched and is retried on the next interval -
/// indefinitely, with no backoff and no cap. The loop never terminates
/// on its own and offers no stop operation; the process lifetime bounds
/// it.
///
/// # Example
///
/// ```rust,no_run
/// use zones_api::ZonesClient;
/// use zones_state::{SnapshotStore, SyncLoop};
///
/// let store = SnapshotStore::new();
/// let client = ZonesClient::new("http://localhost:9090/spotify");
///
/// let _handle = SyncLoop::new(client, store.clone()).spawn();
///
/// for _event in store.iter() {
///     println!("{} devices", store.get().device_count());
/// }
/// ```
pub struct SyncLoop {
    client: ZonesClient,
    store: SnapshotStore,
    interval: Duration,
}

impl SyncLoop {
    /// Create a sync loop with the default configuration
    pub fn new(client: ZonesClient, store: SnapshotStore) -> Self {
        Self::with_config(client, store, SyncConfig::default())
    }

    /// Create a sync loop with a custom (but still constant) interval
    pub fn with_config(client: ZonesClient, store: SnapshotStore, config: SyncConfig) -> Self {
        Self {
            client,
            store,
            interval: config.interval,
        }
    }

    /// The configured interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Perform a single fetch-and-apply cycle
    ///
    /// On success the store receives the parsed snapshot verbatim; on
    /// failure the store is left untouched and the error is returned.
    /// Exposed for manual control in tests and one-shot uses.
    pub fn sync_once(&self) -> Result<()> {
        let payload = self.client.execute::<GetStateOperation>(&GetStateRequest)?;
        self.store.set(Snapshot::from(payload));
        Ok(())
    }

    /// Run the loop on the current thread, forever
    ///
    /// The first fetch is issued immediately; each subsequent fetch
    /// after the fixed interval.
    pub fn run(&self) {
        loop {
            match self.sync_once() {
                Ok(()) => {
                    trace!(revision = self.store.revision(), "sync applied");
                }
                Err(err) => {
                    warn!(error = %err, "sync failed, retrying on next interval");
                }
            }

            thread::sleep(self.interval);
        }
    }

    /// Start the loop on a background thread
    ///
    /// Consumes the loop so it can only be started once. The returned
    /// handle has no stop operation: once started, the loop runs for
    /// the life of the process.
    pub fn spawn(self) -> SyncHandle {
        let thread = thread::spawn(move || {
            self.run();
        });

        SyncHandle { thread }
    }
}

/// Handle to a running sync loop
///
/// Deliberately offers no stop or cancel: the loop it refers to runs
/// until the process exits.
#[derive(Debug)]
pub struct SyncHandle {
    thread: thread::JoinHandle<()>,
}

impl SyncHandle {
    /// Whether the loop thread is still alive
    ///
    /// Only ever false if the thread panicked; the loop itself never
    /// returns.
    pub fn is_running(&self) -> bool {
        !self.thread.is_finished()
    }
}
