//! Single-cell value storage with change notification
//!
//! `StateStore<S>` holds one value of type `S`. The value is only ever
//! replaced as a whole - there are no partial updates visible to
//! readers - and every replacement emits a change event.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::event::ChangeEvent;
use crate::iter::ChangeIterator;

/// Generic single-cell state store with change notification
///
/// The store holds the latest known value of type `S` and notifies
/// consumers on every replacement. Unlike per-property stores there is
/// no change detection: setting the same value twice emits two events,
/// so every applied update is observable.
///
/// Clones share the underlying cell and the notification channel;
/// cloned iterators are competing consumers of one event stream.
///
/// # Example
///
/// ```rust
/// use state_store::StateStore;
///
/// let store = StateStore::new(0u32);
/// let reader = store.clone();
///
/// store.set(42);
/// assert_eq!(reader.get(), 42);
/// assert_eq!(reader.revision(), 1);
///
/// // Every set is observable
/// let event = store.iter().try_recv().unwrap();
/// assert_eq!(event.revision, 1);
/// ```
pub struct StateStore<S> {
    /// The current value
    value: Arc<RwLock<S>>,

    /// Monotonic replacement counter
    revision: Arc<AtomicU64>,

    /// Channel sender for change events
    event_tx: mpsc::Sender<ChangeEvent>,

    /// Channel receiver for change events (wrapped for cloning)
    event_rx: Arc<Mutex<mpsc::Receiver<ChangeEvent>>>,
}

impl<S> StateStore<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create a new store holding `initial`
    pub fn new(initial: S) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            value: Arc::new(RwLock::new(initial)),
            revision: Arc::new(AtomicU64::new(0)),
            event_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> S {
        read_lock(&self.value).clone()
    }

    /// Replace the whole value atomically
    ///
    /// Emits a change event for every call, whether or not the new
    /// value differs from the old one.
    pub fn set(&self, value: S) {
        {
            let mut current = write_lock(&self.value);
            *current = value;
        }
        self.emit_change();
    }

    /// Atomically modify the value in place
    ///
    /// The closure runs under the write lock, so readers never observe
    /// an intermediate state. Emits a change event exactly like `set`.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut S),
    {
        {
            let mut current = write_lock(&self.value);
            f(&mut current);
        }
        self.emit_change();
    }

    /// Get the current revision
    ///
    /// The revision counts replacements since creation. It exists for
    /// observability; the store never compares revisions to decide
    /// whether to apply an update.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Create a blocking iterator over change events
    ///
    /// Emits one event per `set`/`update` call.
    pub fn iter(&self) -> ChangeIterator {
        ChangeIterator::new(Arc::clone(&self.event_rx))
    }

    /// Get the event sender for external event injection
    ///
    /// This is useful for testing or for injecting events from
    /// external sources.
    pub fn event_sender(&self) -> mpsc::Sender<ChangeEvent> {
        self.event_tx.clone()
    }

    /// Bump the revision and emit a change event
    fn emit_change(&self) {
        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.event_tx.send(ChangeEvent::new(revision));
    }
}

impl<S> Default for StateStore<S>
where
    S: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            revision: Arc::clone(&self.revision),
            event_tx: self.event_tx.clone(),
            event_rx: Arc::clone(&self.event_rx),
        }
    }
}

impl<S> std::fmt::Debug for StateStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("revision", &self.revision.load(Ordering::SeqCst))
            .finish()
    }
}

/// Acquire a read guard, recovering the value if the lock is poisoned
fn read_lock<S>(lock: &RwLock<S>) -> RwLockReadGuard<'_, S> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Acquire a write guard, recovering the value if the lock is poisoned
fn write_lock<S>(lock: &RwLock<S>) -> RwLockWriteGuard<'_, S> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
