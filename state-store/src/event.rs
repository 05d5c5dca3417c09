//! Change events for state replacements
//!
//! Every time the stored value is replaced, a `ChangeEvent` is emitted
//! on the store's notification channel.

use std::time::Instant;

/// A change event emitted when the stored value is replaced
///
/// Events carry the store revision that produced them, not the value
/// itself. Use `StateStore::get()` to retrieve the current value after
/// receiving an event.
///
/// # Example
///
/// ```rust,ignore
/// for event in store.iter() {
///     println!("state replaced (revision {})", event.revision);
///     let current = store.get();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// Monotonic revision of the store after this replacement
    pub revision: u64,

    /// When the replacement happened
    pub timestamp: Instant,
}

impl ChangeEvent {
    /// Create a new change event for the given revision
    pub fn new(revision: u64) -> Self {
        Self {
            revision,
            timestamp: Instant::now(),
        }
    }
}

impl PartialEq for ChangeEvent {
    fn eq(&self, other: &Self) -> bool {
        // Timestamp not included in equality
        self.revision == other.revision
    }
}
