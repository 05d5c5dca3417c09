//! Generic State Management Library
//!
//! A generic single-cell state container with change notification
//! and blocking iteration patterns.
//!
//! # Features
//!
//! - **Whole-value Replacement**: The stored value is only ever swapped
//!   atomically, never partially mutated in view of readers
//! - **Notify on Every Set**: Each replacement emits an event, so
//!   consumers can re-render after every applied update
//! - **Blocking Iteration**: Consume change events via blocking iterators
//! - **Shared Clones**: Clones share the cell and the event channel
//!
//! # Quick Start
//!
//! ```rust
//! use state_store::StateStore;
//!
//! #[derive(Clone, Default, PartialEq, Debug)]
//! struct Dashboard {
//!     headline: String,
//! }
//!
//! let store = StateStore::<Dashboard>::default();
//!
//! // Replace the value (emits a change event)
//! store.set(Dashboard { headline: "hello".into() });
//!
//! // Read it back
//! assert_eq!(store.get().headline, "hello");
//! ```
//!
//! # Iteration Patterns
//!
//! ```rust,ignore
//! // Blocking iteration (waits for events)
//! for event in store.iter() {
//!     println!("replaced at revision {}", event.revision);
//! }
//!
//! // Non-blocking (processes available events)
//! for event in store.iter().try_iter() {
//!     println!("Event: {:?}", event);
//! }
//!
//! // With timeout
//! use std::time::Duration;
//! if let Some(event) = store.iter().recv_timeout(Duration::from_secs(1)) {
//!     println!("Got event: {:?}", event);
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! StateStore<S>
//!     │
//!     ├── value: RwLock<S>
//!     │
//!     ├── revision: AtomicU64
//!     │
//!     └── event_channel: mpsc::channel<ChangeEvent>
//!             │
//!             └── ChangeIterator
//! ```

// Modules
pub mod event;
pub mod iter;
pub mod store;

// Re-exports - Public API
pub use event::ChangeEvent;
pub use iter::{ChangeIterator, TimeoutIter, TryIter};
pub use store::StateStore;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::event::ChangeEvent;
    pub use crate::iter::ChangeIterator;
    pub use crate::store::StateStore;
}
