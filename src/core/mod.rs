//! In-memory record store and bounded queue.

/// Capacity-limited loadout / active queue.
pub mod queue;
/// Ordered record store with validated mutations.
pub mod store;
