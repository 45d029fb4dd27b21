//! Session event payloads.

/// Events recorded after each successful mutating command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A record was appended to the primary store.
    Added {
        /// Identifier of the new record.
        id: String,
    },
    /// A record was removed from the primary store.
    Removed {
        /// Identifier of the removed record.
        id: String,
    },
    /// The primary store was re-sorted.
    Sorted {
        /// Sort key used.
        key: &'static str,
    },
    /// One field of a primary record changed.
    Updated {
        /// Identifier of the updated record.
        id: String,
        /// Field that changed.
        field: &'static str,
    },
    /// A record snapshot joined the queue.
    Queued {
        /// Queue length after the add.
        len: usize,
    },
    /// A queue entry was removed.
    Dequeued {
        /// Identifier of the removed entry.
        id: String,
    },
    /// The queue was emptied.
    QueueCleared,
}
