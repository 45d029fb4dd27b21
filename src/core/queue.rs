use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{StoreError, StoreResult, ValidationError},
    op::QueueOp,
    record::{self, Record},
};

use super::store::RecordStore;

/// Fixed capacity of every [`BoundedQueue`].
pub const QUEUE_CAPACITY: usize = 5;

/// Result of a dispatched [`QueueOp`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueueOutcome<R> {
    /// Entry appended; carries the new length.
    Added(usize),
    /// Entry removed.
    Removed(R),
    /// Queue emptied.
    Cleared,
}

/// Loadout / active queue holding at most [`QUEUE_CAPACITY`] record snapshots.
///
/// Entries are clones taken when added, so later store updates do not show
/// through the queue. Deserializing enforces the capacity and re-checks every
/// entry against the record schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "R: Record", try_from = "QueueSnapshot<R>")]
pub struct BoundedQueue<R: Record> {
    entries: Vec<R>,
}

#[derive(Deserialize)]
#[serde(bound = "R: Record")]
struct QueueSnapshot<R: Record> {
    entries: Vec<R>,
}

impl<R: Record> TryFrom<QueueSnapshot<R>> for BoundedQueue<R> {
    type Error = ValidationError;

    fn try_from(snapshot: QueueSnapshot<R>) -> Result<Self, Self::Error> {
        if snapshot.entries.len() > QUEUE_CAPACITY {
            return Err(ValidationError::CapacityExceeded {
                capacity: QUEUE_CAPACITY,
            });
        }
        for rec in &snapshot.entries {
            record::check_record(rec)?;
        }
        Ok(Self {
            entries: snapshot.entries,
        })
    }
}

impl<R: Record> Default for BoundedQueue<R> {
    fn default() -> Self {
        Self {
            entries: Vec::with_capacity(QUEUE_CAPACITY),
        }
    }
}

impl<R: Record> BoundedQueue<R> {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True at capacity.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= QUEUE_CAPACITY
    }

    /// Queued entries in order.
    pub fn entries(&self) -> &[R] {
        &self.entries
    }

    /// Snapshots `store[index]` onto the end of the queue.
    ///
    /// The index is checked before capacity.
    pub fn add(&mut self, store: &RecordStore<R>, index: usize) -> StoreResult<&mut Self> {
        let rec = store.get_cloned(index)?;
        if self.is_full() {
            return Err(ValidationError::CapacityExceeded {
                capacity: QUEUE_CAPACITY,
            }
            .into());
        }
        debug!(kind = R::KIND, index, id = rec.id(), len = self.len() + 1, "queued");
        self.entries.push(rec);
        Ok(self)
    }

    /// Removes and returns the entry at `index`.
    pub fn remove(&mut self, index: usize) -> StoreResult<R> {
        StoreError::check_index(index, self.len())?;
        let rec = self.entries.remove(index);
        debug!(kind = R::KIND, index, len = self.len(), "dequeued");
        Ok(rec)
    }

    /// Drops every entry.
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        debug!(kind = R::KIND, "queue cleared");
        self
    }

    /// Applies one queue operation against `store`.
    pub fn manage(&mut self, store: &RecordStore<R>, op: QueueOp) -> StoreResult<QueueOutcome<R>> {
        match op {
            QueueOp::Add(index) => {
                let len = self.add(store, index)?.len();
                Ok(QueueOutcome::Added(len))
            }
            QueueOp::Remove(index) => self.remove(index).map(QueueOutcome::Removed),
            QueueOp::Clear => {
                self.clear();
                Ok(QueueOutcome::Cleared)
            }
        }
    }

    /// Textual form of [`BoundedQueue::manage`]: `"add"`, `"remove"` or `"clear"`.
    pub fn manage_named(
        &mut self,
        store: &RecordStore<R>,
        operation: &str,
        index: Option<usize>,
    ) -> StoreResult<QueueOutcome<R>> {
        let op = QueueOp::parse(operation, index)?;
        self.manage(store, op)
    }
}
