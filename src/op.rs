//! Operation model for queue management and session commands.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{StoreError, ValidationError},
    record::RecordDraft,
};

/// Bounded-queue operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueOp {
    /// Snapshot a record store entry onto the queue.
    Add(usize),
    /// Remove the queue entry at this index.
    Remove(usize),
    /// Empty the queue.
    Clear,
}

impl QueueOp {
    /// Builds an operation from its textual name and optional index.
    ///
    /// `add` and `remove` need an index; `clear` ignores one.
    pub fn parse(name: &str, index: Option<usize>) -> Result<Self, StoreError> {
        match QueueOpName::from_str(name)? {
            QueueOpName::Add => index.map(Self::Add).ok_or(StoreError::MissingIndex("add")),
            QueueOpName::Remove => index.map(Self::Remove).ok_or(StoreError::MissingIndex("remove")),
            QueueOpName::Clear => Ok(Self::Clear),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueOpName {
    Add,
    Remove,
    Clear,
}

impl FromStr for QueueOpName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "clear" => Ok(Self::Clear),
            _ => Err(ValidationError::UnknownOperation(s.to_string())),
        }
    }
}

/// A single session command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Validate and append a draft to the primary store.
    Add {
        /// Record fields.
        draft: RecordDraft,
    },
    /// Remove from the primary store.
    Remove {
        /// Primary store index.
        index: usize,
    },
    /// Sort the primary store in place.
    Sort {
        /// Supported sort key.
        key: String,
    },
    /// Filter the primary store.
    Filter {
        /// Filter kind.
        kind: String,
        /// Operator-supplied comparison value.
        value: String,
    },
    /// Primary followed by secondary, without changing either.
    CombineSecondary,
    /// Copies of a primary record, not inserted anywhere.
    Duplicate {
        /// Primary store index.
        index: usize,
        /// Number of copies, at least 1.
        count: usize,
    },
    /// Update one field of a primary record.
    Update {
        /// Primary store index.
        index: usize,
        /// Updatable field name.
        field: String,
        /// Operator-supplied new value.
        value: String,
    },
    /// Queue operation against the primary store.
    Queue(QueueOp),
}
