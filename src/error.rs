//! Error taxonomy shared by the record store, the bounded queue and sessions.

use thiserror::Error;

/// Rejected field, value, key, operation or capacity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is absent from a draft.
    #[error("missing required field `{field}`")]
    MissingField {
        /// Schema field name.
        field: &'static str,
    },
    /// A value failed its field's type or domain check.
    #[error("invalid value `{value}` for `{field}`: {message}")]
    InvalidValue {
        /// Schema field name.
        field: &'static str,
        /// Offending value as supplied.
        value: String,
        /// Rule message from the validator table.
        message: &'static str,
    },
    /// The field name is not part of the schema.
    #[error("unknown field `{0}`")]
    UnknownField(String),
    /// The field exists but cannot be changed after insertion.
    #[error("field `{0}` cannot be updated")]
    NotUpdatable(&'static str),
    /// The sort key is not supported by this record kind.
    #[error("unsupported sort key `{0}`")]
    UnknownSortKey(String),
    /// The filter kind is not supported by this record kind.
    #[error("unsupported filter `{0}`")]
    UnknownFilter(String),
    /// Duplicate count below one.
    #[error("copy count must be at least 1, got {0}")]
    InvalidCount(usize),
    /// The bounded queue is full.
    #[error("queue is full ({capacity} entries)")]
    CapacityExceeded {
        /// Fixed queue capacity.
        capacity: usize,
    },
    /// The queue operation name is not recognized.
    #[error("unknown queue operation `{0}`")]
    UnknownOperation(String),
}

/// Error returned by every record and queue operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Index outside `[0, len)` of the target sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Sequence length at call time.
        len: usize,
    },
    /// An indexed queue operation was requested without an index.
    #[error("queue operation `{0}` requires an index")]
    MissingIndex(&'static str),
}

impl StoreError {
    /// True for [`StoreError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for [`StoreError::IndexOutOfRange`] and [`StoreError::MissingIndex`].
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::MissingIndex(_))
    }

    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}

/// Result alias used across the crate.
pub type StoreResult<T> = Result<T, StoreError>;
