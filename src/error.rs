//! Error types for flatrec
//!
//! Every failure is returned to the immediate caller; nothing is retried or
//! swallowed inside the crate.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// flatrec error types
#[derive(Error, Debug)]
pub enum Error {
    /// Positional access past the last declared field
    #[error("{record}: index {index} out of range (record has {len} fields)")]
    IndexOutOfRange {
        /// Record type name
        record: String,
        /// Offending position
        index: usize,
        /// Number of declared fields
        len: usize,
    },

    /// Name not declared in the record's schema
    #[error("{record}: unknown field {name}")]
    UnknownField {
        /// Record type name
        record: String,
        /// Name as supplied by the caller (before case folding)
        name: String,
    },

    /// A field's validation rule rejected the stored value
    #[error("Field '{field}' failed validation: {reason}")]
    Validation {
        /// Bound field name
        field: String,
        /// Rule-specific message
        reason: String,
    },

    /// Operation records never support (e.g. removing a field)
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Field descriptor declared with unusable options
    #[error("Invalid field definition: {0}")]
    InvalidField(String),

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for the unknown-field condition.
    #[must_use]
    pub const fn is_unknown_field(&self) -> bool {
        matches!(self, Self::UnknownField { .. })
    }

    /// Returns true for the out-of-range condition.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
