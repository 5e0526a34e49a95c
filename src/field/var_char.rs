//! Variable-length text field

use super::{char_len, Field, FieldMeta};
use crate::{Error, Result};

/// Text of at most `max_length` characters.
///
/// Writes longer than `max_length` are cut to the first `max_length`
/// characters. [`Field::validate`] still checks the stored value, which only
/// matters for an explicit default.
#[derive(Debug)]
pub struct VarChar {
    meta: FieldMeta,
    max_length: usize,
}

impl VarChar {
    /// Create a field accepting up to `max_length` characters.
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        Self {
            meta: FieldMeta::new(),
            max_length,
        }
    }

    /// Create a field of up to `max_length` characters, rejecting 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] when `max_length` is 0.
    pub fn try_new(max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::InvalidField(
                "max_length must be greater than 0".to_owned(),
            ));
        }
        Ok(Self::new(max_length))
    }

    /// Seed fresh records with `value` instead of the empty string.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.meta.set_default(value.into());
        self
    }

    /// Maximum number of characters.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Field for VarChar {
    fn to_record(&self, raw: &str) -> String {
        raw.chars().take(self.max_length).collect()
    }

    fn default_value(&self) -> String {
        self.meta.default_override().unwrap_or_default().to_owned()
    }

    fn validate(&self, value: &str) -> Result<()> {
        let len = char_len(value);
        if len > self.max_length {
            return Err(Error::Validation {
                field: self.meta.display_name(),
                reason: format!("length {len} exceeds max_length {}", self.max_length),
            });
        }
        Ok(())
    }

    fn meta(&self) -> &FieldMeta {
        &self.meta
    }
}
