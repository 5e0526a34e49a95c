//! Field descriptors
//!
//! A field descriptor is the rule object behind one named column of a record
//! type. It decides how raw text becomes a stored value, what a fresh record
//! holds before anything is loaded, and whether a stored value is acceptable.
//!
//! ## Built-in kinds
//!
//! | Kind | Coercion | Validation |
//! |------|----------|------------|
//! | [`VarChar`] | cut to `max_length` chars | at most `max_length` chars |
//! | [`FixedChar`] | padded or cut to `length`, justified | exactly `length` chars |
//! | [`FixedChar`] with `value` | input ignored, constant returned | exactly `length` chars |
//!
//! Other kinds plug in by implementing [`Field`].
//!
//! ## Usage
//!
//! ```rust
//! use flatrec::field::{Field, FixedChar, Justify};
//!
//! let number = FixedChar::new(10).pad_with('0').justify(Justify::Right);
//! assert_eq!(number.to_record("3"), "0000000003");
//! ```

mod fixed_char;
mod var_char;

pub use fixed_char::{FixedChar, Justify};
pub use var_char::VarChar;

use crate::Result;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

static CREATION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Bookkeeping shared by every descriptor kind.
///
/// Holds the creation-order key used to sort declarations, the name slot the
/// schema builder binds, and an optional verbatim default.
#[derive(Debug)]
pub struct FieldMeta {
    created_order: u64,
    name: RwLock<Option<String>>,
    default: Option<String>,
}

impl FieldMeta {
    /// Create metadata with the next creation-order number.
    #[must_use]
    pub fn new() -> Self {
        Self {
            created_order: CREATION_COUNTER.fetch_add(1, Ordering::Relaxed),
            name: RwLock::new(None),
            default: None,
        }
    }

    /// Position of this descriptor in global declaration order.
    #[must_use]
    pub const fn created_order(&self) -> u64 {
        self.created_order
    }

    /// Name most recently bound by a schema, if any.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bind the resolved (lower-cased) field name. Rebinding overwrites.
    pub fn bind_name(&self, name: &str) {
        *self.name.write().unwrap_or_else(PoisonError::into_inner) = Some(name.to_owned());
    }

    /// Explicit default, stored verbatim.
    #[must_use]
    pub fn default_override(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub(crate) fn set_default(&mut self, value: String) {
        self.default = Some(value);
    }

    /// Name to use in error messages.
    pub(crate) fn display_name(&self) -> String {
        self.name().unwrap_or_else(|| "<unbound>".to_owned())
    }
}

impl Default for FieldMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Rule object for one record column.
///
/// Implementations must make [`Field::to_record`] idempotent:
/// `to_record(&to_record(v)) == to_record(v)`.
pub trait Field: Debug + Send + Sync {
    /// Coerce raw input into the stored form. Applied on every write.
    fn to_record(&self, raw: &str) -> String;

    /// Value a fresh record holds before any load. Not passed through
    /// [`Field::to_record`].
    fn default_value(&self) -> String;

    /// Check a stored value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] when the value breaks this field's rule.
    fn validate(&self, value: &str) -> Result<()>;

    /// Shared bookkeeping (creation order, bound name, default override).
    fn meta(&self) -> &FieldMeta;

    /// Declaration-order key.
    fn created_order(&self) -> u64 {
        self.meta().created_order()
    }

    /// Name bound by the last schema that registered this descriptor.
    fn field_name(&self) -> Option<String> {
        self.meta().name()
    }
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
