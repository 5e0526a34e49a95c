//! Record instances
//!
//! A [`Record`] holds one stored value per field of its [`Schema`]. Every
//! write goes through the field's coercion rule, every lookup folds the name to
//! lower case, and no field is ever unset: construction seeds defaults before
//! any data is loaded.
//!
//! ## Usage
//!
//! ```rust
//! use flatrec::field::{FixedChar, Justify, VarChar};
//! use flatrec::{Record, Schema};
//!
//! let schema = Schema::builder("Customer")
//!     .field("customer_name", VarChar::new(50))
//!     .field("customer_number", FixedChar::new(10).pad_with('0').justify(Justify::Right))
//!     .build();
//!
//! let mut record = Record::new(schema);
//! record.load_positional(["ACME", "42"])?;
//! assert_eq!(record.get("Customer_Number")?, "0000000042");
//! assert_eq!(record.to_string(), "Customer(customer_name=ACME, customer_number=0000000042)");
//! # Ok::<(), flatrec::Error>(())
//! ```

use crate::schema::Schema;
use crate::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::sync::Arc;

/// Mutable, case-insensitive record of fixed-format text values.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<String>,
}

impl Record {
    /// Create a record with every field at its descriptor's default.
    #[must_use]
    pub fn new(schema: Arc<Schema>) -> Self {
        let values = schema
            .iter()
            .map(|slot| slot.field().default_value())
            .collect();
        Self { schema, values }
    }

    /// Create a record and bulk-load it.
    ///
    /// # Errors
    ///
    /// Same as [`Record::load`].
    pub fn with_values<P, S, N, K, V>(schema: Arc<Schema>, positional: P, named: N) -> Result<Self>
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
        N: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = Self::new(schema);
        record.load(positional, named)?;
        Ok(record)
    }

    /// Overwrite fields from positional values, then from named values.
    ///
    /// Fields not mentioned keep their current value. Nothing is rolled back
    /// when a later value fails.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] when there are more positional values than fields
    /// - [`Error::UnknownField`] when a name is not declared
    pub fn load<P, S, N, K, V>(&mut self, positional: P, named: N) -> Result<()>
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
        N: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.load_positional(positional)?;
        self.load_named(named)
    }

    /// Assign values to fields by position, first value to first field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] (after logging it) when there are more
    /// values than fields. Values before the overflow stay assigned.
    pub fn load_positional<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, value) in values.into_iter().enumerate() {
            let value = value.as_ref();
            if let Err(err) = self.set_index(index, value) {
                tracing::error!(
                    record = %self.schema.name(),
                    index,
                    value = %value,
                    "positional load overflow"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// Assign values to fields by (case-insensitive) name, in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] on the first undeclared name.
    pub fn load_named<I, K, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in values {
            self.set(name.as_ref(), value.as_ref())?;
        }
        Ok(())
    }

    /// Stored value of `name` (any case).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if `name` is not declared.
    pub fn get(&self, name: &str) -> Result<&str> {
        let index = self.resolve(name)?;
        Ok(&self.values[index])
    }

    /// Coerce `value` through the field's rule and store it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if `name` is not declared.
    pub fn set(&mut self, name: &str, value: impl AsRef<str>) -> Result<()> {
        let index = self.resolve(name)?;
        self.store(index, value.as_ref());
        Ok(())
    }

    /// Stored value at `index` in schema order.
    ///
    /// Positions are unsigned; counting from the end (`-1` for the last field)
    /// is not supported, use `record.len() - 1` instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] past the last field.
    pub fn get_index(&self, index: usize) -> Result<&str> {
        self.values
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Coerce and store `value` into the field at `index` in schema order.
    ///
    /// Positions are unsigned; counting from the end is not supported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] past the last field.
    pub fn set_index(&mut self, index: usize, value: impl AsRef<str>) -> Result<()> {
        if index >= self.values.len() {
            return Err(self.out_of_range(index));
        }
        self.store(index, value.as_ref());
        Ok(())
    }

    /// Fields can never be removed from a record.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    pub fn delete(&self, name: &str) -> Result<()> {
        Err(Error::Unsupported(format!(
            "cannot delete field '{name}' from {}",
            self.schema.name()
        )))
    }

    /// Run each field's validation rule on its stored value, in schema order.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's error; later fields are not checked.
    pub fn validate(&self) -> Result<()> {
        self.schema
            .iter()
            .zip(&self.values)
            .try_for_each(|(slot, value)| slot.field().validate(value))
    }

    /// Schema shared by all records of this type.
    #[must_use]
    pub const fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Record type name.
    #[must_use]
    pub fn record_name(&self) -> &str {
        self.schema.name()
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record type declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored values in schema order.
    #[must_use]
    pub fn iter(&self) -> Values<'_> {
        Values {
            inner: self.values.iter(),
        }
    }

    /// `(name, value)` pairs in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.schema.names().zip(self.values.iter().map(String::as_str))
    }

    /// Render as a JSON object keyed by field name, in schema order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if JSON encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.schema
            .position(name)
            .ok_or_else(|| Error::UnknownField {
                record: self.schema.name().to_owned(),
                name: name.to_owned(),
            })
    }

    fn store(&mut self, index: usize, raw: &str) {
        if let Some(slot) = self.schema.field_at(index) {
            self.values[index] = slot.field().to_record(raw);
        }
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            record: self.schema.name().to_owned(),
            index,
            len: self.values.len(),
        }
    }
}

/// Records are equal when they share the same [`Schema`] instance and hold
/// the same values. Two schemas built separately are distinct record types even
/// if their names and field names match.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema) && self.values == other.values
    }
}

impl Eq for Record {}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.schema.name())?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str(")")
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Iterator over a record's stored values in schema order.
#[derive(Debug, Clone)]
pub struct Values<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Values<'_> {}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a str;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
