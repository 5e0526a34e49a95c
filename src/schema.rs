//! Schema construction for record types
//!
//! A [`Schema`] is the ordered, case-insensitive field table shared by every
//! [`Record`] of one record type. It is assembled once by [`SchemaBuilder`]
//! and never changes afterwards.
//!
//! ## Ordering rules
//!
//! - Fields inherited through [`SchemaBuilder::extends`] keep the base order.
//! - A field redeclared under the same (case-folded) name replaces the
//!   inherited descriptor in place.
//! - New fields are appended sorted by descriptor creation order, so the order
//!   descriptors were constructed in is what counts, not the order they were
//!   handed to the builder.
//!
//! ```rust
//! use flatrec::field::{FixedChar, VarChar};
//! use flatrec::Schema;
//!
//! let base = Schema::builder("Base")
//!     .field("Id", FixedChar::new(4))
//!     .field("Name", VarChar::new(20))
//!     .build();
//!
//! let child = Schema::builder("Child")
//!     .extends(&base)
//!     .field("NAME", VarChar::new(40))
//!     .field("email", VarChar::new(60))
//!     .build();
//!
//! assert_eq!(child.names().collect::<Vec<_>>(), ["id", "name", "email"]);
//! ```

use crate::field::Field;
use crate::record::Record;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// One resolved schema slot.
#[derive(Debug, Clone)]
pub struct SchemaField {
    name: String,
    field: Arc<dyn Field>,
}

impl SchemaField {
    /// Lower-cased field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field descriptor.
    #[must_use]
    pub fn field(&self) -> &dyn Field {
        self.field.as_ref()
    }
}

/// Ordered, immutable field table for a record type.
pub struct Schema {
    name: String,
    fields: Vec<SchemaField>,
    positions: FxHashMap<String, usize>,
}

impl Schema {
    /// Start declaring a record type called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    /// Record type name, used in rendering and error messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record type declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of `name` (any case) in schema order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&name.to_lowercase()).copied()
    }

    /// Whether `name` (any case) is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Descriptor for `name` (any case).
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&dyn Field> {
        self.position(name).map(|i| self.fields[i].field())
    }

    /// Slot at `index` in schema order.
    #[must_use]
    pub fn field_at(&self, index: usize) -> Option<&SchemaField> {
        self.fields.get(index)
    }

    /// Field names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(SchemaField::name)
    }

    /// Slots in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, SchemaField> {
        self.fields.iter()
    }

    /// Fresh record of this type with every field at its default.
    #[must_use]
    pub fn record(self: &Arc<Self>) -> Record {
        Record::new(Arc::clone(self))
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a SchemaField;
    type IntoIter = std::slice::Iter<'a, SchemaField>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    bases: Vec<Arc<Schema>>,
    declared: Vec<(String, Arc<dyn Field>)>,
}

impl SchemaBuilder {
    /// Create a builder for a record type named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            declared: Vec::new(),
        }
    }

    /// Inherit every field of `base`. Later bases overwrite earlier ones in place.
    #[must_use]
    pub fn extends(mut self, base: &Arc<Schema>) -> Self {
        self.bases.push(Arc::clone(base));
        self
    }

    /// Declare a field.
    #[must_use]
    pub fn field(self, name: impl Into<String>, field: impl Field + 'static) -> Self {
        self.shared_field(name, Arc::new(field))
    }

    /// Declare a field backed by an already shared descriptor.
    #[must_use]
    pub fn shared_field(mut self, name: impl Into<String>, field: Arc<dyn Field>) -> Self {
        self.declared.push((name.into(), field));
        self
    }

    /// Resolve ordering, fold names to lower case and bind them on each descriptor.
    ///
    /// Two declarations whose names differ only in case collapse into one slot:
    /// the slot sits where the earlier-created descriptor would, and holds the
    /// later-created one.
    #[must_use]
    pub fn build(self) -> Arc<Schema> {
        let mut fields: Vec<SchemaField> = Vec::new();
        let mut positions: FxHashMap<String, usize> = FxHashMap::default();

        let inherited = self
            .bases
            .iter()
            .flat_map(|base| base.iter().map(|slot| (slot.name.clone(), Arc::clone(&slot.field))));

        let mut own = self.declared;
        own.sort_by_key(|(_, field)| field.created_order());
        let own = own
            .into_iter()
            .map(|(name, field)| (name.to_lowercase(), field));

        for (name, field) in inherited.chain(own) {
            if let Some(&index) = positions.get(&name) {
                fields[index].field = field;
            } else {
                positions.insert(name.clone(), fields.len());
                fields.push(SchemaField { name, field });
            }
        }

        for slot in &fields {
            slot.field.meta().bind_name(&slot.name);
        }

        tracing::debug!(record = %self.name, fields = fields.len(), "schema built");

        Arc::new(Schema {
            name: self.name,
            fields,
            positions,
        })
    }
}
