//! # flatrec: Declarative Records for Fixed-Format Text
//!
//! flatrec lets you declare the layout of a flat-file row (fixed-width or
//! CSV-style) once, as an ordered set of named text fields, and then work with
//! rows as mutable, case-insensitive key-value records whose values are
//! coerced and formatted by each field's rules.
//!
//! ## Building blocks
//!
//! - [`field`]: descriptors deciding coercion, defaults and validation
//! - [`Schema`]: ordered, immutable field table built once per record type
//! - [`Record`]: one row, loaded positionally and/or by name
//!
//! Reading and writing files is left to the caller: hand a row reader's
//! values to [`Record::load_positional`] and render with `Display` or
//! [`Record::to_json`].
//!
//! ## Example
//!
//! ```rust
//! use flatrec::field::{FixedChar, Justify, VarChar};
//! use flatrec::Schema;
//!
//! let schema = Schema::builder("TestRecord")
//!     .field("customer_name", VarChar::new(50))
//!     .field("customer_number", FixedChar::new(10).pad_with('0').justify(Justify::Right))
//!     .field("start_time", FixedChar::new(8).value("00:00:00"))
//!     .build();
//!
//! let mut record = schema.record();
//! record.load_positional(["a customer name with max length=50", "3", "12:00:00"])?;
//!
//! assert_eq!(record.get("customer_name")?, "a customer name with max length=50");
//! assert_eq!(record.get("Customer_Number")?, "0000000003");
//! assert_eq!(record.get("start_time")?, "00:00:00");
//! record.validate()?;
//! # Ok::<(), flatrec::Error>(())
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through `tracing`. The crate never installs a subscriber;
//! binaries choose the sink (e.g. `tracing-subscriber` with `RUST_LOG`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod field;
pub mod record;
pub mod schema;

pub use error::{Error, Result};
pub use field::Field;
pub use record::Record;
pub use schema::{Schema, SchemaBuilder};
