//! Property-based tests for flatrec
//!
//! - Schema ordering and size invariants
//! - Coercion idempotence and read-after-write
//! - Case-insensitive access
//! - Run with ProptestConfig::with_cases(100)

use std::sync::Arc;

use flatrec::field::{Field, FixedChar, Justify, VarChar};
use flatrec::Schema;
use proptest::prelude::*;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

fn arb_field_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,11}"
}

fn arb_text() -> impl Strategy<Value = String> {
    "[ -~]{0,20}"
}

fn arb_justify() -> impl Strategy<Value = Justify> {
    prop_oneof![Just(Justify::Left), Just(Justify::Right)]
}

fn arb_fixed_char() -> impl Strategy<Value = FixedChar> {
    (1usize..16, prop::char::range('!', '~'), arb_justify())
        .prop_map(|(length, pad, justify)| FixedChar::new(length).pad_with(pad).justify(justify))
}

/// Case variant of `name` chosen by `mask`.
fn flip_case(name: &str, mask: u64) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask >> (i % 64) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: schema length equals distinct case-insensitive names,
    /// ordered by first declaration
    #[test]
    fn prop_schema_len_and_order(names in prop::collection::vec(arb_field_name(), 0..12)) {
        let mut builder = Schema::builder("Prop");
        for name in &names {
            builder = builder.field(name.as_str(), VarChar::new(8));
        }
        let schema = builder.build();

        let mut expected: Vec<String> = Vec::new();
        for name in &names {
            let folded = name.to_lowercase();
            if !expected.contains(&folded) {
                expected.push(folded);
            }
        }
        prop_assert_eq!(schema.len(), expected.len());
        prop_assert_eq!(schema.names().collect::<Vec<_>>(), expected);
    }

    /// Property: handing descriptors to the builder in any order gives creation order
    #[test]
    fn prop_schema_order_ignores_call_order(
        order in Just((0..6usize).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let fields: Vec<Arc<dyn Field>> = (0..6)
            .map(|_| Arc::new(VarChar::new(4)) as Arc<dyn Field>)
            .collect();
        let mut builder = Schema::builder("Shuffled");
        for &i in &order {
            builder = builder.shared_field(format!("f{i}"), Arc::clone(&fields[i]));
        }
        let schema = builder.build();
        let expected: Vec<String> = (0..6).map(|i| format!("f{i}")).collect();
        prop_assert_eq!(schema.names().collect::<Vec<_>>(), expected);
    }

    /// Property: fixed-width coercion is idempotent and yields exactly the width
    #[test]
    fn prop_fixed_char_idempotent(field in arb_fixed_char(), raw in arb_text()) {
        let once = field.to_record(&raw);
        prop_assert_eq!(field.to_record(&once), once.clone());
        prop_assert_eq!(once.chars().count(), field.length());
    }

    /// Property: reading after a write returns the coerced value
    #[test]
    fn prop_read_after_write_is_coerced(field in arb_fixed_char(), raw in arb_text()) {
        let expected = field.to_record(&raw);
        let schema = Schema::builder("Prop").field("cell", field).build();
        let mut record = schema.record();
        record.set("cell", &raw).unwrap();
        prop_assert_eq!(record.get("cell").unwrap(), expected.as_str());
    }

    /// Property: every case variant of a name reaches the same field
    #[test]
    fn prop_case_insensitive_access(name in arb_field_name(), mask in any::<u64>(), raw in arb_text()) {
        let schema = Schema::builder("Prop").field(name.as_str(), VarChar::new(32)).build();
        let mut record = schema.record();
        record.set(&flip_case(&name, mask), &raw).unwrap();
        prop_assert_eq!(record.get(&name.to_lowercase()).unwrap(), raw.as_str());
        prop_assert_eq!(record.get(&name.to_uppercase()).unwrap(), raw.as_str());
    }

    /// Property: a fresh record holds a value for every field
    #[test]
    fn prop_fresh_record_fully_seeded(fields in prop::collection::vec(arb_fixed_char(), 0..8)) {
        let mut builder = Schema::builder("Prop");
        let mut expected = Vec::new();
        for (i, field) in fields.into_iter().enumerate() {
            expected.push(field.default_value());
            builder = builder.field(format!("f{i}"), field);
        }
        let record = builder.build().record();
        prop_assert_eq!(record.len(), expected.len());
        prop_assert_eq!(record.iter().map(str::to_owned).collect::<Vec<_>>(), expected);
    }

    /// Property: variable-length coercion never exceeds max_length and is idempotent
    #[test]
    fn prop_var_char_bounded(max_length in 1usize..12, raw in arb_text()) {
        let field = VarChar::new(max_length);
        let once = field.to_record(&raw);
        prop_assert!(once.chars().count() <= max_length);
        prop_assert!(raw.starts_with(once.as_str()));
        prop_assert_eq!(field.to_record(&once), once.clone());
    }

    /// Property: more positional values than fields always fails
    #[test]
    fn prop_positional_overflow(field_count in 0usize..6, extra in 1usize..4) {
        let mut builder = Schema::builder("Prop");
        for i in 0..field_count {
            builder = builder.field(format!("f{i}"), VarChar::new(4));
        }
        let mut record = builder.build().record();
        let values = vec!["v"; field_count + extra];
        let err = record.load_positional(&values).unwrap_err();
        prop_assert!(err.is_out_of_range());
    }
}
