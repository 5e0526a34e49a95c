//! Customer flat-file walkthrough
//!
//! This demo shows:
//! - Declaring a record type with variable, fixed-width and static fields
//! - Loading CSV-style rows into one reused record
//! - Case-insensitive access, validation and rendering
//! - The error logged when a row has too many columns
//!
//! Run with: RUST_LOG=debug cargo run --example customer_file

use flatrec::field::{FixedChar, Justify, VarChar};
use flatrec::Schema;
use tracing_subscriber::EnvFilter;

const ROWS: &str = "\
a customer name with max length=50,3,08:15:00
Globex Corporation,1024,17:45:00
Initech,77,09:00:00,unexpected column";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== flatrec Customer File Example ===\n");

    let customer = Schema::builder("TestRecord")
        .field("customer_name", VarChar::new(50))
        .field(
            "customer_number",
            FixedChar::new(10).pad_with('0').justify(Justify::Right),
        )
        .field("start_time", FixedChar::new(8).value("00:00:00"))
        .build();

    println!("Schema {} ({} fields):", customer.name(), customer.len());
    for name in customer.names() {
        println!("  - {name}");
    }
    println!();

    // Loading doesn't clear old values, so one record can be reused per row.
    let mut record = customer.record();
    for (line_no, line) in ROWS.lines().enumerate() {
        match record.load_positional(line.split(',')) {
            Ok(()) => {
                record.validate()?;
                println!("  ✓ line {}: {record}", line_no + 1);
                println!("    json: {}", record.to_json()?);
            }
            Err(e) => println!("  ✗ line {}: {e}", line_no + 1),
        }
    }

    println!("\nUpdating through a mixed-case name...");
    record.set("Customer_Number", "3")?;
    println!("  customer_number = {}", record.get("CUSTOMER_NUMBER")?);

    Ok(())
}
