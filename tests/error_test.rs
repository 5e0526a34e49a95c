//! Tests for error types

use flatrec::Error;

#[test]
fn test_index_out_of_range_error() {
    let error = Error::IndexOutOfRange {
        record: "TestRecord".to_string(),
        index: 4,
        len: 3,
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("TestRecord"));
    assert!(error_str.contains("index 4"));
    assert!(error_str.contains("3 fields"));
    assert!(error.is_out_of_range());
    assert!(!error.is_unknown_field());
}

#[test]
fn test_unknown_field_error() {
    let error = Error::UnknownField {
        record: "TestRecord".to_string(),
        name: "Phone".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("unknown field Phone"));
    assert!(error.is_unknown_field());
}

#[test]
fn test_validation_error() {
    let error = Error::Validation {
        field: "zip".to_string(),
        reason: "length 6 does not match field_length 5".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Field 'zip' failed validation"));
    assert!(error_str.contains("field_length 5"));
}

#[test]
fn test_unsupported_error() {
    let error = Error::Unsupported("cannot delete field 'zip'".to_string());
    assert!(format!("{error}").contains("Unsupported operation"));
}

#[test]
fn test_invalid_field_error() {
    let error = "middle".parse::<flatrec::field::Justify>().unwrap_err();
    assert!(matches!(error, Error::InvalidField(_)));
    assert!(format!("{error}").contains("middle"));
}

#[test]
fn test_serialization_error_from() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert!(format!("{error}").contains("Serialization error"));
}

#[test]
fn test_error_debug() {
    let error = Error::Unsupported("x".to_string());
    assert!(format!("{error:?}").contains("Unsupported"));
}
