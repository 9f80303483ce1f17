//! Tests for record parsing and validation

use studentdb::record::{self, StudentRecord};
use studentdb::{ErrorKind, StudentError};

#[test]
fn test_validate_accepts_boundaries() {
    StudentRecord::new(1, "", 1, 0.0).validate().unwrap();
    StudentRecord::new(i64::MAX, "Max", i64::MAX, f64::MAX).validate().unwrap();
}

#[test]
fn test_validate_rejects_out_of_range() {
    let cases = [
        StudentRecord::new(0, "a", 20, 1.0),
        StudentRecord::new(1, "a", 0, 1.0),
        StudentRecord::new(1, "a", 20, -0.1),
        StudentRecord::new(1, "a", 20, f64::INFINITY),
    ];

    for record in cases {
        let err = record.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "{:?}", record);
    }
}

#[test]
fn test_parse_record() {
    let record = record::parse_record("4", "Dee", " 23 ", "3.25").unwrap();

    assert_eq!(record, StudentRecord::new(4, "Dee", 23, 3.25));
}

#[test]
fn test_parse_record_rejects_non_numeric() {
    for (id, age, grade) in [("x", "20", "3.0"), ("1", "twenty", "3.0"), ("1", "20", "A+")] {
        let err = record::parse_record(id, "Ann", age, grade).unwrap_err();
        assert!(matches!(err, StudentError::InvalidInput(_)));
    }
}

#[test]
fn test_parse_record_rejects_out_of_range() {
    let err = record::parse_record("-1", "Ann", "20", "3.0").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        StudentError::DuplicateKey(5).to_string(),
        "Student ID 5 already exists"
    );
    assert_eq!(
        StudentError::NotFound(8).to_string(),
        "Student ID 8 does not exist"
    );
    assert!(!StudentError::Storage("gone".into()).is_recoverable());
    assert!(StudentError::NotFound(1).is_recoverable());
}

#[test]
fn test_negative_zero_grade_stored_as_zero() {
    let record = StudentRecord::new(1, "Ann", 20, -0.0);

    assert!(record.grade.is_sign_positive());
    assert_eq!(record::parse_real("Grade", "0.0").unwrap().to_bits(), 0.0f64.to_bits());
}

#[test]
fn test_parse_record_uses_digits_only_grammar() {
    for (id, age, grade) in [
        ("+5", "20", "3.0"),
        ("1", "1e1", "3.0"),
        ("1", "20", "-0"),
        ("1", "20", "1e1"),
        ("1", "-20", "3.0"),
        ("", "20", "3.0"),
    ] {
        let err = record::parse_record(id, "Ann", age, grade).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "{:?}", (id, age, grade));
    }
}

#[test]
fn test_parse_int_and_real_accept_plain_decimals() {
    assert_eq!(record::parse_int("ID", " 42 ").unwrap(), 42);
    assert_eq!(record::parse_real("Grade", "3.").unwrap(), 3.0);
    assert_eq!(record::parse_real("Grade", ".25").unwrap(), 0.25);
}
