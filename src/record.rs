//! Student record definitions
//!
//! The one row type stored in the table.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudentError};

/// Primary key of a student record (caller-supplied, positive)
pub type StudentId = i64;

/// A single student row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Primary key, unique across the table
    pub id: StudentId,

    /// Display name (may be empty)
    pub name: String,

    /// Age in years, positive
    pub age: i64,

    /// Grade, non-negative
    pub grade: f64,
}

impl StudentRecord {
    /// Create a new record (not validated)
    ///
    /// A grade of `-0.0` is stored as `0.0`.
    pub fn new(id: StudentId, name: impl Into<String>, age: i64, grade: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            grade: grade + 0.0,
        }
    }

    /// Check the basic range constraints on every field
    pub fn validate(&self) -> Result<()> {
        validate_id(self.id)?;
        validate_fields(self.age, self.grade)
    }
}

/// Ids must be positive
pub fn validate_id(id: StudentId) -> Result<()> {
    if id < 1 {
        return Err(StudentError::InvalidInput(format!(
            "ID must be a positive integer, got {}",
            id
        )));
    }
    Ok(())
}

/// Range checks on the non-key columns
pub fn validate_fields(age: i64, grade: f64) -> Result<()> {
    if age < 1 {
        return Err(StudentError::InvalidInput(format!(
            "Age must be a positive integer, got {}",
            age
        )));
    }
    if !grade.is_finite() || grade < 0.0 {
        return Err(StudentError::InvalidInput(format!(
            "Grade must be a non-negative number, got {}",
            grade
        )));
    }
    Ok(())
}

/// Parse raw form input into a validated record
///
/// `id` and `age` must be decimal digits, `grade` digits with at most one `.`.
/// Signs and exponents are rejected.
pub fn parse_record(id: &str, name: &str, age: &str, grade: &str) -> Result<StudentRecord> {
    let record = StudentRecord::new(
        parse_int("ID", id)?,
        name,
        parse_int("Age", age)?,
        parse_real("Grade", grade)?,
    );
    record.validate()?;
    Ok(record)
}

/// Parse a raw integer column value: trimmed, ASCII digits only
pub fn parse_int(label: &str, raw: &str) -> Result<i64> {
    let invalid =
        || StudentError::InvalidInput(format!("{} must be an integer, got {:?}", label, raw));

    let text = raw.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

/// Parse a raw real column value: trimmed, digits with at most one `.`
pub fn parse_real(label: &str, raw: &str) -> Result<f64> {
    let invalid =
        || StudentError::InvalidInput(format!("{} must be a number, got {:?}", label, raw));

    let text = raw.trim();
    let digits = text.bytes().filter(u8::is_ascii_digit).count();
    let dots = text.bytes().filter(|&b| b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != text.len() {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}
