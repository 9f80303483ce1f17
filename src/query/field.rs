//! Field selection
//!
//! Typed selector for the column a sort or search is keyed by.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StudentError};
use crate::record::{self, StudentRecord};

/// A column of the student table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Age,
    Grade,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Field; 4] = [Field::Id, Field::Name, Field::Age, Field::Grade];

    /// Column name as stored in the schema
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Age => "age",
            Field::Grade => "grade",
        }
    }

    /// Extract this field from a record as a comparable key
    pub fn key(&self, record: &StudentRecord) -> FieldValue {
        match self {
            Field::Id => FieldValue::Int(record.id),
            Field::Name => FieldValue::Text(record.name.clone()),
            Field::Age => FieldValue::Int(record.age),
            Field::Grade => FieldValue::Real(record.grade),
        }
    }

    /// Parse raw user text into a key of this field's type
    ///
    /// - `Id`, `Age`: decimal digits only
    /// - `Grade`: digits with at most one `.`
    /// - `Name`: taken verbatim
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue> {
        match self {
            Field::Name => Ok(FieldValue::Text(raw.to_string())),
            Field::Id => record::parse_int("ID", raw).map(FieldValue::Int),
            Field::Age => record::parse_int("Age", raw).map(FieldValue::Int),
            Field::Grade => record::parse_real("Grade", raw).map(FieldValue::Real),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = StudentError;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StudentError::InvalidInput(format!("Unknown field: {:?}", s)))
    }
}

/// A key extracted from one field of a record
///
/// Totally ordered so it can drive `sort_by` and `search`. Reals compare
/// with `f64::total_cmp` after folding `-0.0` into `0.0`. Values of different variants never meet in
/// practice; they order by variant (Int < Text < Real).
#[derive(Debug, Clone)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Real(f64),
}

impl FieldValue {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Int(_) => 0,
            FieldValue::Text(_) => 1,
            FieldValue::Real(_) => 2,
        }
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Real(a), FieldValue::Real(b)) => (a + 0.0).total_cmp(&(b + 0.0)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue {}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Real(v) => write!(f, "{}", v),
        }
    }
}
