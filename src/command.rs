//! Command definitions
//!
//! One caller request against the record set, and what it produced.

use crate::query::{Field, FieldValue};
use crate::record::{StudentId, StudentRecord};

/// A parsed request
#[derive(Debug, Clone)]
pub enum Command {
    /// Insert a new student
    Add { record: StudentRecord },

    /// Overwrite the non-key fields of a student
    Update {
        id: StudentId,
        name: String,
        age: i64,
        grade: f64,
    },

    /// Remove a student
    Delete { id: StudentId },

    /// Look up one student by id
    Show { id: StudentId },

    /// All students, ascending by a field
    List { sort_by: Field },

    /// Sort by a field, then binary search it for a value
    Search { field: Field, value: FieldValue },
}

/// Result of executing a [`Command`]
#[derive(Debug, Clone)]
pub enum Outcome {
    Added(StudentId),
    Updated(StudentId),
    Deleted(StudentId),
    Record(Option<StudentRecord>),
    Listing(Vec<StudentRecord>),
    Found(SearchResult),
}

/// Sorted rows plus the position of the matching row, if any
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Every record, ascending by the searched field
    pub rows: Vec<StudentRecord>,

    /// Index into `rows` of the match
    pub position: Option<usize>,
}

impl SearchResult {
    /// The matching record, if the search hit
    pub fn record(&self) -> Option<&StudentRecord> {
        self.position.and_then(|i| self.rows.get(i))
    }

    pub fn is_found(&self) -> bool {
        self.position.is_some()
    }
}
