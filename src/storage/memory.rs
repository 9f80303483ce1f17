//! Memory Store
//!
//! Volatile [`RecordStore`] with the same contract as the table store,
//! minus durability.

use parking_lot::RwLock;

use crate::error::{Result, StudentError};
use crate::record::{self, StudentId, StudentRecord};

use super::RecordStore;

/// In-memory record store
///
/// Rows live in insertion order in a `RwLock<Vec<_>>`; many concurrent
/// readers, one writer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<StudentRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn exists(&self, id: StudentId) -> Result<bool> {
        Ok(self.rows.read().iter().any(|r| r.id == id))
    }

    fn add(&self, record: &StudentRecord) -> Result<()> {
        record.validate()?;
        let mut rows = self.rows.write();
        if rows.iter().any(|r| r.id == record.id) {
            return Err(StudentError::DuplicateKey(record.id));
        }
        rows.push(StudentRecord {
            grade: record.grade + 0.0,
            ..record.clone()
        });
        Ok(())
    }

    fn update(&self, id: StudentId, name: &str, age: i64, grade: f64) -> Result<()> {
        record::validate_fields(age, grade)?;
        let mut rows = self.rows.write();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StudentError::NotFound(id))?;
        row.name = name.to_string();
        row.age = age;
        row.grade = grade + 0.0;
        Ok(())
    }

    fn delete(&self, id: StudentId) -> Result<()> {
        let mut rows = self.rows.write();
        let index = rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(StudentError::NotFound(id))?;
        rows.remove(index);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.rows.read().clone())
    }

    fn get(&self, id: StudentId) -> Result<Option<StudentRecord>> {
        Ok(self.rows.read().iter().find(|r| r.id == id).cloned())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.rows.read().len())
    }
}
