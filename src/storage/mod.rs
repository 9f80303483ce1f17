//! Storage Module
//!
//! Durable home of the student table.
//!
//! ## Responsibilities
//! - Own the on-disk table file (schema + rows)
//! - Enforce primary-key uniqueness on insert
//! - Commit every mutation all-or-nothing before returning
//! - Expose the store behind the [`RecordStore`] trait so callers get it injected
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Header                                 │
//! │ ┌──────────┬──────────┬──────────────┐ │
//! │ │Magic (4) │Version(2)│  Row Count   │ │
//! │ └──────────┴──────────┴──────────────┘ │
//! ├────────────────────────────────────────┤
//! │ Schema Block                           │
//! │ ┌────────────┬─────────────────────┐   │
//! │ │ Len (4)    │ TableSchema (bincode)│  │
//! │ └────────────┴─────────────────────┘   │
//! ├────────────────────────────────────────┤
//! │ Data Block                             │
//! │ ┌────────────┬─────────────────────┐   │
//! │ │ RowLen (4) │ Row (bincode)       │   │
//! │ └────────────┴─────────────────────┘   │
//! │ ... (repeated for each row)            │
//! ├────────────────────────────────────────┤
//! │ Footer                                 │
//! │ ┌──────────────────┬─────────────────┐ │
//! │ │ Data Offset      │    CRC32        │ │
//! │ └──────────────────┴─────────────────┘ │
//! └────────────────────────────────────────┘
//! ```

mod memory;
mod table;
mod table_store;

pub use memory::MemoryStore;
pub use table::{Column, ColumnType, TableReader, TableSchema, TableWriter};
pub use table_store::TableStore;

use crate::error::Result;
use crate::record::{StudentId, StudentRecord};

/// Contract of a student record store
///
/// Every mutating call either commits fully before returning or leaves the
/// prior state untouched.
pub trait RecordStore {
    /// Ensure the backing table exists with the expected columns (idempotent)
    fn initialize(&self) -> Result<()>;

    /// True iff a record with this id is stored
    fn exists(&self, id: StudentId) -> Result<bool>;

    /// Insert a new record; `DuplicateKey` if the id is taken
    fn add(&self, record: &StudentRecord) -> Result<()>;

    /// Overwrite every non-key field of an existing record; `NotFound` if absent
    fn update(&self, id: StudentId, name: &str, age: i64, grade: f64) -> Result<()>;

    /// Remove exactly one record; `NotFound` if absent
    fn delete(&self, id: StudentId) -> Result<()>;

    /// Every stored record, in storage order
    fn list_all(&self) -> Result<Vec<StudentRecord>>;

    /// Point lookup by id
    fn get(&self, id: StudentId) -> Result<Option<StudentRecord>> {
        Ok(self.list_all()?.into_iter().find(|r| r.id == id))
    }

    /// Number of stored records
    fn len(&self) -> Result<usize> {
        Ok(self.list_all()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
