//! Table Store
//!
//! Durable [`RecordStore`] backed by a single table file.
//!
//! ## Responsibilities
//! - Create the table on first use, validate it on every later open
//! - Run each operation as one scoped unit: open, read, (write), release
//! - Replace the table atomically on every mutation

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::config::{Config, SyncStrategy};
use crate::error::{Result, StudentError};
use crate::record::{self, StudentId, StudentRecord};

use super::{RecordStore, TableReader, TableSchema, TableWriter};

/// File-backed record store
///
/// ## Concurrency:
/// - Mutations (add/update/delete/initialize) are serialized by `write_lock`
///   so an in-process read-modify-write never interleaves with another.
/// - Reads take no lock: the table is only ever replaced by rename, so a
///   reader sees either the old or the new snapshot.
/// - Nothing guards against a second process writing the same file.
pub struct TableStore {
    /// Store configuration
    config: Config,

    /// Expected table schema
    schema: TableSchema,

    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl TableStore {
    /// Create a store handle (does not touch the filesystem)
    pub fn new(config: Config) -> Self {
        let schema = TableSchema::students(config.table_name.clone());
        Self {
            config,
            schema,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store handle and initialize its table
    pub fn open(config: Config) -> Result<Self> {
        let store = Self::new(config);
        store.initialize()?;
        Ok(store)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    /// Path of the table file
    pub fn table_path(&self) -> PathBuf {
        self.config.table_path()
    }

    /// Schema this store expects
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Read every row after validating the file against the expected schema
    fn load(&self) -> Result<Vec<StudentRecord>> {
        let path = self.table_path();
        if !path.exists() {
            return Err(StudentError::Storage(format!(
                "table {} is not initialized",
                path.display()
            )));
        }

        let reader = TableReader::open(&path)?;
        self.check_schema(reader.schema())?;
        Ok(reader.into_rows())
    }

    fn check_schema(&self, found: &TableSchema) -> Result<()> {
        if !self.schema.is_compatible_with(found) {
            return Err(StudentError::SchemaConflict(format!(
                "table {} has columns ({}), expected ({})",
                found.name,
                found.describe(),
                self.schema.describe()
            )));
        }
        Ok(())
    }

    /// Write `rows` as a new snapshot and rename it over the table
    ///
    /// Called with `write_lock` held.
    fn commit(&self, rows: &[StudentRecord]) -> Result<()> {
        let sync = self.config.sync_strategy;
        let mut writer = TableWriter::new(&self.config.data_dir, &self.schema)?;
        for row in rows {
            writer.add(row)?;
        }
        let temp = writer.finish(sync)?;
        temp.persist(self.table_path()).map_err(|e| e.error)?;

        if sync == SyncStrategy::EveryWrite {
            sync_dir(&self.config.data_dir)?;
        }
        Ok(())
    }
}

impl RecordStore for TableStore {
    fn initialize(&self) -> Result<()> {
        let _write_guard = self.write_lock.lock();

        fs::create_dir_all(&self.config.data_dir).map_err(|e| {
            StudentError::Storage(format!(
                "cannot create data directory {}: {}",
                self.config.data_dir.display(),
                e
            ))
        })?;

        let path = self.table_path();
        if path.exists() {
            let reader = TableReader::open(&path)?;
            self.check_schema(reader.schema())?;
            tracing::debug!(
                "Opened table {} with {} rows",
                path.display(),
                reader.row_count()
            );
            return Ok(());
        }

        self.commit(&[])?;
        tracing::info!(
            "Created table {} ({})",
            path.display(),
            self.schema.describe()
        );
        Ok(())
    }

    fn exists(&self, id: StudentId) -> Result<bool> {
        Ok(self.load()?.iter().any(|r| r.id == id))
    }

    fn add(&self, record: &StudentRecord) -> Result<()> {
        record.validate()?;
        let _write_guard = self.write_lock.lock();

        let mut rows = self.load()?;
        if rows.iter().any(|r| r.id == record.id) {
            return Err(StudentError::DuplicateKey(record.id));
        }
        rows.push(StudentRecord {
            grade: record.grade + 0.0,
            ..record.clone()
        });
        self.commit(&rows)?;

        tracing::debug!(id = record.id, rows = rows.len(), "Inserted student");
        Ok(())
    }

    fn update(&self, id: StudentId, name: &str, age: i64, grade: f64) -> Result<()> {
        record::validate_fields(age, grade)?;
        let _write_guard = self.write_lock.lock();

        let mut rows = self.load()?;
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StudentError::NotFound(id))?;
        row.name = name.to_string();
        row.age = age;
        row.grade = grade + 0.0;
        self.commit(&rows)?;

        tracing::debug!(id, "Updated student");
        Ok(())
    }

    fn delete(&self, id: StudentId) -> Result<()> {
        let _write_guard = self.write_lock.lock();

        let mut rows = self.load()?;
        let index = rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(StudentError::NotFound(id))?;
        rows.remove(index);
        self.commit(&rows)?;

        tracing::debug!(id, rows = rows.len(), "Deleted student");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<StudentRecord>> {
        self.load()
    }
}

/// fsync a directory so a rename inside it is durable
#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<()> {
    fs::File::open(dir)?.sync_all()?;
    Ok(())
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}
