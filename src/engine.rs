//! Engine Module
//!
//! Glue between a record store and the sort/search functions.
//!
//! ## Responsibilities
//! - Own the injected [`RecordStore`] and initialize it once
//! - Route [`Command`]s to store operations
//! - Fetch, sort and search the record set for listings and lookups

use crate::command::{Command, Outcome, SearchResult};
use crate::config::Config;
use crate::error::{Result, StudentError};
use crate::query::{self, Field, FieldValue};
use crate::record::{StudentId, StudentRecord};
use crate::storage::{RecordStore, TableStore};

/// The record engine
///
/// Generic over its store so callers can inject a durable [`TableStore`]
/// or a volatile [`MemoryStore`](crate::storage::MemoryStore).
pub struct Engine<S: RecordStore = TableStore> {
    store: S,
}

impl Engine<TableStore> {
    /// Open or create the table described by `config`
    pub fn open(config: Config) -> Result<Self> {
        Self::new(TableStore::new(config))
    }
}

impl<S: RecordStore> Engine<S> {
    /// Wrap a store, initializing its backing table
    pub fn new(store: S) -> Result<Self> {
        store.initialize()?;
        Ok(Self { store })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add { record } => {
                self.add(&record)?;
                Ok(Outcome::Added(record.id))
            }
            Command::Update {
                id,
                name,
                age,
                grade,
            } => {
                self.update(id, &name, age, grade)?;
                Ok(Outcome::Updated(id))
            }
            Command::Delete { id } => {
                self.delete(id)?;
                Ok(Outcome::Deleted(id))
            }
            Command::Show { id } => Ok(Outcome::Record(self.get(id)?)),
            Command::List { sort_by } => Ok(Outcome::Listing(self.listing(sort_by)?)),
            Command::Search { field, value } => Ok(Outcome::Found(self.find(field, &value)?)),
        }
    }

    /// Insert a record after checking its id is free
    pub fn add(&self, record: &StudentRecord) -> Result<()> {
        record.validate()?;
        if self.store.exists(record.id)? {
            tracing::warn!(id = record.id, "Rejected insert of existing student");
            return Err(StudentError::DuplicateKey(record.id));
        }
        self.store.add(record)
    }

    /// Update a record after checking it exists
    pub fn update(&self, id: StudentId, name: &str, age: i64, grade: f64) -> Result<()> {
        if !self.store.exists(id)? {
            tracing::warn!(id, "Rejected update of missing student");
            return Err(StudentError::NotFound(id));
        }
        self.store.update(id, name, age, grade)
    }

    /// Delete a record after checking it exists
    pub fn delete(&self, id: StudentId) -> Result<()> {
        if !self.store.exists(id)? {
            tracing::warn!(id, "Rejected delete of missing student");
            return Err(StudentError::NotFound(id));
        }
        self.store.delete(id)
    }

    /// Point lookup by id
    pub fn get(&self, id: StudentId) -> Result<Option<StudentRecord>> {
        self.store.get(id)
    }

    /// Every record, ascending by `field`
    pub fn listing(&self, field: Field) -> Result<Vec<StudentRecord>> {
        let records = self.store.list_all()?;
        Ok(query::sort_by(&records, |r| field.key(r)))
    }

    /// Sort by `field`, then binary search for `target`
    pub fn find(&self, field: Field, target: &FieldValue) -> Result<SearchResult> {
        let rows = self.listing(field)?;
        let position = query::search(&rows, target, |r| field.key(r)).map(|(i, _)| i);

        tracing::debug!(%field, %target, found = position.is_some(), "Search");
        Ok(SearchResult { rows, position })
    }

    /// Like [`find`](Self::find), parsing `raw` as a value of `field` first
    pub fn find_raw(&self, field: Field, raw: &str) -> Result<SearchResult> {
        let target = field.parse_value(raw)?;
        self.find(field, &target)
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}
