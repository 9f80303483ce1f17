//! Configuration for studentdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a studentdb instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the table file
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {table_name}.tbl
    pub data_dir: PathBuf,

    /// Name of the table (also the file stem)
    pub table_name: String,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// Sync strategy: whether commits fsync before returning
    pub sync_strategy: SyncStrategy,
}

/// Commit sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync the table file and its directory on every commit
    EveryWrite,

    /// Leave flushing to the OS page cache (scratch data, tests)
    OsBuffered,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./student_data"),
            table_name: "students".to_string(),
            sync_strategy: SyncStrategy::EveryWrite,
        }
    }
}

impl Config {
    /// File extension of table files
    pub const TABLE_EXTENSION: &'static str = "tbl";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the table file
    pub fn table_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", self.table_name, Self::TABLE_EXTENSION))
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the table name
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.config.table_name = name.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
