//! Error types for studentdb
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::record::StudentId;

/// Result type alias using StudentError
pub type Result<T> = std::result::Result<T, StudentError>;

/// Unified error type for studentdb operations
#[derive(Debug, Error)]
pub enum StudentError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Table corruption detected: {0}")]
    Corrupted(String),

    #[error("Schema conflict: {0}")]
    SchemaConflict(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Student ID {0} already exists")]
    DuplicateKey(StudentId),

    #[error("Student ID {0} does not exist")]
    NotFound(StudentId),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Coarse classification a caller uses to decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Backing medium unreachable, corrupt or incompatible. Fatal.
    Storage,

    /// Insert with an id that is already taken. Pick another id.
    DuplicateKey,

    /// Update/delete target is absent.
    NotFound,

    /// Raw input failed parsing or range checks before reaching the store.
    InvalidInput,
}

impl StudentError {
    /// Map this error onto its [`ErrorKind`]
    pub fn kind(&self) -> ErrorKind {
        match self {
            StudentError::Io(_)
            | StudentError::Storage(_)
            | StudentError::Corrupted(_)
            | StudentError::SchemaConflict(_)
            | StudentError::Serialization(_) => ErrorKind::Storage,
            StudentError::DuplicateKey(_) => ErrorKind::DuplicateKey,
            StudentError::NotFound(_) => ErrorKind::NotFound,
            StudentError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// True if the caller can recover by changing its input
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::Storage
    }
}

impl From<bincode::Error> for StudentError {
    fn from(e: bincode::Error) -> Self {
        StudentError::Serialization(e.to_string())
    }
}
