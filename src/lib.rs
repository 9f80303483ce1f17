//! # studentdb
//!
//! A small student record store with:
//! - A durable single-table store with primary-key uniqueness
//! - All-or-nothing commits (write snapshot, then atomic rename)
//! - Partition sort and binary search keyed by any column
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CLI / any front end                       │
//! │           (parses raw input, renders rows/errors)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ RecordStore │          │    Query    │
//!   │ (table file)│─────────▶│ sort/search │
//!   └─────────────┘ list_all └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod record;

pub mod storage;
pub mod query;
pub mod command;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, Result, StudentError};
pub use config::Config;
pub use record::{StudentId, StudentRecord};
pub use storage::{MemoryStore, RecordStore, TableStore};
pub use query::{search, sort_by, Field, FieldValue};
pub use command::{Command, Outcome, SearchResult};
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of studentdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
