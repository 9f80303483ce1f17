//! Table file module
//!
//! Immutable snapshot of the whole student table. A commit writes a fresh
//! file and renames it over the previous one.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                       │
//! │   Magic: "STBL" (4) | Version: u16 (2) | Rows: u64 (8)  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Schema Block (variable)                                 │
//! │   [SchemaLen: u32][TableSchema]                         │
//! ├─────────────────────────────────────────────────────────┤
//! │ Data Block (variable)                                   │
//! │   [RowLen: u32][StudentRecord]                          │
//! │   ... repeated for each row ...                         │
//! ├─────────────────────────────────────────────────────────┤
//! │ Footer (16 bytes)                                       │
//! │   DataOffset: u64 (8) | CRC: u32 (4) | Padding (4)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The CRC covers the schema block and the data block.

mod reader;
mod writer;

use serde::{Deserialize, Serialize};

pub use reader::TableReader;
pub use writer::TableWriter;

// =============================================================================
// Shared Constants (used by writer and reader)
// =============================================================================

/// Magic bytes identifying a studentdb table file
pub(crate) const MAGIC: &[u8; 4] = b"STBL";

/// Current table format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + RowCount (8) = 14 bytes
pub(crate) const HEADER_SIZE: u64 = 14;

/// Footer size: DataOffset (8) + CRC (4) + Padding (4) = 16 bytes
pub(crate) const FOOTER_SIZE: u64 = 16;

/// Byte offset of the row count inside the header
pub(crate) const ROW_COUNT_OFFSET: u64 = 6;

// =============================================================================
// Schema
// =============================================================================

/// Storage type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Text,
    Real,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
            ColumnType::Real => "REAL",
        };
        f.write_str(name)
    }
}

/// One column descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub primary_key: bool,
    pub not_null: bool,
}

impl Column {
    fn new(name: &str, column_type: ColumnType, primary_key: bool, not_null: bool) -> Self {
        Self {
            name: name.to_string(),
            column_type,
            primary_key,
            not_null,
        }
    }
}

/// Schema stored at the head of every table file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name
    pub name: String,
    /// Columns in row order
    pub columns: Vec<Column>,
}

impl TableSchema {
    /// The student table: `id INTEGER PRIMARY KEY, name TEXT NOT NULL,
    /// age INTEGER, grade REAL`
    pub fn students(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![
                Column::new("id", ColumnType::Integer, true, true),
                Column::new("name", ColumnType::Text, false, true),
                Column::new("age", ColumnType::Integer, false, false),
                Column::new("grade", ColumnType::Real, false, false),
            ],
        }
    }

    /// Two schemas are compatible when their columns match exactly
    pub fn is_compatible_with(&self, other: &TableSchema) -> bool {
        self.columns == other.columns
    }

    /// `id INTEGER PRIMARY KEY, name TEXT NOT NULL, ...`
    pub fn describe(&self) -> String {
        self.columns
            .iter()
            .map(|c| {
                let mut s = format!("{} {}", c.name, c.column_type);
                if c.primary_key {
                    s.push_str(" PRIMARY KEY");
                } else if c.not_null {
                    s.push_str(" NOT NULL");
                }
                s
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
