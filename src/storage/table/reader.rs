//! Table Reader
//!
//! Opens a table file, validates it end to end and decodes every row.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, StudentError};
use crate::record::StudentRecord;

use super::{TableSchema, FOOTER_SIZE, HEADER_SIZE, MAGIC, VERSION};

/// Fully decoded table snapshot
///
/// Tables are small, so the whole file is read at once. Magic, version,
/// CRC and layout offsets are all checked before any row is returned.
#[derive(Debug)]
pub struct TableReader {
    schema: TableSchema,
    rows: Vec<StudentRecord>,
}

impl TableReader {
    /// Open and decode a table file
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = BufReader::new(File::open(path)?);
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Decode a table from its raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let len = bytes.len() as u64;
        if len < HEADER_SIZE + FOOTER_SIZE {
            return Err(StudentError::Corrupted(format!(
                "table file too short: {} bytes",
                len
            )));
        }

        // Header
        if &bytes[0..4] != MAGIC {
            return Err(StudentError::Corrupted(format!(
                "Invalid table magic: expected STBL, got {:?}",
                &bytes[0..4]
            )));
        }
        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(StudentError::Corrupted(format!(
                "Unsupported table version: {}",
                version
            )));
        }
        let row_count = read_u64(bytes, 6)?;

        // Footer
        let footer_start = (len - FOOTER_SIZE) as usize;
        let data_offset = read_u64(bytes, footer_start)?;
        let stored_crc = read_u32(bytes, footer_start + 8)?;

        let body = &bytes[HEADER_SIZE as usize..footer_start];
        let actual_crc = crc32fast::hash(body);
        if actual_crc != stored_crc {
            return Err(StudentError::Corrupted(format!(
                "CRC mismatch: stored {:#010x}, computed {:#010x}",
                stored_crc, actual_crc
            )));
        }

        // Schema block
        let mut pos = HEADER_SIZE as usize;
        let schema_bytes = read_block(bytes, &mut pos, footer_start)?;
        let schema: TableSchema = bincode::deserialize(schema_bytes)
            .map_err(|e| StudentError::Corrupted(format!("unreadable schema: {}", e)))?;

        if pos as u64 != data_offset {
            return Err(StudentError::Corrupted(format!(
                "data offset mismatch: footer says {}, schema ends at {}",
                data_offset, pos
            )));
        }

        // Data block
        let mut rows = Vec::with_capacity(row_count.min(1 << 16) as usize);
        for i in 0..row_count {
            let row_bytes = read_block(bytes, &mut pos, footer_start)?;
            let row: StudentRecord = bincode::deserialize(row_bytes)
                .map_err(|e| StudentError::Corrupted(format!("unreadable row {}: {}", i, e)))?;
            rows.push(row);
        }

        if pos != footer_start {
            return Err(StudentError::Corrupted(format!(
                "{} trailing bytes after {} rows",
                footer_start - pos,
                row_count
            )));
        }

        Ok(Self { schema, rows })
    }

    /// Schema stored in the file
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Rows in storage order
    pub fn rows(&self) -> &[StudentRecord] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Take ownership of the rows
    pub fn into_rows(self) -> Vec<StudentRecord> {
        self.rows
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

fn read_u32(bytes: &[u8], pos: usize) -> Result<u32> {
    bytes
        .get(pos..pos + 4)
        .and_then(|b| b.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or_else(|| StudentError::Corrupted(format!("truncated u32 at offset {}", pos)))
}

fn read_u64(bytes: &[u8], pos: usize) -> Result<u64> {
    bytes
        .get(pos..pos + 8)
        .and_then(|b| b.try_into().ok())
        .map(u64::from_le_bytes)
        .ok_or_else(|| StudentError::Corrupted(format!("truncated u64 at offset {}", pos)))
}

/// Read a `[len(4)][payload]` block that must end before `limit`
fn read_block<'a>(bytes: &'a [u8], pos: &mut usize, limit: usize) -> Result<&'a [u8]> {
    if *pos + 4 > limit {
        return Err(StudentError::Corrupted(format!(
            "block header at offset {} runs past data end",
            pos
        )));
    }
    let block_len = read_u32(bytes, *pos)? as usize;
    let start = *pos + 4;
    let end = start + block_len;
    if end > limit {
        return Err(StudentError::Corrupted(format!(
            "block at offset {} ({} bytes) runs past data end",
            pos, block_len
        )));
    }
    *pos = end;
    Ok(&bytes[start..end])
}
