//! Table Writer
//!
//! Writes a complete table snapshot to a temporary file next to the table.

use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::SyncStrategy;
use crate::error::{Result, StudentError};
use crate::record::StudentRecord;

use super::{TableSchema, HEADER_SIZE, MAGIC, ROW_COUNT_OFFSET, VERSION};

/// Builder for a new table snapshot
///
/// Writes header and schema immediately; call `add()` for each row, then
/// `finish()` to write the footer. The result is an unlinked-on-drop temp
/// file that the caller persists over the live table.
pub struct TableWriter {
    /// Buffered writer over the temp file
    writer: BufWriter<NamedTempFile>,
    /// Number of rows written
    row_count: u64,
    /// Offset of the first row
    data_offset: u64,
    /// Running CRC hasher for schema + data
    hasher: crc32fast::Hasher,
}

impl TableWriter {
    /// Start a snapshot in `dir` (must be on the same filesystem as the table)
    pub fn new(dir: &Path, schema: &TableSchema) -> Result<Self> {
        let file = NamedTempFile::new_in(dir)?;
        let mut writer = BufWriter::new(file);

        // Header (row count placeholder, patched in finish)
        writer.write_all(MAGIC)?;
        writer.write_all(&VERSION.to_le_bytes())?;
        writer.write_all(&0u64.to_le_bytes())?;

        let mut hasher = crc32fast::Hasher::new();

        // Schema block: [len(4)][schema]
        let schema_bytes = bincode::serialize(schema)?;
        let len_bytes = (schema_bytes.len() as u32).to_le_bytes();
        writer.write_all(&len_bytes)?;
        writer.write_all(&schema_bytes)?;
        hasher.update(&len_bytes);
        hasher.update(&schema_bytes);

        Ok(Self {
            writer,
            row_count: 0,
            data_offset: HEADER_SIZE + 4 + schema_bytes.len() as u64,
            hasher,
        })
    }

    /// Append one row: [len(4)][row]
    pub fn add(&mut self, record: &StudentRecord) -> Result<()> {
        let row = bincode::serialize(record)?;
        let len_bytes = (row.len() as u32).to_le_bytes();

        self.writer.write_all(&len_bytes)?;
        self.writer.write_all(&row)?;
        self.hasher.update(&len_bytes);
        self.hasher.update(&row);

        self.row_count += 1;
        Ok(())
    }

    /// Number of rows written so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Write the footer, patch the row count and hand back the temp file
    pub fn finish(self, sync: SyncStrategy) -> Result<NamedTempFile> {
        let Self {
            mut writer,
            row_count,
            data_offset,
            hasher,
        } = self;

        // Footer: data_offset (8) + crc (4) + padding (4)
        writer.write_all(&data_offset.to_le_bytes())?;
        writer.write_all(&hasher.finalize().to_le_bytes())?;
        writer.write_all(&[0u8; 4])?;
        writer.flush()?;

        let mut file = writer.into_inner().map_err(|e| {
            StudentError::Storage(format!("Failed to flush table snapshot: {}", e))
        })?;
        file.seek(SeekFrom::Start(ROW_COUNT_OFFSET))?;
        file.write_all(&row_count.to_le_bytes())?;

        if sync == SyncStrategy::EveryWrite {
            file.as_file().sync_all()?;
        }

        Ok(file)
    }
}
