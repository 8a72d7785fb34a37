#![forbid(unsafe_code)]

use std::io::Write;

use tracing::debug;

use crate::archive::error::{ArchiveError, ArchiveResult};
use crate::archive::format::{HEADER_LEN, MAGIC, NAME_LEN_FIELD, SIZE_FIELD};
use crate::archive::io::{write_i32, write_i64};

/// Streaming archive encoder.
///
/// Layout:
/// - [MAGIC 8]
/// - records, in append order:
///   - [i32 name_length][name bytes]
///   - [i64 size][data bytes]
///
/// There is no index or footer: the archive ends where the last record ends.
pub struct ArchiveWriter<W: Write> {
    inner: W,
    offset: u64,
    records: usize,
}

impl<W: Write> ArchiveWriter<W> {
    /// Writes the magic header and returns a writer positioned at the first record.
    pub fn new(mut inner: W) -> ArchiveResult<Self> {
        inner.write_all(&MAGIC)?;
        Ok(Self {
            inner,
            offset: HEADER_LEN,
            records: 0,
        })
    }

    pub fn append(&mut self, name: &[u8], data: &[u8]) -> ArchiveResult<()> {
        let name_len = i32::try_from(name.len()).map_err(|_| {
            ArchiveError::Invalid(format!("name too long: {} bytes", name.len()))
        })?;
        let size = i64::try_from(data.len())
            .map_err(|_| ArchiveError::Invalid(format!("file too large: {} bytes", data.len())))?;

        write_i32(&mut self.inner, name_len)?;
        self.inner.write_all(name)?;
        write_i64(&mut self.inner, size)?;
        self.inner.write_all(data)?;

        debug!(
            name = %String::from_utf8_lossy(name),
            offset = self.offset,
            size,
            "record written"
        );

        self.offset += NAME_LEN_FIELD + name.len() as u64 + SIZE_FIELD + data.len() as u64;
        self.records += 1;
        Ok(())
    }

    /// Bytes written so far, header included.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn records(&self) -> usize {
        self.records
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> ArchiveResult<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
