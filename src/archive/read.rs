#![forbid(unsafe_code)]

use std::io::Read;

use tracing::{debug, warn};

use crate::archive::error::{ArchiveError, ArchiveResult};
use crate::archive::format::{Record, MAGIC};
use crate::archive::io::{fill, read_i32_or_eof, read_i64, read_vec};

/// Streaming archive decoder.
///
/// The 8 header bytes are skipped, never checked: any prefix is accepted and a
/// mismatch is only logged. End of stream is legal only where a record would
/// start; anywhere else it is `Truncated`.
pub struct ArchiveReader<R: Read> {
    inner: R,
    offset: u64,
}

impl<R: Read> ArchiveReader<R> {
    /// Consumes the header. A stream shorter than the header reads as empty.
    pub fn new(mut inner: R) -> ArchiveResult<Self> {
        let mut head = [0u8; MAGIC.len()];
        let got = fill(&mut inner, &mut head)?;
        if got < MAGIC.len() {
            debug!(got, "archive shorter than header");
        } else if head != MAGIC {
            warn!(header = ?head, "unexpected header bytes, reading records anyway");
        }

        Ok(Self {
            inner,
            offset: got as u64,
        })
    }

    /// Bytes consumed so far, header included.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Next record in archive order, or `None` at a clean end of stream.
    pub fn next_record(&mut self) -> ArchiveResult<Option<Record>> {
        let start = self.offset;

        let Some(name_len) =
            read_i32_or_eof(&mut self.inner, &format!("name_length at offset {start}"))?
        else {
            return Ok(None);
        };
        let name_len = u64::try_from(name_len).map_err(|_| {
            ArchiveError::Invalid(format!("negative name_length {name_len} at offset {start}"))
        })?;
        let name = read_vec(&mut self.inner, name_len, &format!("name at offset {start}"))?;

        let size = read_i64(&mut self.inner, &format!("size of record at offset {start}"))?;
        let size = u64::try_from(size).map_err(|_| {
            ArchiveError::Invalid(format!("negative size {size} at offset {start}"))
        })?;
        let data = read_vec(&mut self.inner, size, &format!("data of record at offset {start}"))?;

        let rec = Record { name, data };
        self.offset += rec.encoded_len();

        debug!(name = %rec.name_lossy(), offset = start, size, "record read");

        Ok(Some(rec))
    }
}
