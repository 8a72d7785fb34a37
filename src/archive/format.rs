#![forbid(unsafe_code)]

/// OLE2 compound document signature, as found at the start of BIFF8 `.xls`
/// files. Cosmetic only: nothing after it is a real compound document.
pub const MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

pub const HEADER_LEN: u64 = MAGIC.len() as u64;

/// Extension the CLI forces onto archive names.
pub const ARCHIVE_EXT: &str = "xls";

/// Width of the `name_length` field (i32 LE).
pub(crate) const NAME_LEN_FIELD: u64 = 4;

/// Width of the `size` field (i64 LE).
pub(crate) const SIZE_FIELD: u64 = 8;

/// One packed file.
///
/// Layout on disk:
/// - [i32 name_length][name bytes]
/// - [i64 size][data bytes]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Base filename as raw bytes. Not required to be UTF-8.
    pub name: Vec<u8>,
    pub data: Vec<u8>,
}

impl Record {
    pub fn name_lossy(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }

    /// Bytes this record occupies in an archive.
    pub fn encoded_len(&self) -> u64 {
        NAME_LEN_FIELD + self.name.len() as u64 + SIZE_FIELD + self.data.len() as u64
    }
}

/// Public view of a record (for listing without extracting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInfo {
    pub name: String,
    /// Offset of the record's `name_length` field from the start of the archive.
    pub offset: u64,
    pub size: u64,
}
