#![forbid(unsafe_code)]

mod error;
mod format;
mod io;
mod ops;
mod read;
mod write;

pub use error::{ArchiveError, ArchiveResult};
pub use format::ARCHIVE_EXT;

pub use ops::{list, pack, unpack};
