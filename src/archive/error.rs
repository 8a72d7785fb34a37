#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot create archive {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot open archive {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Extract {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("truncated archive: {0}")]
    Truncated(String),

    #[error("invalid archive: {0}")]
    Invalid(String),
}

pub type ArchiveResult<T> = Result<T, ArchiveError>;
