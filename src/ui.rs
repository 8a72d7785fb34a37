#![forbid(unsafe_code)]

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use inquire::Confirm;
use tracing::debug;

use crate::archive::{self, ARCHIVE_EXT};

/// Appends `.xls` unless the path already ends with it (any case).
pub fn ensure_xls_ext(p: &Path) -> PathBuf {
    let s = p.to_string_lossy();
    let suffix = format!(".{ARCHIVE_EXT}");
    if s.to_lowercase().ends_with(&suffix) {
        return p.to_path_buf();
    }
    let mut os = p.as_os_str().to_owned();
    os.push(&suffix);
    PathBuf::from(os)
}

/// Decides whether `pack` may write to `path`.
///
/// A missing file is always fine. An existing one needs `assume_yes` or an
/// explicit yes at the prompt; a prompt that cannot be shown counts as no.
pub fn may_overwrite(path: &Path, assume_yes: bool) -> archive::ArchiveResult<bool> {
    match std::fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(archive::ArchiveError::Io(e)),
    }

    if assume_yes {
        debug!(path = %path.display(), "overwriting existing archive");
        return Ok(true);
    }

    let answer = Confirm::new(&format!(
        "File '{}' already exists. Overwrite?",
        path.display()
    ))
    .with_default(false)
    .prompt();

    match answer {
        Ok(yes) => Ok(yes),
        Err(e) => {
            debug!(error = %e, "overwrite prompt failed, treating as no");
            Ok(false)
        }
    }
}
