#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

use crate::archive::error::{ArchiveError, ArchiveResult};
use crate::archive::format::RecordInfo;
use crate::archive::read::ArchiveReader;
use crate::archive::write::ArchiveWriter;

/// Pack `files`, in order, into a new archive at `archive`.
///
/// An existing file at `archive` is truncated without asking. On error the
/// partially written archive is left on disk.
pub fn pack<P: AsRef<Path>>(archive: &Path, files: &[P]) -> ArchiveResult<()> {
    let out = File::create(archive).map_err(|source| ArchiveError::Create {
        path: archive.to_path_buf(),
        source,
    })?;
    let mut writer = ArchiveWriter::new(BufWriter::new(out))?;

    for file in files {
        let file = file.as_ref();
        let data = std::fs::read(file).map_err(|source| ArchiveError::ReadSource {
            path: file.to_path_buf(),
            source,
        })?;
        let name = base_name(file)?;
        writer.append(&name, &data)?;
    }

    let records = writer.records();
    let bytes = writer.offset();
    writer.finish()?;

    info!(archive = %archive.display(), records, bytes, "archive created");
    Ok(())
}

/// Extract every record of `archive` into `output`, which must already exist.
///
/// Names are joined to `output` as stored. A record named `../x` or `/x`
/// lands outside `output`; this is logged, not prevented. Files extracted
/// before an error stay on disk.
pub fn unpack(archive: &Path, output: &Path) -> ArchiveResult<()> {
    let mut reader = open(archive)?;
    let mut records = 0usize;

    while let Some(rec) = reader.next_record()? {
        let rel = name_to_path(&rec.name);
        if escapes_output(&rel) {
            warn!(name = %rel.display(), "record name escapes the output directory");
        }

        let out_path = output.join(&rel);
        std::fs::write(&out_path, &rec.data).map_err(|source| ArchiveError::Extract {
            path: out_path.clone(),
            source,
        })?;
        records += 1;
    }

    info!(archive = %archive.display(), output = %output.display(), records, "archive extracted");
    Ok(())
}

/// Walk `archive` and describe each record without extracting anything.
pub fn list(archive: &Path) -> ArchiveResult<Vec<RecordInfo>> {
    let mut reader = open(archive)?;
    let mut out = Vec::new();

    loop {
        let offset = reader.offset();
        let Some(rec) = reader.next_record()? else {
            break;
        };
        out.push(RecordInfo {
            name: rec.name_lossy(),
            offset,
            size: rec.data.len() as u64,
        });
    }

    Ok(out)
}

fn open(archive: &Path) -> ArchiveResult<ArchiveReader<BufReader<File>>> {
    let f = File::open(archive).map_err(|source| ArchiveError::Open {
        path: archive.to_path_buf(),
        source,
    })?;
    ArchiveReader::new(BufReader::new(f))
}

/// Final path segment as raw bytes.
fn base_name(path: &Path) -> ArchiveResult<Vec<u8>> {
    let name = path.file_name().ok_or_else(|| {
        ArchiveError::Invalid(format!("no file name in {}", path.display()))
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Ok(name.as_bytes().to_vec())
    }
    #[cfg(not(unix))]
    {
        Ok(name.to_string_lossy().into_owned().into_bytes())
    }
}

fn name_to_path(name: &[u8]) -> PathBuf {
    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(OsStr::from_bytes(name))
    }
    #[cfg(not(unix))]
    {
        PathBuf::from(String::from_utf8_lossy(name).into_owned())
    }
}

fn escapes_output(rel: &Path) -> bool {
    rel.components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
}
