#![forbid(unsafe_code)]

use std::io::{ErrorKind, Read, Write};

use crate::archive::error::{ArchiveError, ArchiveResult};

pub fn write_i32(w: &mut dyn Write, v: i32) -> ArchiveResult<()> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

pub fn write_i64(w: &mut dyn Write, v: i64) -> ArchiveResult<()> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Reads until `buf` is full or the stream ends. Returns the byte count.
pub fn fill(r: &mut dyn Read, buf: &mut [u8]) -> ArchiveResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Like `read_exact`, but a short read becomes `Truncated` naming `what`.
pub fn read_array<const N: usize>(r: &mut dyn Read, what: &str) -> ArchiveResult<[u8; N]> {
    let mut buf = [0u8; N];
    let got = fill(r, &mut buf)?;
    if got != N {
        return Err(ArchiveError::Truncated(format!(
            "{what}: expected {N} bytes, got {got}"
        )));
    }
    Ok(buf)
}

/// `None` when the stream is already at its end. A partial field is `Truncated`.
pub fn read_i32_or_eof(r: &mut dyn Read, what: &str) -> ArchiveResult<Option<i32>> {
    let mut buf = [0u8; 4];
    match fill(r, &mut buf)? {
        0 => Ok(None),
        4 => Ok(Some(i32::from_le_bytes(buf))),
        got => Err(ArchiveError::Truncated(format!(
            "{what}: expected 4 bytes, got {got}"
        ))),
    }
}

pub fn read_i64(r: &mut dyn Read, what: &str) -> ArchiveResult<i64> {
    Ok(i64::from_le_bytes(read_array::<8>(r, what)?))
}

/// Reads exactly `len` bytes. The buffer only grows with bytes that are
/// actually there, so a corrupt length cannot force a huge allocation.
pub fn read_vec(r: &mut dyn Read, len: u64, what: &str) -> ArchiveResult<Vec<u8>> {
    let mut out = Vec::new();
    r.take(len).read_to_end(&mut out)?;
    if out.len() as u64 != len {
        return Err(ArchiveError::Truncated(format!(
            "{what}: expected {len} bytes, got {}",
            out.len()
        )));
    }
    Ok(out)
}
