use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Chunk size used when no explicit size applies: merge mode always
/// copies in chunks of this many bytes, and split mode falls back to
/// it when `--parts_size` is absent.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Open a file for reading.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<File> {
    debug!("opening {} for reading", path.as_ref().display());
    Ok(File::open(path)?)
}

/// Create a file for writing, truncating any existing content.
pub fn open_output<P: AsRef<Path>>(path: P) -> Result<File> {
    debug!("opening {} for writing", path.as_ref().display());
    Ok(File::create(path)?)
}

/// Move one chunk of bytes from `input` to `output` through `buffer`.
///
/// Fills the buffer from `input`, looping over short reads, until it is
/// full or the stream ends, then writes exactly the filled prefix
/// (possibly zero bytes) to `output`. Returns the number of bytes
/// moved; a count shorter than `buffer.len()` tells the caller the
/// input is exhausted.
pub fn copy_chunk<R, W>(input: &mut R, output: &mut W, buffer: &mut [u8]) -> Result<usize>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut filled = 0;
    while filled < buffer.len() {
        match input.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    output.write_all(&buffer[..filled])?;
    Ok(filled)
}
