//! Loading of input files.

use super::MappingError;
use crate::error::{EmbedError, EmbedResult};
use alloc::vec::Vec;
use lightweight_mmap::handles::ReadOnlyFileHandle;
use lightweight_mmap::mmap::ReadOnlyMmap;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Runs `f` over the full contents of the file at `path`.
///
/// Non-empty regular files are memory mapped for the duration of the call. Empty files are
/// handed over as an empty slice without creating a mapping, and anything that is not a
/// regular file (pipes, character devices) is read into memory instead.
///
/// # Arguments
///
/// * `path` - Path to the input file
/// * `f` - Consumer of the file contents
///
/// # Returns
///
/// The value returned by `f`, or an error for which [`EmbedError::is_read`] holds.
pub fn with_input_bytes<R>(path: &Path, f: impl FnOnce(&[u8]) -> R) -> EmbedResult<R> {
    let read_error = |source: io::Error| EmbedError::ReadInput {
        path: path.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(path).map_err(read_error)?;

    if !metadata.is_file() {
        debug!("{} is not a regular file, reading it into memory", path.display());
        let data = fs::read(path).map_err(read_error)?;
        return Ok(f(&data));
    }

    let map_error = |source: MappingError| EmbedError::MapInput {
        path: path.to_path_buf(),
        source,
    };
    let handle = ReadOnlyFileHandle::open(path).map_err(|e| map_error(e.into()))?;
    let size = handle.size().map_err(|e| map_error(e.into()))? as usize;

    // Zero length mappings are rejected by the OS.
    if size == 0 {
        debug!("{} is empty", path.display());
        return Ok(f(&[]));
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size).map_err(|e| map_error(e.into()))?;
    debug!("Mapped {size} bytes from {}", path.display());
    Ok(f(mapping.as_slice()))
}

/// Reads the full contents of the file at `path` into an owned buffer.
///
/// Prefer [`with_input_bytes`] when the contents only need to be borrowed.
pub fn read_input(path: &Path) -> EmbedResult<Vec<u8>> {
    with_input_bytes(path, <[u8]>::to_vec)
}
