//! Failures specific to memory mapped input.

use lightweight_mmap::{handles::HandleOpenError, mmap::MmapError};
use thiserror::Error;

/// Why an input file could not be viewed through a memory map.
///
/// Plain I/O failures such as a missing file are reported before mapping is attempted,
/// so these only cover the mapping backend itself.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The input could not be opened, or its size queried, for mapping.
    #[error("could not open input for mapping: {0}")]
    Open(#[from] HandleOpenError),

    #[error("could not map input into memory: {0}")]
    Map(#[from] MmapError),
}
