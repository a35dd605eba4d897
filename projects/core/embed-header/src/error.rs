//! Error types for header generation.

use alloc::string::String;
use thiserror::Error;

#[cfg(feature = "std")]
use std::{io, path::PathBuf};

/// Errors that can occur while embedding a file, or while reading a generated header back.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The input file could not be opened or read.
    #[cfg(feature = "std")]
    #[error("Error reading input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file was opened but could not be memory mapped.
    #[cfg(feature = "file-io")]
    #[error("Error reading input file {}: {source}", .path.display())]
    MapInput {
        path: PathBuf,
        #[source]
        source: crate::file_io::MappingError,
    },

    /// The directory that should hold the output file could not be created.
    #[cfg(feature = "std")]
    #[error("Error creating output directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written or moved into place.
    #[cfg(feature = "std")]
    #[error("Error writing output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A token in a generated header was not a `0x`-prefixed byte literal.
    #[error("Invalid hex token: {0:?}")]
    InvalidToken(String),

    /// A generated header did not have the expected shape.
    #[error("Malformed header: {0}")]
    MalformedHeader(&'static str),
}

impl EmbedError {
    /// Whether this error happened while loading the input file.
    pub fn is_read(&self) -> bool {
        match self {
            #[cfg(feature = "std")]
            Self::ReadInput { .. } => true,
            #[cfg(feature = "file-io")]
            Self::MapInput { .. } => true,
            _ => false,
        }
    }

    /// Whether this error happened while producing the output file.
    pub fn is_write(&self) -> bool {
        match self {
            #[cfg(feature = "std")]
            Self::CreateDirectory { .. } | Self::WriteOutput { .. } => true,
            _ => false,
        }
    }
}

/// Result type for embedding operations.
pub type EmbedResult<T> = Result<T, EmbedError>;
