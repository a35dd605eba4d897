//! Common test imports and utilities.
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::header::EmbedTarget;
pub use crate::layout::HeaderLayout;

#[cfg(feature = "std")]
pub use tempfile::{tempdir, Builder, NamedTempFile};

/// Target used throughout the tests: `shaders::vertex_src`.
pub fn shaders_target() -> EmbedTarget<'static> {
    EmbedTarget::new("shaders", "vertex_src")
}

/// Creates `len` bytes of test data; every 256 byte window holds each byte value once.
pub fn create_test_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(167) % 256) as u8).collect()
}

/// Counts the tokens between the braces of the first array initializer in `document`.
pub fn count_array_tokens(document: &str) -> usize {
    let start = document.find("[] = {").expect("array declaration") + "[] = {".len();
    let end = start + document[start..].find('}').expect("closing brace");
    document[start..end]
        .split(',')
        .map(str::trim)
        .filter(|token| token.starts_with("0x"))
        .count()
}

/// Helper to create a temporary input file holding `data`.
#[cfg(feature = "std")]
pub fn create_input_file_with_data(data: &[u8]) -> NamedTempFile {
    let input_file = Builder::new()
        .prefix("test_input_")
        .suffix(".bin")
        .tempfile()
        .expect("Failed to create temp file");

    std::fs::write(input_file.path(), data).expect("Failed to write input data");
    input_file
}

/// Helper function to read file contents.
#[cfg(feature = "std")]
pub fn read_file_contents(path: &std::path::Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Sorted names of the entries directly inside `dir`.
#[cfg(feature = "std")]
pub fn directory_entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
