//! High level entry points.

use crate::header::{render_header, EmbedTarget};
use crate::layout::HeaderLayout;
use alloc::string::String;

#[cfg(feature = "file-io")]
use crate::{error::EmbedResult, file_io};
#[cfg(feature = "file-io")]
use log::debug;
#[cfg(feature = "file-io")]
use std::path::Path;

/// Summary of a completed [`embed_file`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedReport {
    /// Number of bytes read from the input; the value of `<variable>_len`.
    pub input_len: usize,
    /// Number of entries in the emitted array, including the terminator.
    pub token_count: usize,
    /// Size of the written header, in bytes.
    pub output_len: usize,
}

/// Renders the header for an in-memory buffer.
///
/// Equivalent to [`render_header`]; provided for symmetry with [`embed_file`] so `build.rs`
/// scripts that already hold the bytes can skip the file system.
pub fn embed_slice(bytes: &[u8], target: &EmbedTarget<'_>, layout: &HeaderLayout) -> String {
    render_header(bytes, target, layout)
}

/// Reads `input`, renders it as a header and writes the result to `output`.
///
/// Parent directories of `output` are created as needed and an existing file is replaced.
/// Nothing is written if the input cannot be read.
///
/// # Arguments
///
/// * `input` - Path to the file whose bytes are embedded
/// * `output` - Path to the header to produce
/// * `target` - Namespace and variable names, used verbatim
/// * `layout` - Layout of the generated text; [`HeaderLayout::new`] for the canonical format
///
/// # Returns
///
/// An [`EmbedReport`] on success. Read failures satisfy [`crate::EmbedError::is_read`],
/// write failures satisfy [`crate::EmbedError::is_write`].
///
/// # Example
///
/// ```no_run
/// use embed_header::{embed_file, EmbedResult, EmbedTarget, HeaderLayout};
/// use std::path::Path;
///
/// fn embed_vertex_shader() -> EmbedResult<()> {
///     let report = embed_file(
///         Path::new("shaders/vertex.wgsl"),
///         Path::new("generated/vertex.h"),
///         &EmbedTarget::new("shaders", "vertex_src"),
///         &HeaderLayout::new(),
///     )?;
///     assert_eq!(report.token_count, report.input_len + 1);
///     Ok(())
/// }
/// ```
#[cfg(feature = "file-io")]
pub fn embed_file(
    input: &Path,
    output: &Path,
    target: &EmbedTarget<'_>,
    layout: &HeaderLayout,
) -> EmbedResult<EmbedReport> {
    let (document, input_len) = file_io::with_input_bytes(input, |bytes| {
        (render_header(bytes, target, layout), bytes.len())
    })?;
    debug!(
        "Rendered {} bytes of header text for {input_len} input bytes",
        document.len()
    );

    file_io::write_output(output, document.as_bytes())?;

    Ok(EmbedReport {
        input_len,
        token_count: input_len + usize::from(layout.resolved_sentinel()),
        output_len: document.len(),
    })
}
