//! Rendering of the complete header document.

use crate::encode::{decode_tokens, tokens, SENTINEL};
use crate::error::{EmbedError, EmbedResult};
use crate::format::{line_count, write_token_block};
use crate::layout::HeaderLayout;
use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

/// Approximate fixed overhead of the document around the array body, in bytes.
const PREAMBLE_ESTIMATE: usize = 160;

/// Bytes per token in the array body: `0xNN` plus `", "`.
const BYTES_PER_TOKEN: usize = 6;

/// Names under which the embedded data is declared.
///
/// Both identifiers are written verbatim; see [`crate::identifier`] for validation and for
/// deriving names from asset paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedTarget<'a> {
    /// Namespace wrapping the declarations, e.g. `shaders` or `assets::fonts`.
    pub namespace: &'a str,
    /// Name of the byte array. The length constant is named `<variable>_len`.
    pub variable: &'a str,
}

impl<'a> EmbedTarget<'a> {
    pub fn new(namespace: &'a str, variable: &'a str) -> Self {
        Self {
            namespace,
            variable,
        }
    }
}

/// Writes the header for `bytes` into `out`.
///
/// This is the streaming form of [`render_header`].
pub fn write_header<W: Write>(
    out: &mut W,
    bytes: &[u8],
    target: &EmbedTarget<'_>,
    layout: &HeaderLayout,
) -> fmt::Result {
    let indent = layout.resolved_indent();
    let sentinel = layout.resolved_sentinel();
    let variable = target.variable;
    let tokens: Vec<_> = tokens(bytes, sentinel).collect();

    out.write_str("#pragma once\n")?;
    out.write_str("#include <cstddef>\n")?;
    out.write_char('\n')?;
    writeln!(out, "namespace {} {{", target.namespace)?;
    writeln!(out, "{indent}constexpr unsigned char {variable}[] = {{")?;
    write_token_block(out, &tokens, layout)?;
    writeln!(out, "{indent}}};")?;
    out.write_char('\n')?;
    if sentinel {
        writeln!(
            out,
            "{indent}constexpr size_t {variable}_len = sizeof({variable}) - 1;"
        )?;
    } else {
        writeln!(
            out,
            "{indent}constexpr size_t {variable}_len = sizeof({variable});"
        )?;
    }
    out.write_str("}\n")
}

/// Renders the header for `bytes` as a string.
///
/// The output is fully determined by the arguments, so regenerating from the same input
/// produces an identical document.
pub fn render_header(bytes: &[u8], target: &EmbedTarget<'_>, layout: &HeaderLayout) -> String {
    let token_count = bytes.len() + usize::from(layout.resolved_sentinel());
    let indent_len = layout.resolved_indent().len() * 2;
    let mut out = String::with_capacity(
        PREAMBLE_ESTIMATE
            + target.namespace.len()
            + target.variable.len() * 4
            + token_count * BYTES_PER_TOKEN
            + line_count(token_count, layout) * indent_len,
    );

    // Writing into a String cannot fail.
    let _ = write_header(&mut out, bytes, target, layout);
    out
}

/// Reads the embedded bytes back out of a generated header.
///
/// The array initializer is located as the first `{ ... }` following `[] =`; its tokens are
/// decoded and the trailing terminator is removed.
///
/// # Errors
///
/// - [`EmbedError::MalformedHeader`] if no initializer is present or it does not end with
///   the zero terminator.
/// - [`EmbedError::InvalidToken`] if the initializer holds something other than byte literals.
pub fn extract_array_bytes(document: &str) -> EmbedResult<Vec<u8>> {
    let declaration = document
        .find("[] =")
        .ok_or(EmbedError::MalformedHeader("missing array declaration"))?;
    let rest = &document[declaration..];
    let open = rest
        .find('{')
        .ok_or(EmbedError::MalformedHeader("missing array initializer"))?;
    let close = rest[open..]
        .find('}')
        .ok_or(EmbedError::MalformedHeader("unterminated array initializer"))?;

    let mut bytes = decode_tokens(&rest[open + 1..open + close])?;
    match bytes.pop() {
        Some(last) if last == SENTINEL.byte() => Ok(bytes),
        _ => Err(EmbedError::MalformedHeader("missing zero terminator")),
    }
}
