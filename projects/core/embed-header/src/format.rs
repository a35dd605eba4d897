//! Layout of tokens inside the array initializer.

use crate::encode::HexToken;
use crate::layout::HeaderLayout;
use core::fmt::{self, Write};

/// Writes `tokens` as the body of an array initializer.
///
/// Tokens are grouped into lines of [`HeaderLayout::resolved_tokens_per_line`], each indented
/// two levels (namespace, then array) and terminated by a newline. Every line ends in a comma
/// except the last, so the final token before the closing brace has no trailing comma.
///
/// Nothing is written when `tokens` is empty.
pub fn write_token_block<W: Write>(
    out: &mut W,
    tokens: &[HexToken],
    layout: &HeaderLayout,
) -> fmt::Result {
    let indent = layout.resolved_indent();
    let lines = tokens.chunks(layout.resolved_tokens_per_line());
    let line_count = lines.len();

    for (line_index, line) in lines.enumerate() {
        out.write_str(indent)?;
        out.write_str(indent)?;

        for (index, token) in line.iter().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            write!(out, "{token}")?;
        }

        if line_index + 1 < line_count {
            out.write_char(',')?;
        }
        out.write_char('\n')?;
    }

    Ok(())
}

/// Number of lines [`write_token_block`] produces for `token_count` tokens.
pub fn line_count(token_count: usize, layout: &HeaderLayout) -> usize {
    token_count.div_ceil(layout.resolved_tokens_per_line())
}
