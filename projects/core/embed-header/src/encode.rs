//! Mapping between raw bytes and the hex literals written into headers.

use crate::error::{EmbedError, EmbedResult};
use alloc::{string::ToString, vec::Vec};
use core::{fmt, iter, str::FromStr};

/// Terminator appended after the last real byte of every embedded array.
pub const SENTINEL: HexToken = HexToken(0x00);

/// A single byte as it appears in the array initializer, e.g. `0x4a`.
///
/// [`Display`](fmt::Display) always renders two lowercase hex digits.
/// [`FromStr`] is more lenient and accepts one or two digits in either case,
/// so hand-edited headers can still be read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexToken(pub u8);

impl HexToken {
    /// Returns the byte this token stands for.
    pub fn byte(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

impl From<u8> for HexToken {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl FromStr for HexToken {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EmbedError::InvalidToken(s.to_string());
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(invalid)?;

        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(invalid());
        }

        u8::from_str_radix(digits, 16)
            .map(HexToken)
            .map_err(|_| invalid())
    }
}

/// Iterates the tokens for `bytes`, optionally followed by [`SENTINEL`].
pub fn tokens(bytes: &[u8], with_sentinel: bool) -> impl Iterator<Item = HexToken> + Clone + '_ {
    bytes
        .iter()
        .copied()
        .map(HexToken)
        .chain(iter::once(SENTINEL).filter(move |_| with_sentinel))
}

/// Encodes `bytes` into header tokens, with exactly one [`SENTINEL`] appended.
///
/// The result always holds `bytes.len() + 1` tokens, so it is never empty.
pub fn encode_tokens(bytes: &[u8]) -> Vec<HexToken> {
    let mut result = Vec::with_capacity(bytes.len() + 1);
    result.extend(tokens(bytes, true));
    result
}

/// Parses a list of tokens separated by commas and/or whitespace back into bytes.
///
/// Any sentinel present in `text` is kept; see [`crate::header::extract_array_bytes`]
/// for reading a whole generated header.
///
/// # Errors
///
/// Returns [`EmbedError::InvalidToken`] for the first entry that is not a byte literal.
pub fn decode_tokens(text: &str) -> EmbedResult<Vec<u8>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<HexToken>().map(HexToken::byte))
        .collect()
}
