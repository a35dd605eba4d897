//! Builder for the textual layout of generated headers.

/// Number of tokens written on each line of the array initializer.
pub const DEFAULT_TOKENS_PER_LINE: usize = 16;

/// One level of indentation.
pub const DEFAULT_INDENT: &str = "    ";

/// Layout configuration for generated headers.
///
/// Every setting is optional and falls back to the defaults which produce the canonical
/// header format: 16 tokens per line, 4 space indentation and a trailing zero terminator.
/// Regenerating with the same layout is byte-for-byte deterministic.
///
/// ```
/// use embed_header::HeaderLayout;
///
/// let layout = HeaderLayout::new().tokens_per_line(8).indent("\t");
/// assert_eq!(layout.resolved_tokens_per_line(), 8);
/// assert!(layout.resolved_sentinel());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderLayout {
    tokens_per_line: Option<usize>,
    indent: Option<&'static str>,
    sentinel: Option<bool>,
}

impl HeaderLayout {
    /// Create a layout using the default settings.
    pub fn new() -> Self {
        Self {
            tokens_per_line: None,
            indent: None,
            sentinel: None,
        }
    }

    /// Set how many tokens are written per line. A value of `0` is treated as `1`.
    pub fn tokens_per_line(mut self, count: usize) -> Self {
        self.tokens_per_line = Some(count);
        self
    }

    /// Set the string used for one level of indentation.
    ///
    /// The array declaration sits one level deep inside the namespace; token lines sit two
    /// levels deep.
    pub fn indent(mut self, indent: &'static str) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Set whether a zero terminator is appended after the data.
    ///
    /// **Note**: Disabling this also changes `<variable>_len` to `sizeof(<variable>)`, and an
    /// empty input then yields an empty initializer, which C++ rejects for arrays of unknown
    /// bound. Leave this enabled unless the consumer never sees empty inputs.
    pub fn with_sentinel(mut self, enabled: bool) -> Self {
        self.sentinel = Some(enabled);
        self
    }

    /// Tokens per line after applying defaults; never zero.
    pub fn resolved_tokens_per_line(&self) -> usize {
        self.tokens_per_line
            .unwrap_or(DEFAULT_TOKENS_PER_LINE)
            .max(1)
    }

    /// Indentation after applying defaults.
    pub fn resolved_indent(&self) -> &'static str {
        self.indent.unwrap_or(DEFAULT_INDENT)
    }

    /// Whether a terminator is emitted, after applying defaults.
    pub fn resolved_sentinel(&self) -> bool {
        self.sentinel.unwrap_or(true)
    }
}
