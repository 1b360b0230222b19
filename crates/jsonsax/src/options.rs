/// Nesting limit applied when no other is configured.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the [`Reader`](crate::Reader).
///
/// # Examples
///
/// ```rust
/// use jsonsax::{Reader, ReaderOptions, Status};
///
/// let options = ReaderOptions {
///     max_depth: Some(2),
///     ..Default::default()
/// };
/// let mut reader = Reader::with_options("[[[]]]".chars(), (), options);
/// assert_eq!(reader.read_value(), Ok(Status::Failed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Maximum nesting of objects and arrays.
    ///
    /// The reader recurses once per nesting level, so without a bound an
    /// adversarial document such as `[[[[...` grows the call stack without
    /// limit. Opening a container beyond this depth fails with
    /// [`SyntaxError::NestingTooDeep`](crate::SyntaxError::NestingTooDeep).
    /// `None` removes the bound.
    ///
    /// # Default
    ///
    /// `Some(DEFAULT_MAX_DEPTH)`
    pub max_depth: Option<usize>,

    /// Whether to allow any Unicode whitespace between tokens.
    ///
    /// By default, the reader only recognizes the four whitespace characters
    /// defined by RFC 8259: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            allow_unicode_whitespace: false,
        }
    }
}

impl ReaderOptions {
    pub(crate) fn is_whitespace(&self, c: char) -> bool {
        matches!(c, ' ' | '\t' | '\r' | '\n') || (self.allow_unicode_whitespace && c.is_whitespace())
    }
}
