//! Contains the [`Config`] type holding the front-end limits.
//!
//! No input size is capped implicitly: every limit the scanner or the parser enforces is listed
//! here and reported through a dedicated error when exceeded.

/// The nesting depth allowed when no other limit is configured.
///
/// Deeply nested statements and expressions recurse in the parser; the bound keeps hostile
/// input from exhausting the stack.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Represents the configuration shared by the scanner and the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Config {
    /// The maximum length in bytes of an identifier, number, or string literal.
    ///
    /// `None` means unbounded.
    pub max_literal_length: Option<usize>,

    /// The maximum nesting depth of statements and expressions.
    ///
    /// `None` means unbounded.
    pub max_nesting_depth: Option<usize>,

    /// Whether `debug` is recognised as a keyword.
    pub debug_keyword: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_literal_length: None,
            max_nesting_depth: Some(DEFAULT_MAX_NESTING_DEPTH),
            debug_keyword: false,
        }
    }
}

impl Config {
    /// Sets [`Config::max_literal_length`].
    #[must_use]
    pub fn with_max_literal_length(mut self, limit: Option<usize>) -> Self {
        self.max_literal_length = limit;
        self
    }

    /// Sets [`Config::max_nesting_depth`].
    #[must_use]
    pub fn with_max_nesting_depth(mut self, limit: Option<usize>) -> Self {
        self.max_nesting_depth = limit;
        self
    }

    /// Sets [`Config::debug_keyword`].
    #[must_use]
    pub fn with_debug_keyword(mut self, enabled: bool) -> Self {
        self.debug_keyword = enabled;
        self
    }

    /// Checks whether a literal of `length` bytes exceeds [`Config::max_literal_length`].
    #[must_use]
    pub fn exceeds_literal_length(&self, length: usize) -> bool {
        self.max_literal_length.map_or(false, |limit| length > limit)
    }

    /// Checks whether `depth` exceeds [`Config::max_nesting_depth`].
    #[must_use]
    pub fn exceeds_nesting_depth(&self, depth: usize) -> bool {
        self.max_nesting_depth.map_or(false, |limit| depth > limit)
    }
}
