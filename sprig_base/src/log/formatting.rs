//! Contains the ANSI escape wrappers used to style log messages.

use std::fmt::Display;

const RESET: &str = "\x1B[0m";

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Styled<T> {
        let code = match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        };

        Styled { code, display }
    }
}

/// Represents a foreground color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> Styled<T> {
        let code = match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        };

        Styled { code, display }
    }
}

/// A displayable object wrapped in an ANSI escape sequence and a reset.
///
/// Wrappers nest: the innermost sequence is written last, and every layer writes its own reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Styled<T> {
    code: &'static str,
    display: T,
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{RESET}", self.code, self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Style};

    #[test]
    fn nested_styles() {
        let text = Style::Bold.with(Color::Red.with("x")).to_string();
        assert_eq!(text, "\x1B[1m\x1B[31mx\x1B[0m\x1B[0m");
    }

    #[test]
    fn underline_wraps_display() {
        assert_eq!(Style::Underline.with(42).to_string(), "\x1B[4m42\x1B[0m");
    }
}
