//! Contains all kinds of lexical errors that can occur while scanning the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use sprig_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};
use thiserror::Error;

/// The source code contains a character that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnexpectedCharacter {
    /// The offending character.
    pub character: char,

    /// The span of the offending character.
    pub span: Span,

    /// The line the character is on.
    pub line: usize,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!(
                    "unexpected character `{}` while tokenizing on line {}",
                    self.character.escape_debug(),
                    self.line
                )
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// A string literal is not closed before the end of its line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnterminatedString {
    /// The span from the opening quote to where scanning stopped.
    pub span: Span,

    /// The line the string starts on.
    pub line: usize,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("unterminated string literal on line {}", self.line)
            ),
            SourceCodeDisplay::new(
                &self.span,
                Some("string literals must be closed with `\"` on the same line")
            )
        )
    }
}

/// A number literal does not fit in a signed 64-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegerOutOfRange {
    /// The span of the number literal.
    pub span: Span,

    /// The line the number is on.
    pub line: usize,
}

impl Display for IntegerOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("integer literal out of range on line {}", self.line)
            ),
            SourceCodeDisplay::new(
                &self.span,
                Some(format!("the largest allowed value is {}", i64::MAX))
            )
        )
    }
}

/// A literal is longer than the configured maximum length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralTooLong {
    /// The span of the literal.
    pub span: Span,

    /// The line the literal is on.
    pub line: usize,

    /// The configured maximum length in bytes.
    pub limit: usize,
}

impl Display for LiteralTooLong {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!(
                    "literal of {} bytes exceeds the limit of {} on line {}",
                    self.span.str().len(),
                    self.limit,
                    self.line
                )
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner, From, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{0}")]
    UnexpectedCharacter(UnexpectedCharacter),

    #[error("{0}")]
    UnterminatedString(UnterminatedString),

    #[error("{0}")]
    IntegerOutOfRange(IntegerOutOfRange),

    #[error("{0}")]
    LiteralTooLong(LiteralTooLong),
}

impl Error {
    /// Gets the line the error occurred on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter(err) => err.line,
            Self::UnterminatedString(err) => err.line,
            Self::IntegerOutOfRange(err) => err.line,
            Self::LiteralTooLong(err) => err.line,
        }
    }

    /// Gets the span of the source code that caused the error.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnexpectedCharacter(err) => &err.span,
            Self::UnterminatedString(err) => &err.span,
            Self::IntegerOutOfRange(err) => &err.span,
            Self::LiteralTooLong(err) => &err.span,
        }
    }
}
