//! Contains all kinds of syntax errors that can occur while parsing the token stream.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use sprig_base::log::{Message, Severity, SourceCodeDisplay};
use sprig_lexical::token::{KeywordKind, PunctuationKind, Token, TokenKind};
use thiserror::Error;

/// Enumeration containing all kinds of syntax that can be failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum SyntaxKind {
    Punctuation(PunctuationKind),
    Keyword(KeywordKind),
    Identifier,
    Expression,
}

impl Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Punctuation(punctuation) => {
                write!(f, "a punctuation token `{}`", punctuation.as_str())
            }
            Self::Keyword(keyword) => write!(f, "a keyword token `{}`", keyword.as_str()),
            Self::Identifier => f.write_str("an identifier token"),
            Self::Expression => f.write_str("an expression syntax"),
        }
    }
}

fn describe(token: &Token) -> String {
    match token.kind() {
        TokenKind::Number(value) => format!("a numeric token `{value}`"),
        TokenKind::Identifier(name) => format!("an identifier token `{name}`"),
        TokenKind::Keyword(keyword) => format!("a keyword token `{}`", keyword.as_str()),
        TokenKind::Punctuation(punctuation) => {
            format!("a punctuation token `{}`", punctuation.as_str())
        }
        TokenKind::String(..) => "a string token".to_string(),
        TokenKind::Eof => "EOF".to_string(),
    }
}

/// A syntax/token is expected but found an other invalid token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnexpectedSyntax {
    /// The kind of syntax that was expected.
    pub expected: SyntaxKind,

    /// The invalid token that was found.
    pub found: Token,
}

impl Display for UnexpectedSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "expected {}, but found {} on line {}",
            self.expected,
            describe(&self.found),
            self.found.line()
        );

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceCodeDisplay::new(self.found.span(), Option::<i32>::None)
        )
    }
}

/// Statements or expressions are nested deeper than the configured limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NestingTooDeep {
    /// The configured maximum nesting depth.
    pub limit: usize,

    /// The token at which the limit was exceeded.
    pub found: Token,
}

impl Display for NestingTooDeep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "nesting exceeds the maximum depth of {} on line {}",
            self.limit,
            self.found.line()
        );

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceCodeDisplay::new(
                self.found.span(),
                Some("consider splitting this into a separate function")
            )
        )
    }
}

/// Is an enumeration containing all kinds of syntactic errors that can occur while parsing the
/// token stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner, From, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{0}")]
    UnexpectedSyntax(UnexpectedSyntax),

    #[error("{0}")]
    NestingTooDeep(NestingTooDeep),
}

impl Error {
    /// Gets the line of the token that caused the error.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedSyntax(error) => error.found.line(),
            Self::NestingTooDeep(error) => error.found.line(),
        }
    }
}
