//! Is a module containing the [`Token`] type and the single-token scanning logic.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::Arc};

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use sprig_base::{
    config::Config,
    source_file::{self, ByteIndex, SourceFile, Span},
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::error::{
    Error, IntegerOutOfRange, LiteralTooLong, UnexpectedCharacter, UnterminatedString,
};

/// Is an enumeration representing keywords in the Sprig programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Func,
    Var,
    If,
    Else,
    While,
    Return,

    /// Only recognised when [`Config::debug_keyword`] is enabled.
    Debug,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Func => "func",
            Self::Var => "var",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Return => "return",
            Self::Debug => "debug",
        }
    }
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an enumeration of every punctuation and operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum PunctuationKind {
    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,
    Comma,
    Assign,
    Equal,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Greater,
    GreaterEqual,
    DoubleGreater,
    Less,
    LessEqual,
    DoubleLess,
    Ampersand,
    Pipe,
    At,
}

impl PunctuationKind {
    /// Gets the source spelling of the symbol.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Assign => "=",
            Self::Equal => "==",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::DoubleGreater => ">>",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::DoubleLess => "<<",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::At => "@",
        }
    }

    /// Gets the upper-case name of the symbol used when dumping tokens.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LeftParenthesis => "LPAREN",
            Self::RightParenthesis => "RPAREN",
            Self::LeftBrace => "LBRACE",
            Self::RightBrace => "RBRACE",
            Self::LeftBracket => "LSQUARE",
            Self::RightBracket => "RSQUARE",
            Self::Semicolon => "SEMICOLON",
            Self::Comma => "COMMA",
            Self::Assign => "ASSIGN",
            Self::Equal => "EQUAL",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GEQUAL",
            Self::DoubleGreater => "DBL_GREATER",
            Self::Less => "LESS",
            Self::LessEqual => "LEQUAL",
            Self::DoubleLess => "DBL_LESS",
            Self::Ampersand => "AMPERSAND",
            Self::Pipe => "PIPE",
            Self::At => "AT",
        }
    }

    /// Maps a symbol that always stands alone to its kind.
    fn single(character: char) -> Option<Self> {
        Some(match character {
            '(' => Self::LeftParenthesis,
            ')' => Self::RightParenthesis,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            '[' => Self::LeftBracket,
            ']' => Self::RightBracket,
            ';' => Self::Semicolon,
            ',' => Self::Comma,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Asterisk,
            '&' => Self::Ampersand,
            '|' => Self::Pipe,
            '@' => Self::At,
            _ => return None,
        })
    }
}

/// Is an enumeration containing all kinds of tokens in the Sprig programming language, together
/// with their payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    Number(i64),
    Identifier(String),
    Keyword(KeywordKind),
    Punctuation(PunctuationKind),
    String(String),

    /// Marks the end of the token stream; always the last token.
    Eof,
}

impl TokenKind {
    /// Checks if the token is the given punctuation.
    #[must_use]
    pub fn is_punctuation_kind(&self, expected: PunctuationKind) -> bool {
        matches!(self, Self::Punctuation(punctuation) if *punctuation == expected)
    }

    /// Checks if the token is the given keyword.
    #[must_use]
    pub fn is_keyword_kind(&self, expected: KeywordKind) -> bool {
        matches!(self, Self::Keyword(keyword) if *keyword == expected)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "NUMBER({value})"),
            Self::Identifier(name) => write!(f, "IDENT({name})"),
            Self::Keyword(keyword) => write!(f, "KEYWORD({keyword})"),
            Self::Punctuation(punctuation) => f.write_str(punctuation.name()),
            Self::String(value) => write!(f, "STRING(\"{value}\")"),
            Self::Eof => f.write_str("EOF"),
        }
    }
}

/// Represents a single classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Token {
    /// Gets the kind of the token along with its payload.
    #[get = "pub"]
    kind: TokenKind,

    /// Gets the line the token starts on (starts at 1).
    #[get_copy = "pub"]
    line: usize,

    /// Gets the span of the source code that makes up the token.
    #[get = "pub"]
    span: Span,
}

impl Token {
    /// Dissolves the [`Token`] into its kind, dropping the position information.
    #[must_use]
    pub fn into_kind(self) -> TokenKind { self.kind }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.line, self.kind)
    }
}

/// Holds the state of one scanning pass over a source file. Each pass starts at line 1.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    iter: source_file::Iterator<'a>,
    line: usize,
    config: Config,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of the source file.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>, config: Config) -> Self {
        Self {
            iter: source_file.iter(),
            line: 1,
            config,
        }
    }

    /// Gets the line the scanner is currently on (starts at 1).
    #[must_use]
    pub fn line(&self) -> usize { self.line }

    /// Increments the iterator until the predicate returns false.
    fn walk_iter(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = self.iter.peek() {
            if !predicate(character) {
                break;
            }

            self.iter.next();
        }
    }

    /// Consumes the next character if it is `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if matches!(self.iter.peek(), Some((_, character)) if character == expected) {
            self.iter.next();
            true
        } else {
            false
        }
    }

    fn make_token(&mut self, kind: TokenKind, start: ByteIndex) -> Token {
        Token {
            kind,
            line: self.line,
            span: self.iter.span_from(start),
        }
    }

    fn check_literal_length(&self, span: &Span) -> Result<(), Error> {
        if self.config.exceeds_literal_length(span.str().len()) {
            return Err(LiteralTooLong {
                span: span.clone(),
                line: self.line,
                limit: self.config.max_literal_length.unwrap_or_default(),
            }
            .into());
        }

        Ok(())
    }
}

impl Token {
    /// Checks if the given character is a valid first character of an identifier.
    fn is_first_identifier_character(character: char) -> bool {
        character == '_' || character.is_ascii_alphabetic()
    }

    /// Checks if the given character is a valid character of an identifier.
    fn is_identifier_character(character: char) -> bool {
        character == '_' || character.is_ascii_alphanumeric()
    }

    fn handle_numeric_literal(scanner: &mut Scanner, start: ByteIndex) -> Result<Self, Error> {
        scanner.walk_iter(|character| character.is_ascii_digit());

        let span = scanner.iter.span_from(start);
        scanner.check_literal_length(&span)?;

        let Ok(value) = span.str().parse::<i64>() else {
            return Err(IntegerOutOfRange {
                span,
                line: scanner.line,
            }
            .into());
        };

        Ok(scanner.make_token(TokenKind::Number(value), start))
    }

    fn handle_identifier_and_keyword(
        scanner: &mut Scanner,
        start: ByteIndex,
    ) -> Result<Self, Error> {
        scanner.walk_iter(Self::is_identifier_character);

        let span = scanner.iter.span_from(start);
        scanner.check_literal_length(&span)?;

        // the whole word is captured first, then relabeled if it is a keyword
        let kind = match KeywordKind::from_str(span.str()) {
            Ok(KeywordKind::Debug) if !scanner.config.debug_keyword => {
                TokenKind::Identifier(span.str().to_owned())
            }
            Ok(keyword) => TokenKind::Keyword(keyword),
            Err(KeywordParseError) => TokenKind::Identifier(span.str().to_owned()),
        };

        Ok(scanner.make_token(kind, start))
    }

    fn handle_string_literal(scanner: &mut Scanner, start: ByteIndex) -> Result<Self, Error> {
        let content_start = scanner.iter.position();

        loop {
            match scanner.iter.peek() {
                Some((_, '"')) => break,
                Some((_, '\n')) | None => {
                    return Err(UnterminatedString {
                        span: scanner.iter.span_from(start),
                        line: scanner.line,
                    }
                    .into());
                }
                Some(_) => {
                    scanner.iter.next();
                }
            }
        }

        let content_end = scanner.iter.position();

        // eat the closing quote
        scanner.iter.next();

        let span = scanner.iter.span_from(start);
        scanner.check_literal_length(&span)?;

        let content = scanner.iter.source_file().content()[content_start..content_end].to_owned();

        Ok(scanner.make_token(TokenKind::String(content), start))
    }

    fn handle_punctuation(scanner: &mut Scanner, start: ByteIndex, character: char) -> Option<Self> {
        let punctuation = match character {
            '=' if scanner.eat('=') => PunctuationKind::Equal,
            '=' => PunctuationKind::Assign,
            '>' if scanner.eat('=') => PunctuationKind::GreaterEqual,
            '>' if scanner.eat('>') => PunctuationKind::DoubleGreater,
            '>' => PunctuationKind::Greater,
            '<' if scanner.eat('=') => PunctuationKind::LessEqual,
            '<' if scanner.eat('<') => PunctuationKind::DoubleLess,
            '<' => PunctuationKind::Less,
            '/' => PunctuationKind::Slash,
            character => PunctuationKind::single(character)?,
        };

        Some(scanner.make_token(TokenKind::Punctuation(punctuation), start))
    }

    /// Lexes the next token from the given scanner.
    ///
    /// Whitespace and line comments before the token are skipped. Once the input is exhausted
    /// every call returns a [`TokenKind::Eof`] token.
    ///
    /// # Errors
    /// - [`Error::UnexpectedCharacter`]: a character that starts no token.
    /// - [`Error::UnterminatedString`]: a string literal runs into a newline or the end of input.
    /// - [`Error::IntegerOutOfRange`]: a number literal does not fit a signed 64-bit integer.
    /// - [`Error::LiteralTooLong`]: a literal exceeds [`Config::max_literal_length`].
    pub fn lex(scanner: &mut Scanner) -> Result<Self, Error> {
        loop {
            let Some((start, character)) = scanner.iter.next() else {
                let end = scanner.iter.position();
                return Ok(scanner.make_token(TokenKind::Eof, end));
            };

            match character {
                '\n' => scanner.line += 1,
                ' ' | '\r' | '\t' => (),

                character if character.is_ascii_digit() => {
                    return Self::handle_numeric_literal(scanner, start);
                }

                character if Self::is_first_identifier_character(character) => {
                    return Self::handle_identifier_and_keyword(scanner, start);
                }

                // line comment, the newline itself is left for the line counter
                '/' if scanner.eat('/') => scanner.walk_iter(|character| character != '\n'),

                '"' => return Self::handle_string_literal(scanner, start),

                character => {
                    return Self::handle_punctuation(scanner, start, character).ok_or_else(|| {
                        UnexpectedCharacter {
                            character,
                            span: scanner.iter.span_from(start),
                            line: scanner.line,
                        }
                        .into()
                    });
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests;
