//! Contains the [`Parser`] logic.

use sprig_base::config::Config;
use sprig_lexical::{
    token::{KeywordKind, PunctuationKind, Token, TokenKind},
    token_stream::TokenStream,
};

use crate::error::{Error, NestingTooDeep, SyntaxKind, UnexpectedSyntax};

/// The parser of the front end.
///
/// The only mutable state is the cursor into the token stream and the current nesting depth. The
/// cursor never moves past the end-of-input token.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    token_stream: &'a TokenStream,
    current_index: usize,
    depth: usize,
    config: Config,
}

impl<'a> Parser<'a> {
    /// Creates a new parser positioned at the first token of the given token stream.
    #[must_use]
    pub fn new(token_stream: &'a TokenStream, config: &Config) -> Self {
        Self {
            token_stream,
            current_index: 0,
            depth: 0,
            config: *config,
        }
    }

    /// Returns the [`Token`] pointed to by the cursor.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        self.token_stream
            .get(self.current_index)
            .unwrap_or_else(|| self.token_stream.eof())
    }

    /// Returns the kind of the [`Token`] pointed to by the cursor.
    #[must_use]
    pub fn peek_kind(&self) -> &'a TokenKind { self.peek().kind() }

    /// Checks if the cursor has reached the end-of-input token.
    #[must_use]
    pub fn is_exhausted(&self) -> bool { matches!(self.peek_kind(), TokenKind::Eof) }

    /// Checks if the current token is the given punctuation.
    #[must_use]
    pub fn is_punctuation(&self, expected: PunctuationKind) -> bool {
        self.peek_kind().is_punctuation_kind(expected)
    }

    /// Checks if the current token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, expected: KeywordKind) -> bool {
        self.peek_kind().is_keyword_kind(expected)
    }

    /// Forwards the cursor by 1 unless it is already at the end-of-input token.
    pub fn forward(&mut self) {
        if !self.is_exhausted() {
            self.current_index += 1;
        }
    }

    /// Returns the [`Token`] pointed to by the cursor and forwards the cursor afterward.
    pub fn next_token(&mut self) -> &'a Token {
        let token = self.peek();

        self.forward();

        token
    }

    /// Creates an [`UnexpectedSyntax`] error for the current token.
    #[must_use]
    pub fn unexpected(&self, expected: SyntaxKind) -> Error {
        Error::UnexpectedSyntax(UnexpectedSyntax {
            expected,
            found: self.peek().clone(),
        })
    }

    /// Expects the current token to be an identifier, and returns a copy of its text.
    ///
    /// # Errors
    /// [`Error::UnexpectedSyntax`]: if the current token is not an identifier.
    pub fn parse_identifier(&mut self) -> Result<String, Error> {
        match self.peek_kind() {
            TokenKind::Identifier(name) => {
                self.forward();
                Ok(name.clone())
            }
            _ => Err(self.unexpected(SyntaxKind::Identifier)),
        }
    }

    /// Expects the current token to be a keyword of specific kind, and returns it.
    ///
    /// # Errors
    /// [`Error::UnexpectedSyntax`]: if the current token is not the expected keyword.
    pub fn parse_keyword(&mut self, expected: KeywordKind) -> Result<&'a Token, Error> {
        if self.is_keyword(expected) {
            Ok(self.next_token())
        } else {
            Err(self.unexpected(SyntaxKind::Keyword(expected)))
        }
    }

    /// Expects the current token to be a punctuation of specific kind, and returns it.
    ///
    /// # Errors
    /// [`Error::UnexpectedSyntax`]: if the current token is not the expected punctuation.
    pub fn parse_punctuation(&mut self, expected: PunctuationKind) -> Result<&'a Token, Error> {
        if self.is_punctuation(expected) {
            Ok(self.next_token())
        } else {
            Err(self.unexpected(SyntaxKind::Punctuation(expected)))
        }
    }

    /// Runs `f` one nesting level deeper.
    ///
    /// # Errors
    /// - [`Error::NestingTooDeep`]: if the new depth exceeds [`Config::max_nesting_depth`].
    /// - any error returned by `f`.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.check_height(1)?;

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        result
    }

    /// Checks that a subtree `height` levels tall, rooted at the current depth, fits within
    /// [`Config::max_nesting_depth`].
    ///
    /// Subtrees built without recursing, such as a chain of left-associative operators, are
    /// measured with this instead of [`Self::nested()`].
    ///
    /// # Errors
    /// [`Error::NestingTooDeep`]: if the subtree reaches past the limit.
    pub fn check_height(&self, height: usize) -> Result<(), Error> {
        if self.config.exceeds_nesting_depth(self.depth + height) {
            return Err(Error::NestingTooDeep(NestingTooDeep {
                limit: self.config.max_nesting_depth.unwrap_or_default(),
                found: self.peek().clone(),
            }));
        }

        Ok(())
    }
}
