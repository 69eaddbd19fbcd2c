//! Contains the [`TokenStream`] struct.

use std::sync::Arc;

use derive_more::Deref;
use sprig_base::{config::Config, source_file::SourceFile};

use crate::{
    error::Error,
    token::{Scanner, Token, TokenKind},
};

/// Is a flat list of [`Token`]s that always ends with exactly one [`TokenKind::Eof`] token.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// This function calls [`Token::lex()`] repeatedly until it produces the end-of-input token.
    /// Scanning stops at the first lexical error.
    ///
    /// # Errors
    /// Returns the first [`Error`] encountered while scanning.
    pub fn tokenize(source_file: &Arc<SourceFile>, config: &Config) -> Result<Self, Error> {
        let mut tokens = Vec::new();
        let mut scanner = Scanner::new(source_file, *config);

        loop {
            let token = Token::lex(&mut scanner)?;
            let is_eof = matches!(token.kind(), TokenKind::Eof);

            tokens.push(token);

            if is_eof {
                break;
            }
        }

        Ok(Self { tokens })
    }

    /// Gets the end-of-input token.
    #[must_use]
    pub fn eof(&self) -> &Token {
        // the stream is never empty, `tokenize` always pushes the end-of-input token
        &self.tokens[self.tokens.len() - 1]
    }

    /// Dissolves this struct into its list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}
