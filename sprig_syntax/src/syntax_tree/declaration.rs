//! Contains the syntax trees related to function definitions and their parsing logic.

use getset::{CopyGetters, Getters};
use sprig_lexical::token::{KeywordKind, PunctuationKind};

use super::{statement::Compound, NodeKind, SyntaxNode};
use crate::{error::Error, parser::Parser};

/// Syntax Synopsis:
///
/// ``` ebnf
/// FunctionDefinition:
///     'func' Identifier '(' (Identifier (',' Identifier)*)? ')' Compound
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct FunctionDefinition {
    /// Gets the line of the `func` keyword.
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    name: String,
    #[get = "pub"]
    parameters: Vec<String>,
    #[get = "pub"]
    body: Compound,
}

impl FunctionDefinition {
    /// Dissolves the [`FunctionDefinition`] into its name, parameters and body.
    #[must_use]
    pub fn dissolve(self) -> (String, Vec<String>, Compound) {
        (self.name, self.parameters, self.body)
    }
}

impl SyntaxNode for FunctionDefinition {
    fn kind(&self) -> NodeKind { NodeKind::FunctionDefinition }

    fn line(&self) -> usize { self.line }
}

impl<'a> Parser<'a> {
    /// Parses a [`FunctionDefinition`].
    ///
    /// # Errors
    /// Returns the first syntax error found in the signature or the body.
    pub fn parse_function_definition(&mut self) -> Result<FunctionDefinition, Error> {
        let line = self.parse_keyword(KeywordKind::Func)?.line();
        let name = self.parse_identifier()?;

        self.parse_punctuation(PunctuationKind::LeftParenthesis)?;
        let parameters =
            self.parse_enclosed_list(PunctuationKind::RightParenthesis, Self::parse_identifier)?;

        let body = self.parse_compound()?;

        Ok(FunctionDefinition {
            line,
            name,
            parameters,
            body,
        })
    }
}
