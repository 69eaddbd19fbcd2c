//! Contains the root of the syntax tree.

use getset::Getters;
use sprig_lexical::token::KeywordKind;

use super::{declaration::FunctionDefinition, NodeKind, SyntaxNode};
use crate::{
    error::{Error, SyntaxKind},
    parser::Parser,
};

/// Syntax Synopsis:
///
/// ``` ebnf
/// Program:
///     FunctionDefinition* EOF
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Program {
    #[get = "pub"]
    functions: Vec<FunctionDefinition>,
}

impl Program {
    /// Dissolves the [`Program`] into a list of [`FunctionDefinition`]s.
    #[must_use]
    pub fn dissolve(self) -> Vec<FunctionDefinition> { self.functions }
}

impl SyntaxNode for Program {
    fn kind(&self) -> NodeKind { NodeKind::Program }

    fn line(&self) -> usize { self.functions.first().map_or(1, SyntaxNode::line) }
}

impl<'a> Parser<'a> {
    /// Parses a [`Program`], consuming the whole token stream.
    ///
    /// # Errors
    /// - any error found in a function definition.
    /// - [`Error::UnexpectedSyntax`]: if a token other than `func` follows the function
    ///   definitions.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut functions = Vec::new();

        while self.is_keyword(KeywordKind::Func) {
            functions.push(self.parse_function_definition()?);
        }

        if !self.is_exhausted() {
            return Err(self.unexpected(SyntaxKind::Keyword(KeywordKind::Func)));
        }

        Ok(Program { functions })
    }
}
