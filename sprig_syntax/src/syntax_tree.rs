//! Contains all the definition of syntax trees for the Sprig language and their parsing logic.
//!
//! The tree is strictly single-owner: every node owns its children and its text, so dropping the
//! [`program::Program`] releases the whole tree.

use sprig_lexical::token::PunctuationKind;

use crate::{error::Error, parser::Parser};

pub mod declaration;
pub mod expression;
pub mod program;
pub mod statement;

/// Is an enumeration of the tags of every kind of node in the syntax tree.
///
/// `if` and `while` share the [`statement::Conditional`] node but carry distinct tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum_macros::Display,
)]
#[allow(missing_docs)]
pub enum NodeKind {
    Program,
    FunctionDefinition,
    VariableDefinition,
    ArrayDefinition,
    FunctionCall,
    BinaryOperation,
    UnaryOperation,
    IntegerLiteral,
    StringLiteral,
    VariableReference,
    If,
    While,
    Compound,
    Return,
}

/// Represents a node of the syntax tree.
pub trait SyntaxNode {
    /// Gets the tag of the node.
    fn kind(&self) -> NodeKind;

    /// Gets the line the node starts on (starts at 1).
    fn line(&self) -> usize;
}

impl<'a> Parser<'a> {
    /// Parses a list of elements separated by commas, up to and including the `close`
    /// punctuation.
    ///
    /// The opening punctuation must already have been consumed. An empty list is allowed.
    ///
    /// # Errors
    /// - if an element is not followed by either a comma or the `close` punctuation.
    /// - any error returned by the given parser function.
    pub fn parse_enclosed_list<T>(
        &mut self,
        close: PunctuationKind,
        mut f: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let mut elements = Vec::new();

        if !self.is_punctuation(close) {
            loop {
                elements.push(f(self)?);

                if !self.is_punctuation(PunctuationKind::Comma) {
                    break;
                }

                // eat the separator
                self.forward();
            }
        }

        self.parse_punctuation(close)?;

        Ok(elements)
    }
}

#[cfg(test)]
pub(crate) mod tests;
