//! Contains the syntax trees related to statements and their parsing logic.

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use sprig_lexical::token::{KeywordKind, PunctuationKind, TokenKind};

use super::{expression::Expression, NodeKind, SyntaxNode};
use crate::{error::Error, parser::Parser};

/// Syntax Synopsis:
///
/// ``` ebnf
/// Statement:
///     VariableDefinition
///     | ArrayDefinition
///     | Conditional
///     | Compound
///     | Return
///     | Expression ';'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum Statement {
    VariableDefinition(VariableDefinition),
    ArrayDefinition(ArrayDefinition),
    Conditional(Conditional),
    Compound(Compound),
    Return(Return),
    Expression(Expression),
}

impl SyntaxNode for Statement {
    fn kind(&self) -> NodeKind {
        match self {
            Self::VariableDefinition(..) => NodeKind::VariableDefinition,
            Self::ArrayDefinition(..) => NodeKind::ArrayDefinition,
            Self::Conditional(conditional) => match conditional.kind {
                ConditionalKind::If => NodeKind::If,
                ConditionalKind::While => NodeKind::While,
            },
            Self::Compound(..) => NodeKind::Compound,
            Self::Return(..) => NodeKind::Return,
            Self::Expression(expression) => expression.kind(),
        }
    }

    fn line(&self) -> usize {
        match self {
            Self::VariableDefinition(variable_definition) => variable_definition.line,
            Self::ArrayDefinition(array_definition) => array_definition.line,
            Self::Conditional(conditional) => conditional.line,
            Self::Compound(compound) => compound.line,
            Self::Return(r#return) => r#return.line,
            Self::Expression(expression) => expression.line(),
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// VariableDefinition:
///     'var' Identifier ('=' Expression)? ';'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct VariableDefinition {
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    name: String,
    #[get = "pub"]
    initializer: Option<Expression>,
}

impl VariableDefinition {
    /// Dissolves the [`VariableDefinition`] into its name and initializer.
    #[must_use]
    pub fn dissolve(self) -> (String, Option<Expression>) { (self.name, self.initializer) }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// ArrayDefinition:
///     'var' Identifier '[' Expression ']' ';'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct ArrayDefinition {
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    name: String,
    #[get = "pub"]
    size: Expression,
}

/// Distinguishes the two statements that share the [`Conditional`] shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum ConditionalKind {
    If,
    While,
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Conditional:
///     'if' '(' Expression ')' Statement ('else' Statement)?
///     | 'while' '(' Expression ')' Statement
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Conditional {
    #[get_copy = "pub"]
    kind: ConditionalKind,
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    condition: Expression,
    #[get = "pub"]
    body: Box<Statement>,

    /// Gets the `else` branch; always `None` for `while`.
    #[get = "pub"]
    else_body: Option<Box<Statement>>,
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Compound:
///     '{' Statement* '}'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Compound {
    /// Gets the line of the opening brace.
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    statements: Vec<Statement>,
}

impl Compound {
    /// Dissolves the [`Compound`] into its list of statements.
    #[must_use]
    pub fn dissolve(self) -> Vec<Statement> { self.statements }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Return:
///     'return' Expression? ';'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Return {
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    value: Option<Expression>,
}

impl<'a> Parser<'a> {
    /// Parses a [`Statement`].
    ///
    /// # Errors
    /// - [`Error::NestingTooDeep`]: if the statement is nested too deeply.
    /// - [`Error::UnexpectedSyntax`]: if the tokens do not form a statement.
    pub fn parse_statement(&mut self) -> Result<Statement, Error> {
        self.nested(|parser| match parser.peek_kind() {
            TokenKind::Keyword(KeywordKind::Var) => parser.parse_variable_definition(),
            TokenKind::Keyword(KeywordKind::If) => {
                parser.parse_conditional(ConditionalKind::If)
            }
            TokenKind::Keyword(KeywordKind::While) => {
                parser.parse_conditional(ConditionalKind::While)
            }
            TokenKind::Keyword(KeywordKind::Return) => parser.parse_return(),
            TokenKind::Punctuation(PunctuationKind::LeftBrace) => {
                parser.parse_compound().map(Statement::Compound)
            }
            _ => {
                let expression = parser.parse_expression()?;
                parser.parse_punctuation(PunctuationKind::Semicolon)?;

                Ok(Statement::Expression(expression))
            }
        })
    }

    fn parse_variable_definition(&mut self) -> Result<Statement, Error> {
        let line = self.parse_keyword(KeywordKind::Var)?.line();
        let name = self.parse_identifier()?;

        // array definition
        if self.is_punctuation(PunctuationKind::LeftBracket) {
            self.forward();

            let size = self.parse_expression()?;
            self.parse_punctuation(PunctuationKind::RightBracket)?;
            self.parse_punctuation(PunctuationKind::Semicolon)?;

            return Ok(Statement::ArrayDefinition(ArrayDefinition { line, name, size }));
        }

        let initializer = if self.is_punctuation(PunctuationKind::Assign) {
            self.forward();
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.parse_punctuation(PunctuationKind::Semicolon)?;

        Ok(Statement::VariableDefinition(VariableDefinition {
            line,
            name,
            initializer,
        }))
    }

    fn parse_conditional(&mut self, kind: ConditionalKind) -> Result<Statement, Error> {
        let keyword = match kind {
            ConditionalKind::If => KeywordKind::If,
            ConditionalKind::While => KeywordKind::While,
        };

        let line = self.parse_keyword(keyword)?.line();

        self.parse_punctuation(PunctuationKind::LeftParenthesis)?;
        let condition = self.parse_expression()?;
        self.parse_punctuation(PunctuationKind::RightParenthesis)?;

        let body = Box::new(self.parse_statement()?);

        let else_body = if kind == ConditionalKind::If && self.is_keyword(KeywordKind::Else) {
            self.forward();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Statement::Conditional(Conditional {
            kind,
            line,
            condition,
            body,
            else_body,
        }))
    }

    fn parse_return(&mut self) -> Result<Statement, Error> {
        let line = self.parse_keyword(KeywordKind::Return)?.line();

        let value = if self.is_punctuation(PunctuationKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.parse_punctuation(PunctuationKind::Semicolon)?;

        Ok(Statement::Return(Return { line, value }))
    }

    /// Parses a [`Compound`] statement.
    ///
    /// # Errors
    /// Returns the first syntax error found between the braces.
    pub fn parse_compound(&mut self) -> Result<Compound, Error> {
        let line = self.parse_punctuation(PunctuationKind::LeftBrace)?.line();
        let mut statements = Vec::new();

        while !self.is_punctuation(PunctuationKind::RightBrace) && !self.is_exhausted() {
            statements.push(self.parse_statement()?);
        }

        self.parse_punctuation(PunctuationKind::RightBrace)?;

        Ok(Compound { line, statements })
    }
}
