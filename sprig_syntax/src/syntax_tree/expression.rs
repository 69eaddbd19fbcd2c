//! Contains the syntax trees related to expressions and their parsing logic.

use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use sprig_lexical::token::{PunctuationKind, TokenKind};

use super::{NodeKind, SyntaxNode};
use crate::{
    error::{Error, SyntaxKind},
    parser::Parser,
};

/// The precedence of assignment, the loosest binding operator.
const LOWEST_PRECEDENCE: u32 = 1;

/// Syntax Synopsis:
///
/// ``` ebnf
/// BinaryOperator:
///     '='
///     | '=='
///     | '<' | '<=' | '>' | '>='
///     | '<<' | '>>'
///     | '|'
///     | '&'
///     | '+' | '-'
///     | '*' | '/'
///     ;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum_macros::Display)]
#[allow(missing_docs)]
pub enum BinaryOperator {
    Assign,
    Equal,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    ShiftLeft,
    ShiftRight,
    BitOr,
    BitAnd,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Maps a punctuation to the binary operator it spells, if any.
    #[must_use]
    pub fn from_punctuation(punctuation: PunctuationKind) -> Option<Self> {
        Some(match punctuation {
            PunctuationKind::Assign => Self::Assign,
            PunctuationKind::Equal => Self::Equal,
            PunctuationKind::Less => Self::Less,
            PunctuationKind::LessEqual => Self::LessEqual,
            PunctuationKind::Greater => Self::Greater,
            PunctuationKind::GreaterEqual => Self::GreaterEqual,
            PunctuationKind::DoubleLess => Self::ShiftLeft,
            PunctuationKind::DoubleGreater => Self::ShiftRight,
            PunctuationKind::Pipe => Self::BitOr,
            PunctuationKind::Ampersand => Self::BitAnd,
            PunctuationKind::Plus => Self::Add,
            PunctuationKind::Minus => Self::Subtract,
            PunctuationKind::Asterisk => Self::Multiply,
            PunctuationKind::Slash => Self::Divide,
            _ => return None,
        })
    }

    /// Returns `true` if the operator is the right-associative assignment.
    #[must_use]
    pub fn is_assignment(self) -> bool { self == Self::Assign }

    /// Gets the precedence of the operator (the higher the number, the first it will be evaluated)
    ///
    /// The least operator has precedence 1.
    #[must_use]
    pub fn get_precedence(self) -> u32 {
        match self {
            Self::Assign => 1,
            Self::Equal => 2,
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual => 3,
            Self::ShiftLeft | Self::ShiftRight => 4,
            Self::BitOr => 5,
            Self::BitAnd => 6,
            Self::Add | Self::Subtract => 7,
            Self::Multiply | Self::Divide => 8,
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// UnaryOperator:
///     '-' | '*' | '&'
///     ;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum_macros::Display)]
#[allow(missing_docs)]
pub enum UnaryOperator {
    Negate,
    Dereference,
    AddressOf,
}

impl UnaryOperator {
    /// Maps a punctuation to the prefix operator it spells, if any.
    #[must_use]
    pub fn from_punctuation(punctuation: PunctuationKind) -> Option<Self> {
        match punctuation {
            PunctuationKind::Minus => Some(Self::Negate),
            PunctuationKind::Asterisk => Some(Self::Dereference),
            PunctuationKind::Ampersand => Some(Self::AddressOf),
            _ => None,
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Binary:
///     Expression BinaryOperator Expression
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Binary {
    /// Gets the line of the operator.
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    left_operand: Box<Expression>,
    #[get_copy = "pub"]
    operator: BinaryOperator,
    #[get = "pub"]
    right_operand: Box<Expression>,
}

impl Binary {
    /// Dissolves the [`Binary`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (Expression, BinaryOperator, Expression) {
        (*self.left_operand, self.operator, *self.right_operand)
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Unary:
///     UnaryOperator Unary
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Unary {
    #[get_copy = "pub"]
    line: usize,
    #[get_copy = "pub"]
    operator: UnaryOperator,
    #[get = "pub"]
    operand: Box<Expression>,
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// FunctionCall:
///     Identifier '(' (Expression (',' Expression)*)? ')'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct FunctionCall {
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    name: String,
    #[get = "pub"]
    arguments: Vec<Expression>,
}

impl FunctionCall {
    /// Dissolves the [`FunctionCall`] into its name and arguments.
    #[must_use]
    pub fn dissolve(self) -> (String, Vec<Expression>) { (self.name, self.arguments) }
}

/// An integer literal such as `42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters)]
pub struct IntegerLiteral {
    #[get_copy = "pub"]
    line: usize,
    #[get_copy = "pub"]
    value: i64,
}

/// A string literal; the value excludes the quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct StringLiteral {
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    value: String,
}

/// A use of a variable by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct VariableReference {
    #[get_copy = "pub"]
    line: usize,
    #[get = "pub"]
    name: String,
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Expression:
///     Binary
///     | Unary
///     | FunctionCall
///     | IntegerLiteral
///     | StringLiteral
///     | VariableReference
///     | '(' Expression ')'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum Expression {
    FunctionCall(FunctionCall),
    Binary(Binary),
    Unary(Unary),
    IntegerLiteral(IntegerLiteral),
    StringLiteral(StringLiteral),
    VariableReference(VariableReference),
}

impl SyntaxNode for Expression {
    fn kind(&self) -> NodeKind {
        match self {
            Self::FunctionCall(..) => NodeKind::FunctionCall,
            Self::Binary(..) => NodeKind::BinaryOperation,
            Self::Unary(..) => NodeKind::UnaryOperation,
            Self::IntegerLiteral(..) => NodeKind::IntegerLiteral,
            Self::StringLiteral(..) => NodeKind::StringLiteral,
            Self::VariableReference(..) => NodeKind::VariableReference,
        }
    }

    fn line(&self) -> usize {
        match self {
            Self::FunctionCall(function_call) => function_call.line,
            Self::Binary(binary) => binary.line,
            Self::Unary(unary) => unary.line,
            Self::IntegerLiteral(integer) => integer.line,
            Self::StringLiteral(string) => string.line,
            Self::VariableReference(variable) => variable.line,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FunctionCall(function_call) => {
                write!(f, "Call({}, [", function_call.name)?;
                for (index, argument) in function_call.arguments.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(argument, f)?;
                }
                f.write_str("])")
            }
            Self::Binary(binary) => write!(
                f,
                "{}({}, {})",
                binary.operator, binary.left_operand, binary.right_operand
            ),
            Self::Unary(unary) => write!(f, "{}({})", unary.operator, unary.operand),
            Self::IntegerLiteral(integer) => write!(f, "{}", integer.value),
            Self::StringLiteral(string) => write!(f, "\"{}\"", string.value),
            Self::VariableReference(variable) => f.write_str(&variable.name),
        }
    }
}

impl<'a> Parser<'a> {
    /// Parses an [`Expression`].
    ///
    /// Operators are climbed by precedence; assignment groups right-to-left, every other operator
    /// left-to-right. Every level of the resulting tree counts toward
    /// [`sprig_base::config::Config::max_nesting_depth`].
    ///
    /// # Errors
    /// - [`Error::NestingTooDeep`]: if the tree grows deeper than the limit.
    /// - the first syntax error found in any operand.
    pub fn parse_expression(&mut self) -> Result<Expression, Error> {
        self.parse_binary(LOWEST_PRECEDENCE).map(|(expression, _)| expression)
    }

    /// Parses a prefixed operand or a primary expression.
    ///
    /// # Errors
    /// - [`Error::NestingTooDeep`]: if the operand is nested too deeply.
    /// - any error returned by [`Self::parse_primary()`].
    pub fn parse_unary(&mut self) -> Result<Expression, Error> {
        self.parse_unary_operand().map(|(expression, _)| expression)
    }

    /// Parses a literal, a variable reference, a function call or a parenthesized expression.
    ///
    /// # Errors
    /// [`Error::UnexpectedSyntax`]: if the current token cannot start an expression.
    pub fn parse_primary(&mut self) -> Result<Expression, Error> {
        self.parse_primary_operand().map(|(expression, _)| expression)
    }

    // The operand parsers below return the height of the tree they built, with leaves at zero.

    /// Parses operators whose precedence is at least `min_precedence`.
    fn parse_binary(&mut self, min_precedence: u32) -> Result<(Expression, usize), Error> {
        let (mut left_operand, mut height) = self.parse_unary_operand()?;

        while let Some((operator, line)) = self.peek_binary_operator(min_precedence) {
            // eat the operator
            self.forward();

            let precedence = operator.get_precedence();
            let (right_operand, right_height) = if operator.is_assignment() {
                self.nested(|parser| parser.parse_binary(precedence))?
            } else {
                self.parse_binary(precedence + 1)?
            };

            height = height.max(right_height) + 1;
            self.check_height(height)?;

            left_operand = Expression::Binary(Binary {
                line,
                left_operand: Box::new(left_operand),
                operator,
                right_operand: Box::new(right_operand),
            });
        }

        Ok((left_operand, height))
    }

    fn peek_binary_operator(&self, min_precedence: u32) -> Option<(BinaryOperator, usize)> {
        let token = self.peek();

        token
            .kind()
            .as_punctuation()
            .and_then(|punctuation| BinaryOperator::from_punctuation(*punctuation))
            .filter(|operator| operator.get_precedence() >= min_precedence)
            .map(|operator| (operator, token.line()))
    }

    fn parse_unary_operand(&mut self) -> Result<(Expression, usize), Error> {
        self.nested(|parser| {
            let token = parser.peek();

            let Some(operator) = token
                .kind()
                .as_punctuation()
                .and_then(|punctuation| UnaryOperator::from_punctuation(*punctuation))
            else {
                return parser.parse_primary_operand();
            };

            // eat the prefix operator
            parser.forward();

            let (operand, height) = parser.parse_unary_operand()?;

            Ok((
                Expression::Unary(Unary {
                    line: token.line(),
                    operator,
                    operand: Box::new(operand),
                }),
                height + 1,
            ))
        })
    }

    fn parse_primary_operand(&mut self) -> Result<(Expression, usize), Error> {
        let token = self.peek();
        let line = token.line();

        match token.kind() {
            TokenKind::Number(value) => {
                self.forward();
                Ok((
                    Expression::IntegerLiteral(IntegerLiteral {
                        line,
                        value: *value,
                    }),
                    0,
                ))
            }

            TokenKind::String(value) => {
                self.forward();
                Ok((
                    Expression::StringLiteral(StringLiteral {
                        line,
                        value: value.clone(),
                    }),
                    0,
                ))
            }

            TokenKind::Identifier(name) => {
                self.forward();

                if !self.is_punctuation(PunctuationKind::LeftParenthesis) {
                    return Ok((
                        Expression::VariableReference(VariableReference {
                            line,
                            name: name.clone(),
                        }),
                        0,
                    ));
                }

                // function call
                self.forward();

                let (arguments, heights): (Vec<_>, Vec<_>) = self
                    .parse_enclosed_list(PunctuationKind::RightParenthesis, |parser| {
                        parser.parse_binary(LOWEST_PRECEDENCE)
                    })?
                    .into_iter()
                    .unzip();

                let height = heights.into_iter().max().map_or(0, |height| height + 1);
                self.check_height(height)?;

                Ok((
                    Expression::FunctionCall(FunctionCall {
                        line,
                        name: name.clone(),
                        arguments,
                    }),
                    height,
                ))
            }

            TokenKind::Punctuation(PunctuationKind::LeftParenthesis) => {
                self.forward();

                let expression = self.parse_binary(LOWEST_PRECEDENCE)?;
                self.parse_punctuation(PunctuationKind::RightParenthesis)?;

                Ok(expression)
            }

            _ => Err(self.unexpected(SyntaxKind::Expression)),
        }
    }
}
