use std::{
    fmt::{Display, Write},
    path::PathBuf,
    str::FromStr,
};

use lazy_static::lazy_static;
use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Just, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};
use sprig_base::{config::Config, source_file::SourceFile};
use sprig_test::input::Input;
use strum::IntoEnumIterator;

use super::{KeywordKind, PunctuationKind, Scanner, TokenKind};

/// Represents an input for an identifier token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// The valid identifier string.
    pub string: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.string) }
}

impl Arbitrary for Identifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[A-Za-z_][A-Za-z0-9_]{0,15}"
            .prop_filter_map(
                "filter out identifiers that can be used as a keyword",
                |x| {
                    if KeywordKind::from_str(x.as_ref()).is_ok() {
                        None
                    } else {
                        Some(Self { string: x })
                    }
                },
            )
            .boxed()
    }
}

/// Represents a valid keyword input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// The kind of keyword.
    pub keyword: KeywordKind,
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword.as_str())
    }
}

impl Arbitrary for Keyword {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        lazy_static! {
            static ref KEYWORDS: Vec<KeywordKind> = KeywordKind::iter().collect();
        }

        proptest::sample::select(KEYWORDS.as_slice())
            .prop_map(|kind| Self { keyword: kind })
            .boxed()
    }
}

/// Represents an input for a number literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeric {
    /// The value of the literal.
    pub value: i64,
}

impl Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.value) }
}

impl Arbitrary for Numeric {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..=i64::MAX).prop_map(|value| Self { value }).boxed()
    }
}

/// Represents an input for a string literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringLiteral {
    /// The content between the quotes.
    pub content: String,
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('"')?;
        f.write_str(&self.content)?;
        f.write_char('"')
    }
}

impl Arbitrary for StringLiteral {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[^\"\\n\\r]{0,16}"
            .prop_map(|content| Self { content })
            .boxed()
    }
}

/// Represents an input for a punctuation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Punctuation {
    /// The kind of the symbol.
    pub punctuation: PunctuationKind,
}

impl Display for Punctuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.punctuation.as_str())
    }
}

impl Arbitrary for Punctuation {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        lazy_static! {
            static ref PUNCTUATIONS: Vec<PunctuationKind> = PunctuationKind::iter().collect();
        }

        proptest::sample::select(PUNCTUATIONS.as_slice())
            .prop_map(|punctuation| Self { punctuation })
            .boxed()
    }
}

/// Represents an input of whitespace separating two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum WhiteSpaces {
    Spaces(u8),
    Tabs(u8),
    NewLines(u8),
}

impl WhiteSpaces {
    /// Gets the number of line breaks in the whitespace.
    pub fn line_breaks(self) -> usize {
        match self {
            Self::NewLines(x) => x as usize,
            Self::Spaces(_) | Self::Tabs(_) => 0,
        }
    }
}

impl Arbitrary for WhiteSpaces {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1u8..4)
            .prop_flat_map(|x| {
                prop_oneof![
                    Just(Self::Spaces(x)),
                    Just(Self::Tabs(x)),
                    Just(Self::NewLines(x))
                ]
            })
            .boxed()
    }
}

impl Display for WhiteSpaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (character, count) = match self {
            Self::Spaces(x) => (' ', x),
            Self::Tabs(x) => ('\t', x),
            Self::NewLines(x) => ('\n', x),
        };

        for _ in 0..*count {
            f.write_char(character)?;
        }

        Ok(())
    }
}

/// Represents an input for a significant [`super::Token`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Token {
    Identifier(Identifier),
    Keyword(Keyword),
    Numeric(Numeric),
    String(StringLiteral),
    Punctuation(Punctuation),
}

impl Arbitrary for Token {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Identifier::arbitrary().prop_map(Self::Identifier),
            Keyword::arbitrary().prop_map(Self::Keyword),
            Numeric::arbitrary().prop_map(Self::Numeric),
            StringLiteral::arbitrary().prop_map(Self::String),
            Punctuation::arbitrary().prop_map(Self::Punctuation)
        ]
        .boxed()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(x) => Display::fmt(x, f),
            Self::Keyword(x) => Display::fmt(x, f),
            Self::Numeric(x) => Display::fmt(x, f),
            Self::String(x) => Display::fmt(x, f),
            Self::Punctuation(x) => Display::fmt(x, f),
        }
    }
}

impl Input<&super::Token> for &Token {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        match (self, output.kind()) {
            (Token::Identifier(i), TokenKind::Identifier(o)) => {
                prop_assert_eq!(&i.string, o);
            }
            (Token::Keyword(i), TokenKind::Keyword(o)) => {
                prop_assert_eq!(i.keyword, *o);
            }
            (Token::Numeric(i), TokenKind::Number(o)) => {
                prop_assert_eq!(i.value, *o);
            }
            (Token::String(i), TokenKind::String(o)) => {
                prop_assert_eq!(&i.content, o);
            }
            (Token::Punctuation(i), TokenKind::Punctuation(o)) => {
                prop_assert_eq!(i.punctuation, *o);
            }
            _ => {
                return Err(TestCaseError::fail(format!(
                    "expected {self:?} got {output:?}",
                )))
            }
        }

        prop_assert_eq!(self.to_string(), output.span().str());

        Ok(())
    }
}

pub(crate) fn debug_config() -> Config { Config::default().with_debug_keyword(true) }

fn lex_all(source: &str, config: Config) -> Vec<super::Token> {
    let source_file = SourceFile::new(PathBuf::from("test.sprig"), source.to_string());
    let mut scanner = Scanner::new(&source_file, config);
    let mut tokens = Vec::new();

    loop {
        let token = super::Token::lex(&mut scanner).unwrap();
        let is_eof = matches!(token.kind(), TokenKind::Eof);

        tokens.push(token);

        if is_eof {
            return tokens;
        }
    }
}

proptest! {
    #[test]
    fn token_test(
        input in Token::arbitrary()
    ) {
        let source = input.to_string();
        let tokens = lex_all(&source, debug_config());

        prop_assert_eq!(tokens.len(), 2);
        input.assert(&tokens[0])?;
        prop_assert!(matches!(tokens[1].kind(), TokenKind::Eof));
    }

    #[test]
    fn keyword_prefix_is_identifier_test(
        keyword in Keyword::arbitrary(),
        suffix in "[A-Za-z0-9_]{1,4}",
    ) {
        let source = format!("{keyword}{suffix}");
        let tokens = lex_all(&source, debug_config());

        prop_assert_eq!(tokens[0].kind(), &TokenKind::Identifier(source.clone()));
    }
}

#[test]
fn debug_is_identifier_unless_enabled() {
    let tokens = lex_all("debug", Config::default());
    assert_eq!(tokens[0].kind(), &TokenKind::Identifier("debug".to_string()));

    let tokens = lex_all("debug", debug_config());
    assert_eq!(tokens[0].kind(), &TokenKind::Keyword(KeywordKind::Debug));
}

#[test]
fn two_character_operators() {
    let tokens = lex_all("== = >= >> > <= << < ==<", Config::default());
    let kinds = tokens
        .iter()
        .map(|token| token.kind().clone())
        .collect::<Vec<_>>();

    assert_eq!(kinds, vec![
        TokenKind::Punctuation(PunctuationKind::Equal),
        TokenKind::Punctuation(PunctuationKind::Assign),
        TokenKind::Punctuation(PunctuationKind::GreaterEqual),
        TokenKind::Punctuation(PunctuationKind::DoubleGreater),
        TokenKind::Punctuation(PunctuationKind::Greater),
        TokenKind::Punctuation(PunctuationKind::LessEqual),
        TokenKind::Punctuation(PunctuationKind::DoubleLess),
        TokenKind::Punctuation(PunctuationKind::Less),
        TokenKind::Punctuation(PunctuationKind::Equal),
        TokenKind::Punctuation(PunctuationKind::Less),
        TokenKind::Eof,
    ]);
}

#[test]
fn line_numbers_follow_newlines() {
    let tokens = lex_all("a\n\nb // c\n  d", Config::default());
    let lines = tokens.iter().map(super::Token::line).collect::<Vec<_>>();

    assert_eq!(lines, vec![1, 3, 4, 4]);
}

#[test]
fn independent_scanners_start_at_line_one() {
    let first = lex_all("\n\n\nx", Config::default());
    let second = lex_all("y", Config::default());

    assert_eq!(first[0].line(), 4);
    assert_eq!(second[0].line(), 1);
}

#[test]
fn eof_keeps_returning() {
    let source_file = SourceFile::new(PathBuf::from("test.sprig"), "x".to_string());
    let mut scanner = Scanner::new(&source_file, Config::default());

    let kinds = (0..3)
        .map(|_| super::Token::lex(&mut scanner).unwrap().into_kind())
        .collect::<Vec<_>>();

    assert_eq!(kinds, vec![
        TokenKind::Identifier("x".to_string()),
        TokenKind::Eof,
        TokenKind::Eof
    ]);
}

#[test]
fn kind_predicates() {
    let semicolon = TokenKind::Punctuation(PunctuationKind::Semicolon);
    let func = TokenKind::Keyword(KeywordKind::Func);

    assert!(semicolon.is_punctuation());
    assert!(semicolon.is_punctuation_kind(PunctuationKind::Semicolon));
    assert!(!semicolon.is_punctuation_kind(PunctuationKind::Comma));
    assert!(!semicolon.is_keyword());

    assert!(func.is_keyword());
    assert!(func.is_keyword_kind(KeywordKind::Func));
    assert!(!func.is_keyword_kind(KeywordKind::Return));
    assert!(!func.is_punctuation_kind(PunctuationKind::Semicolon));

    assert!(!TokenKind::Eof.is_keyword_kind(KeywordKind::Func));
}
