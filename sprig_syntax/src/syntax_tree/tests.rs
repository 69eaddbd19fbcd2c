use std::{fmt::Display, path::PathBuf, str::FromStr};

use proptest::{
    prelude::Arbitrary,
    prop_assert_eq, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};
use sprig_base::{config::Config, source_file::SourceFile};
use sprig_lexical::{
    token::{KeywordKind, PunctuationKind, TokenKind},
    token_stream::TokenStream,
};
use sprig_test::input::Input;

use super::{declaration::tests::FunctionDefinition, NodeKind, SyntaxNode};
use crate::{
    error::{Error, SyntaxKind},
    parser::Parser,
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(pub String);

impl Arbitrary for Identifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[a-zA-Z_][a-zA-Z0-9_]{0,7}"
            .prop_filter_map("filter out keywords", |x| {
                if KeywordKind::from_str(&x).is_ok() {
                    None
                } else {
                    Some(Self(x))
                }
            })
            .boxed()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

impl Input<&String> for &Identifier {
    fn assert(self, output: &String) -> TestCaseResult {
        prop_assert_eq!(&self.0, output);
        Ok(())
    }
}

pub fn tokenize(source: impl Display) -> TokenStream {
    let source_file = SourceFile::new(PathBuf::from("test.sprig"), source.to_string());

    TokenStream::tokenize(&source_file, &Config::default()).expect("source must scan")
}

/// Runs `f` on a parser over `source` and checks that every token was consumed.
pub fn parse_with_config<T>(
    source: impl Display,
    config: &Config,
    f: impl FnOnce(&mut Parser) -> Result<T, Error>,
) -> Result<T, Error> {
    let token_stream = tokenize(source);
    let mut parser = Parser::new(&token_stream, config);

    let output = f(&mut parser)?;
    assert!(parser.is_exhausted(), "trailing tokens: {:?}", parser.peek());

    Ok(output)
}

pub fn parse<T>(
    source: impl Display,
    f: impl FnOnce(&mut Parser) -> Result<T, Error>,
) -> Result<T, Error> {
    parse_with_config(source, &Config::default(), f)
}

/// Represents an input for the [`super::program::Program`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Program {
    pub functions: Vec<FunctionDefinition>,
}

impl Arbitrary for Program {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(FunctionDefinition::arbitrary(), 0..=6)
            .prop_map(|functions| Self { functions })
            .boxed()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for function in &self.functions {
            writeln!(f, "{function}")?;
        }

        Ok(())
    }
}

impl Input<&super::program::Program> for &Program {
    fn assert(self, output: &super::program::Program) -> TestCaseResult {
        self.functions.as_slice().assert(output.functions().as_slice())
    }
}

proptest! {
    #[test]
    fn program_test(
        program_input in Program::arbitrary()
    ) {
        let source = program_input.to_string();
        let token_stream = tokenize(&source);

        let func_count = token_stream
            .iter()
            .filter(|token| token.kind().is_keyword_kind(KeywordKind::Func))
            .count();

        let program = crate::parse(&token_stream, &Config::default())
            .map_err(|error| TestCaseError::fail(format!("{error}\nsource: {source}")))?;

        prop_assert_eq!(program.functions().len(), func_count);
        program_input.assert(&program)?;
    }
}

#[test]
fn parses_function_definition() {
    let token_stream = tokenize("func main() { var x = 1; return x + 2; }");
    let program = crate::parse(&token_stream, &Config::default()).unwrap();

    assert_eq!(program.kind(), NodeKind::Program);
    assert_eq!(program.functions().len(), 1);

    let function = &program.functions()[0];
    assert_eq!(function.name(), "main");
    assert!(function.parameters().is_empty());

    let statements = function.body().statements();
    assert_eq!(statements.len(), 2);

    let variable = statements[0].as_variable_definition().unwrap();
    assert_eq!(variable.name(), "x");
    assert_eq!(variable.initializer().as_ref().unwrap().to_string(), "1");

    let r#return = statements[1].as_return().unwrap();
    assert_eq!(r#return.value().as_ref().unwrap().to_string(), "Add(x, 2)");
}

#[test]
fn empty_program() {
    let token_stream = tokenize("  // nothing here\n");
    let program = crate::parse(&token_stream, &Config::default()).unwrap();

    assert!(program.functions().is_empty());
}

#[test]
fn stray_semicolon_at_top_level() {
    let token_stream = tokenize("func main() { }\n;");
    let error = crate::parse(&token_stream, &Config::default()).unwrap_err();

    let error = error.into_unexpected_syntax().unwrap();
    assert_eq!(error.expected, SyntaxKind::Keyword(KeywordKind::Func));
    assert_eq!(
        error.found.kind(),
        &TokenKind::Punctuation(PunctuationKind::Semicolon)
    );
    assert_eq!(error.found.line(), 2);

    let message = Error::UnexpectedSyntax(error).to_string();
    assert!(message.contains("expected a keyword token `func`"));
    assert!(message.contains("but found a punctuation token `;`"));
    assert!(message.contains("line 2"));
}

#[test]
fn missing_closing_brace() {
    let token_stream = tokenize("func main() { return;");
    let error = crate::parse(&token_stream, &Config::default()).unwrap_err();

    let error = error.into_unexpected_syntax().unwrap();
    assert_eq!(
        error.expected,
        SyntaxKind::Punctuation(PunctuationKind::RightBrace)
    );
    assert_eq!(error.found.kind(), &TokenKind::Eof);
}

#[test]
fn parser_is_reentrant() {
    let first = tokenize("func a() {}\n\nfunc b() {}");
    let second = tokenize("func c() {}");

    let first = crate::parse(&first, &Config::default()).unwrap();
    let second = crate::parse(&second, &Config::default()).unwrap();

    assert_eq!(first.functions()[1].line(), 3);
    assert_eq!(second.functions()[0].line(), 1);
}
