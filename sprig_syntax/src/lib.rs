//! This crate provides the syntax tree and parser for the Sprig programming language. This phase
//! is responsible for parsing the token stream into a syntax tree.
//!
//! The parser is predictive recursive descent with one token of lookahead and no backtracking.
//! The first syntax error ends the parse.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use sprig_base::config::Config;
use sprig_lexical::token_stream::TokenStream;

pub mod error;
pub mod parser;
pub mod syntax_tree;

/// Parses the whole token stream into a [`syntax_tree::program::Program`].
///
/// # Errors
/// Returns the first [`error::Error`] found.
pub fn parse(
    token_stream: &TokenStream,
    config: &Config,
) -> Result<syntax_tree::program::Program, error::Error> {
    parser::Parser::new(token_stream, config).parse_program()
}
