//! Drives the Sprig front end: loads a source file, scans and parses it, and hands the resulting
//! [`Program`] to an [`Evaluator`].

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use std::{path::PathBuf, process::ExitCode, sync::Arc};

pub use clap::Parser;
use sprig_base::{
    config::{Config, DEFAULT_MAX_NESTING_DEPTH},
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use sprig_lexical::token_stream::TokenStream;
use sprig_syntax::syntax_tree::program::Program;
use thiserror::Error;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "sprig",
    about = "Sprig programming language front end.",
    version
)]
pub struct Argument {
    /// The input file to run the program on.
    pub file: PathBuf,

    /// Prints out every token of the program, one per line.
    #[clap(long = "dump-tokens")]
    pub dump_tokens: bool,

    /// Prints out the syntax tree of the program.
    #[clap(long = "dump-syntax")]
    pub dump_syntax: bool,

    /// Treats `debug` as a reserved keyword.
    #[clap(long = "debug")]
    pub debug: bool,

    /// Rejects identifiers, numbers and strings longer than this many bytes.
    #[clap(long = "max-literal-length")]
    pub max_literal_length: Option<usize>,

    /// Rejects statements and expressions nested deeper than this; 0 removes the limit.
    #[clap(long = "max-nesting-depth", default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    pub max_nesting_depth: usize,

    /// Reports the progress of every phase.
    #[clap(short, long)]
    pub verbose: bool,
}

impl Argument {
    /// Creates the arguments for the given file with every option left at its default.
    #[must_use]
    pub fn new(file: PathBuf) -> Self {
        Self {
            file,
            dump_tokens: false,
            dump_syntax: false,
            debug: false,
            max_literal_length: None,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            verbose: false,
        }
    }

    /// Gets the front-end [`Config`] described by the arguments.
    #[must_use]
    pub fn config(&self) -> Config {
        let max_nesting_depth = if self.max_nesting_depth == 0 {
            None
        } else {
            Some(self.max_nesting_depth)
        };

        Config::default()
            .with_max_literal_length(self.max_literal_length)
            .with_max_nesting_depth(max_nesting_depth)
            .with_debug_keyword(self.debug)
    }
}

/// Is an enumeration of every fatal error the front end can report.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] source_file::Error),

    #[error("{0}")]
    Lexical(#[from] sprig_lexical::error::Error),

    #[error("{0}")]
    Syntax(#[from] sprig_syntax::error::Error),
}

/// Consumes the syntax tree produced by the front end.
pub trait Evaluator {
    /// Takes ownership of the program and returns the exit status of the run.
    fn evaluate(&mut self, program: Program) -> ExitCode;
}

/// An [`Evaluator`] that optionally prints the syntax tree and reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SyntaxDump {
    /// Whether the tree is printed to the standard output.
    pub print: bool,
}

impl Evaluator for SyntaxDump {
    fn evaluate(&mut self, program: Program) -> ExitCode {
        if self.print {
            println!("{program:#?}");
        }

        ExitCode::SUCCESS
    }
}

/// Scans and parses the given source file.
///
/// The token stream is dropped before the program is returned.
///
/// # Errors
/// - [`Error::Lexical`]: if the source cannot be scanned.
/// - [`Error::Syntax`]: if the tokens do not form a program.
pub fn compile(source_file: &Arc<SourceFile>, config: &Config) -> Result<Program, Error> {
    compile_inspecting(source_file, config, |_| ())
}

/// Same as [`compile()`], but shows the token stream to `inspect` before parsing it.
fn compile_inspecting(
    source_file: &Arc<SourceFile>,
    config: &Config,
    inspect: impl FnOnce(&TokenStream),
) -> Result<Program, Error> {
    let token_stream = TokenStream::tokenize(source_file, config)?;
    inspect(&token_stream);

    Ok(sprig_syntax::parse(&token_stream, config)?)
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    let mut evaluator = SyntaxDump {
        print: argument.dump_syntax,
    };

    run_with(argument, &mut evaluator)
}

/// Runs the front end with the given arguments and hands the program to `evaluator`.
pub fn run_with(argument: &Argument, evaluator: &mut impl Evaluator) -> ExitCode {
    match front_end(argument) {
        Ok(program) => evaluator.evaluate(program),
        Err(error) => {
            report(argument, &error);
            ExitCode::FAILURE
        }
    }
}

fn front_end(argument: &Argument) -> Result<Program, Error> {
    let source_file = SourceFile::load(argument.file.clone())?;

    let program = compile_inspecting(&source_file, &argument.config(), |token_stream| {
        info(
            argument,
            format!(
                "{}: scanned {} tokens",
                argument.file.display(),
                token_stream.len()
            ),
        );

        if argument.dump_tokens {
            for token in token_stream.iter() {
                println!("{token}");
            }
        }
    })?;

    info(
        argument,
        format!(
            "{}: parsed {} function definitions",
            argument.file.display(),
            program.functions().len()
        ),
    );

    Ok(program)
}

fn info(argument: &Argument, message: String) {
    if argument.verbose {
        eprintln!("{}", Message::new(Severity::Info, message));
    }
}

fn report(argument: &Argument, error: &Error) {
    match error {
        Error::Io(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.file.display()),
            );

            eprintln!("{msg}");
        }
        Error::Lexical(..) | Error::Syntax(..) => eprintln!("{error}"),
    }
}
