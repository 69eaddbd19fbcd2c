//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the particular span of the source code.
///
/// Only the first line of the span is underlined; tokens never cross a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    fn write_gutter(
        f: &mut std::fmt::Formatter<'_>,
        line_number: Option<usize>,
        width: usize,
    ) -> std::fmt::Result {
        match line_number {
            Some(number) => write!(
                f,
                "{}{:pad$} {} ",
                Style::Bold.with(Color::Cyan.with(number)),
                "",
                Style::Bold.with(Color::Cyan.with("┃")),
                pad = width - get_digit(number),
            ),
            None => write!(
                f,
                "{:width$} {} ",
                "",
                Style::Bold.with(Color::Cyan.with("┃")),
            ),
        }
    }

    fn write_plain_line(
        f: &mut std::fmt::Formatter<'_>,
        line_number: usize,
        line: &str,
        width: usize,
    ) -> std::fmt::Result {
        Self::write_gutter(f, Some(line_number), width)?;

        for char in line.chars() {
            match char {
                '\t' => write!(f, "    ")?,
                '\n' | '\r' => (),
                char => write!(f, "{char}")?,
            }
        }

        writeln!(f)
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let Some(location) = self.span.start_location() else {
            return Ok(());
        };

        let line_number = location.line;
        let width = get_digit(line_number + 1).max(1);

        // prints the source location
        writeln!(
            f,
            "{:width$}{} {}:{}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.full_path().display(),
            location.line,
            location.column,
        )?;

        Self::write_gutter(f, None, width)?;
        writeln!(f)?;

        // prints the previous line for context
        if let Some(line) = source_file.get_line(line_number.saturating_sub(1)) {
            Self::write_plain_line(f, line_number - 1, line, width)?;
        }

        let line = source_file.get_line(line_number).unwrap_or_default();
        let end_column = self
            .span
            .end_location()
            .filter(|end| end.line == line_number)
            .map_or(usize::MAX, |end| end.column);

        Self::write_gutter(f, Some(line_number), width)?;
        for (index, char) in line.chars().enumerate() {
            let column = index + 1;
            let is_in_span = column >= location.column && column < end_column;

            match char {
                '\t' => write!(f, "    ")?,
                '\n' | '\r' => (),
                char if is_in_span => write!(
                    f,
                    "{}",
                    Style::Underline.with(Style::Bold.with(Color::Red.with(char)))
                )?,
                char => write!(f, "{char}")?,
            }
        }
        writeln!(f)?;

        if let Some(help) = &self.help_display {
            Self::write_gutter(f, None, width)?;

            for char in line.chars().take(location.column.saturating_sub(1)) {
                write!(f, "{}", if char == '\t' { "    " } else { " " })?;
            }

            writeln!(f, "{}: {help}", Style::Bold.with("help"))?;
        }

        // prints the next line for context
        if let Some(line) = source_file.get_line(line_number + 1) {
            Self::write_plain_line(f, line_number + 1, line, width)?;
        }

        Self::write_gutter(f, None, width)?;
        writeln!(f)
    }
}
