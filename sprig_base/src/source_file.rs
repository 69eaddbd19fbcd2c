//! Contains the in-memory model of a Sprig source file and the spans pointing into it.

use std::{
    fmt::Debug,
    iter::Peekable,
    ops::Range,
    path::PathBuf,
    str::CharIndices,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use thiserror::Error;

/// Represents an error that occurs when loading a source file from the disk.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Represents a source file held entirely in memory.
///
/// The whole text is read up front; scanning never streams from the disk.
#[derive(Getters)]
pub struct SourceFile {
    /// Gets the path the source was loaded from; only used to label diagnostics.
    #[get = "pub"]
    full_path: PathBuf,

    content: String,

    /// Byte ranges of every line, terminators included.
    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines.len())
            .finish()
    }
}

impl SourceFile {
    /// Creates a source file from text that is already in memory.
    ///
    /// `full_path` is only used to label diagnostics; nothing is read from it.
    #[must_use]
    pub fn new(full_path: PathBuf, content: String) -> Arc<Self> {
        let lines = line_ranges(&content);
        Arc::new(Self {
            full_path,
            content,
            lines,
        })
    }

    /// Reads the whole file at `path` into memory.
    ///
    /// # Errors
    /// - [`Error::IoError`]: the file could not be opened, read, or is not valid UTF-8.
    pub fn load(path: PathBuf) -> Result<Arc<Self>, Error> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Self::new(path, content))
    }

    /// Gets the whole text of the source file.
    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    /// Gets the text of a line, terminator included.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        self.lines
            .get(line - 1)
            .map(|range| &self.content[range.clone()])
    }

    /// Gets the number of lines; text after the last terminator counts as one more line.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Starts a character cursor at the beginning of the text.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> Iterator<'a> {
        Iterator {
            source_file: self,
            iterator: self.content.char_indices().peekable(),
        }
    }

    /// Maps a byte index to its 1-based line and column.
    ///
    /// The index one past the last byte maps to the end of the last line so that spans at the
    /// end of the input can still be located.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if !self.content.is_char_boundary(byte_index) {
            return None;
        }

        let line = self
            .lines
            .partition_point(|range| range.end <= byte_index)
            .min(self.lines.len().saturating_sub(1));
        let line_start = self.lines.get(line)?.start;

        Some(Location {
            line: line + 1,
            column: self.content[line_start..byte_index].chars().count() + 1,
        })
    }
}

/// A byte offset into the text of a [`SourceFile`].
pub type ByteIndex = usize;

/// A byte range of one [`SourceFile`], used to point diagnostics at the source.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the first byte of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the byte after the span.
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the file the span points into.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source_file).hash(state);
    }
}

/// A human-readable position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// Starts at 1.
    pub line: usize,

    /// Counted in characters, starting at 1.
    pub column: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    ///
    /// Returns [`None`] if the indices are out of order or do not fall on character boundaries.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();
        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Gets the text covered by the span.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the [`Location`] of the first byte.
    #[must_use]
    pub fn start_location(&self) -> Option<Location> { self.source_file.get_location(self.start) }

    /// Gets the [`Location`] just past the span.
    #[must_use]
    pub fn end_location(&self) -> Option<Location> { self.source_file.get_location(self.end) }
}

/// A peekable cursor over the characters of a [`SourceFile`], yielding their byte offsets.
#[derive(Debug, Clone, CopyGetters)]
pub struct Iterator<'a> {
    /// Gets the file being walked.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,
    iterator: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator<'a> {
    /// Looks at the next character without consuming it.
    pub fn peek(&mut self) -> Option<(ByteIndex, char)> { self.iterator.peek().copied() }

    /// Gets the byte index of the next character, or the length of the source at the end.
    pub fn position(&mut self) -> ByteIndex {
        self.peek()
            .map_or(self.source_file.content().len(), |(index, _)| index)
    }

    /// Creates a span from `start` up to (excluding) the current position of the iterator.
    ///
    /// `start` must be a byte index previously produced by this iterator.
    pub fn span_from(&mut self, start: ByteIndex) -> Span {
        Span {
            start,
            end: self.position(),
            source_file: self.source_file.clone(),
        }
    }
}

impl<'a> std::iter::Iterator for Iterator<'a> {
    type Item = (ByteIndex, char);

    fn next(&mut self) -> Option<Self::Item> { self.iterator.next() }
}

/// Splits `text` into the byte ranges of its lines, terminators included.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. There is always at least one range; the last
/// one holds whatever follows the final terminator.
fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut line_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        let terminator = match (bytes[index], bytes.get(index + 1)) {
            (b'\r', Some(b'\n')) => 2,
            (b'\n' | b'\r', _) => 1,
            _ => 0,
        };

        if terminator == 0 {
            index += 1;
            continue;
        }

        index += terminator;
        ranges.push(line_start..index);
        line_start = index;
    }

    ranges.push(line_start..text.len());
    ranges
}
