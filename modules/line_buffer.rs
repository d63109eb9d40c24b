use std::fs;
use std::ops::Range;
use std::path::Path;

use super::errors::{Result, SplitError};
use super::partitioner::PartRange;

/// Whole-file line storage with terminators preserved.
///
/// The entire file is held as one owned UTF-8 string; lines are byte spans
/// over it, so slicing a contiguous run of lines is zero-copy and writes
/// back the exact bytes that were read (no terminator normalization).
/// Character counts are Unicode scalar values, not bytes.
#[derive(Debug)]
pub struct LineBuffer {
    text: String,
    spans: Vec<Range<usize>>,
}

impl LineBuffer {
    /// Read an entire file into memory and segment it into lines.
    ///
    /// A missing path is reported as `InputNotFound`; any read failure
    /// afterwards (permissions, invalid UTF-8) as `Read`.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SplitError::InputNotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path).map_err(|source| SplitError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_text(text))
    }

    /// Build a buffer from text already in memory.
    ///
    /// A line ends after each `\n` (a preceding `\r` stays inside its
    /// line); a final fragment without a terminator still counts as a line.
    pub fn from_text(text: String) -> Self {
        let mut spans = Vec::new();
        let mut start = 0;
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                spans.push(start..idx + 1);
                start = idx + 1;
            }
        }
        if start < text.len() {
            spans.push(start..text.len());
        }

        Self { text, spans }
    }

    pub fn line_count(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Per-line lengths in characters, terminators included.
    pub fn char_lengths(&self) -> Vec<usize> {
        self.spans
            .iter()
            .map(|span| self.text[span.clone()].chars().count())
            .collect()
    }

    /// Total characters across the whole file.
    pub fn total_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// The exact text of one line, terminator included.
    pub fn line(&self, index: usize) -> &str {
        &self.text[self.spans[index].clone()]
    }

    /// The exact text of a contiguous run of lines.
    ///
    /// `range` must come from a partition over this buffer's line count;
    /// line spans are contiguous, so the result is a single slice of the
    /// original text.
    pub fn slice(&self, range: PartRange) -> &str {
        if range.is_empty() {
            return "";
        }
        let start = self.spans[range.start].start;
        let end = self.spans[range.end - 1].end;
        &self.text[start..end]
    }
}
