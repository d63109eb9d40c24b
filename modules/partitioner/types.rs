use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open range of line indices `[start, end)` assigned to one part.
///
/// Ranges produced by the partitioner are contiguous and ordered: each
/// range starts where the previous one ended, the first starts at 0, and
/// the last ends at the line count. Degenerate plans contain empty ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRange {
    pub start: usize,
    pub end: usize,
}

impl PartRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines in this part
    pub fn line_count(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}
