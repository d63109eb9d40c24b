//! Orchestration of a complete split run

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::errors::{Result, SplitError};
use super::line_buffer::LineBuffer;
use super::part_writer::{PartFile, PartWriter};
use super::partitioner::Partitioner;

/// One complete split run: read the input, plan the cuts, emit the parts.
///
/// The job owns no process-level concerns; it returns typed errors and the
/// caller decides what termination looks like.
pub struct SplitJob {
    input_path: PathBuf,
    num_parts: usize,
    output_dir: Option<PathBuf>,
}

/// Summary of a completed split run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    pub input_path: String,
    pub num_parts: usize,
    pub total_lines: usize,
    pub total_chars: usize,
    pub processing_time_ms: u64,
    /// One entry per emitted file, in part order
    pub parts: Vec<PartFile>,
}

impl SplitJob {
    pub fn new(input_path: impl Into<PathBuf>, num_parts: usize) -> Self {
        Self {
            input_path: input_path.into(),
            num_parts,
            output_dir: None,
        }
    }

    /// Emit part files into `output_dir` instead of the working directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Execute the split.
    ///
    /// Exactly `num_parts` files are written on success, trailing ones
    /// empty when the input has fewer usable split points than requested.
    /// On a write failure the run stops immediately; files already emitted
    /// stay in place.
    pub fn run(&self) -> Result<SplitReport> {
        let start_time = Instant::now();

        if self.num_parts == 0 {
            return Err(SplitError::InvalidPartCount(self.num_parts));
        }

        let buffer = LineBuffer::from_path(&self.input_path)?;
        let writer = match &self.output_dir {
            Some(dir) => PartWriter::with_output_dir(&self.input_path, dir.clone()),
            None => PartWriter::new(&self.input_path),
        };

        let parts = if buffer.is_empty() {
            warn!(
                "Input file '{}' is empty, creating {} empty parts",
                self.input_path.display(),
                self.num_parts
            );
            self.write_empty_parts(&writer)?
        } else {
            info!(
                "Splitting '{}' ({} lines, {} chars) into {} parts",
                self.input_path.display(),
                buffer.line_count(),
                buffer.total_chars(),
                self.num_parts
            );
            self.write_planned_parts(&writer, &buffer)?
        };

        Ok(SplitReport {
            input_path: self.input_path.display().to_string(),
            num_parts: self.num_parts,
            total_lines: buffer.line_count(),
            total_chars: buffer.total_chars(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
            parts,
        })
    }

    /// Empty input skips split arithmetic entirely and just materializes
    /// the requested number of empty files
    fn write_empty_parts(&self, writer: &PartWriter) -> Result<Vec<PartFile>> {
        let mut parts = Vec::with_capacity(self.num_parts);
        for part_id in 0..self.num_parts {
            parts.push(writer.write_part(part_id, "")?);
        }
        Ok(parts)
    }

    fn write_planned_parts(&self, writer: &PartWriter, buffer: &LineBuffer) -> Result<Vec<PartFile>> {
        let ranges = Partitioner::new(self.num_parts).partition(&buffer.char_lengths());

        let mut parts = Vec::with_capacity(self.num_parts);
        for (part_id, range) in ranges.iter().enumerate() {
            parts.push(writer.write_part(part_id, buffer.slice(*range))?);
        }
        Ok(parts)
    }
}
