use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::errors::{Result, SplitError};

/// Emits sequential part files for one input file.
///
/// Output names are always `<basename>.partNNN` with a 3-digit, 1-based
/// index, derived from the input's final path component regardless of which
/// directory the input lives in. Existing files with the same name are
/// overwritten.
pub struct PartWriter {
    base_name: String,
    output_dir: PathBuf,
}

/// Record of one emitted part file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartFile {
    pub file_name: String,
    pub lines: usize,
    pub chars: usize,
}

impl PartWriter {
    /// Writer emitting into the current working directory
    pub fn new(input_path: &Path) -> Self {
        Self::with_output_dir(input_path, PathBuf::from("."))
    }

    /// Writer emitting into an explicit directory
    pub fn with_output_dir(input_path: &Path, output_dir: PathBuf) -> Self {
        let base_name = input_path
            .file_name()
            .unwrap_or_else(|| input_path.as_os_str())
            .to_string_lossy()
            .into_owned();

        Self {
            base_name,
            output_dir,
        }
    }

    /// Name of the part file for a 0-based part id: `<basename>.partNNN`
    pub fn part_file_name(&self, part_id: usize) -> String {
        format!("{}.part{:03}", self.base_name, part_id + 1)
    }

    /// Create (or overwrite) one part file with the given contents.
    ///
    /// Failure leaves any parts already written in place; there is no
    /// rollback.
    pub fn write_part(&self, part_id: usize, contents: &str) -> Result<PartFile> {
        let file_name = self.part_file_name(part_id);
        let path = self.output_dir.join(&file_name);

        fs::write(&path, contents).map_err(|source| SplitError::Write {
            path: path.clone(),
            source,
        })?;

        let lines = contents.split_inclusive('\n').count();
        info!("Created '{}' with {} lines", file_name, lines);

        Ok(PartFile {
            file_name,
            lines,
            chars: contents.chars().count(),
        })
    }
}
