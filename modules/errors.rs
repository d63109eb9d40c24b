use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while splitting a file.
///
/// Every variant is fatal to the run: there is no retry and no rollback of
/// part files already written when a later write fails.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Part count failed validation
    #[error("number of parts must be a positive integer, got {0}")]
    InvalidPartCount(usize),

    /// Input path does not exist
    #[error("input file not found at '{}'", .0.display())]
    InputNotFound(PathBuf),

    /// Input exists but could not be read (permissions, invalid UTF-8, ...)
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output part file could not be created or written
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for split operations.
pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitError::InvalidPartCount(0);
        assert_eq!(
            err.to_string(),
            "number of parts must be a positive integer, got 0"
        );

        let err = SplitError::InputNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "input file not found at 'missing.txt'");
    }

    #[test]
    fn test_io_errors_keep_path_and_source() {
        let err = SplitError::Read {
            path: PathBuf::from("corpus.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("corpus.txt"));
        assert!(err.to_string().contains("denied"));
    }
}
