//! # corpus-splitter
//!
//! Splits a text file into a requested number of parts, balancing the parts
//! by total character count rather than line count while never cutting a
//! line across two files:
//! - Whole-file, terminator-preserving line segmentation
//! - Pure split-point selection over cumulative character lengths, with a
//!   deterministic round-up-on-tie and degeneracy handling
//! - Sequential `<basename>.partNNN` output files
//!
//! ## Example Usage
//!
//! ```no_run
//! use corpus_splitter::SplitJob;
//!
//! fn main() -> anyhow::Result<()> {
//!     let report = SplitJob::new("corpus.txt", 4).run()?;
//!
//!     println!(
//!         "Wrote {} part files covering {} lines ({} chars)",
//!         report.parts.len(),
//!         report.total_lines,
//!         report.total_chars
//!     );
//!
//!     Ok(())
//! }
//! ```

// Include the modules from the modules directory
#[path = "../modules/mod.rs"]
pub mod modules;

// Re-export everything from modules for easy access
pub use modules::*;

// Re-export commonly used external types for convenience
pub use serde::{Deserialize, Serialize};
pub use tracing;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library information
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
