//! Split-Point Selection
//!
//! Decides where to cut an ordered line sequence into N parts so that each
//! part's total character count lands as close as possible to an even share,
//! without ever splitting a line across two parts. Pure planning only: the
//! partitioner sees per-line character lengths and produces line-index
//! ranges; all file I/O happens elsewhere.

pub mod planner;
pub mod types;

// Re-export the partitioner and its range type
pub use planner::Partitioner;
pub use types::PartRange;
