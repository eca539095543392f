//! Analysis modules — pure aggregation passes over scan results.
//!
//! Neither pass touches the filesystem; both take the records by slice so a
//! frontend can run several reports over a single scan.
pub mod file_types;
pub mod summary;

pub use file_types::{count_types, ExtensionCount, TypeCountReport};
pub use summary::{summarize, SortKey, SummaryReport};
