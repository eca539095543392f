//! Repo Tidier Core — scanning, aggregation, and data model.
//!
//! This crate contains all business logic with zero terminal dependencies.
//! Frontends (the bundled CLI, or anything else) call the scanner, hand the
//! resulting records to one of the aggregation passes, and render the report.
//!
//! # Modules
//!
//! - [`model`] — Flat file records, extension handling, size formatting.
//! - [`scanner`] — Sequential directory walk with exclusion pruning and filters.
//! - [`analysis`] — Size summaries and per-extension counts over scan results.
//! - [`error`] — Fatal scan errors.
pub mod analysis;
pub mod error;
pub mod model;
pub mod scanner;

pub use analysis::{count_types, summarize, SortKey, SummaryReport, TypeCountReport};
pub use error::ScanError;
pub use model::{FileRecord, NO_EXTENSION};
pub use scanner::{scan, scan_with_observer, ScanConfig, ScanEvent};
