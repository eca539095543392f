//! Scanner module — turns a directory tree into a flat list of records.
//!
//! The walk is a single sequential `jwalk` traversal. Exclusions are applied
//! while each directory is read, so an excluded subtree is never opened; the
//! extension filter and the files-only flag are applied per entry afterwards.
//!
//! Unreadable entries do not abort the scan. They are logged, reported to the
//! caller's observer as [`ScanEvent::Skipped`], and left out of the result.
pub mod config;
pub mod progress;
pub mod walk;

pub use config::{ScanConfig, DEFAULT_EXCLUDES};
pub use progress::ScanEvent;
pub use walk::{scan, scan_with_observer};
