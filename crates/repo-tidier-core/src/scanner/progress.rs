//! Scan events — lightweight notifications delivered to the caller's
//! observer while the walk runs.
use std::path::PathBuf;
use std::time::Duration;

/// Something the scanner wants the caller to know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// An entry or subtree could not be read and was left out.
    Skipped { path: PathBuf, message: String },
    /// The walk finished. Counts describe what was kept in the result.
    Complete {
        records: usize,
        dirs_visited: u64,
        skipped: u64,
        duration: Duration,
    },
}

impl ScanEvent {
    /// `true` for [`ScanEvent::Skipped`].
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}
