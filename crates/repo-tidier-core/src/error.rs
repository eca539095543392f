//! Errors that abort a scan before any record is produced.
//!
//! Unreadable subdirectories are not errors: the scanner skips them and
//! reports a [`crate::scanner::ScanEvent::Skipped`] instead.
use std::path::PathBuf;
use thiserror::Error;

/// The scan root could not be used.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
