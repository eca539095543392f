//! A single entry produced by the scanner.
//!
//! Records are created once per visited filesystem entry and never mutated.
//! Paths are stored relative to the scan root so that reports stay readable
//! and two scans of the same tree compare equal regardless of where it lives.
use compact_str::{format_compact, CompactString};
use serde::Serialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Extension reported for entries that have none.
pub const NO_EXTENSION: &str = "(no extension)";

/// One file or directory found during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path relative to the scan root.
    pub relative_path: PathBuf,

    /// Logical size in bytes. Always 0 for directories: directory sizes are
    /// not rolled up from their children.
    pub size_bytes: u64,

    /// Lower-cased extension with its leading dot (`.py`), or [`NO_EXTENSION`].
    pub extension: CompactString,

    /// `true` if this record represents a directory.
    pub is_directory: bool,
}

impl FileRecord {
    /// Create a record for a regular file (or anything that is not a directory).
    pub fn new_file(relative_path: PathBuf, size_bytes: u64) -> Self {
        let extension = extension_of(&relative_path);
        Self {
            relative_path,
            size_bytes,
            extension,
            is_directory: false,
        }
    }

    /// Create a record for a directory. Directories always report size 0.
    pub fn new_dir(relative_path: PathBuf) -> Self {
        let extension = extension_of(&relative_path);
        Self {
            relative_path,
            size_bytes: 0,
            extension,
            is_directory: true,
        }
    }

    /// Final path component, e.g. `main.rs` for `src/main.rs`.
    pub fn name(&self) -> Cow<'_, str> {
        self.relative_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    }
}

/// Compute the extension of a path: the text after the last `.` of the file
/// name, lower-cased, with a leading dot.
///
/// Names without a dot, dotfiles without a further dot (`.bashrc`) and names
/// ending in a dot (`notes.`) have no extension.
pub fn extension_of(path: &Path) -> CompactString {
    match path.extension().map(|e| e.to_string_lossy()) {
        Some(ext) if !ext.is_empty() => format_compact!(".{}", ext.to_lowercase()),
        _ => CompactString::new(NO_EXTENSION),
    }
}

/// Normalise a user-supplied extension filter so that `py`, `.py` and `.PY`
/// all match records carrying `.py`.
///
/// An empty filter (or one made only of dots) selects extensionless files.
pub fn normalise_extension(raw: &str) -> CompactString {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        CompactString::new(NO_EXTENSION)
    } else {
        format_compact!(".{}", trimmed.to_lowercase())
    }
}
