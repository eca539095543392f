//! What to scan and which entries to keep.
use crate::model::{normalise_extension, FileRecord};
use compact_str::CompactString;
use std::collections::{BTreeSet, HashSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Tooling directories that are pruned from every scan.
///
/// User-supplied exclusions are added to this list, never substituted for it.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".venv",
    "__pycache__",
    "node_modules",
    ".pytest_cache",
    ".mypy_cache",
];

/// Scan parameters supplied by the caller. Read-only to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory to walk.
    pub root: PathBuf,
    /// Normalised extensions to keep (`.py`). Empty means keep everything.
    pub extensions_filter: BTreeSet<CompactString>,
    /// Extra entry names to prune, on top of [`DEFAULT_EXCLUDES`].
    pub exclude_patterns: BTreeSet<String>,
    /// Leave directory entries out of the result.
    pub files_only: bool,
}

impl ScanConfig {
    /// Scan everything under `root` except the default exclusions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions_filter: BTreeSet::new(),
            exclude_patterns: BTreeSet::new(),
            files_only: false,
        }
    }

    pub fn files_only(mut self, files_only: bool) -> Self {
        self.files_only = files_only;
        self
    }

    /// Keep only files with one of these extensions. Accepts `py`, `.py` or `.PY`.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions_filter
            .extend(extensions.into_iter().map(|e| normalise_extension(e.as_ref())));
        self
    }

    /// Prune entries with any of these exact names.
    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every name that prunes an entry: defaults plus user patterns.
    ///
    /// Returned as an owned set so it can move into the walker's
    /// directory-read callback.
    pub fn exclusion_set(&self) -> HashSet<OsString> {
        DEFAULT_EXCLUDES
            .iter()
            .map(OsString::from)
            .chain(self.exclude_patterns.iter().map(OsString::from))
            .collect()
    }

    /// Whether a record survives the extension filter and the files-only flag.
    /// Directories are never filtered by extension.
    pub fn keeps(&self, record: &FileRecord) -> bool {
        if record.is_directory {
            !self.files_only
        } else {
            self.keeps_extension(&record.extension)
        }
    }

    /// Whether a file with this (normalised) extension passes the filter.
    pub fn keeps_extension(&self, extension: &str) -> bool {
        self.extensions_filter.is_empty() || self.extensions_filter.contains(extension)
    }
}
