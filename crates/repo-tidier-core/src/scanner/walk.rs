//! Sequential directory walker built on `jwalk`.
//!
//! `jwalk` is driven in [`jwalk::Parallelism::Serial`] mode: one thread, one
//! directory at a time, depth-first. Exclusions are enforced from the
//! `process_read_dir` callback, which runs on each directory's children
//! before they are yielded or descended into. Removing an excluded child
//! there is what prunes its whole subtree.
use crate::error::ScanError;
use crate::model::FileRecord;
use crate::scanner::config::ScanConfig;
use crate::scanner::progress::ScanEvent;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Scan `config.root` and return every kept entry.
///
/// Fails only when the root is missing or not a directory. Unreadable
/// subtrees are skipped silently (apart from a `warn!` log line).
pub fn scan(config: &ScanConfig) -> Result<Vec<FileRecord>, ScanError> {
    scan_with_observer(config, |_| {})
}

/// Like [`scan`], but reports skips and completion to `observer` as they happen.
pub fn scan_with_observer<F>(
    config: &ScanConfig,
    observer: F,
) -> Result<Vec<FileRecord>, ScanError>
where
    F: FnMut(ScanEvent),
{
    let root = config.root();
    validate_root(root)?;

    info!("Starting scan of {}", root.display());
    let start = Instant::now();

    let mut records: Vec<FileRecord> = Vec::new();
    let mut dirs_visited: u64 = 1; // the root
    let mut reporter = Reporter::new(observer);

    let excluded = config.exclusion_set();
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(move |_depth, _dir, _state, children| {
            children.retain(|child| match child {
                Ok(entry) => !excluded.contains(&entry.file_name),
                // Keep errors so the iterator reports them.
                Err(_) => true,
            });
        });

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // jwalk errors are read_dir failures, typically access denied.
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                reporter.skip(path, err.to_string());
                continue;
            }
        };

        // The root itself is not a record.
        if entry.depth == 0 {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path.as_path()).to_path_buf();

        if entry.file_type().is_dir() {
            dirs_visited += 1;
            let record = FileRecord::new_dir(relative);
            if config.keeps(&record) {
                records.push(record);
            }
            continue;
        }

        // Symlinks are sized by their target and never descended into.
        // A dangling link fails here and is skipped.
        let record = match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => FileRecord::new_dir(relative),
            Ok(meta) => FileRecord::new_file(relative, meta.len()),
            Err(err) => {
                reporter.skip(path, err.to_string());
                continue;
            }
        };
        if config.keeps(&record) {
            records.push(record);
        }
    }

    let duration = start.elapsed();
    debug!(
        "Scan complete: {} records, {} dirs, {} skipped in {:?}",
        records.len(),
        dirs_visited,
        reporter.skipped,
        duration
    );
    reporter.complete(records.len(), dirs_visited, duration);

    Ok(records)
}

/// Counts recoverable skips and forwards every event to the caller.
struct Reporter<F> {
    observer: F,
    skipped: u64,
}

impl<F: FnMut(ScanEvent)> Reporter<F> {
    fn new(observer: F) -> Self {
        Self {
            observer,
            skipped: 0,
        }
    }

    fn skip(&mut self, path: PathBuf, message: String) {
        self.skipped += 1;
        warn!("Skipping {}: {message}", path.display());
        (self.observer)(ScanEvent::Skipped { path, message });
    }

    fn complete(mut self, records: usize, dirs_visited: u64, duration: Duration) {
        (self.observer)(ScanEvent::Complete {
            records,
            dirs_visited,
            skipped: self.skipped,
            duration,
        });
    }
}

/// Reject roots that are missing or are not directories.
fn validate_root(root: &Path) -> Result<(), ScanError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(root.to_path_buf())),
        Err(_) => Err(ScanError::NotFound(root.to_path_buf())),
    }
}
