//! Size summary — totals, average, extremes, and a sorted listing.
use crate::model::FileRecord;
use serde::Serialize;
use std::cmp::Ordering;

/// Listing order for [`SummaryReport::entries`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Numeric on `size_bytes`.
    #[default]
    Size,
    /// Case-insensitive on the relative path.
    Name,
}

/// Aggregate statistics over a scan.
///
/// `total_files`, `total_size_bytes` and `average_size_bytes` always cover the
/// full record set; only `entries` is subject to the display limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub average_size_bytes: f64,
    pub largest: Option<FileRecord>,
    pub smallest: Option<FileRecord>,
    pub entries: Vec<FileRecord>,
}

impl SummaryReport {
    /// `true` when the display limit dropped some records from `entries`.
    pub fn is_truncated(&self) -> bool {
        self.entries.len() < self.total_files
    }
}

/// Summarise `records`.
///
/// `reverse` gives descending order (largest first, or Z to A for names).
/// The sort is stable, so records with equal keys keep scan order. A `limit`
/// of `None` or `Some(0)` shows every entry.
pub fn summarize(
    records: &[FileRecord],
    sort_by: SortKey,
    reverse: bool,
    limit: Option<usize>,
) -> SummaryReport {
    let total_files = records.len();
    let total_size_bytes: u64 = records.iter().map(|r| r.size_bytes).sum();
    let average_size_bytes = if total_files == 0 {
        0.0
    } else {
        total_size_bytes as f64 / total_files as f64
    };

    // First-encountered record wins ties in both directions.
    let mut largest: Option<&FileRecord> = None;
    let mut smallest: Option<&FileRecord> = None;
    for record in records {
        if largest.is_none_or(|l| record.size_bytes > l.size_bytes) {
            largest = Some(record);
        }
        if smallest.is_none_or(|s| record.size_bytes < s.size_bytes) {
            smallest = Some(record);
        }
    }

    let mut entries = records.to_vec();
    entries.sort_by(|a, b| {
        let ord = compare(a, b, sort_by);
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    });
    if let Some(limit) = limit.filter(|&n| n > 0) {
        entries.truncate(limit);
    }

    SummaryReport {
        total_files,
        total_size_bytes,
        average_size_bytes,
        largest: largest.cloned(),
        smallest: smallest.cloned(),
        entries,
    }
}

fn compare(a: &FileRecord, b: &FileRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Size => a.size_bytes.cmp(&b.size_bytes),
        SortKey::Name => {
            let a_path = a.relative_path.to_string_lossy();
            let b_path = b.relative_path.to_string_lossy();
            a_path
                .to_lowercase()
                .cmp(&b_path.to_lowercase())
                .then_with(|| a_path.cmp(&b_path))
        }
    }
}
