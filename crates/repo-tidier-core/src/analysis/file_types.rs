//! File type counts — how many records carry each extension.
//!
//! Records without an extension are grouped under the
//! [`NO_EXTENSION`](crate::model::NO_EXTENSION) sentinel like any other type.
use crate::model::FileRecord;
use compact_str::CompactString;
use serde::Serialize;
use std::collections::HashMap;

/// Number of records sharing one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    pub extension: CompactString,
    pub count: u64,
}

/// Per-extension counts, most common first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCountReport {
    /// Sorted by descending count, then ascending extension; cut to `top`.
    pub counts: Vec<ExtensionCount>,
    /// Distinct extensions in the whole record set, before any cut.
    pub total_unique_types: usize,
    /// Display hint: show only `total_unique_types`.
    pub summary_only: bool,
}

impl TypeCountReport {
    /// `true` when `top` hid some extensions.
    pub fn is_truncated(&self) -> bool {
        self.counts.len() < self.total_unique_types
    }
}

/// Count records per extension.
///
/// Directory records are counted like files; callers that want files only
/// scan with `files_only`. A `top` of `None` or `Some(0)` keeps every type.
pub fn count_types(
    records: &[FileRecord],
    top: Option<usize>,
    summary_only: bool,
) -> TypeCountReport {
    let mut tally: HashMap<&str, u64> = HashMap::new();
    for record in records {
        *tally.entry(record.extension.as_str()).or_insert(0) += 1;
    }
    let total_unique_types = tally.len();

    let mut counts: Vec<ExtensionCount> = tally
        .into_iter()
        .map(|(extension, count)| ExtensionCount {
            extension: CompactString::new(extension),
            count,
        })
        .collect();
    counts.sort_unstable_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.extension.cmp(&b.extension))
    });
    if let Some(top) = top.filter(|&n| n > 0) {
        counts.truncate(top);
    }

    TypeCountReport {
        counts,
        total_unique_types,
        summary_only,
    }
}
