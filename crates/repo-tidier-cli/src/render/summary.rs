//! `summary` command output: a statistics panel, a file-type panel, and the
//! sorted listing.
use super::{listing, panel};
use crate::theme::Theme;
use repo_tidier_core::analysis::TypeCountReport;
use repo_tidier_core::model::size::{format_count, format_size, format_size_f64};
use repo_tidier_core::{FileRecord, SummaryReport};
use std::path::Path;

/// Extensions shown in the summary's file-type panel.
pub const TYPE_PANEL_ROWS: usize = 5;

/// Render the full summary screen.
///
/// `types` should be counted over the same scan with at most
/// [`TYPE_PANEL_ROWS`] rows; it is omitted when empty. `skipped` is the number
/// of unreadable entries the scanner left out.
pub fn render_summary(
    root: &Path,
    report: &SummaryReport,
    types: &TypeCountReport,
    skipped: u64,
    theme: &Theme,
) -> String {
    let mut out = String::new();

    let total_text = if report.is_truncated() {
        format!("{} total", format_count(report.total_files as u64))
    } else {
        format_count(report.total_files as u64)
    };
    let mut lines = vec![
        format!("Found {total_text} entries in {}", root.display()),
        format!("Total size: {}", format_size(report.total_size_bytes)),
        format!(
            "Shown: {} of {} | Avg size: {}",
            format_count(report.entries.len() as u64),
            format_count(report.total_files as u64),
            format_size_f64(report.average_size_bytes)
        ),
    ];
    if let Some(largest) = &report.largest {
        lines.push(format!("Largest: {}", describe(largest)));
    }
    if let Some(smallest) = &report.smallest {
        lines.push(format!("Smallest: {}", describe(smallest)));
    }
    if skipped > 0 {
        lines.push(format!("Skipped: {} unreadable", format_count(skipped)));
    }
    out.push_str(&panel("Summary", &lines, theme.summary_border).to_string());
    out.push('\n');

    if !types.counts.is_empty() {
        let mut type_lines: Vec<String> = types
            .counts
            .iter()
            .map(|c| format!("{}: {}", c.extension, format_count(c.count)))
            .collect();
        if types.is_truncated() {
            let hidden = types.total_unique_types - types.counts.len();
            type_lines.push(format!("... and {hidden} more"));
        }
        out.push_str(&panel("File Types", &type_lines, theme.types_border).to_string());
        out.push('\n');
    }

    let rows = report
        .entries
        .iter()
        .map(|r| (display_path(r), format_size(r.size_bytes)));
    out.push_str(&listing(["Path", "Size"], rows, theme, theme.path, theme.size).to_string());
    out
}

fn describe(record: &FileRecord) -> String {
    format!("{} ({})", record.name(), format_size(record.size_bytes))
}

/// Directories get a trailing separator so they stand out in the listing.
fn display_path(record: &FileRecord) -> String {
    let path = record.relative_path.display().to_string();
    if record.is_directory {
        format!("{path}{}", std::path::MAIN_SEPARATOR)
    } else {
        path
    }
}
