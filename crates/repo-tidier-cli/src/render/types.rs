//! `types` command output.
use super::{listing, panel};
use crate::theme::Theme;
use repo_tidier_core::analysis::TypeCountReport;
use repo_tidier_core::model::size::{format_count, pluralise};
use std::path::Path;

/// Render a type-count report. Honours `summary_only`.
pub fn render_types(root: &Path, report: &TypeCountReport, theme: &Theme) -> String {
    if report.total_unique_types == 0 {
        return format!("No file types found in {}", root.display());
    }

    let unique = report.total_unique_types as u64;
    if report.summary_only {
        let lines = [pluralise(unique, "unique file type")];
        return panel("File Types Summary", &lines, theme.types_border).to_string();
    }

    let mut header = format!("Found {} in {}", pluralise(unique, "file type"), root.display());
    if report.is_truncated() {
        header.push_str(&format!(" (showing top {})", report.counts.len()));
    }

    let rows = report.counts.iter().map(|c| {
        let noun = if c.count == 1 { "file" } else { "files" };
        (c.extension.to_string(), format!("{} {noun}", format_count(c.count)))
    });

    format!(
        "{}\n{}",
        panel("File Types", &[header], theme.types_border),
        listing(["Extension", "Count"], rows, theme, theme.path, theme.count)
    )
}
