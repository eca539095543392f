//! Terminal rendering — turns reports into printable strings.
//!
//! Every renderer returns a `String` instead of printing so the command layer
//! decides where output goes and tests can inspect it.
pub mod summary;
pub mod types;

pub use summary::render_summary;
pub use types::render_types;

use crate::theme::Theme;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// A titled single-cell box, the terminal equivalent of a panel.
pub(crate) fn panel(title: &str, lines: &[String], border: Color) -> Table {
    let mut table = base_table();
    table.set_header(vec![Cell::new(title)
        .fg(border)
        .add_attribute(Attribute::Bold)]);
    table.add_row(vec![Cell::new(lines.join("\n"))]);
    table
}

/// A two-column listing: left column text, right column right-aligned.
pub(crate) fn listing(
    headers: [&str; 2],
    rows: impl IntoIterator<Item = (String, String)>,
    theme: &Theme,
    left: Color,
    right: Color,
) -> Table {
    let mut table = base_table();
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(theme.header).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    for (l, r) in rows {
        table.add_row(vec![
            Cell::new(l).fg(left),
            Cell::new(r).fg(right).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}
