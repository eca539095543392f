//! Colour scheme for terminal output.
//!
//! All colours are defined here so the renderers reference semantically
//! named values rather than raw terminal colours. comfy-table drops the
//! styling automatically when stdout is not a terminal.
use comfy_table::Color;

/// Semantic colour palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Color,
    pub path: Color,
    pub size: Color,
    pub count: Color,
    pub summary_border: Color,
    pub types_border: Color,
}

impl Theme {
    /// The only palette; tuned for dark and light terminals alike.
    pub const fn standard() -> Self {
        Self {
            header: Color::Magenta,
            path: Color::Cyan,
            size: Color::Yellow,
            count: Color::Yellow,
            summary_border: Color::Green,
            types_border: Color::Blue,
        }
    }
}
