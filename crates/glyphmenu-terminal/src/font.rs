//! Font metrics for a character-cell grid.

use glyphmenu_core::FontMetrics;
use unicode_width::UnicodeWidthStr;

/// Measures text in terminal columns; every line is one row tall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFont;

impl CellFont {
    /// Create the cell font.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FontMetrics for CellFont {
    fn width_of(&self, text: &str) -> f32 {
        text.width() as f32
    }

    fn line_height(&self) -> f32 {
        1.0
    }
}
