//! Monospaced font metrics.

use glyphmenu_core::FontMetrics;
use std::cell::Cell;

/// Font where every `char` has the same advance.
///
/// Counts `width_of` calls so tests can check how often labels are
/// measured per frame.
#[derive(Debug, Default)]
pub struct FixedFont {
    advance: f32,
    line_height: f32,
    measurements: Cell<usize>,
}

impl FixedFont {
    /// Create a font with the given per-char advance and line height.
    #[must_use]
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
            measurements: Cell::new(0),
        }
    }

    /// Number of `width_of` calls so far.
    #[must_use]
    pub fn measurements(&self) -> usize {
        self.measurements.get()
    }
}

impl FontMetrics for FixedFont {
    fn width_of(&self, text: &str) -> f32 {
        self.measurements.set(self.measurements.get() + 1);
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
