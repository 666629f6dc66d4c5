//! Vertical layout shared by menu sizing and rendering.

use crate::item::MenuItem;
use glyphmenu_core::{FontMetrics, MenuStyle, Size};
use std::borrow::Cow;

/// One laid-out row.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow<'a> {
    /// Position of the item in the menu
    pub index: usize,
    /// Label captured during the pass (empty for spacers)
    pub label: Cow<'a, str>,
    /// Measured label width (zero for spacers)
    pub width: f32,
    /// Offset of the row's top edge from the top of the block
    pub top: f32,
    /// Row height, excluding the spacing that follows it
    pub height: f32,
}

impl MenuRow<'_> {
    /// Whether this row is a blank spacer.
    #[must_use]
    pub fn is_spacer(&self) -> bool {
        self.label.is_empty()
    }
}

/// Result of a single forward pass over a menu's items.
///
/// Each label is queried and measured exactly once, so sizing and drawing
/// from the same layout always agree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuLayout<'a> {
    rows: Vec<MenuRow<'a>>,
    size: Size,
}

impl<'a> MenuLayout<'a> {
    /// Measure `items` top to bottom.
    #[must_use]
    pub fn compute(
        items: &'a [Box<dyn MenuItem>],
        font: &dyn FontMetrics,
        style: &MenuStyle,
    ) -> Self {
        let mut rows = Vec::with_capacity(items.len());
        let mut size = Size::ZERO;

        for (index, item) in items.iter().enumerate() {
            let label = item.label();
            let (width, height) = if label.is_empty() {
                (0.0, style.spacer_height)
            } else {
                (font.width_of(&label), font.line_height())
            };

            rows.push(MenuRow {
                index,
                label,
                width,
                top: size.height,
                height,
            });
            size.width = size.width.max(width);
            size.height += height + style.spacing;
        }

        if !rows.is_empty() {
            size.height -= style.spacing;
        }

        tracing::trace!(
            rows = rows.len(),
            width = size.width,
            height = size.height,
            "menu layout computed"
        );

        Self { rows, size }
    }

    /// Bounding size of the block: widest label by total height.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Laid-out rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[MenuRow<'a>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the layout has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MenuOption, Spacer};
    use glyphmenu_test::FixedFont;
    use proptest::prelude::*;

    fn boxed(items: Vec<Box<dyn MenuItem>>) -> Vec<Box<dyn MenuItem>> {
        items
    }

    #[test]
    fn test_empty_layout() {
        let items = boxed(vec![]);
        let font = FixedFont::new(6.0, 10.0);
        let layout = MenuLayout::compute(&items, &font, &MenuStyle::default());
        assert!(layout.is_empty());
        assert_eq!(layout.size(), Size::ZERO);
    }

    #[test]
    fn test_single_row_has_no_trailing_spacing() {
        let items = boxed(vec![Box::new(MenuOption::new("Play"))]);
        let font = FixedFont::new(6.0, 10.0);
        let layout = MenuLayout::compute(&items, &font, &MenuStyle::default());
        assert_eq!(layout.size(), Size::new(24.0, 10.0));
        assert_eq!(layout.rows()[0].top, 0.0);
    }

    #[test]
    fn test_mixed_rows() {
        let items = boxed(vec![
            Box::new(Spacer),
            Box::new(MenuOption::new("Start")),
            Box::new(MenuOption::new("Quit")),
        ]);
        let font = FixedFont::new(6.0, 10.0);
        let layout = MenuLayout::compute(&items, &font, &MenuStyle::default());

        // 12 + 4 + 10 + 4 + 10
        assert_eq!(layout.size(), Size::new(30.0, 40.0));
        let tops: Vec<f32> = layout.rows().iter().map(|row| row.top).collect();
        assert_eq!(tops, vec![0.0, 16.0, 30.0]);
        assert!(layout.rows()[0].is_spacer());
        assert!(!layout.rows()[1].is_spacer());
        assert_eq!(layout.rows()[2].label, "Quit");
        assert_eq!(layout.rows()[2].width, 24.0);
    }

    #[test]
    fn test_spacers_are_not_measured() {
        let items = boxed(vec![Box::new(Spacer), Box::new(Spacer)]);
        let font = FixedFont::new(6.0, 10.0);
        let layout = MenuLayout::compute(&items, &font, &MenuStyle::default());
        assert_eq!(font.measurements(), 0);
        assert_eq!(layout.size(), Size::new(0.0, 28.0));
    }

    #[test]
    fn test_each_label_measured_once() {
        let items = boxed(vec![
            Box::new(MenuOption::new("A")),
            Box::new(Spacer),
            Box::new(MenuOption::new("B")),
        ]);
        let font = FixedFont::new(6.0, 10.0);
        let _ = MenuLayout::compute(&items, &font, &MenuStyle::default());
        assert_eq!(font.measurements(), 2);
    }

    #[test]
    fn test_scaled_style() {
        let items = boxed(vec![Box::new(Spacer), Box::new(MenuOption::new("X"))]);
        let font = FixedFont::new(6.0, 10.0);
        let style = MenuStyle::default().scaled(2.0);
        let layout = MenuLayout::compute(&items, &font, &style);
        assert_eq!(layout.size().height, 24.0 + 8.0 + 10.0);
    }

    proptest! {
        #[test]
        fn prop_height_is_sum_of_rows_and_gaps(
            kinds in proptest::collection::vec(any::<bool>(), 0..16),
            spacing in 0.0f32..10.0,
            spacer_height in 0.0f32..30.0,
        ) {
            let items: Vec<Box<dyn MenuItem>> = kinds
                .iter()
                .map(|&spacer| -> Box<dyn MenuItem> {
                    if spacer { Box::new(Spacer) } else { Box::new(MenuOption::new("Row")) }
                })
                .collect();
            let font = FixedFont::new(6.0, 10.0);
            let style = MenuStyle::default().spacing(spacing).spacer_height(spacer_height);
            let layout = MenuLayout::compute(&items, &font, &style);

            let rows = layout.rows();
            for pair in rows.windows(2) {
                let expected = pair[0].top + pair[0].height + spacing;
                prop_assert!((pair[1].top - expected).abs() < 1e-3);
            }
            if let Some(last) = rows.last() {
                prop_assert!((layout.size().height - (last.top + last.height)).abs() < 1e-3);
            } else {
                prop_assert_eq!(layout.size(), Size::ZERO);
            }
        }
    }
}
