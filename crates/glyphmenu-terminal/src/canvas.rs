//! Character-grid canvas that can be flushed to a terminal.

use crossterm::cursor::MoveTo;
use crossterm::style::{Color as CrosstermColor, Print, ResetColor, SetForegroundColor};
use crossterm::{queue, terminal::Clear, terminal::ClearType};
use glyphmenu_core::{Canvas, Color, Justify, Point, Transform2D};
use std::io::{self, BufWriter, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    symbol: char,
    color: Option<Color>,
    continuation: bool,
}

impl Cell {
    const BLANK: Self = Self {
        symbol: ' ',
        color: None,
        continuation: false,
    };
}

/// Fixed-size grid of colored characters implementing [`Canvas`].
///
/// Text anchors are mapped through the transform stack and snapped down to
/// whole cells. Glyphs that would fall outside the grid are clipped; wide
/// glyphs occupy two cells.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    transforms: Vec<Transform2D>,
}

impl CellCanvas {
    /// Create a blank grid.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
            transforms: Vec::new(),
        }
    }

    /// Grid width in columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Grid center, handy as a menu origin.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(f32::from(self.width) / 2.0, f32::from(self.height) / 2.0)
    }

    /// Blank every cell and drop pushed transforms.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
        self.transforms.clear();
    }

    /// Resize the grid, blanking it.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::new(width, height);
    }

    /// Rows as strings with trailing blanks trimmed.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                let line: String = row
                    .iter()
                    .filter(|cell| !cell.continuation)
                    .map(|cell| cell.symbol)
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Color of the glyph at a cell, if one was drawn there.
    #[must_use]
    pub fn color_at(&self, x: u16, y: u16) -> Option<Color> {
        self.index(i32::from(x), i32::from(y))
            .and_then(|idx| self.cells.get(idx))
            .and_then(|cell| cell.color)
    }

    /// Write the whole grid to `writer` using crossterm commands.
    pub fn flush<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut out = BufWriter::with_capacity(8192, writer);
        queue!(out, ResetColor, Clear(ClearType::All))?;

        let mut current: Option<Color> = None;
        for (y, row) in (0u16..).zip(self.rows()) {
            queue!(out, MoveTo(0, y))?;
            for cell in row.iter().filter(|cell| !cell.continuation) {
                if let Some(color) = cell.color {
                    if current != Some(color) {
                        let (r, g, b) = color.to_rgb8();
                        queue!(out, SetForegroundColor(CrosstermColor::Rgb { r, g, b }))?;
                        current = Some(color);
                    }
                }
                queue!(out, Print(cell.symbol))?;
            }
        }

        queue!(out, ResetColor)?;
        out.flush()
    }

    fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width.max(1)))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let in_bounds =
            (0..i32::from(self.width)).contains(&x) && (0..i32::from(self.height)).contains(&y);
        in_bounds.then(|| y as usize * usize::from(self.width) + x as usize)
    }

    fn current_transform(&self) -> Transform2D {
        self.transforms
            .last()
            .copied()
            .unwrap_or(Transform2D::IDENTITY)
    }
}

impl Canvas for CellCanvas {
    fn push_transform(&mut self, transform: Transform2D) {
        let composed = self.current_transform().then(&transform);
        self.transforms.push(composed);
    }

    fn pop_transform(&mut self) {
        self.transforms.pop();
    }

    fn draw_text(&mut self, text: &str, at: Point, justify: Justify, color: Color) {
        let anchor = self.current_transform().apply(at);
        let left = (anchor.x - justify.x * text.width() as f32).floor() as i32;
        let row = (anchor.y - justify.y).floor() as i32;

        let mut column = left;
        for symbol in text.chars() {
            let width = symbol.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            // Wide glyphs are only drawn when both halves fit.
            let head = self.index(column, row);
            let tail = self.index(column + width - 1, row);
            if let (Some(head), Some(_)) = (head, tail) {
                self.cells[head] = Cell {
                    symbol,
                    color: Some(color),
                    continuation: false,
                };
                for offset in 1..width {
                    if let Some(idx) = self.index(column + offset, row) {
                        self.cells[idx] = Cell {
                            symbol: ' ',
                            color: Some(color),
                            continuation: true,
                        };
                    }
                }
            }
            column += width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = CellCanvas::new(4, 2);
        assert_eq!(canvas.lines(), vec!["", ""]);
        assert_eq!(canvas.color_at(0, 0), None);
        assert_eq!(canvas.center(), Point::new(2.0, 1.0));
    }

    #[test]
    fn test_draw_top_left() {
        let mut canvas = CellCanvas::new(10, 2);
        canvas.draw_text("Hi", Point::new(1.0, 1.0), Justify::TOP_LEFT, Color::WHITE);
        assert_eq!(canvas.lines(), vec!["", " Hi"]);
        assert_eq!(canvas.color_at(1, 1), Some(Color::WHITE));
        assert_eq!(canvas.color_at(3, 1), None);
    }

    #[test]
    fn test_draw_top_center() {
        let mut canvas = CellCanvas::new(10, 1);
        canvas.draw_text("abcd", Point::new(5.0, 0.0), Justify::TOP_CENTER, Color::WHITE);
        assert_eq!(canvas.lines(), vec!["   abcd"]);
    }

    #[test]
    fn test_transforms_translate_and_pop() {
        let mut canvas = CellCanvas::new(10, 3);
        canvas.push_transform(Transform2D::translate(2.0, 1.0));
        canvas.draw_text("x", Point::ORIGIN, Justify::TOP_LEFT, Color::WHITE);
        canvas.pop_transform();
        canvas.draw_text("y", Point::ORIGIN, Justify::TOP_LEFT, Color::WHITE);
        assert_eq!(canvas.lines(), vec!["y", "  x", ""]);
    }

    #[test]
    fn test_clipping() {
        let mut canvas = CellCanvas::new(4, 1);
        canvas.draw_text("abcdef", Point::new(-2.0, 0.0), Justify::TOP_LEFT, Color::WHITE);
        canvas.draw_text("zz", Point::new(0.0, 5.0), Justify::TOP_LEFT, Color::WHITE);
        assert_eq!(canvas.lines(), vec!["cdef"]);
    }

    #[test]
    fn test_wide_glyphs() {
        let mut canvas = CellCanvas::new(5, 1);
        canvas.draw_text("日本", Point::ORIGIN, Justify::TOP_LEFT, Color::WHITE);
        assert_eq!(canvas.lines(), vec!["日本"]);

        let mut canvas = CellCanvas::new(3, 1);
        canvas.draw_text("日本", Point::ORIGIN, Justify::TOP_LEFT, Color::WHITE);
        assert_eq!(canvas.lines(), vec!["日"]);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut canvas = CellCanvas::new(4, 1);
        canvas.push_transform(Transform2D::translate(1.0, 0.0));
        canvas.draw_text("a", Point::ORIGIN, Justify::TOP_LEFT, Color::WHITE);
        canvas.clear();
        canvas.draw_text("b", Point::ORIGIN, Justify::TOP_LEFT, Color::WHITE);
        assert_eq!(canvas.lines(), vec!["b"]);

        canvas.resize(2, 2);
        assert_eq!(canvas.width(), 2);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.lines(), vec!["", ""]);
    }

    #[test]
    fn test_flush_emits_text_and_color() {
        let mut canvas = CellCanvas::new(6, 1);
        canvas.draw_text("Go", Point::ORIGIN, Justify::TOP_LEFT, Color::ACCENT_GREEN);
        let mut output = Vec::new();
        canvas.flush(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Go"));
        // 24-bit foreground escape for #84FF54
        assert!(text.contains("38;2;132;255;84"));
    }

    #[test]
    fn test_zero_sized_canvas() {
        let mut canvas = CellCanvas::new(0, 0);
        canvas.draw_text("a", Point::ORIGIN, Justify::TOP_LEFT, Color::WHITE);
        assert!(canvas.lines().is_empty());
        let mut output = Vec::new();
        assert!(canvas.flush(&mut output).is_ok());
    }

    proptest! {
        #[test]
        fn prop_draw_never_escapes_grid(
            text in "\\PC{0,12}",
            x in -20.0f32..40.0,
            y in -5.0f32..10.0,
            jx in 0.0f32..=1.0,
        ) {
            let mut canvas = CellCanvas::new(16, 4);
            canvas.draw_text(&text, Point::new(x, y), Justify::new(jx, 0.0), Color::WHITE);
            let lines = canvas.lines();
            prop_assert_eq!(lines.len(), 4);
            for line in lines {
                let columns: usize = line.chars().map(|c| c.width().unwrap_or(0)).sum();
                prop_assert!(columns <= 16);
            }
        }
    }
}
