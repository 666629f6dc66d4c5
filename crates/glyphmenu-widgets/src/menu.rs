//! Menu container: item list, selection, navigation and painting.

use crate::item::MenuItem;
use crate::layout::MenuLayout;
use glyphmenu_core::{
    AudioSink, Canvas, FontMetrics, Justify, MenuControl, MenuInput, MenuStyle, Point, Size,
    SoundId, Transform2D,
};
use std::fmt;
use std::time::Duration;

/// What a single [`Menu::update`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuResponse {
    /// Selection moved to a different row
    pub moved: bool,
    /// A horizontal edit was forwarded to the current row
    pub slid: bool,
    /// The current row consumed the confirm press
    pub activated: bool,
}

impl MenuResponse {
    /// Whether anything happened this tick.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.moved || self.slid || self.activated
    }
}

/// Vertical list of rows with a wrap-around selection.
///
/// Rows are appended in display order and never removed. Each frame the
/// owner calls [`update`](Self::update) with the input edges for that frame,
/// then [`render`](Self::render).
pub struct Menu {
    items: Vec<Box<dyn MenuItem>>,
    index: usize,
    focused: bool,
    style: MenuStyle,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
            focused: true,
            style: MenuStyle::default(),
        }
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<_> = self.items.iter().map(|item| item.label()).collect();
        f.debug_struct("Menu")
            .field("items", &labels)
            .field("index", &self.index)
            .field("focused", &self.focused)
            .field("style", &self.style)
            .finish()
    }
}

impl Menu {
    /// Create an empty, focused menu with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the style, including its navigation cues.
    ///
    /// Cues live in the style, so this overrides any earlier
    /// [`up_sound`](Self::up_sound) or [`down_sound`](Self::down_sound).
    /// Call those after `with_style` to override the style's cues.
    #[must_use]
    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a row (builder form).
    #[must_use]
    pub fn item(mut self, item: impl MenuItem + 'static) -> Self {
        self.items.push(Box::new(item));
        self
    }

    /// Append a row.
    pub fn add(&mut self, item: impl MenuItem + 'static) -> &mut Self {
        self.items.push(Box::new(item));
        self
    }

    /// Append an already boxed row.
    pub fn add_boxed(&mut self, item: Box<dyn MenuItem>) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Set the cue played when moving toward lower indices.
    #[must_use]
    pub fn up_sound(mut self, sound: SoundId) -> Self {
        self.style.up_sound = sound;
        self
    }

    /// Set the cue played when moving toward higher indices.
    #[must_use]
    pub fn down_sound(mut self, sound: SoundId) -> Self {
        self.style.down_sound = sound;
        self
    }

    /// Replace the cue played when moving toward lower indices.
    pub fn set_up_sound(&mut self, sound: SoundId) {
        self.style.up_sound = sound;
    }

    /// Replace the cue played when moving toward higher indices.
    pub fn set_down_sound(&mut self, sound: SoundId) {
        self.style.down_sound = sound;
    }

    /// Current style.
    #[must_use]
    pub const fn style(&self) -> &MenuStyle {
        &self.style
    }

    /// Replace the style. Cues set earlier are replaced by the style's.
    pub fn set_style(&mut self, style: MenuStyle) {
        self.style = style;
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows in display order.
    #[must_use]
    pub fn items(&self) -> &[Box<dyn MenuItem>] {
        &self.items
    }

    /// Selected row index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move the selection, wrapping into range. Ignored on an empty menu.
    ///
    /// The target is not checked for selectability, so the selection may
    /// rest on a spacer until the next move.
    pub fn set_index(&mut self, index: isize) {
        if self.items.is_empty() {
            return;
        }
        self.index = index.rem_euclid(self.items.len() as isize) as usize;
    }

    /// Selected row, if any.
    #[must_use]
    pub fn current(&self) -> Option<&dyn MenuItem> {
        self.items.get(self.index).map(|item| &**item)
    }

    /// Whether the menu accepts input and shows the highlight.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Enable or disable input and highlighting.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Index of the next selectable row `step` rows away, wrapping.
    ///
    /// Probes at most `len` rows in one direction; `None` when none of them
    /// is selectable or `step` is zero.
    fn next_selectable(&self, step: isize) -> Option<usize> {
        if step == 0 || self.items.is_empty() {
            return None;
        }

        let len = self.items.len() as isize;
        let mut cursor = self.index as isize;
        for _ in 0..self.items.len() {
            cursor += step;
            let probe = cursor.rem_euclid(len) as usize;
            if self.items.get(probe).is_some_and(|item| item.selectable()) {
                return Some(probe);
            }
        }
        None
    }

    /// Apply one frame of input.
    ///
    /// Does nothing when the menu is empty or unfocused. Otherwise:
    /// Down (or Up) moves to the next selectable row with wrap-around,
    /// Down winning when both fire; Left/Right slide the selected row;
    /// Confirm activates it and consumes the press if the row handled it.
    pub fn update(
        &mut self,
        input: &mut dyn MenuInput,
        audio: &mut dyn AudioSink,
    ) -> MenuResponse {
        let mut response = MenuResponse::default();
        if self.items.is_empty() || !self.focused {
            return response;
        }

        let step = if input.pressed(MenuControl::Down) {
            1
        } else if input.pressed(MenuControl::Up) {
            -1
        } else {
            0
        };

        let was = self.index;
        if step != 0 {
            match self.next_selectable(step) {
                Some(next) => self.index = next,
                None => tracing::warn!(
                    rows = self.items.len(),
                    "menu has no selectable row; selection unchanged"
                ),
            }
        }

        if self.index != was {
            // Negative travel plays the up cue, everything else the down cue.
            let cue = if step < 0 {
                &self.style.up_sound
            } else {
                &self.style.down_sound
            };
            audio.play(cue);
            tracing::debug!(from = was, to = self.index, "menu selection moved");
            response.moved = true;
        }

        let Some(item) = self.items.get_mut(self.index) else {
            return response;
        };

        if input.pressed(MenuControl::Left) {
            item.slide(-1);
            response.slid = true;
        }
        if input.pressed(MenuControl::Right) {
            item.slide(1);
            response.slid = true;
        }

        if input.pressed(MenuControl::Confirm) && item.activate(audio) {
            input.consume();
            response.activated = true;
        }

        response
    }

    /// Lay out the rows with `font` and the menu's style.
    #[must_use]
    pub fn layout<'a>(&'a self, font: &dyn FontMetrics) -> MenuLayout<'a> {
        MenuLayout::compute(&self.items, font, &self.style)
    }

    /// Bounding size: widest label by total height.
    #[must_use]
    pub fn size(&self, font: &dyn FontMetrics) -> Size {
        self.layout(font).size()
    }

    /// Paint the menu centered on `origin`.
    ///
    /// Labels are centered horizontally within the widest label and
    /// top-justified. When focused, the selected row blinks between the two
    /// highlight colors based on `elapsed`.
    pub fn render(
        &self,
        canvas: &mut dyn Canvas,
        font: &dyn FontMetrics,
        origin: Point,
        elapsed: Duration,
    ) {
        if self.items.is_empty() {
            return;
        }

        let layout = self.layout(font);
        let size = layout.size();
        let highlight = self.style.highlight_color(elapsed);

        canvas.push_transform(Transform2D::translate_by(-size.half()));
        for row in layout.rows().iter().filter(|row| !row.is_spacer()) {
            let color = if self.focused && row.index == self.index {
                highlight
            } else {
                self.style.text_color
            };
            let at = origin.offset(size.width / 2.0, row.top);
            canvas.draw_text(&row.label, at, Justify::TOP_CENTER, color);
        }
        canvas.pop_transform();
    }
}
