//! glyphmenu: a navigable, renderable vertical menu.
//!
//! Rows are [`MenuItem`]s (spacers, options, toggles, sliders or custom
//! types) held by a [`Menu`]. Each frame the menu reads edge-triggered
//! input through [`MenuInput`], plays cues through [`AudioSink`], measures
//! with [`FontMetrics`] and paints through [`Canvas`].
//!
//! ```
//! use glyphmenu::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let volume = Rc::new(Cell::new(2));
//! let (get, set) = (Rc::clone(&volume), Rc::clone(&volume));
//! let mut menu = Menu::new()
//!     .item(Slider::new("Volume", 0, 4, move || get.get(), move |v| set.set(v)))
//!     .item(MenuOption::new("Back"));
//!
//! assert_eq!(menu.current().map(|row| row.label().into_owned()), Some("Volume [||..]".into()));
//! ```
//!
//! Enable the `terminal` feature for the crossterm backend.

pub use glyphmenu_core::*;
pub use glyphmenu_widgets as widgets;
pub use glyphmenu_widgets::{
    Menu, MenuItem, MenuLayout, MenuOption, MenuResponse, MenuRow, Slider, Spacer, Toggle,
};

#[cfg(feature = "terminal")]
pub use glyphmenu_terminal as terminal;

/// Everything needed to build and drive a menu.
pub mod prelude {
    pub use glyphmenu_core::{
        AudioSink, Canvas, Color, FontMetrics, MenuControl, MenuInput, MenuStyle, Point, SoundId,
    };
    pub use glyphmenu_widgets::{Menu, MenuItem, MenuOption, MenuResponse, Slider, Spacer, Toggle};
}
