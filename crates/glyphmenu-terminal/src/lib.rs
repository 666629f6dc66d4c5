//! Terminal backend for glyphmenu.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]
//!
//! Bridges the `glyphmenu_core` collaborator traits to crossterm:
//! - [`KeyboardInput`]: crossterm key events as edge-triggered [`MenuInput`](glyphmenu_core::MenuInput)
//! - [`CellCanvas`]: a character grid implementing [`Canvas`](glyphmenu_core::Canvas)
//! - [`CellFont`]: column widths from `unicode-width`
//! - [`LogAudio`]: cues routed to `tracing`
//!
//! ```
//! use glyphmenu_core::MenuStyle;
//! use glyphmenu_terminal::{CellCanvas, CellFont};
//! use glyphmenu_widgets::{Menu, MenuOption};
//! use std::time::Duration;
//!
//! let menu = Menu::new()
//!     .with_style(MenuStyle::default().spacing(0.0).spacer_height(1.0))
//!     .item(MenuOption::new("Start"))
//!     .item(MenuOption::new("Quit"));
//!
//! let mut canvas = CellCanvas::new(12, 4);
//! let origin = canvas.center();
//! menu.render(&mut canvas, &CellFont, origin, Duration::ZERO);
//! assert_eq!(canvas.lines(), vec!["", "   Start", "    Quit", ""]);
//! ```

mod audio;
mod canvas;
mod error;
mod font;
mod input;

pub use audio::LogAudio;
pub use canvas::CellCanvas;
pub use error::TerminalError;
pub use font::CellFont;
pub use input::{default_bindings, KeyBinding, KeyboardInput};
