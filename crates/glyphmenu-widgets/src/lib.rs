//! Menu widget for glyphmenu.
//!
//! A [`Menu`] holds rows implementing [`MenuItem`]: [`Spacer`],
//! [`MenuOption`], [`Toggle`], [`Slider`] or custom types. It turns
//! per-frame input edges into selection moves, slides and activations, and
//! paints itself through any [`Canvas`](glyphmenu_core::Canvas).
//!
//! ```
//! use glyphmenu_core::{MenuControl, SilentAudio};
//! use glyphmenu_test::ScriptedInput;
//! use glyphmenu_widgets::{Menu, MenuOption, Spacer};
//!
//! let mut menu = Menu::new()
//!     .item(Spacer)
//!     .item(MenuOption::new("Start"))
//!     .item(MenuOption::new("Quit"));
//!
//! let mut input = ScriptedInput::pressing(&[MenuControl::Up]);
//! menu.update(&mut input, &mut SilentAudio);
//! assert_eq!(menu.index(), 2);
//! ```

pub mod item;
pub mod layout;
pub mod menu;
pub mod option;
pub mod slider;
pub mod toggle;

pub use item::{MenuItem, Spacer};
pub use layout::{MenuLayout, MenuRow};
pub use menu::{Menu, MenuResponse};
pub use option::MenuOption;
pub use slider::Slider;
pub use toggle::Toggle;
