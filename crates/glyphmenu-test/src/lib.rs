#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::unwrap_used)]
//! Test doubles for glyphmenu collaborators.
//!
//! Each double is deterministic so menu behavior can be asserted exactly:
//! - [`FixedFont`]: every character advances by the same width
//! - [`RecordingAudio`]: remembers every cue played, in order
//! - [`ScriptedInput`]: edges set by the test, with consume tracking
//!
//! # Example
//!
//! ```
//! use glyphmenu_core::{FontMetrics, MenuControl, MenuInput};
//! use glyphmenu_test::{FixedFont, ScriptedInput};
//!
//! let font = FixedFont::new(8.0, 10.0);
//! assert_eq!(font.width_of("Quit"), 32.0);
//!
//! let input = ScriptedInput::pressing(&[MenuControl::Down]);
//! assert!(input.pressed(MenuControl::Down));
//! ```

mod audio;
mod font;
mod input;

pub use audio::RecordingAudio;
pub use font::FixedFont;
pub use input::ScriptedInput;
