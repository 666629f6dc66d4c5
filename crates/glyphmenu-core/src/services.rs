//! Collaborator traits the menu consumes: font metrics, audio cues and
//! edge-triggered input.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Text measurement service.
///
/// Must be deterministic for a given label within a frame.
pub trait FontMetrics {
    /// Width of `text` when drawn in this font.
    fn width_of(&self, text: &str) -> f32;

    /// Height of one line of text.
    fn line_height(&self) -> f32;
}

/// Identifier of a sound cue understood by the audio backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundId(Cow<'static, str>);

impl SoundId {
    /// Cursor moved between rows.
    pub const UI_MOVE: Self = Self::from_static("ui.move");
    /// An option was activated.
    pub const UI_SELECT: Self = Self::from_static("ui.select");
    /// A toggle switched on.
    pub const TOGGLE_ON: Self = Self::from_static("menu.toggle_on");
    /// A toggle switched off.
    pub const TOGGLE_OFF: Self = Self::from_static("menu.toggle_off");

    /// Create an identifier from a static string.
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Create an identifier from any string.
    #[must_use]
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fire-and-forget audio playback.
pub trait AudioSink {
    /// Play a sound cue.
    fn play(&mut self, sound: &SoundId);
}

/// Audio sink that discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _sound: &SoundId) {}
}

/// Logical menu controls polled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuControl {
    /// Vertical negative (toward the top of the screen)
    Up,
    /// Vertical positive (toward the bottom of the screen)
    Down,
    /// Horizontal negative
    Left,
    /// Horizontal positive
    Right,
    /// Activation
    Confirm,
}

impl MenuControl {
    /// All controls in polling order.
    pub const ALL: [Self; 5] = [Self::Up, Self::Down, Self::Left, Self::Right, Self::Confirm];
}

/// Edge-triggered input source.
pub trait MenuInput {
    /// Whether `control` was pressed this frame.
    fn pressed(&self, control: MenuControl) -> bool;

    /// Suppress re-delivery of this frame's activation edge to later
    /// listeners.
    fn consume(&mut self);
}
