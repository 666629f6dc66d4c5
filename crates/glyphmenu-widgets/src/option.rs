//! Labelled row with an optional action.

use crate::item::MenuItem;
use glyphmenu_core::{AudioSink, SoundId};
use std::borrow::Cow;
use std::fmt;

/// A fixed label that runs an action when confirmed.
///
/// Without an action the row is still selectable but confirming it is not
/// consumed, so the press falls through to other listeners.
pub struct MenuOption {
    label: String,
    action: Option<Box<dyn FnMut()>>,
    sound: SoundId,
}

impl MenuOption {
    /// Create an option with no action.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
            sound: SoundId::UI_SELECT,
        }
    }

    /// Bind the action run on activation.
    #[must_use]
    pub fn with_action(mut self, action: impl FnMut() + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Override the cue played on activation.
    #[must_use]
    pub fn with_sound(mut self, sound: SoundId) -> Self {
        self.sound = sound;
        self
    }

    /// Whether an action is bound.
    #[must_use]
    pub const fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

impl fmt::Debug for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOption")
            .field("label", &self.label)
            .field("has_action", &self.has_action())
            .field("sound", &self.sound)
            .finish()
    }
}

impl MenuItem for MenuOption {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn activate(&mut self, audio: &mut dyn AudioSink) -> bool {
        let Some(action) = self.action.as_mut() else {
            return false;
        };
        audio.play(&self.sound);
        tracing::debug!(label = %self.label, "menu option activated");
        action();
        true
    }
}
