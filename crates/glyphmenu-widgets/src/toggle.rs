//! On/off row backed by external state.

use crate::item::MenuItem;
use glyphmenu_core::{AudioSink, SoundId};
use std::borrow::Cow;
use std::fmt;

/// A row that flips a boolean owned elsewhere.
///
/// The menu never stores the state: `query` reads it and `action` flips it.
/// Both labels are built once, padded so ON and OFF have the same width.
pub struct Toggle {
    label_on: String,
    label_off: String,
    action: Box<dyn FnMut()>,
    query: Box<dyn Fn() -> bool>,
}

impl Toggle {
    /// Create a toggle from a flip action and a state query.
    #[must_use]
    pub fn new(
        label: impl AsRef<str>,
        action: impl FnMut() + 'static,
        query: impl Fn() -> bool + 'static,
    ) -> Self {
        let label = label.as_ref();
        Self {
            label_on: format!("{label} :  ON"),
            label_off: format!("{label} : OFF"),
            action: Box::new(action),
            query: Box::new(query),
        }
    }

    /// Current state as reported by the query.
    #[must_use]
    pub fn is_on(&self) -> bool {
        (self.query)()
    }
}

impl fmt::Debug for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggle")
            .field("label_on", &self.label_on)
            .field("label_off", &self.label_off)
            .finish_non_exhaustive()
    }
}

impl MenuItem for Toggle {
    fn label(&self) -> Cow<'_, str> {
        if self.is_on() {
            Cow::Borrowed(&self.label_on)
        } else {
            Cow::Borrowed(&self.label_off)
        }
    }

    fn activate(&mut self, audio: &mut dyn AudioSink) -> bool {
        (self.action)();
        // The cue reflects the state after the flip.
        let on = self.is_on();
        let cue = if on {
            SoundId::TOGGLE_ON
        } else {
            SoundId::TOGGLE_OFF
        };
        audio.play(&cue);
        tracing::debug!(label = %self.label_off, on, "menu toggle activated");
        true
    }
}
