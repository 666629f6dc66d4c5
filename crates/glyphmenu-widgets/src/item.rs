//! The row abstraction shared by every menu entry.

use glyphmenu_core::AudioSink;
use std::borrow::Cow;

/// One row of a [`Menu`](crate::Menu).
///
/// Implemented by [`Spacer`], [`MenuOption`](crate::MenuOption),
/// [`Toggle`](crate::Toggle) and [`Slider`](crate::Slider); custom rows
/// implement it directly.
pub trait MenuItem {
    /// Text shown for this row. An empty label marks a spacer row.
    fn label(&self) -> Cow<'_, str>;

    /// Whether navigation may land on this row.
    fn selectable(&self) -> bool {
        true
    }

    /// React to the confirm input. Returns whether the press was consumed.
    fn activate(&mut self, audio: &mut dyn AudioSink) -> bool {
        let _ = audio;
        false
    }

    /// React to a horizontal edit; `direction` is -1 or +1.
    fn slide(&mut self, direction: i32) {
        let _ = direction;
    }
}

/// Blank, unselectable row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacer;

impl Spacer {
    /// Create a spacer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MenuItem for Spacer {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn selectable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphmenu_test::RecordingAudio;

    struct Plain;

    impl MenuItem for Plain {
        fn label(&self) -> Cow<'_, str> {
            Cow::Borrowed("Plain")
        }
    }

    #[test]
    fn test_spacer_contract() {
        let mut spacer = Spacer::new();
        let mut audio = RecordingAudio::new();

        assert_eq!(spacer.label(), "");
        assert!(!spacer.selectable());
        assert!(!spacer.activate(&mut audio));
        spacer.slide(1);
        assert!(audio.played().is_empty());
    }

    #[test]
    fn test_default_methods() {
        let mut plain = Plain;
        let mut audio = RecordingAudio::new();

        assert!(plain.selectable());
        assert!(!plain.activate(&mut audio));
        plain.slide(-1);
        assert_eq!(plain.label(), "Plain");
        assert!(audio.played().is_empty());
    }
}
