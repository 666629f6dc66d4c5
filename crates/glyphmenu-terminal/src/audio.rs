//! Audio sink for terminals, which have no mixer.

use glyphmenu_core::{AudioSink, SoundId};

/// Logs every cue instead of playing it.
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    played: usize,
    last: Option<SoundId>,
}

impl LogAudio {
    /// Create the sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cues received.
    #[must_use]
    pub const fn played(&self) -> usize {
        self.played
    }

    /// Most recent cue.
    #[must_use]
    pub const fn last(&self) -> Option<&SoundId> {
        self.last.as_ref()
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, sound: &SoundId) {
        tracing::debug!(%sound, "play cue");
        self.played += 1;
        self.last = Some(sound.clone());
    }
}
