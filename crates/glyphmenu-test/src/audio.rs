//! Audio sink that records cues.

use glyphmenu_core::{AudioSink, SoundId};

/// Remembers every played cue in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    played: Vec<SoundId>,
}

impl RecordingAudio {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far.
    #[must_use]
    pub fn played(&self) -> &[SoundId] {
        &self.played
    }

    /// The most recent cue, if any.
    #[must_use]
    pub fn last(&self) -> Option<&SoundId> {
        self.played.last()
    }

    /// Forget recorded cues.
    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: &SoundId) {
        self.played.push(sound.clone());
    }
}
