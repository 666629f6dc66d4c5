//! Menu styling: spacing metrics, colors, blink timing and navigation cues.
//!
//! A style can be built in code or loaded from TOML:
//!
//! ```
//! use glyphmenu_core::MenuStyle;
//!
//! let style = MenuStyle::from_toml_str(r##"
//!     spacing = 8.0
//!     highlight = ["#ffffff", "#ff0000"]
//! "##).expect("valid style");
//! assert_eq!(style.spacing, 8.0);
//! assert_eq!(style.spacer_height, 12.0);
//! ```

use crate::error::ConfigError;
use crate::services::SoundId;
use crate::time::between_interval;
use crate::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visual and audio settings for a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStyle {
    /// Gap between consecutive rows
    pub spacing: f32,
    /// Height of a spacer row
    pub spacer_height: f32,
    /// Length of each blink phase, in seconds
    pub blink_interval: f32,
    /// Highlight colors for the first and second half of a blink period
    pub highlight: [Color; 2],
    /// Color of rows that are not highlighted
    pub text_color: Color,
    /// Cue played when the selection moves toward lower indices
    pub up_sound: SoundId,
    /// Cue played when the selection moves toward higher indices
    pub down_sound: SoundId,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            spacing: 4.0,
            spacer_height: 12.0,
            blink_interval: 0.1,
            highlight: [Color::ACCENT_YELLOW, Color::ACCENT_GREEN],
            text_color: Color::WHITE,
            up_sound: SoundId::UI_MOVE,
            down_sound: SoundId::UI_MOVE,
        }
    }
}

impl MenuStyle {
    /// Create the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiply the metric fields by `factor` (for resolution scaling).
    #[must_use]
    pub fn scaled(mut self, factor: f32) -> Self {
        self.spacing *= factor;
        self.spacer_height *= factor;
        self
    }

    /// Set the row spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the spacer height.
    #[must_use]
    pub const fn spacer_height(mut self, height: f32) -> Self {
        self.spacer_height = height;
        self
    }

    /// Set the text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the highlight pair.
    #[must_use]
    pub const fn highlight(mut self, first: Color, second: Color) -> Self {
        self.highlight = [first, second];
        self
    }

    /// Blink phase length as a duration.
    ///
    /// Intervals that do not fit a [`Duration`] (infinite, NaN or huge) map
    /// to zero, which never blinks.
    #[must_use]
    pub fn blink_period(&self) -> Duration {
        Duration::try_from_secs_f32(self.blink_interval.max(0.0)).unwrap_or(Duration::ZERO)
    }

    /// Highlight color for the given elapsed time.
    #[must_use]
    pub fn highlight_color(&self, elapsed: Duration) -> Color {
        if between_interval(elapsed, self.blink_period()) {
            self.highlight[1]
        } else {
            self.highlight[0]
        }
    }

    /// Parse and validate a style from TOML. Missing fields take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let style: Self = toml::from_str(source)?;
        style.validate()?;
        tracing::debug!(
            spacing = style.spacing,
            spacer_height = style.spacer_height,
            "loaded menu style"
        );
        Ok(style)
    }

    /// Serialize the style as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every metric is usable by the layout pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("spacing", self.spacing),
            ("spacer_height", self.spacer_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("expected a finite non-negative number, got {value}"),
                ));
            }
        }
        if !self.blink_interval.is_finite() || self.blink_interval <= 0.0 {
            return Err(ConfigError::invalid(
                "blink_interval",
                format!("expected a positive number of seconds, got {}", self.blink_interval),
            ));
        }
        Ok(())
    }
}
