//! Discrete integer slider row.

use crate::item::MenuItem;
use std::borrow::Cow;
use std::fmt;

/// Widest range whose labels are precomputed. Wider bars are formatted on
/// demand, since the table grows quadratically with the range.
pub const MAX_PRECOMPUTED_STEPS: usize = 256;

/// A row editing an integer owned elsewhere, shown as a fixed-width bar.
///
/// One label is precomputed per representable value, e.g. for `0..=3`:
/// `"Volume [...]"`, `"Volume [|..]"`, `"Volume [||.]"`, `"Volume [|||]"`.
/// Ranges wider than [`MAX_PRECOMPUTED_STEPS`] skip the table.
pub struct Slider {
    name: String,
    labels: Vec<String>,
    min: i32,
    max: i32,
    get: Box<dyn Fn() -> i32>,
    set: Box<dyn FnMut(i32)>,
}

impl Slider {
    /// Create a slider over `min..=max`. A reversed range is swapped.
    #[must_use]
    pub fn new(
        label: impl AsRef<str>,
        min: i32,
        max: i32,
        get: impl Fn() -> i32 + 'static,
        set: impl FnMut(i32) + 'static,
    ) -> Self {
        let label = label.as_ref();
        let (min, max) = if min > max {
            tracing::warn!(label, min, max, "slider range reversed; swapping bounds");
            (max, min)
        } else {
            (min, max)
        };

        let steps = max.abs_diff(min) as usize;
        let labels = if steps <= MAX_PRECOMPUTED_STEPS {
            (0..=steps)
                .map(|filled| bar_label(label, filled, steps))
                .collect()
        } else {
            tracing::warn!(
                label,
                steps,
                "slider range too wide to precompute; labels built per frame"
            );
            Vec::new()
        };

        Self {
            name: label.to_string(),
            labels,
            min,
            max,
            get: Box::new(get),
            set: Box::new(set),
        }
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Current value, clamped into range.
    #[must_use]
    pub fn value(&self) -> i32 {
        (self.get)().clamp(self.min, self.max)
    }
}

fn bar_label(name: &str, filled: usize, steps: usize) -> String {
    format!(
        "{name} [{}{}]",
        "|".repeat(filled),
        ".".repeat(steps - filled)
    )
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value())
            .finish_non_exhaustive()
    }
}

impl MenuItem for Slider {
    fn label(&self) -> Cow<'_, str> {
        let position = self.value().abs_diff(self.min) as usize;
        match self.labels.get(position) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => {
                let steps = self.max.abs_diff(self.min) as usize;
                Cow::Owned(bar_label(&self.name, position, steps))
            }
        }
    }

    fn slide(&mut self, direction: i32) {
        let next = (self.get)()
            .saturating_add(direction)
            .clamp(self.min, self.max);
        tracing::debug!(value = next, direction, "menu slider moved");
        (self.set)(next);
    }
}
