//! Scripted edge-triggered input.

use glyphmenu_core::{MenuControl, MenuInput};
use std::collections::HashSet;

/// Input whose pressed edges are set directly by the test.
///
/// `consume` clears the Confirm edge, mirroring a real input system where a
/// consumed press is not seen by later listeners in the same frame.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    pressed: HashSet<MenuControl>,
    consumed: bool,
}

impl ScriptedInput {
    /// Create an input with nothing pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input with the given controls pressed.
    #[must_use]
    pub fn pressing(controls: &[MenuControl]) -> Self {
        let mut input = Self::new();
        input.set(controls);
        input
    }

    /// Replace the pressed set for the next frame and reset consumption.
    pub fn set(&mut self, controls: &[MenuControl]) {
        self.pressed = controls.iter().copied().collect();
        self.consumed = false;
    }

    /// Press a single control in addition to the current set.
    pub fn press(&mut self, control: MenuControl) {
        self.pressed.insert(control);
    }

    /// Whether `consume` was called since the last `set`.
    #[must_use]
    pub fn was_consumed(&self) -> bool {
        self.consumed
    }
}

impl MenuInput for ScriptedInput {
    fn pressed(&self, control: MenuControl) -> bool {
        self.pressed.contains(&control)
    }

    fn consume(&mut self) {
        self.consumed = true;
        self.pressed.remove(&MenuControl::Confirm);
    }
}
