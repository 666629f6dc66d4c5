//! Keyboard input for terminal menus.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use glyphmenu_core::{MenuControl, MenuInput};
use std::collections::HashSet;

/// Maps a key to a menu control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Key code. Letters are matched case-insensitively.
    pub code: KeyCode,
    /// Control the key drives.
    pub control: MenuControl,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, control: MenuControl) -> Self {
        Self { code, control }
    }

    /// Check if this binding matches a key event.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        normalize(event.code) == normalize(self.code)
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Arrows, WASD and hjkl for movement; Enter and Space to confirm.
#[must_use]
pub fn default_bindings() -> Vec<KeyBinding> {
    use MenuControl::{Confirm, Down, Left, Right, Up};

    vec![
        KeyBinding::new(KeyCode::Up, Up),
        KeyBinding::new(KeyCode::Char('w'), Up),
        KeyBinding::new(KeyCode::Char('k'), Up),
        KeyBinding::new(KeyCode::Down, Down),
        KeyBinding::new(KeyCode::Char('s'), Down),
        KeyBinding::new(KeyCode::Char('j'), Down),
        KeyBinding::new(KeyCode::Left, Left),
        KeyBinding::new(KeyCode::Char('a'), Left),
        KeyBinding::new(KeyCode::Char('h'), Left),
        KeyBinding::new(KeyCode::Right, Right),
        KeyBinding::new(KeyCode::Char('d'), Right),
        KeyBinding::new(KeyCode::Char('l'), Right),
        KeyBinding::new(KeyCode::Enter, Confirm),
        KeyBinding::new(KeyCode::Char(' '), Confirm),
    ]
}

/// Edge-triggered menu input fed from crossterm events.
///
/// Call [`begin_frame`](Self::begin_frame) once per frame, then
/// [`handle`](Self::handle) for every event read during that frame.
#[derive(Debug, Clone)]
pub struct KeyboardInput {
    bindings: Vec<KeyBinding>,
    pressed: HashSet<MenuControl>,
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::with_bindings(default_bindings())
    }
}

impl KeyboardInput {
    /// Create an input handler with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input handler with custom bindings.
    #[must_use]
    pub fn with_bindings(bindings: Vec<KeyBinding>) -> Self {
        Self {
            bindings,
            pressed: HashSet::new(),
        }
    }

    /// Add a key binding.
    pub fn add_binding(&mut self, binding: KeyBinding) {
        self.bindings.push(binding);
    }

    /// Current bindings.
    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Forget the previous frame's edges.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    /// Record a press edge for `event` if it is a bound key press.
    ///
    /// Release and repeat events are ignored so holding a key yields a
    /// single edge.
    pub fn handle(&mut self, event: &Event) -> Option<MenuControl> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let control = self
            .bindings
            .iter()
            .find(|binding| binding.matches(key))
            .map(|binding| binding.control)?;
        tracing::trace!(?control, code = ?key.code, "menu key pressed");
        self.pressed.insert(control);
        Some(control)
    }
}

impl MenuInput for KeyboardInput {
    fn pressed(&self, control: MenuControl) -> bool {
        self.pressed.contains(&control)
    }

    fn consume(&mut self) {
        self.pressed.remove(&MenuControl::Confirm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyEventKind::Press)
    }

    #[test]
    fn test_default_bindings_cover_every_control() {
        let bindings = default_bindings();
        for control in MenuControl::ALL {
            assert!(bindings.iter().any(|binding| binding.control == control));
        }
    }

    #[test]
    fn test_arrow_press_records_edge() {
        let mut input = KeyboardInput::new();
        assert_eq!(input.handle(&press(KeyCode::Down)), Some(MenuControl::Down));
        assert!(input.pressed(MenuControl::Down));
        assert!(!input.pressed(MenuControl::Up));
    }

    #[test]
    fn test_letters_case_insensitive() {
        let mut input = KeyboardInput::new();
        input.handle(&press(KeyCode::Char('K')));
        assert!(input.pressed(MenuControl::Up));
    }

    #[test]
    fn test_release_and_repeat_ignored() {
        let mut input = KeyboardInput::new();
        assert_eq!(input.handle(&key(KeyCode::Enter, KeyEventKind::Release)), None);
        assert_eq!(input.handle(&key(KeyCode::Enter, KeyEventKind::Repeat)), None);
        assert!(!input.pressed(MenuControl::Confirm));
    }

    #[test]
    fn test_unbound_and_non_key_events_ignored() {
        let mut input = KeyboardInput::new();
        assert_eq!(input.handle(&press(KeyCode::Char('z'))), None);
        assert_eq!(input.handle(&Event::FocusGained), None);
        assert_eq!(input.handle(&Event::Resize(80, 24)), None);
        assert!(MenuControl::ALL.iter().all(|&c| !input.pressed(c)));
    }

    #[test]
    fn test_begin_frame_clears_edges() {
        let mut input = KeyboardInput::new();
        input.handle(&press(KeyCode::Left));
        input.begin_frame();
        assert!(!input.pressed(MenuControl::Left));
    }

    #[test]
    fn test_consume_clears_confirm_only() {
        let mut input = KeyboardInput::new();
        input.handle(&press(KeyCode::Enter));
        input.handle(&press(KeyCode::Right));
        input.consume();
        assert!(!input.pressed(MenuControl::Confirm));
        assert!(input.pressed(MenuControl::Right));
    }

    #[test]
    fn test_custom_bindings() {
        let mut input = KeyboardInput::with_bindings(Vec::new());
        assert_eq!(input.handle(&press(KeyCode::Up)), None);

        input.add_binding(KeyBinding::new(KeyCode::Tab, MenuControl::Down));
        assert_eq!(input.bindings().len(), 1);
        assert_eq!(input.handle(&press(KeyCode::Tab)), Some(MenuControl::Down));
    }
}
