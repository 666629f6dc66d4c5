//! Integration tests driving a full options screen frame by frame.

use glyphmenu_core::{Color, MenuControl, MenuInput, Point, RecordingCanvas, SoundId};
use glyphmenu_test::{FixedFont, RecordingAudio, ScriptedInput};
use glyphmenu_widgets::{Menu, MenuItem, MenuOption, Slider, Spacer, Toggle};
use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct Settings {
    fullscreen: Cell<bool>,
    music: Cell<i32>,
    closed: Cell<bool>,
}

fn options_menu(settings: &Rc<Settings>) -> Menu {
    let (flip, read) = (Rc::clone(settings), Rc::clone(settings));
    let (get, set) = (Rc::clone(settings), Rc::clone(settings));
    let close = Rc::clone(settings);

    Menu::new()
        .item(Toggle::new(
            "Fullscreen",
            move || flip.fullscreen.set(!flip.fullscreen.get()),
            move || read.fullscreen.get(),
        ))
        .item(Slider::new(
            "Music",
            0,
            5,
            move || get.music.get(),
            move |value| set.music.set(value),
        ))
        .item(Spacer)
        .item(MenuOption::new("Back").with_action(move || close.closed.set(true)))
}

#[test]
fn test_options_screen_session() {
    let settings = Rc::new(Settings::default());
    settings.music.set(2);
    let mut menu = options_menu(&settings);
    let mut input = ScriptedInput::new();
    let mut audio = RecordingAudio::new();

    // Flip fullscreen on the first row.
    input.set(&[MenuControl::Confirm]);
    menu.update(&mut input, &mut audio);
    assert!(settings.fullscreen.get());
    assert!(input.was_consumed());

    // Down to the slider, raise music twice.
    input.set(&[MenuControl::Down]);
    menu.update(&mut input, &mut audio);
    input.set(&[MenuControl::Right]);
    menu.update(&mut input, &mut audio);
    menu.update(&mut input, &mut audio);
    assert_eq!(menu.index(), 1);
    assert_eq!(settings.music.get(), 4);

    // Down skips the spacer and lands on Back.
    input.set(&[MenuControl::Down]);
    let response = menu.update(&mut input, &mut audio);
    assert!(response.moved);
    assert_eq!(menu.index(), 3);

    input.set(&[MenuControl::Confirm]);
    menu.update(&mut input, &mut audio);
    assert!(settings.closed.get());

    assert_eq!(
        audio.played(),
        &[
            SoundId::TOGGLE_ON,
            SoundId::UI_MOVE,
            SoundId::UI_MOVE,
            SoundId::UI_SELECT
        ]
    );
}

#[test]
fn test_options_screen_render_reflects_state() {
    let settings = Rc::new(Settings::default());
    settings.music.set(3);
    let menu = options_menu(&settings);
    let font = FixedFont::new(1.0, 1.0);
    let mut canvas = RecordingCanvas::new();

    menu.render(&mut canvas, &font, Point::ORIGIN, Duration::ZERO);
    let labels: Vec<_> = canvas.texts().map(|(text, _, _)| text.to_string()).collect();
    assert_eq!(
        labels,
        vec!["Fullscreen : OFF", "Music [|||..]", "Back"]
    );

    settings.fullscreen.set(true);
    let mut canvas = RecordingCanvas::new();
    menu.render(&mut canvas, &font, Point::ORIGIN, Duration::ZERO);
    let first = canvas.texts().next().map(|(text, _, color)| (text.to_string(), color));
    assert_eq!(
        first,
        Some(("Fullscreen :  ON".to_string(), Color::ACCENT_YELLOW))
    );
}

#[test]
fn test_two_menus_share_one_confirm_edge() {
    // The first menu consumes the press, so the second never sees it.
    let hits = Rc::new(Cell::new(0));
    let (a, b) = (Rc::clone(&hits), Rc::clone(&hits));
    let mut front = Menu::new().item(MenuOption::new("Front").with_action(move || a.set(a.get() + 1)));
    let mut back = Menu::new().item(MenuOption::new("Back").with_action(move || b.set(b.get() + 10)));

    let mut input = ScriptedInput::pressing(&[MenuControl::Confirm]);
    let mut audio = RecordingAudio::new();
    front.update(&mut input, &mut audio);
    back.update(&mut input, &mut audio);

    assert_eq!(hits.get(), 1);
    assert!(!input.pressed(MenuControl::Confirm));
}

/// Row whose label changes with an external counter and is only
/// selectable while the counter is even.
struct Counter(Rc<RefCell<u32>>);

impl MenuItem for Counter {
    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Count {}", self.0.borrow()))
    }

    fn selectable(&self) -> bool {
        *self.0.borrow() % 2 == 0
    }

    fn slide(&mut self, direction: i32) {
        let mut value = self.0.borrow_mut();
        *value = value.saturating_add_signed(direction);
    }
}

#[test]
fn test_custom_item_in_menu() {
    let count = Rc::new(RefCell::new(0));
    let mut menu = Menu::new()
        .item(MenuOption::new("Top"))
        .item(Counter(Rc::clone(&count)));
    let mut audio = RecordingAudio::new();

    let mut input = ScriptedInput::pressing(&[MenuControl::Down, MenuControl::Right]);
    menu.update(&mut input, &mut audio);
    assert_eq!(menu.index(), 1);
    assert_eq!(*count.borrow(), 1);

    // Odd count makes the row unselectable; moving skips it.
    input.set(&[MenuControl::Up]);
    menu.update(&mut input, &mut audio);
    assert_eq!(menu.index(), 0);
    input.set(&[MenuControl::Down]);
    menu.update(&mut input, &mut audio);
    assert_eq!(menu.index(), 0);

    let font = FixedFont::new(1.0, 1.0);
    let mut canvas = RecordingCanvas::new();
    menu.render(&mut canvas, &font, Point::ORIGIN, Duration::ZERO);
    assert!(canvas.texts().any(|(text, _, _)| text == "Count 1"));
}
