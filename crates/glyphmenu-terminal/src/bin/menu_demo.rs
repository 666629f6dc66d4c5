//! Interactive terminal menu demo.
//!
//! ```bash
//! GLYPHMENU_LOG=debug cargo run -p glyphmenu-terminal --features demo --bin menu_demo
//! ```
//!
//! Arrows/WASD/hjkl move and edit, Enter/Space confirm, Esc or q quits.

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use glyphmenu_core::MenuStyle;
use glyphmenu_terminal::{CellCanvas, CellFont, KeyboardInput, LogAudio, TerminalError};
use glyphmenu_widgets::{Menu, MenuOption, Slider, Spacer, Toggle};
use std::cell::Cell;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(33);

#[derive(Parser)]
#[command(name = "menu_demo", version, about = "Navigable terminal menu demo")]
struct Cli {
    /// Menu style TOML file
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Log file (the screen is in raw mode)
    #[arg(long, default_value = "menu_demo.log")]
    log: PathBuf,
}

#[derive(Default)]
struct Settings {
    fullscreen: Cell<bool>,
    music: Cell<i32>,
    sfx: Cell<i32>,
    quit: Cell<bool>,
}

fn main() -> Result<(), TerminalError> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let style = match &cli.style {
        Some(path) => MenuStyle::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => MenuStyle::default().spacing(0.0).spacer_height(1.0),
    };

    let settings = Rc::new(Settings::default());
    settings.music.set(7);
    settings.sfx.set(10);
    let mut menu = build_menu(&settings).with_style(style);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut menu, &settings, &mut stdout);

    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}

fn init_logging(cli: &Cli) -> Result<(), TerminalError> {
    let file = File::create(&cli.log)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("GLYPHMENU_LOG"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn build_menu(settings: &Rc<Settings>) -> Menu {
    let (flip, read) = (Rc::clone(settings), Rc::clone(settings));
    let (music_get, music_set) = (Rc::clone(settings), Rc::clone(settings));
    let (sfx_get, sfx_set) = (Rc::clone(settings), Rc::clone(settings));
    let quit = Rc::clone(settings);

    Menu::new()
        .item(MenuOption::new("Resume").with_action(|| tracing::info!("resume selected")))
        .item(Spacer)
        .item(Toggle::new(
            "Fullscreen",
            move || flip.fullscreen.set(!flip.fullscreen.get()),
            move || read.fullscreen.get(),
        ))
        .item(Slider::new(
            "Music",
            0,
            10,
            move || music_get.music.get(),
            move |value| music_set.music.set(value),
        ))
        .item(Slider::new(
            "Sfx",
            0,
            10,
            move || sfx_get.sfx.get(),
            move |value| sfx_set.sfx.set(value),
        ))
        .item(Spacer)
        .item(MenuOption::new("Quit").with_action(move || quit.quit.set(true)))
}

fn run(
    menu: &mut Menu,
    settings: &Settings,
    stdout: &mut impl Write,
) -> Result<(), TerminalError> {
    let (width, height) = terminal::size()?;
    let mut canvas = CellCanvas::new(width, height);
    let mut input = KeyboardInput::new();
    let mut audio = LogAudio::new();
    let font = CellFont::new();
    let started = Instant::now();

    while !settings.quit.get() {
        input.begin_frame();
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            match &event {
                Event::Key(key)
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) =>
                {
                    return Ok(());
                }
                Event::Resize(w, h) => canvas.resize(*w, *h),
                _ => {
                    input.handle(&event);
                }
            }
        }

        let response = menu.update(&mut input, &mut audio);
        if response.any() {
            tracing::debug!(?response, index = menu.index(), "frame input applied");
        }

        canvas.clear();
        let origin = canvas.center();
        menu.render(&mut canvas, &font, origin, started.elapsed());
        canvas.flush(stdout)?;

        std::thread::sleep(FRAME);
    }

    tracing::info!(cues = audio.played(), "menu demo finished");
    Ok(())
}
