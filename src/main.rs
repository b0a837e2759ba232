// src/main.rs

//! Console front-end: plays tic-tac-toe in the terminal.
//!
//! Frames are printed to stdout; commands are read line by line from stdin
//! and translated into the raw pointer and key events a windowed front-end
//! would deliver.

use anyhow::Context;
use cellgrid::{
    engine::{Engine, EngineEvent, EngineSender},
    games::TicTacToe,
    grid::Layout,
    input::{MouseButton, RawEvent},
    surface::ConsoleSurface,
    Config, Key,
};
use log::{debug, info, warn};
use std::io::{self, BufRead};
use std::thread;

const HELP: &str = "Commands: `x y` left click, `r x y` right click, \
space, esc, enter, up, down, left, right, help, quit";

/// One parsed line of console input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(RawEvent),
    Help,
    Quit,
}

fn key_event(key: Key) -> Option<Command> {
    key.code().map(|code| Command::Event(RawEvent::KeyDown { code }))
}

fn click_event(button: MouseButton, x: &str, y: &str, layout: &Layout) -> Option<Command> {
    let x: usize = x.parse().ok()?;
    let y: usize = y.parse().ok()?;
    if !layout.contains_cell(x, y) {
        return None;
    }
    let (px, py) = layout.cell_center(x, y);
    Some(Command::Event(RawEvent::Click { button, x: px, y: py }))
}

/// Parses a console line. Cell coordinates are converted to the pixel
/// centre of that cell so the engine normalizes them like a real click.
fn parse_command(line: &str, layout: &Layout) -> Option<Command> {
    let words: Vec<String> = line.split_whitespace().map(str::to_ascii_lowercase).collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    match words.as_slice() {
        ["quit"] | ["q"] | ["exit"] => Some(Command::Quit),
        ["help"] | ["?"] => Some(Command::Help),
        ["space"] => key_event(Key::Space),
        ["esc"] | ["escape"] => key_event(Key::Escape),
        ["enter"] => key_event(Key::Enter),
        ["pause"] => key_event(Key::Pause),
        ["up"] => key_event(Key::Up),
        ["down"] => key_event(Key::Down),
        ["left"] => key_event(Key::Left),
        ["right"] => key_event(Key::Right),
        ["r", x, y] => click_event(MouseButton::Right, x, y, layout),
        [x, y] => click_event(MouseButton::Left, x, y, layout),
        _ => None,
    }
}

/// Sends `Shutdown` when dropped, so the engine stops however the reader
/// thread ends.
struct ShutdownOnDrop(EngineSender);

impl Drop for ShutdownOnDrop {
    fn drop(&mut self) {
        info!("Console input finished, shutting down");
        let _ = self.0.send(EngineEvent::Shutdown);
    }
}

fn spawn_stdin_reader(engine_tx: EngineSender, layout: Layout) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let guard = ShutdownOnDrop(engine_tx);
            let engine_tx = &guard.0;
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Failed to read stdin: {}", e);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line, &layout) {
                    Some(Command::Event(event)) => {
                        debug!("Console input {:?}", event);
                        if engine_tx.send(EngineEvent::Input(event)).is_err() {
                            return;
                        }
                    }
                    Some(Command::Help) => println!("{}", HELP),
                    Some(Command::Quit) => break,
                    None => println!("Unrecognized command {:?}. {}", line.trim(), HELP),
                }
            }
        })
}

/// Main entry point for the `cellgrid` application.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting cellgrid...");

    let config = Config::load_or_default();

    let mut engine = Engine::new(TicTacToe::new(), config);
    engine
        .attach_surface(Box::new(ConsoleSurface::new(io::stdout())))
        .context("Failed to attach console surface")?;
    engine.start().context("Failed to start the engine")?;

    let layout = *engine
        .screen()
        .layout()
        .context("Screen has no layout after start")?;
    println!("{}", HELP);
    let _reader = spawn_stdin_reader(engine.sender(), layout)
        .context("Failed to spawn stdin reader thread")?;

    engine.run().context("Engine event loop failed")?;

    info!("cellgrid exited gracefully.");
    Ok(())
}
