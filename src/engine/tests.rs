// src/engine/tests.rs

use super::*;
use crate::color::Color;
use crate::config::RngConfig;
use crate::grid::Layout;
use crate::input::MouseButton;
use crate::keys::Key;
use crate::renderer::{RenderCommand, RenderSnapshot};
use crate::surface::HeadlessSurface;
use std::thread;
use std::time::Duration;
use test_log::test;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Left(usize, usize),
    Right(usize, usize),
    Press(Key),
    Release(Key),
    Turn(u64),
}

/// Records every callback; optionally fails its turns.
#[derive(Default)]
struct Recorder {
    width: usize,
    height: usize,
    calls: Vec<Call>,
    fail_turns: bool,
}

impl Recorder {
    fn new(width: usize, height: usize) -> Self {
        Recorder {
            width,
            height,
            ..Recorder::default()
        }
    }

    fn turns(&self) -> Vec<u64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Turn(step) => Some(*step),
                _ => None,
            })
            .collect()
    }
}

impl Game for Recorder {
    fn initialize(&mut self, screen: &mut Screen) -> Result<()> {
        screen.configure_screen(self.width, self.height);
        Ok(())
    }

    fn on_mouse_left_click(&mut self, _screen: &mut Screen, x: usize, y: usize) -> Result<()> {
        self.calls.push(Call::Left(x, y));
        Ok(())
    }

    fn on_mouse_right_click(&mut self, _screen: &mut Screen, x: usize, y: usize) -> Result<()> {
        self.calls.push(Call::Right(x, y));
        Ok(())
    }

    fn on_key_press(&mut self, _screen: &mut Screen, key: Key) -> Result<()> {
        self.calls.push(Call::Press(key));
        Ok(())
    }

    fn on_key_released(&mut self, _screen: &mut Screen, key: Key) -> Result<()> {
        self.calls.push(Call::Release(key));
        Ok(())
    }

    fn on_turn(&mut self, _screen: &mut Screen, step: u64) -> Result<()> {
        self.calls.push(Call::Turn(step));
        if self.fail_turns {
            anyhow::bail!("turn {} exploded", step);
        }
        Ok(())
    }
}

/// A game that never configures the screen.
struct Unconfigured;
impl Game for Unconfigured {}

struct BrokenSurface;
impl Surface for BrokenSurface {
    fn configure(&mut self, _layout: &Layout) -> Result<()> {
        anyhow::bail!("screen.png is missing")
    }
    fn present(&mut self, _snapshot: &RenderSnapshot) -> Result<()> {
        Ok(())
    }
}

fn config() -> Config {
    Config {
        rng: RngConfig { seed: Some(1) },
        ..Config::default()
    }
}

fn started(width: usize, height: usize) -> Engine<Recorder> {
    let mut engine = Engine::new(Recorder::new(width, height), config());
    engine.start().unwrap();
    engine
}

fn click(engine: &Engine<Recorder>, button: MouseButton, x: usize, y: usize) -> RawEvent {
    let (px, py) = engine.screen().layout().unwrap().cell_center(x, y);
    RawEvent::Click { button, x: px, y: py }
}

fn key_down(key: Key) -> RawEvent {
    RawEvent::KeyDown { code: key.code().unwrap() }
}

/// Processes queued events until `n` turns were delivered or time runs out.
fn pump_turns(engine: &mut Engine<Recorder>, n: usize) {
    while engine.game().turns().len() < n {
        let event = engine
            .event_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("turn clock stalled");
        engine.process_event(event);
    }
}

#[test]
fn start_requires_configured_screen() {
    let mut engine = Engine::new(Unconfigured, config());
    let err = engine.start().unwrap_err();
    assert!(format!("{:#}", err).contains("did not configure the screen"));
}

#[test]
fn start_fails_when_viewport_cannot_be_built() {
    let mut engine = Engine::new(Recorder::new(3, 3), config());
    engine.attach_surface(Box::new(BrokenSurface)).unwrap();
    let err = engine.start().unwrap_err();
    assert!(format!("{:#}", err).contains("screen.png is missing"));
}

#[test]
fn start_presents_first_frame() {
    let mut engine = Engine::new(Recorder::new(4, 3), config());
    let (surface, log) = HeadlessSurface::new();
    engine.attach_surface(Box::new(surface)).unwrap();
    engine.start().unwrap();
    assert_eq!(log.layouts().len(), 1);
    assert_eq!(log.frame_count(), 1);
    assert_eq!(log.last_frame().unwrap().width, 4);
}

#[test]
fn cell_scenario_reads_back_value_and_color() {
    let mut engine = started(3, 3);
    let screen = engine.screen_mut();
    screen
        .set_cell_value_ex(1, 1, Color::White, "O", Some(Color::Blue), None)
        .unwrap();
    assert_eq!(screen.get_cell_value(1, 1).unwrap(), "O");
    assert_eq!(screen.get_cell_text_color(1, 1).unwrap(), Color::Blue);
}

#[test]
fn input_is_routed_in_normal_state() {
    let mut engine = started(3, 3);
    let left = click(&engine, MouseButton::Left, 2, 1);
    let right = click(&engine, MouseButton::Right, 0, 2);
    engine.dispatch(left);
    engine.dispatch(right);
    engine.dispatch(key_down(Key::Up));
    engine.dispatch(RawEvent::KeyUp { code: 1234 });
    assert_eq!(
        engine.game().calls,
        vec![
            Call::Left(2, 1),
            Call::Right(0, 2),
            Call::Press(Key::Up),
            Call::Release(Key::Unknown),
        ]
    );
}

#[test]
fn clicks_outside_grid_are_ignored() {
    let mut engine = started(3, 3);
    engine.dispatch(RawEvent::Click { button: MouseButton::Left, x: 1, y: 1 });
    assert!(engine.game().calls.is_empty());
}

#[test]
fn dialog_swallows_clicks_until_dismissed() {
    let mut engine = Engine::new(Recorder::new(3, 3), config());
    let (surface, log) = HeadlessSurface::new();
    engine.attach_surface(Box::new(surface)).unwrap();
    engine.start().unwrap();

    engine
        .screen_mut()
        .show_message_dialog(Color::None, "You Win!", Color::Green, 75);
    let left = click(&engine, MouseButton::Left, 1, 1);
    engine.dispatch(left);
    engine.dispatch(click(&engine, MouseButton::Right, 0, 0));
    assert!(engine.game().calls.is_empty());

    // The dialog frame draws its text without a backing fill.
    let commands = log.last_commands().unwrap();
    let fills = commands
        .iter()
        .filter(|c| matches!(c, RenderCommand::FillRect { .. }))
        .count();
    assert_eq!(fills, 9 + 1);
    assert!(commands.iter().any(
        |c| matches!(c, RenderCommand::DrawText { text, .. } if text == "You Win!")
    ));

    engine.dispatch(key_down(Key::Space));
    assert!(!engine.screen().is_dialog_shown());
    assert!(engine.game().calls.is_empty(), "dismiss key must not reach the game");
    assert!(log.last_frame().unwrap().dialog.is_none());

    engine.dispatch(left);
    assert_eq!(engine.game().calls, vec![Call::Left(1, 1)]);
}

#[test]
fn dialog_forwards_other_keys() {
    let mut engine = started(3, 3);
    engine
        .screen_mut()
        .show_message_dialog(Color::Black, "Paused", Color::White, 30);
    engine.dispatch(key_down(Key::Escape));
    engine.dispatch(RawEvent::KeyUp { code: Key::Space.code().unwrap() });
    assert!(engine.screen().is_dialog_shown());
    assert_eq!(
        engine.game().calls,
        vec![Call::Press(Key::Escape), Call::Release(Key::Space)]
    );
}

#[test]
fn queued_input_goes_through_the_channel() {
    let mut engine = started(3, 3);
    let tx = engine.sender();
    tx.send(EngineEvent::Input(key_down(Key::Enter))).unwrap();
    tx.send(EngineEvent::Input(key_down(Key::Left))).unwrap();
    assert_eq!(engine.run_pending(), EngineStatus::Running);
    tx.send(EngineEvent::Shutdown).unwrap();
    assert_eq!(engine.run_pending(), EngineStatus::Shutdown);
    assert_eq!(
        engine.game().calls,
        vec![Call::Press(Key::Enter), Call::Press(Key::Left)]
    );
}

#[test]
fn turn_clock_counts_from_one() {
    let mut engine = started(3, 3);
    engine.screen_mut().set_turn_timer(5).unwrap();
    pump_turns(&mut engine, 4);
    assert_eq!(engine.game().turns(), vec![1, 2, 3, 4]);
    assert_eq!(engine.screen().tick_count(), 4);
    engine.screen_mut().stop_turn_timer();
}

#[test]
fn stop_guarantees_no_further_turns() {
    let mut engine = started(3, 3);
    engine.screen_mut().set_turn_timer(2).unwrap();
    pump_turns(&mut engine, 3);
    engine.screen_mut().stop_turn_timer();
    engine.screen_mut().stop_turn_timer();
    let delivered = engine.game().turns().len();

    // Anything still queued belongs to the stopped clock.
    thread::sleep(Duration::from_millis(20));
    engine.run_pending();
    assert_eq!(engine.game().turns().len(), delivered);
    assert!(!engine.screen().is_turn_timer_running());
}

#[test]
fn stale_generation_ticks_are_dropped() {
    let mut engine = started(3, 3);
    engine.screen_mut().set_turn_timer(60_000).unwrap();
    engine.screen_mut().set_turn_timer(60_000).unwrap();
    engine.process_event(EngineEvent::Tick { generation: 1 });
    assert!(engine.game().turns().is_empty());
    engine.process_event(EngineEvent::Tick { generation: 2 });
    assert_eq!(engine.game().turns(), vec![1]);
    engine.screen_mut().set_turn_timer(0).unwrap();
    engine.process_event(EngineEvent::Tick { generation: 2 });
    assert_eq!(engine.game().turns(), vec![1]);
}

#[test]
fn turn_steps_keep_counting_when_the_clock_is_replaced() {
    let mut engine = started(3, 3);
    engine.screen_mut().set_turn_timer(60_000).unwrap();
    engine.process_event(EngineEvent::Tick { generation: 1 });
    engine.process_event(EngineEvent::Tick { generation: 1 });
    engine.screen_mut().set_turn_timer(30_000).unwrap();
    engine.process_event(EngineEvent::Tick { generation: 2 });
    assert_eq!(engine.game().turns(), vec![1, 2, 3]);
    assert_eq!(engine.screen().tick_count(), 3);
    engine.screen_mut().stop_turn_timer();
}

#[test]
fn ticks_are_skipped_while_dialog_is_shown() {
    let mut engine = started(3, 3);
    engine.screen_mut().set_turn_timer(60_000).unwrap();
    engine
        .screen_mut()
        .show_message_dialog(Color::None, "Game Over", Color::Red, 75);
    engine.process_event(EngineEvent::Tick { generation: 1 });
    engine.process_event(EngineEvent::Tick { generation: 1 });
    assert!(engine.game().turns().is_empty());
    assert_eq!(engine.screen().tick_count(), 0);

    engine.dispatch(key_down(Key::Space));
    engine.process_event(EngineEvent::Tick { generation: 1 });
    assert_eq!(engine.game().turns(), vec![1]);
}

#[test]
fn failing_turn_does_not_stop_the_clock() {
    let mut recorder = Recorder::new(3, 3);
    recorder.fail_turns = true;
    let mut engine = Engine::new(recorder, config());
    engine.start().unwrap();
    engine.screen_mut().set_turn_timer(2).unwrap();
    pump_turns(&mut engine, 3);
    assert_eq!(engine.game().turns(), vec![1, 2, 3]);
    engine.screen_mut().stop_turn_timer();
}

#[test]
fn run_returns_on_shutdown() {
    let mut engine = started(3, 3);
    let tx = engine.sender();
    let feeder = thread::spawn(move || {
        tx.send(EngineEvent::Input(key_down(Key::Down))).unwrap();
        tx.send(EngineEvent::Shutdown).unwrap();
    });
    engine.run().unwrap();
    feeder.join().unwrap();
    assert_eq!(engine.game().calls, vec![Call::Press(Key::Down)]);
}
