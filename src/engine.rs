// src/engine.rs

//! The engine actor: owns the `Screen` and the `Game` and processes every
//! event on a single thread.
//!
//! Front-ends and the turn clock never touch game state directly. They send
//! `EngineEvent`s through an `EngineSender`; `Engine::run` blocks on the
//! first event, drains whatever else is queued, and presents at most one
//! frame per batch.

use crate::config::Config;
use crate::error::EngineError;
use crate::game::Game;
use crate::input::{DispatchState, Dispatcher, GameCall, InputEvent, RawEvent, Route};
use crate::screen::Screen;
use crate::surface::Surface;
use anyhow::{Context, Result};
use log::*;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Messages processed by the engine thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Raw input from the front-end.
    Input(RawEvent),
    /// A turn clock firing. Ticks from a clock that has since been stopped
    /// or replaced are dropped.
    Tick { generation: u64 },
    /// Stop processing and return from `run`.
    Shutdown,
}

pub type EngineSender = Sender<EngineEvent>;

/// Represents the status of the engine after processing an event.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineStatus {
    Running,
    Shutdown,
}

/// Composes a game with the screen, dispatcher and turn clock.
pub struct Engine<G: Game> {
    screen: Screen,
    game: G,
    dispatcher: Dispatcher,
    event_tx: EngineSender,
    event_rx: Receiver<EngineEvent>,
    pending_surface: Option<Box<dyn Surface>>,
    started: bool,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G, config: Config) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(config.input.dismiss_key);
        Engine {
            screen: Screen::new(config, event_tx.clone()),
            game,
            dispatcher,
            event_tx,
            event_rx,
            pending_surface: None,
            started: false,
        }
    }

    /// Handle for front-ends to queue events from any thread.
    pub fn sender(&self) -> EngineSender {
        self.event_tx.clone()
    }

    /// Attaches the render target. Before `start` the surface is held until
    /// the game has configured the screen.
    pub fn attach_surface(&mut self, mut surface: Box<dyn Surface>) -> Result<()> {
        if !self.started {
            self.pending_surface = Some(surface);
            return Ok(());
        }
        let layout = *self
            .screen
            .layout()
            .ok_or(EngineError::ScreenNotConfigured)?;
        surface
            .configure(&layout)
            .context("Failed to construct viewport")?;
        self.screen.attach_surface(surface);
        self.screen.flush_redraw();
        Ok(())
    }

    /// Runs `Game::initialize`, then builds the viewport and draws the first
    /// frame. Fails if the game never configured the screen or the surface
    /// cannot be constructed.
    pub fn start(&mut self) -> Result<()> {
        info!("Engine: starting");
        self.game
            .initialize(&mut self.screen)
            .context("Game initialization failed")?;
        let layout = *self
            .screen
            .layout()
            .ok_or(EngineError::ScreenNotConfigured)
            .context("Game did not configure the screen during initialize")?;
        if let Some(mut surface) = self.pending_surface.take() {
            surface
                .configure(&layout)
                .context("Failed to construct viewport")?;
            self.screen.attach_surface(surface);
        }
        self.started = true;
        self.screen.flush_redraw();
        info!(
            "Engine: started with {}x{} grid",
            self.screen.screen_width(),
            self.screen.screen_height()
        );
        Ok(())
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Processes a single event without presenting.
    pub fn process_event(&mut self, event: EngineEvent) -> EngineStatus {
        match event {
            EngineEvent::Input(raw) => self.handle_input(raw),
            EngineEvent::Tick { generation } => self.handle_tick(generation),
            EngineEvent::Shutdown => {
                info!("Engine: shutdown requested");
                return EngineStatus::Shutdown;
            }
        }
        EngineStatus::Running
    }

    /// Normalizes and routes one raw input event, then presents if needed.
    pub fn dispatch(&mut self, raw: RawEvent) {
        self.handle_input(raw);
        self.screen.flush_redraw();
    }

    /// Processes everything currently queued without blocking.
    pub fn run_pending(&mut self) -> EngineStatus {
        let status = self.drain();
        self.screen.flush_redraw();
        status
    }

    /// Main loop. Returns after `EngineEvent::Shutdown`.
    pub fn run(&mut self) -> Result<()> {
        info!("Engine: entering event loop");
        loop {
            let event = self
                .event_rx
                .recv()
                .context("Engine event channel closed")?;
            let mut status = self.process_event(event);
            if status == EngineStatus::Running {
                status = self.drain();
            }
            self.screen.flush_redraw();
            if status == EngineStatus::Shutdown {
                break;
            }
        }
        self.screen.stop_turn_timer();
        info!("Engine: event loop finished");
        Ok(())
    }

    fn drain(&mut self) -> EngineStatus {
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => {
                    if self.process_event(event) == EngineStatus::Shutdown {
                        return EngineStatus::Shutdown;
                    }
                }
                // The engine holds a sender itself, so the queue never disconnects.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {
                    return EngineStatus::Running
                }
            }
        }
    }

    fn handle_input(&mut self, raw: RawEvent) {
        let Some(layout) = self.screen.layout().copied() else {
            warn!("Engine: input {:?} before the screen was configured", raw);
            return;
        };
        let Some(event) = InputEvent::normalize(raw, &layout) else {
            return;
        };
        let state = DispatchState::from(self.screen.dialog());
        match self.dispatcher.route(state, event) {
            Route::Forward(call) => self.call_game(call),
            Route::Swallow => trace!("Engine: {:?} swallowed by dialog", event),
            Route::Dismiss => self.screen.hide_message_dialog(),
        }
    }

    fn call_game(&mut self, call: GameCall) {
        let screen = &mut self.screen;
        let result = match call {
            GameCall::MouseLeftClick { x, y } => self.game.on_mouse_left_click(screen, x, y),
            GameCall::MouseRightClick { x, y } => self.game.on_mouse_right_click(screen, x, y),
            GameCall::KeyPress(key) => self.game.on_key_press(screen, key),
            GameCall::KeyReleased(key) => self.game.on_key_released(screen, key),
        };
        if let Err(e) = result {
            error!("Engine: game callback {:?} failed: {:#}", call, e);
        }
    }

    fn handle_tick(&mut self, generation: u64) {
        if !self.screen.clock_mut().accepts(generation) {
            trace!("Engine: dropping stale tick from generation {}", generation);
            return;
        }
        if self.screen.is_dialog_shown() {
            trace!("Engine: tick skipped while dialog is shown");
            return;
        }
        let step = self.screen.clock_mut().advance();
        if let Err(e) = self.game.on_turn(&mut self.screen, step) {
            error!("Engine: on_turn({}) failed: {:#}", step, e);
        }
        self.screen.request_redraw();
    }
}

impl<G: Game> Drop for Engine<G> {
    fn drop(&mut self) {
        debug!("Engine dropped");
        self.screen.stop_turn_timer();
    }
}

#[cfg(test)]
mod tests;
