// src/screen.rs

//! The engine facade handed to every game callback.
//!
//! `Screen` owns the cell grid, the dialog overlay, the score, the turn clock
//! state, the random source and the attached render surface. It lives on the
//! engine's thread; the turn clock only ever talks to it through the engine
//! queue.

use crate::audio::{self, Sound, SoundPlayer};
use crate::cell::{Cell, DisplayFlags};
use crate::clock::ClockState;
use crate::color::Color;
use crate::config::Config;
use crate::dialog::{Dialog, MessageDialog};
use crate::engine::EngineSender;
use crate::error::EngineError;
use crate::grid::{Grid, Layout};
use crate::renderer::RenderSnapshot;
use crate::surface::Surface;
use log::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct Screen {
    config: Config,
    grid: Option<Grid>,
    dialog: Dialog,
    flags: DisplayFlags,
    score: i32,
    clock: ClockState,
    engine_tx: EngineSender,
    rng: ChaCha8Rng,
    sound: Box<dyn SoundPlayer>,
    surface: Option<Box<dyn Surface>>,
    needs_redraw: bool,
}

impl Screen {
    pub(crate) fn new(config: Config, engine_tx: EngineSender) -> Self {
        let rng = match config.rng.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut flags = DisplayFlags::empty();
        flags.set(DisplayFlags::SHOW_GRID, config.display.show_grid);
        flags.set(DisplayFlags::SHOW_COORDINATES, config.display.show_coordinates);
        let sound = audio::player_from_config(&config.audio);
        Screen {
            config,
            grid: None,
            dialog: Dialog::Hidden,
            flags,
            score: 0,
            clock: ClockState::default(),
            engine_tx,
            rng,
            sound,
            surface: None,
            needs_redraw: false,
        }
    }

    // --- Screen geometry ---

    /// Clamps both dimensions to `[3, 100]` and allocates a fresh grid,
    /// discarding every cell of the previous one. An attached surface is
    /// resized to the new viewport.
    pub fn configure_screen(&mut self, width: usize, height: usize) {
        let grid = Grid::new(width, height, &self.config.viewport, &self.config.display);
        info!(
            "Screen: configured {}x{} (requested {}x{}), cell size {}px",
            grid.width(),
            grid.height(),
            width,
            height,
            grid.cell_size()
        );
        let layout = *grid.layout();
        self.grid = Some(grid);
        if let Some(surface) = self.surface.as_mut() {
            if let Err(e) = surface.configure(&layout) {
                error!("Screen: surface rejected new viewport: {:#}", e);
            }
        }
        self.request_redraw();
    }

    /// Width in cells, 0 before `configure_screen`.
    pub fn screen_width(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::width)
    }

    /// Height in cells, 0 before `configure_screen`.
    pub fn screen_height(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::height)
    }

    pub fn cell_size(&self) -> Option<u32> {
        self.grid.as_ref().map(Grid::cell_size)
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.grid.as_ref().map(Grid::layout)
    }

    pub fn is_configured(&self) -> bool {
        self.grid.is_some()
    }

    fn grid(&self) -> Result<&Grid, EngineError> {
        self.grid.as_ref().ok_or(EngineError::ScreenNotConfigured)
    }

    fn cell(&self, x: usize, y: usize) -> Result<&Cell, EngineError> {
        self.grid()?.cell(x, y)
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Result<(&mut Cell, u32), EngineError> {
        let grid = self.grid.as_mut().ok_or(EngineError::ScreenNotConfigured)?;
        let cell_size = grid.cell_size();
        Ok((grid.cell_mut(x, y)?, cell_size))
    }

    // --- Cell text ---

    /// Sets the text of a cell and auto-sizes its font to fit. Setting the
    /// text the cell already has changes nothing.
    pub fn set_cell_value(&mut self, x: usize, y: usize, value: &str) -> Result<(), EngineError> {
        let fraction = self.config.display.auto_text_fraction;
        let (cell, cell_size) = self.cell_mut(x, y)?;
        if cell.text == value {
            return Ok(());
        }
        cell.font_px = Cell::auto_font_px(value, cell_size, fraction);
        cell.text = value.to_string();
        trace!("Screen: cell ({}, {}) = {:?}", x, y, value);
        self.request_redraw();
        Ok(())
    }

    pub fn get_cell_value(&self, x: usize, y: usize) -> Result<String, EngineError> {
        Ok(self.cell(x, y)?.text.clone())
    }

    pub fn set_cell_number(&mut self, x: usize, y: usize, value: i32) -> Result<(), EngineError> {
        self.set_cell_value(x, y, &value.to_string())
    }

    /// Parses the cell text as a decimal integer; anything unparseable reads as 0.
    pub fn get_cell_number(&self, x: usize, y: usize) -> Result<i32, EngineError> {
        let cell = self.cell(x, y)?;
        Ok(cell.text.parse().unwrap_or_else(|_| {
            if !cell.text.is_empty() {
                trace!("Screen: cell ({}, {}) text {:?} is not a number", x, y, cell.text);
            }
            0
        }))
    }

    // --- Cell styling ---

    /// Sets the background of a cell. `Color::None` leaves the cell unchanged.
    pub fn set_cell_color(&mut self, x: usize, y: usize, color: Color) -> Result<(), EngineError> {
        let (cell, _) = self.cell_mut(x, y)?;
        if color == Color::None || cell.background == color {
            return Ok(());
        }
        cell.background = color;
        self.request_redraw();
        Ok(())
    }

    pub fn get_cell_color(&self, x: usize, y: usize) -> Result<Color, EngineError> {
        Ok(self.cell(x, y)?.background)
    }

    pub fn set_cell_text_color(&mut self, x: usize, y: usize, color: Color) -> Result<(), EngineError> {
        let (cell, _) = self.cell_mut(x, y)?;
        if cell.text_color == color {
            return Ok(());
        }
        cell.text_color = color;
        self.request_redraw();
        Ok(())
    }

    pub fn get_cell_text_color(&self, x: usize, y: usize) -> Result<Color, EngineError> {
        Ok(self.cell(x, y)?.text_color)
    }

    /// Sets the font size as a percent (clamped to `0..=100`) of the cell size.
    pub fn set_cell_text_size(&mut self, x: usize, y: usize, percent: i32) -> Result<(), EngineError> {
        let (cell, cell_size) = self.cell_mut(x, y)?;
        cell.font_px = Cell::font_px_for_percent(percent, cell_size);
        self.request_redraw();
        Ok(())
    }

    pub fn get_cell_text_size(&self, x: usize, y: usize) -> Result<i32, EngineError> {
        let grid = self.grid()?;
        Ok(grid.cell(x, y)?.text_size_percent(grid.cell_size()))
    }

    /// Sets value, background, then the optional text color and size, in
    /// that order, so the later settings win over the auto-sizing.
    pub fn set_cell_value_ex(
        &mut self,
        x: usize,
        y: usize,
        background: Color,
        value: &str,
        text_color: Option<Color>,
        text_size: Option<i32>,
    ) -> Result<(), EngineError> {
        self.set_cell_value(x, y, value)?;
        self.set_cell_color(x, y, background)?;
        if let Some(color) = text_color {
            self.set_cell_text_color(x, y, color)?;
        }
        if let Some(percent) = text_size {
            self.set_cell_text_size(x, y, percent)?;
        }
        Ok(())
    }

    // --- Display toggles and score ---

    pub fn show_grid(&mut self, show: bool) {
        self.flags.set(DisplayFlags::SHOW_GRID, show);
        self.request_redraw();
    }

    pub fn show_coordinates(&mut self, show: bool) {
        self.flags.set(DisplayFlags::SHOW_COORDINATES, show);
        self.request_redraw();
    }

    pub fn display_flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn set_score(&mut self, score: i32) {
        self.score = score;
        self.request_redraw();
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    // --- Dialog overlay ---

    /// Shows a modal message. Until the dismiss key is pressed, clicks are
    /// swallowed and the turn clock skips its ticks.
    pub fn show_message_dialog(&mut self, background: Color, message: &str, text_color: Color, text_size: u32) {
        debug!("Screen: showing dialog {:?}", message);
        self.dialog.show(MessageDialog {
            message: message.to_string(),
            background,
            text_color,
            text_size,
        });
        self.request_redraw();
    }

    pub fn is_dialog_shown(&self) -> bool {
        self.dialog.is_shown()
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub(crate) fn hide_message_dialog(&mut self) {
        if let Some(dialog) = self.dialog.hide() {
            debug!("Screen: dismissed dialog {:?}", dialog.message);
            self.request_redraw();
        }
    }

    // --- Turn clock ---

    /// `interval_ms <= 0` cancels the clock; a positive interval replaces
    /// any running clock with a new one.
    pub fn set_turn_timer(&mut self, interval_ms: i64) -> Result<(), EngineError> {
        self.clock.configure(interval_ms, &self.engine_tx)
    }

    /// Cancels the clock. No `on_turn` runs after this returns.
    pub fn stop_turn_timer(&mut self) {
        self.clock.stop();
    }

    pub fn is_turn_timer_running(&self) -> bool {
        self.clock.is_enabled()
    }

    pub fn tick_count(&self) -> u64 {
        self.clock.tick_count()
    }

    pub(crate) fn clock_mut(&mut self) -> &mut ClockState {
        &mut self.clock
    }

    // --- Randomness and sound ---

    /// Uniform integer in `[0, max)`.
    pub fn get_random_number(&mut self, max: i32) -> Result<i32, EngineError> {
        self.get_random_number_in(0, max)
    }

    /// Uniform integer in `[min, max)`.
    pub fn get_random_number_in(&mut self, min: i32, max: i32) -> Result<i32, EngineError> {
        if min >= max {
            return Err(EngineError::InvalidRandomRange { min, max });
        }
        Ok(self.rng.gen_range(min..max))
    }

    pub fn play_sound(&self, sound: Sound) {
        self.sound.play(sound);
    }

    pub fn set_sound_player(&mut self, player: Box<dyn SoundPlayer>) {
        self.sound = player;
    }

    // --- Redraw plumbing ---

    /// Marks the frame dirty. Without a surface there is nothing to redraw.
    pub fn request_redraw(&mut self) {
        if self.surface.is_some() {
            self.needs_redraw = true;
        }
    }

    pub fn redraw_pending(&self) -> bool {
        self.needs_redraw
    }

    pub(crate) fn attach_surface(&mut self, surface: Box<dyn Surface>) {
        self.surface = Some(surface);
        self.needs_redraw = true;
    }

    pub fn snapshot(&self) -> Option<RenderSnapshot> {
        self.grid
            .as_ref()
            .map(|grid| RenderSnapshot::capture(grid, self.flags, self.score, self.dialog.message()))
    }

    /// Presents a frame if one was requested. Surface failures are logged.
    pub(crate) fn flush_redraw(&mut self) {
        if !std::mem::take(&mut self.needs_redraw) {
            return;
        }
        let Some(snapshot) = self.snapshot() else {
            return;
        };
        if let Some(surface) = self.surface.as_mut() {
            trace!("Screen: presenting frame");
            if let Err(e) = surface.present(&snapshot) {
                warn!("Screen: failed to present frame: {:#}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests;
