// src/game.rs

//! The callback interface a concrete game implements.

use crate::keys::Key;
use crate::screen::Screen;
use anyhow::Result;

/// Callbacks the engine drives a game through.
///
/// Every method has a no-op default, so a game only overrides what it
/// needs. Each callback gets the `Screen` to mutate cells, show dialogs,
/// start the turn clock and so on. An error returned from a callback is
/// logged by the engine and does not stop it.
pub trait Game: Send {
    /// Called once from `Engine::start`. Must configure the screen size.
    fn initialize(&mut self, _screen: &mut Screen) -> Result<()> {
        Ok(())
    }

    fn on_mouse_left_click(&mut self, _screen: &mut Screen, _x: usize, _y: usize) -> Result<()> {
        Ok(())
    }

    fn on_mouse_right_click(&mut self, _screen: &mut Screen, _x: usize, _y: usize) -> Result<()> {
        Ok(())
    }

    fn on_key_press(&mut self, _screen: &mut Screen, _key: Key) -> Result<()> {
        Ok(())
    }

    fn on_key_released(&mut self, _screen: &mut Screen, _key: Key) -> Result<()> {
        Ok(())
    }

    /// Called on every turn clock tick while no dialog is shown. `step`
    /// counts delivered turns from 1 and keeps counting when the clock is
    /// restarted with a new interval.
    fn on_turn(&mut self, _screen: &mut Screen, _step: u64) -> Result<()> {
        Ok(())
    }
}
