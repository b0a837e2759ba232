// src/input.rs

//! Input dispatch: raw platform events are normalized into cell clicks and
//! keys, then routed according to the dialog state.
//!
//! Routing is a pure function of (state, event) so the engine only has to
//! act on the returned `Route`.

use crate::dialog::Dialog;
use crate::grid::Layout;
use crate::keys::Key;
use log::{debug, trace};

/// Represents mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// Events as delivered by a front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// A pointer click at viewport pixel coordinates.
    Click { button: MouseButton, x: u32, y: u32 },
    /// A key went down. `code` is a raw virtual key code.
    KeyDown { code: u32 },
    /// A key went up.
    KeyUp { code: u32 },
}

/// Normalized events in game terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    LeftClick { x: usize, y: usize },
    RightClick { x: usize, y: usize },
    KeyDown(Key),
    KeyUp(Key),
}

impl InputEvent {
    /// Normalizes a raw event against the current layout.
    ///
    /// Returns `None` for clicks outside the grid and for buttons games
    /// never see.
    pub fn normalize(raw: RawEvent, layout: &Layout) -> Option<Self> {
        match raw {
            RawEvent::Click { button, x, y } => {
                let Some((cx, cy)) = layout.cell_at(x, y) else {
                    trace!("Input: click at ({}, {}) is outside the grid", x, y);
                    return None;
                };
                match button {
                    MouseButton::Left => Some(InputEvent::LeftClick { x: cx, y: cy }),
                    MouseButton::Right => Some(InputEvent::RightClick { x: cx, y: cy }),
                    MouseButton::Middle | MouseButton::Other(_) => None,
                }
            }
            RawEvent::KeyDown { code } => Some(InputEvent::KeyDown(Key::from_code(code))),
            RawEvent::KeyUp { code } => Some(InputEvent::KeyUp(Key::from_code(code))),
        }
    }
}

/// Dispatcher state, derived from the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Normal,
    DialogShown,
}

impl From<&Dialog> for DispatchState {
    fn from(dialog: &Dialog) -> Self {
        if dialog.is_shown() {
            DispatchState::DialogShown
        } else {
            DispatchState::Normal
        }
    }
}

/// A game callback to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCall {
    MouseLeftClick { x: usize, y: usize },
    MouseRightClick { x: usize, y: usize },
    KeyPress(Key),
    KeyReleased(Key),
}

/// What the engine must do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Invoke the game callback.
    Forward(GameCall),
    /// Drop the event.
    Swallow,
    /// Hide the dialog; the game is not told.
    Dismiss,
}

/// Routes normalized events to game callbacks.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    dismiss_key: Key,
}

impl Dispatcher {
    pub fn new(dismiss_key: Key) -> Self {
        Dispatcher { dismiss_key }
    }

    pub fn route(&self, state: DispatchState, event: InputEvent) -> Route {
        let route = match (state, event) {
            (DispatchState::Normal, InputEvent::LeftClick { x, y }) => {
                Route::Forward(GameCall::MouseLeftClick { x, y })
            }
            (DispatchState::Normal, InputEvent::RightClick { x, y }) => {
                Route::Forward(GameCall::MouseRightClick { x, y })
            }
            (DispatchState::DialogShown, InputEvent::LeftClick { .. })
            | (DispatchState::DialogShown, InputEvent::RightClick { .. }) => Route::Swallow,
            (DispatchState::DialogShown, InputEvent::KeyDown(key)) if key == self.dismiss_key => {
                Route::Dismiss
            }
            (_, InputEvent::KeyDown(key)) => Route::Forward(GameCall::KeyPress(key)),
            (_, InputEvent::KeyUp(key)) => Route::Forward(GameCall::KeyReleased(key)),
        };
        debug!("Input: {:?} in {:?} -> {:?}", event, state, route);
        route
    }
}
