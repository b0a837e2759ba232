// src/keys.rs

//! Normalized keyboard keys delivered to games.

use serde::{Deserialize, Serialize};

/// Represents a key as games see it.
///
/// Raw platform key codes are folded into this small set; anything the
/// engine does not recognize becomes `Key::Unknown` instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Key {
    Enter,
    Pause,
    Escape,
    Space,
    Left,
    Up,
    Right,
    Down,
    #[default]
    Unknown,
}

// Virtual key codes understood by `Key::from_code`.
const VK_ENTER: u32 = 10;
const VK_PAUSE: u32 = 19;
const VK_ESCAPE: u32 = 27;
const VK_SPACE: u32 = 32;
const VK_LEFT: u32 = 37;
const VK_UP: u32 = 38;
const VK_RIGHT: u32 = 39;
const VK_DOWN: u32 = 40;

impl Key {
    /// Normalizes a raw virtual key code.
    pub fn from_code(code: u32) -> Self {
        match code {
            VK_ENTER => Key::Enter,
            VK_PAUSE => Key::Pause,
            VK_ESCAPE => Key::Escape,
            VK_SPACE => Key::Space,
            VK_LEFT => Key::Left,
            VK_UP => Key::Up,
            VK_RIGHT => Key::Right,
            VK_DOWN => Key::Down,
            _ => Key::Unknown,
        }
    }

    /// The raw code a front-end should report for this key, if it has one.
    pub fn code(self) -> Option<u32> {
        match self {
            Key::Enter => Some(VK_ENTER),
            Key::Pause => Some(VK_PAUSE),
            Key::Escape => Some(VK_ESCAPE),
            Key::Space => Some(VK_SPACE),
            Key::Left => Some(VK_LEFT),
            Key::Up => Some(VK_UP),
            Key::Right => Some(VK_RIGHT),
            Key::Down => Some(VK_DOWN),
            Key::Unknown => None,
        }
    }
}
