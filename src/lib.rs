//! Cellgrid library crate.
//!
//! A small engine for turn-based games played on a grid of colored cells,
//! plus the games built on it.

pub mod audio;
pub mod cell;
pub mod clock;
pub mod color;
pub mod config;
pub mod dialog;
pub mod engine;
pub mod error;
pub mod game;
pub mod games;
pub mod grid;
pub mod input;
pub mod keys;
pub mod renderer;
pub mod screen;
pub mod surface;

pub use color::Color;
pub use config::Config;
pub use engine::{Engine, EngineEvent, EngineSender, EngineStatus};
pub use error::EngineError;
pub use game::Game;
pub use keys::Key;
pub use screen::Screen;
