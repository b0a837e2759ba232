// src/error.rs

use std::io;
use thiserror::Error;

/// Conditions surfaced by the engine facade.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("screen size has not been configured")]
    ScreenNotConfigured,
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("invalid random range [{min}, {max})")]
    InvalidRandomRange { min: i32, max: i32 },
    #[error("failed to spawn turn clock thread: {0}")]
    ClockSpawn(#[source] io::Error),
    #[error("required resource is unavailable: {0}")]
    ResourceMissing(String),
}
