// src/config.rs

//! Defines the configuration structures for the grid engine.
//!
//! Every section carries `#[serde(default)]` so a configuration file only has
//! to mention the values it changes. The configuration is deserialized from
//! JSON and handed to the engine explicitly; nothing here is global.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::keys::Key;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "CELLGRID_CONFIG";

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for an engine instance.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Fixed viewport the grid has to fit into.
    pub viewport: ViewportConfig,
    /// Cell defaults and display toggles.
    pub display: DisplayConfig,
    /// Input routing settings.
    pub input: InputConfig,
    /// Random number generation.
    pub rng: RngConfig,
    /// Sound playback.
    pub audio: AudioConfig,
}

impl Config {
    /// Reads a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `CELLGRID_CONFIG`, or defaults when the
    /// variable is unset or the file cannot be used.
    pub fn load_or_default() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)).unwrap_or_else(|e| {
                warn!("{:#}. Using default configuration.", e);
                Config::default()
            }),
            None => {
                info!("Configuration loaded (using default).");
                Config::default()
            }
        }
    }
}

// --- Viewport Configuration ---

/// Pixel budget for the grid plus the decorative border around it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Horizontal pixels available to the grid.
    pub budget_width: u32,
    /// Vertical pixels available to the grid.
    pub budget_height: u32,
    pub border_left: u32,
    pub border_right: u32,
    pub border_top: u32,
    /// Also hosts the score bar.
    pub border_bottom: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig {
            budget_width: 800,
            budget_height: 600,
            border_left: 125,
            border_right: 125,
            border_top: 110,
            border_bottom: 140,
        }
    }
}

// --- Display Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Outline every cell.
    pub show_grid: bool,
    /// Label every cell with its coordinates.
    pub show_coordinates: bool,
    /// Background of a freshly configured cell.
    pub cell_background: Color,
    /// Text color of a freshly configured cell.
    pub cell_text_color: Color,
    /// Fraction of the cell size used as font size for short strings.
    pub auto_text_fraction: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_grid: true,
            show_coordinates: false,
            cell_background: Color::White,
            cell_text_color: Color::Black,
            auto_text_fraction: 0.4,
        }
    }
}

// --- Input Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Key that closes a message dialog. It is not forwarded to the game.
    pub dismiss_key: Key,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            dismiss_key: Key::Space,
        }
    }
}

// --- RNG Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RngConfig {
    /// Fixed seed for reproducible runs. Seeded from OS entropy when `None`.
    pub seed: Option<u64>,
}

// --- Audio Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Directory holding the sound files.
    pub assets_dir: PathBuf,
    /// External program invoked with the sound file path. Sound is disabled when `None`.
    pub player: Option<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            assets_dir: PathBuf::from("assets/sounds"),
            player: None,
        }
    }
}
