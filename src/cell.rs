// src/cell.rs

//! Defines the `Cell` record stored at every grid position and the
//! screen-wide `DisplayFlags`.

use crate::color::Color;
use bitflags::bitflags;
use std::fmt;

/// Strings up to this many characters get the fixed auto font fraction.
pub const SHORT_TEXT_LEN: usize = 4;

/// A single addressable grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Text shown in the cell. Empty by default.
    pub text: String,
    pub text_color: Color,
    pub background: Color,
    /// Font size in pixels. Games talk in percent of the cell size; see
    /// `Cell::text_size_percent`.
    pub font_px: f32,
}

impl Cell {
    pub fn new(background: Color, text_color: Color, font_px: f32) -> Self {
        Cell {
            text: String::new(),
            text_color,
            background,
            font_px,
        }
    }

    /// Font size picked automatically for `text`: short strings get
    /// `fraction` of the cell, longer ones shrink with their length.
    pub fn auto_font_px(text: &str, cell_size: u32, fraction: f32) -> f32 {
        let len = text.chars().count();
        if len <= SHORT_TEXT_LEN {
            cell_size as f32 * fraction
        } else {
            (cell_size as usize / len) as f32
        }
    }

    /// Font size in pixels for a percent of `cell_size`. Percent is clamped to `0..=100`.
    pub fn font_px_for_percent(percent: i32, cell_size: u32) -> f32 {
        let percent = percent.clamp(0, 100);
        cell_size as f32 * (percent as f32 / 100.0)
    }

    /// Inverse of `font_px_for_percent`, truncating to whole pixels first.
    pub fn text_size_percent(&self, cell_size: u32) -> i32 {
        if cell_size == 0 {
            return 0;
        }
        (self.font_px as i32) * 100 / cell_size as i32
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

bitflags! {
    /// Screen-wide display toggles.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    pub struct DisplayFlags: u8 {
        /// Outline every cell.
        const SHOW_GRID        = 1 << 0;
        /// Draw "x-y" labels in each cell's corner.
        const SHOW_COORDINATES = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn short_text_uses_fixed_fraction() {
        assert_eq!(Cell::auto_font_px("X", 200, 0.4), 80.0);
        assert_eq!(Cell::auto_font_px("1024", 200, 0.4), 80.0);
    }

    #[test]
    fn long_text_shrinks_with_length() {
        assert_eq!(Cell::auto_font_px("12345", 200, 0.4), 40.0);
        assert_eq!(Cell::auto_font_px("1234567", 200, 0.4), 28.0);
    }

    #[test]
    fn percent_round_trips_through_pixels() {
        let mut cell = Cell::new(Color::White, Color::Black, 0.0);
        cell.font_px = Cell::font_px_for_percent(50, 200);
        assert_eq!(cell.text_size_percent(200), 50);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(Cell::font_px_for_percent(150, 200), 200.0);
        assert_eq!(Cell::font_px_for_percent(-20, 200), 0.0);
    }
}
