// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer` turns a `RenderSnapshot` of the engine's visible state into
//! a list of backend-agnostic `RenderCommand`s. It knows the pixel layout of
//! the board, the score bar and the dialog overlay, but not how any of it is
//! painted; that is left to a `Surface`.

use crate::cell::{Cell, DisplayFlags};
use crate::color::Color;
use crate::dialog::MessageDialog;
use crate::grid::{Grid, Layout};
use log::trace;

/// Color used to clear the viewport before the board is drawn.
pub const RENDERER_CLEAR_COLOR: Color = Color::Black;
/// Outline color of cells when the grid is shown.
pub const RENDERER_GRID_COLOR: Color = Color::Black;

const SCORE_BAR_HEIGHT: u32 = 20;
const SCORE_BAR_GAP: u32 = 6;
const SCORE_FONT_PX: f32 = 16.0;
const SCORE_TEXT_INSET: u32 = 35;
// Rough glyph metrics used to size text runs and the dialog box.
const GLYPH_WIDTH_RATIO: f32 = 0.6;
const DIALOG_LINE_HEIGHT: f32 = 1.2;
const DIALOG_BASELINE: f32 = 0.8;

/// Immutable copy of everything a frame needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub layout: Layout,
    pub width: usize,
    pub height: usize,
    /// Cells row by row.
    pub rows: Vec<Vec<Cell>>,
    pub flags: DisplayFlags,
    pub score: i32,
    pub dialog: Option<MessageDialog>,
}

impl RenderSnapshot {
    pub fn capture(grid: &Grid, flags: DisplayFlags, score: i32, dialog: Option<&MessageDialog>) -> Self {
        RenderSnapshot {
            layout: *grid.layout(),
            width: grid.width(),
            height: grid.height(),
            rows: grid.rows().map(|row| row.to_vec()).collect(),
            flags,
            score,
            dialog: dialog.cloned(),
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }
}

/// Drawing primitives in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clears the entire viewport.
    ClearAll { color: Color },
    /// Fills a rectangle.
    FillRect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: Color,
    },
    /// Outlines a rectangle with a one pixel line.
    StrokeRect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: Color,
    },
    /// Draws text with its baseline starting at `(x, y)`.
    DrawText {
        x: u32,
        y: u32,
        text: String,
        color: Color,
        font_px: f32,
    },
}

/// Translates snapshots into `RenderCommand`s. Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    pub fn render(&self, snapshot: &RenderSnapshot) -> Vec<RenderCommand> {
        let mut commands = vec![RenderCommand::ClearAll {
            color: RENDERER_CLEAR_COLOR,
        }];
        for (y, row) in snapshot.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                self.draw_cell(&snapshot.layout, snapshot.flags, x, y, cell, &mut commands);
            }
        }
        self.draw_score(snapshot, &mut commands);
        if let Some(dialog) = &snapshot.dialog {
            self.draw_dialog(&snapshot.layout, dialog, &mut commands);
        }
        trace!("Renderer: {} commands for frame", commands.len());
        commands
    }

    fn draw_cell(
        &self,
        layout: &Layout,
        flags: DisplayFlags,
        x: usize,
        y: usize,
        cell: &Cell,
        commands: &mut Vec<RenderCommand>,
    ) {
        let (ox, oy) = layout.cell_origin(x, y);
        let size = layout.cell_size;
        if !cell.background.is_none() {
            commands.push(RenderCommand::FillRect {
                x: ox,
                y: oy,
                width: size,
                height: size,
                color: cell.background,
            });
        }
        if flags.contains(DisplayFlags::SHOW_GRID) {
            commands.push(RenderCommand::StrokeRect {
                x: ox,
                y: oy,
                width: size,
                height: size,
                color: RENDERER_GRID_COLOR,
            });
        }
        if !cell.text.is_empty() {
            // Centre the run horizontally, baseline a third of the font below centre.
            let text_width = cell.text.chars().count() as f32 * cell.font_px * GLYPH_WIDTH_RATIO;
            let tx = (ox as f32 + (size as f32 - text_width) / 2.0).max(ox as f32);
            let ty = oy as f32 + size as f32 / 2.0 + cell.font_px / 3.0;
            commands.push(RenderCommand::DrawText {
                x: tx as u32,
                y: ty as u32,
                text: cell.text.clone(),
                color: cell.text_color,
                font_px: cell.font_px,
            });
        }
        if flags.contains(DisplayFlags::SHOW_COORDINATES) {
            let font_px = size / 3;
            commands.push(RenderCommand::DrawText {
                x: ox + font_px / 2,
                y: oy + font_px,
                text: format!("{}-{}", x, y),
                color: Color::Black,
                font_px: font_px as f32,
            });
        }
    }

    fn draw_score(&self, snapshot: &RenderSnapshot, commands: &mut Vec<RenderCommand>) {
        let layout = &snapshot.layout;
        let width = layout.grid_width_px.saturating_sub(1) / 2;
        let x = (layout.grid_width_px / 2 + layout.origin_x).saturating_sub(width / 2);
        let y = layout.grid_height_px + layout.origin_y + SCORE_BAR_GAP;
        commands.push(RenderCommand::FillRect {
            x,
            y,
            width,
            height: SCORE_BAR_HEIGHT,
            color: Color::White,
        });
        commands.push(RenderCommand::DrawText {
            x: (x + width / 2).saturating_sub(SCORE_TEXT_INSET),
            y: y + SCORE_FONT_PX as u32,
            text: format!("Score: {}", snapshot.score),
            color: Color::Black,
            font_px: SCORE_FONT_PX,
        });
    }

    fn draw_dialog(&self, layout: &Layout, dialog: &MessageDialog, commands: &mut Vec<RenderCommand>) {
        let font_px = dialog.text_size as f32;
        let width = (dialog.message.chars().count() as f32 * font_px * GLYPH_WIDTH_RATIO) as u32;
        let height = (font_px * DIALOG_LINE_HEIGHT) as u32;
        let x = (layout.viewport_width / 2).saturating_sub(width / 2);
        let y = (layout.viewport_height / 2).saturating_sub(height / 2);
        if dialog.fills_background() {
            commands.push(RenderCommand::FillRect {
                x,
                y,
                width,
                height,
                color: dialog.background,
            });
        }
        commands.push(RenderCommand::DrawText {
            x,
            y: y + (height as f32 * DIALOG_BASELINE) as u32,
            text: dialog.message.clone(),
            color: dialog.text_color,
            font_px,
        });
    }
}
