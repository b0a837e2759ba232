// src/surface.rs

//! Defines the `Surface` trait the engine presents frames to, plus two
//! implementations: a headless one that records frames and a console one
//! that prints the board as text.

use crate::grid::Layout;
use crate::renderer::{RenderCommand, RenderSnapshot, Renderer};
use anyhow::{Context, Result};
use log::{debug, trace};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// A render target owned by the engine.
pub trait Surface: Send {
    /// (Re)sizes the viewport. Called when the surface is attached and every
    /// time the screen is reconfigured. A failure here is fatal at startup.
    fn configure(&mut self, layout: &Layout) -> Result<()>;

    /// Draws one frame.
    fn present(&mut self, snapshot: &RenderSnapshot) -> Result<()>;
}

/// Frames recorded by a `HeadlessSurface`, shareable with the test that created it.
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    inner: Arc<Mutex<FrameLogInner>>,
}

#[derive(Debug, Default)]
struct FrameLogInner {
    layouts: Vec<Layout>,
    frames: Vec<RenderSnapshot>,
    commands: Vec<Vec<RenderCommand>>,
}

impl FrameLog {
    fn with<T>(&self, f: impl FnOnce(&FrameLogInner) -> T) -> T {
        // A poisoned log still holds whatever was recorded.
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    pub fn frame_count(&self) -> usize {
        self.with(|log| log.frames.len())
    }

    pub fn last_frame(&self) -> Option<RenderSnapshot> {
        self.with(|log| log.frames.last().cloned())
    }

    pub fn last_commands(&self) -> Option<Vec<RenderCommand>> {
        self.with(|log| log.commands.last().cloned())
    }

    pub fn layouts(&self) -> Vec<Layout> {
        self.with(|log| log.layouts.clone())
    }
}

/// Surface without a display: renders every frame to commands and keeps them.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    renderer: Renderer,
    log: FrameLog,
}

impl HeadlessSurface {
    /// Returns the surface and a handle to its recordings.
    pub fn new() -> (Self, FrameLog) {
        let log = FrameLog::default();
        (
            HeadlessSurface {
                renderer: Renderer::new(),
                log: log.clone(),
            },
            log,
        )
    }

    fn record(&self, f: impl FnOnce(&mut FrameLogInner)) {
        let mut guard = self.log.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
    }
}

impl Surface for HeadlessSurface {
    fn configure(&mut self, layout: &Layout) -> Result<()> {
        debug!(
            "HeadlessSurface: viewport {}x{}",
            layout.viewport_width, layout.viewport_height
        );
        self.record(|log| log.layouts.push(*layout));
        Ok(())
    }

    fn present(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        let commands = self.renderer.render(snapshot);
        trace!("HeadlessSurface: frame with {} commands", commands.len());
        self.record(|log| {
            log.frames.push(snapshot.clone());
            log.commands.push(commands);
        });
        Ok(())
    }
}

/// Prints frames as a text board to a writer.
pub struct ConsoleSurface<W: Write + Send> {
    out: W,
    column_width: usize,
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        ConsoleSurface {
            out,
            column_width: 1,
        }
    }

    /// Renders a snapshot into the text that `present` writes.
    pub fn format_frame(&self, snapshot: &RenderSnapshot) -> String {
        let width = self.column_width.max(
            snapshot
                .rows
                .iter()
                .flatten()
                .map(|cell| cell.text.trim().chars().count())
                .max()
                .unwrap_or(1),
        );
        let mut text = String::new();
        text.push_str("   ");
        for x in 0..snapshot.width {
            text.push_str(&format!(" {:^width$}", x, width = width));
        }
        text.push('\n');
        for (y, row) in snapshot.rows.iter().enumerate() {
            text.push_str(&format!("{:>2} ", y));
            for cell in row {
                let shown = match cell.text.trim() {
                    "" => ".",
                    t => t,
                };
                text.push_str(&format!("|{:^width$}", shown, width = width));
            }
            text.push_str("|\n");
        }
        text.push_str(&format!("Score: {}\n", snapshot.score));
        if let Some(dialog) = &snapshot.dialog {
            text.push_str(&format!("*** {} ***\n", dialog.message.trim()));
        }
        text
    }
}

impl<W: Write + Send> Surface for ConsoleSurface<W> {
    fn configure(&mut self, layout: &Layout) -> Result<()> {
        debug!("ConsoleSurface: cell size {}px", layout.cell_size);
        Ok(())
    }

    fn present(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        let frame = self.format_frame(snapshot);
        self.out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
            .context("Failed to write frame to console")
    }
}
