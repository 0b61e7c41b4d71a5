//! Rendering layer.  All terminal I/O lives here.
//!
//! Scenes draw in logical playfield coordinates through the [`Canvas`]
//! trait.  [`FrameBuffer`] rasterises those calls into a small RGB grid
//! and [`present`] turns the grid into half-block characters, two pixels
//! per terminal cell, with text runs printed over the top.

mod framebuffer;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::sprite::{Rgba, Sprite};

pub use framebuffer::{FrameBuffer, TextRun};

/// A drawable target in logical playfield coordinates.
pub trait Canvas {
    fn fill(&mut self, color: Rgba);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba);
    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba);
    /// Draw `sprite` with its top-left corner at `(x, y)`, resized by
    /// `scale` and with every pixel's alpha multiplied by `alpha / 255`.
    fn blit(&mut self, sprite: &Sprite, x: f32, y: f32, scale: f32, alpha: u8);
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgba);
    /// Logical width and height `text` occupies when drawn.
    fn text_size(&self, text: &str) -> (f32, f32);
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Where the playfield sits inside the terminal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_col: u16,
    pub origin_row: u16,
    /// Pixel grid size; every terminal cell holds two stacked pixels.
    pub px_width: usize,
    pub px_height: usize,
    logical_width: f32,
    logical_height: f32,
}

impl Viewport {
    /// Largest square-pixel grid of the playfield's aspect ratio that fits
    /// a `cols` × `rows` terminal, centred.
    pub fn fit(cols: u16, rows: u16, logical_width: f32, logical_height: f32) -> Self {
        let avail_w = cols.max(1) as f32;
        let avail_h = rows.max(1) as f32 * 2.0;
        let scale = (avail_w / logical_width).min(avail_h / logical_height);
        let px_width = ((logical_width * scale).floor() as usize).max(1);
        let px_height = ((logical_height * scale).floor() as usize).max(2);
        let used_rows = px_height.div_ceil(2) as u16;
        Self {
            origin_col: cols.saturating_sub(px_width as u16) / 2,
            origin_row: rows.saturating_sub(used_rows) / 2,
            px_width,
            px_height,
            logical_width,
            logical_height,
        }
    }

    pub fn frame_buffer(&self) -> FrameBuffer {
        FrameBuffer::new(
            self.logical_width,
            self.logical_height,
            self.px_width,
            self.px_height,
        )
    }

    /// Logical point at the centre of a terminal cell, if it is on the
    /// playfield.
    pub fn to_logical(&self, col: u16, row: u16) -> Option<(f32, f32)> {
        let px = col.checked_sub(self.origin_col)? as f32 + 0.5;
        let py = row.checked_sub(self.origin_row)? as f32 * 2.0 + 1.0;
        if px > self.px_width as f32 || py > self.px_height as f32 {
            return None;
        }
        Some((
            px * self.logical_width / self.px_width as f32,
            py * self.logical_height / self.px_height as f32,
        ))
    }
}

// ── Presentation ──────────────────────────────────────────────────────────────

fn term_color(c: Rgba) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

/// Render one complete frame.
pub fn present<W: Write>(out: &mut W, fb: &FrameBuffer, view: &Viewport) -> std::io::Result<()> {
    let rows = fb.height().div_ceil(2);
    let mut fg: Option<Rgba> = None;
    let mut bg: Option<Rgba> = None;

    for row in 0..rows {
        out.queue(cursor::MoveTo(view.origin_col, view.origin_row + row as u16))?;
        for col in 0..fb.width() {
            let top = fb.pixel(col, row * 2);
            let bottom = fb.pixel(col, row * 2 + 1);
            if fg != Some(top) {
                out.queue(style::SetForegroundColor(term_color(top)))?;
                fg = Some(top);
            }
            if bg != Some(bottom) {
                out.queue(style::SetBackgroundColor(term_color(bottom)))?;
                bg = Some(bottom);
            }
            out.queue(Print('▀'))?;
        }
    }

    for run in fb.texts() {
        let room = fb.width().saturating_sub(run.col as usize);
        if run.row as usize >= rows || room == 0 {
            continue;
        }
        let visible: String = run.text.chars().take(room).collect();
        out.queue(cursor::MoveTo(
            view.origin_col + run.col,
            view.origin_row + run.row,
        ))?;
        // Text background matches the pixels it covers.
        let under = fb.pixel(run.col as usize, run.row as usize * 2 + 1);
        out.queue(style::SetBackgroundColor(term_color(under)))?;
        out.queue(style::SetForegroundColor(term_color(run.color)))?;
        out.queue(Print(visible))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
