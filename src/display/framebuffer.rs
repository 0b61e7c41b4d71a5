use super::Canvas;
use crate::sprite::{Rgba, Sprite};

/// Text placed on a terminal cell, drawn over the pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub color: Rgba,
}

/// An opaque RGB pixel grid covering the logical playfield.
///
/// A pixel is painted when its centre falls inside a shape.  Shapes too
/// small to cover any pixel centre still paint the pixel under their
/// anchor point so tiny particles stay visible at terminal resolution.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    /// Pixels per logical unit on each axis.
    sx: f32,
    sy: f32,
    pixels: Vec<Rgba>,
    texts: Vec<TextRun>,
}

impl FrameBuffer {
    pub fn new(logical_width: f32, logical_height: f32, width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            sx: width as f32 / logical_width,
            sy: height as f32 / logical_height,
            pixels: vec![Rgba::BLACK; width * height],
            texts: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel colour; black outside the grid.
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::BLACK;
        }
        self.pixels[y * self.width + x]
    }

    /// Colour of the pixel under a logical point.
    pub fn pixel_at(&self, x: f32, y: f32) -> Rgba {
        if x < 0.0 || y < 0.0 {
            return Rgba::BLACK;
        }
        self.pixel((x * self.sx) as usize, (y * self.sy) as usize)
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgba::BLACK);
        self.texts.clear();
    }

    /// Logical centre of pixel `(i, j)`.
    fn centre(&self, i: usize, j: usize) -> (f32, f32) {
        ((i as f32 + 0.5) / self.sx, (j as f32 + 0.5) / self.sy)
    }

    /// Pixel index range whose centres may lie in `[x0, x1) × [y0, y1)`.
    fn span(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> (usize, usize, usize, usize) {
        let clamp_x = |v: f32| (v.max(0.0) as usize).min(self.width);
        let clamp_y = |v: f32| (v.max(0.0) as usize).min(self.height);
        (
            clamp_x((x0 * self.sx).floor()),
            clamp_y((y0 * self.sy).floor()),
            clamp_x((x1 * self.sx).ceil()),
            clamp_y((y1 * self.sy).ceil()),
        )
    }

    fn blend(&mut self, i: usize, j: usize, color: Rgba) {
        if i >= self.width || j >= self.height || color.a == 0 {
            return;
        }
        let dst = &mut self.pixels[j * self.width + i];
        if color.a == 255 {
            *dst = color.with_alpha(255);
            return;
        }
        let a = color.a as u32;
        let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
        *dst = Rgba::rgb(mix(color.r, dst.r), mix(color.g, dst.g), mix(color.b, dst.b));
    }

    fn plot_logical(&mut self, x: f32, y: f32, color: Rgba) {
        if x >= 0.0 && y >= 0.0 {
            self.blend((x * self.sx) as usize, (y * self.sy) as usize, color);
        }
    }
}

fn point_in_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

impl Canvas for FrameBuffer {
    fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color.with_alpha(255));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (i0, j0, i1, j1) = self.span(x, y, x + w, y + h);
        let mut painted = false;
        for j in j0..j1 {
            for i in i0..i1 {
                let (cx, cy) = self.centre(i, j);
                if cx >= x && cx < x + w && cy >= y && cy < y + h {
                    self.blend(i, j, color);
                    painted = true;
                }
            }
        }
        if !painted {
            self.plot_logical(x, y, color);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let (i0, j0, i1, j1) = self.span(cx - radius, cy - radius, cx + radius, cy + radius);
        let mut painted = false;
        for j in j0..j1 {
            for i in i0..i1 {
                let (px, py) = self.centre(i, j);
                if (px - cx).powi(2) + (py - cy).powi(2) <= radius * radius {
                    self.blend(i, j, color);
                    painted = true;
                }
            }
        }
        if !painted {
            self.plot_logical(cx, cy, color);
        }
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba) {
        if points.len() < 3 {
            return;
        }
        let (mut x0, mut y0) = points[0];
        let (mut x1, mut y1) = points[0];
        for &(x, y) in points {
            x0 = x0.min(x);
            y0 = y0.min(y);
            x1 = x1.max(x);
            y1 = y1.max(y);
        }
        let (i0, j0, i1, j1) = self.span(x0, y0, x1, y1);
        let mut painted = false;
        for j in j0..j1 {
            for i in i0..i1 {
                let (px, py) = self.centre(i, j);
                if point_in_polygon(points, px, py) {
                    self.blend(i, j, color);
                    painted = true;
                }
            }
        }
        if !painted {
            self.plot_logical(points[0].0, points[0].1, color);
        }
    }

    fn blit(&mut self, sprite: &Sprite, x: f32, y: f32, scale: f32, alpha: u8) {
        if scale <= 0.0 || alpha == 0 {
            return;
        }
        let w = sprite.width() as f32 * scale;
        let h = sprite.height() as f32 * scale;
        let (i0, j0, i1, j1) = self.span(x, y, x + w, y + h);
        for j in j0..j1 {
            for i in i0..i1 {
                let (px, py) = self.centre(i, j);
                if px < x || py < y || px >= x + w || py >= y + h {
                    continue;
                }
                let src = sprite.pixel(((px - x) / scale) as i64, ((py - y) / scale) as i64);
                let a = (src.a as u32 * alpha as u32 / 255) as u8;
                self.blend(i, j, src.with_alpha(a));
            }
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgba) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        self.texts.push(TextRun {
            col: (x * self.sx) as u16,
            row: (y * self.sy / 2.0) as u16,
            text: text.to_string(),
            color,
        });
    }

    fn text_size(&self, text: &str) -> (f32, f32) {
        (text.chars().count() as f32 / self.sx, 2.0 / self.sy)
    }
}
