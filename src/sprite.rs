//! Decoded images and the opacity masks derived from them.

use crate::assets::AssetError;

// ── Colour ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

// ── Sprite ────────────────────────────────────────────────────────────────────

/// An RGBA image, row-major, top-left origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    /// Wrap raw RGBA8 bytes (as produced by an image decoder).
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self, AssetError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(AssetError::InvalidData(format!(
                "{}x{} image needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        let pixels = data
            .chunks_exact(4)
            .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
            .collect();
        Ok(Self { width, height, pixels })
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build a sprite from character art.  Characters missing from the
    /// palette are transparent; short rows are padded.
    pub fn from_art(rows: &[&str], palette: &[(char, Rgba)]) -> Self {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let mut sprite = Self::filled(width, height, Rgba::TRANSPARENT);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if let Some(&(_, color)) = palette.iter().find(|(c, _)| *c == ch) {
                    sprite.pixels[y * width as usize + x] = color;
                }
            }
        }
        sprite
    }

    /// Build a sprite by evaluating `f` at every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at `(x, y)`; anything outside the image is transparent.
    pub fn pixel(&self, x: i64, y: i64) -> Rgba {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Rgba::TRANSPARENT;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Nearest-neighbour resize.
    pub fn scaled(&self, width: u32, height: u32) -> Sprite {
        if self.width == 0 || self.height == 0 {
            return Self::filled(width, height, Rgba::TRANSPARENT);
        }
        Self::from_fn(width, height, |x, y| {
            let sx = x as u64 * self.width as u64 / width as u64;
            let sy = y as u64 * self.height as u64 / height as u64;
            self.pixel(sx as i64, sy as i64)
        })
    }

    pub fn mask(&self) -> Mask {
        Mask::from_sprite(self)
    }
}

// ── Mask ──────────────────────────────────────────────────────────────────────

/// One bit per pixel: set where the sprite is opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Pixels with alpha above this count as solid.
    pub const ALPHA_THRESHOLD: u8 = 127;

    pub fn from_sprite(sprite: &Sprite) -> Self {
        Self {
            width: sprite.width,
            height: sprite.height,
            bits: sprite
                .pixels
                .iter()
                .map(|p| p.a > Self::ALPHA_THRESHOLD)
                .collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Number of solid pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// First solid pixel shared with `other` when `other` is placed at
    /// `offset` relative to this mask's origin, in this mask's coordinates.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(u32, u32)> {
        let (dx, dy) = (offset.0 as i64, offset.1 as i64);
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (self.width as i64).min(dx + other.width as i64);
        let y1 = (self.height as i64).min(dy + other.height as i64);

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return Some((x as u32, y as u32));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLID: Rgba = Rgba::rgb(200, 0, 0);

    #[test]
    fn from_rgba8_rejects_short_buffers() {
        assert!(Sprite::from_rgba8(2, 2, &[0; 15]).is_err());
        assert!(Sprite::from_rgba8(2, 2, &[0; 16]).is_ok());
    }

    #[test]
    fn art_pads_short_rows_with_transparency() {
        let s = Sprite::from_art(&["##", "#"], &[('#', SOLID)]);
        assert_eq!(s.size(), (2, 2));
        assert_eq!(s.pixel(1, 1), Rgba::TRANSPARENT);
        assert_eq!(s.pixel(0, 1), SOLID);
    }

    #[test]
    fn scaling_up_repeats_pixels() {
        let s = Sprite::from_art(&["#.", ".#"], &[('#', SOLID)]).scaled(4, 4);
        assert_eq!(s.pixel(1, 1), SOLID);
        assert_eq!(s.pixel(2, 1), Rgba::TRANSPARENT);
        assert_eq!(s.pixel(3, 3), SOLID);
        assert_eq!(s.mask().count(), 8);
    }

    #[test]
    fn mask_threshold_is_exclusive() {
        let s = Sprite::from_fn(2, 1, |x, _| Rgba::new(0, 0, 0, if x == 0 { 127 } else { 128 }));
        let m = s.mask();
        assert!(!m.get(0, 0));
        assert!(m.get(1, 0));
    }
}
