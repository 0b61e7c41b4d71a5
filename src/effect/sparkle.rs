use rand::{Rng, RngCore};

use super::{Particle, ParticleSource};
use crate::display::Canvas;
use crate::sprite::Rgba;

/// Magenta ramp.  Sparkles only ever pick from the first five entries.
pub const SPARKLE_COLORS: [Rgba; 7] = [
    Rgba::rgb(102, 0, 102),
    Rgba::rgb(153, 0, 153),
    Rgba::rgb(204, 0, 204),
    Rgba::rgb(255, 0, 255),
    Rgba::rgb(255, 51, 255),
    Rgba::rgb(255, 102, 155),
    Rgba::rgb(255, 204, 255),
];

const USABLE_COLORS: usize = 5;
const SCATTER: i32 = 20;
const TICKS: i32 = 3;

#[derive(Clone, Debug)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SparkleParticle {
    pub x: f32,
    pub y: f32,
    pub edge: f32,
    pub ticks_left: i32,
    pub color: Rgba,
}

impl ParticleSource for Sparkle {
    type Particle = SparkleParticle;

    fn burst(&self, rng: &mut dyn RngCore) -> Vec<SparkleParticle> {
        vec![SparkleParticle {
            x: self.x + rng.gen_range(-SCATTER..=SCATTER) as f32,
            y: self.y + rng.gen_range(-SCATTER..=SCATTER) as f32,
            edge: rng.gen_range(3..=7) as f32,
            ticks_left: TICKS,
            color: SPARKLE_COLORS[rng.gen_range(0..USABLE_COLORS)],
        }]
    }
}

impl Particle for SparkleParticle {
    fn update(&mut self) {
        self.ticks_left -= 1;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let (x, y, e) = (self.x, self.y, self.edge);
        canvas.fill_polygon(&[(x, y), (x + e, y), (x + e, y + e), (x, y + e)], self.color);
    }

    fn is_dead(&self) -> bool {
        self.ticks_left <= 0
    }
}
