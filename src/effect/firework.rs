use rand::{Rng, RngCore};

use super::{Particle, ParticleSource};
use crate::display::Canvas;
use crate::sprite::Rgba;

const GRAVITY: f32 = 0.1;
const SHRINK: f32 = 0.1;
const LAUNCH_VY: f32 = -2.0;

#[derive(Clone, Debug)]
pub struct Firework {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FireworkParticle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

impl Firework {
    fn launch(&self, rng: &mut dyn RngCore) -> FireworkParticle {
        FireworkParticle {
            x: self.x,
            y: self.y,
            vx: rng.gen_range(-1.0..1.0),
            vy: LAUNCH_VY,
            radius: rng.gen_range(4..=6) as f32,
        }
    }
}

impl ParticleSource for Firework {
    type Particle = FireworkParticle;

    fn burst(&self, rng: &mut dyn RngCore) -> Vec<FireworkParticle> {
        vec![self.launch(rng)]
    }

    fn trickle(&self, rng: &mut dyn RngCore) -> Vec<FireworkParticle> {
        vec![self.launch(rng)]
    }
}

impl Particle for FireworkParticle {
    fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.radius -= SHRINK;
        self.vy += GRAVITY;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.x.trunc(), self.y.trunc(), self.radius.trunc(), Rgba::WHITE);
    }

    fn is_dead(&self) -> bool {
        self.radius <= 0.0
    }
}
