//! The two smoke kinds share one puff image and differ in how the puffs
//! move: `SmokeUp` trails a falling column, `SmokeCircle` blows a ring apart.

use std::f32::consts::PI;
use std::rc::Rc;

use rand::{Rng, RngCore};

use super::{Particle, ParticleSource};
use crate::display::Canvas;
use crate::sprite::Sprite;

// ── Falling column ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct SmokeUp {
    pub x: f32,
    pub y: f32,
    pub image: Rc<Sprite>,
}

#[derive(Clone, Debug)]
pub struct SmokeUpParticle {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub alpha: f32,
    /// Alpha lost per tick; eases down to `MIN_FADE`.
    pub fade: f32,
    pub vx: f32,
    /// Negative, and subtracted from `y` each tick.
    pub vy: f32,
    /// Horizontal acceleration.
    pub drift: f32,
    pub alive: bool,
    image: Rc<Sprite>,
}

impl SmokeUpParticle {
    const START_SCALE: f32 = 0.1;
    const GROWTH: f32 = 0.005;
    const START_FADE: f32 = 3.0;
    const FADE_EASE: f32 = 0.1;
    const MIN_FADE: f32 = 1.5;
    const DRAG: f32 = 0.99;
}

impl SmokeUp {
    fn puff(&self, rng: &mut dyn RngCore) -> SmokeUpParticle {
        let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        SmokeUpParticle {
            x: self.x,
            y: self.y,
            scale: SmokeUpParticle::START_SCALE,
            alpha: 255.0,
            fade: SmokeUpParticle::START_FADE,
            vx: 0.0,
            vy: -(4.0 + rng.gen_range(0.7..1.0)),
            drift: 0.04 * rng.gen::<f32>() * side,
            alive: true,
            image: self.image.clone(),
        }
    }
}

impl ParticleSource for SmokeUp {
    type Particle = SmokeUpParticle;

    fn burst(&self, rng: &mut dyn RngCore) -> Vec<SmokeUpParticle> {
        vec![self.puff(rng)]
    }

    fn trickle(&self, rng: &mut dyn RngCore) -> Vec<SmokeUpParticle> {
        vec![self.puff(rng)]
    }
}

impl Particle for SmokeUpParticle {
    fn update(&mut self) {
        self.x += self.vx;
        self.vx += self.drift;
        self.y -= self.vy;
        self.vy *= Self::DRAG;
        self.scale += Self::GROWTH;
        self.alpha -= self.fade;
        if self.alpha <= 0.0 {
            self.alpha = 0.0;
            self.alive = false;
        }
        self.fade = (self.fade - Self::FADE_EASE).max(Self::MIN_FADE);
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let w = self.image.width() as f32 * self.scale;
        let h = self.image.height() as f32 * self.scale;
        canvas.blit(
            &self.image,
            self.x - w / 2.0,
            self.y - h / 2.0,
            self.scale,
            self.alpha as u8,
        );
    }

    fn is_dead(&self) -> bool {
        !self.alive
    }
}

// ── Expanding ring ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct SmokeCircle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub image: Rc<Sprite>,
}

impl SmokeCircle {
    pub const PARTICLES: usize = 20;
    /// Maximum deviation of a puff from its even slot on the ring, radians.
    pub const JITTER: f32 = 0.3;
}

#[derive(Clone, Debug)]
pub struct SmokeCircleParticle {
    pub x: f32,
    pub y: f32,
    /// Direction of travel, counter-clockwise from +x with y pointing up.
    pub angle: f32,
    pub speed: f32,
    pub alpha: i32,
    pub scale: f32,
    image: Rc<Sprite>,
}

impl SmokeCircleParticle {
    const ACCEL: f32 = 0.1;
    const START_ALPHA: i32 = 180;
    const FADE: i32 = 6;
}

impl ParticleSource for SmokeCircle {
    type Particle = SmokeCircleParticle;

    fn burst(&self, rng: &mut dyn RngCore) -> Vec<SmokeCircleParticle> {
        (0..Self::PARTICLES)
            .map(|i| {
                let slot = (i as f32 * 360.0 / Self::PARTICLES as f32) * PI / 180.0;
                let angle = rng.gen_range(slot - Self::JITTER..slot + Self::JITTER);
                SmokeCircleParticle {
                    x: self.x + (self.radius * angle.cos()).trunc(),
                    y: self.y - (self.radius * angle.sin()).trunc(),
                    angle,
                    speed: 0.0,
                    alpha: SmokeCircleParticle::START_ALPHA,
                    scale: rng.gen_range(0.15..=0.25),
                    image: self.image.clone(),
                }
            })
            .collect()
    }
}

impl Particle for SmokeCircleParticle {
    fn update(&mut self) {
        self.x += self.speed * self.angle.cos();
        self.y -= self.speed * self.angle.sin();
        self.speed += Self::ACCEL;
        self.alpha -= Self::FADE;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.blit(&self.image, self.x, self.y, self.scale, self.alpha.clamp(0, 255) as u8);
    }

    fn is_dead(&self) -> bool {
        self.alpha <= 0
    }
}
