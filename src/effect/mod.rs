//! Particle effects.
//!
//! An [`Effect`] is one of a closed set of kinds.  Each kind pairs a
//! [`ParticleSource`] (how particles are born) with a [`Particle`] type
//! (how one moves, draws and dies); [`Emitter`] runs the shared per-frame
//! contract over them.  Effects are purely visual and never touch gameplay.

mod firework;
mod manager;
mod smoke;
mod sparkle;

use std::rc::Rc;

use rand::RngCore;

use crate::display::Canvas;
use crate::sprite::Sprite;

pub use firework::{Firework, FireworkParticle};
pub use manager::EffectManager;
pub use smoke::{SmokeCircle, SmokeCircleParticle, SmokeUp, SmokeUpParticle};
pub use sparkle::{Sparkle, SparkleParticle, SPARKLE_COLORS};

pub trait Particle {
    /// Advance one tick of physics.
    fn update(&mut self);
    fn draw(&self, canvas: &mut dyn Canvas);
    fn is_dead(&self) -> bool;
}

pub trait ParticleSource {
    type Particle: Particle + Clone + std::fmt::Debug;

    /// Particles created together with the effect.
    fn burst(&self, rng: &mut dyn RngCore) -> Vec<Self::Particle>;

    /// Particles added on every tick the effect is still alive.
    fn trickle(&self, _rng: &mut dyn RngCore) -> Vec<Self::Particle> {
        Vec::new()
    }
}

/// Lifetime bookkeeping and particle storage shared by every kind.
#[derive(Clone, Debug)]
pub struct Emitter<S: ParticleSource> {
    source: S,
    remaining_lifetime: i32,
    particles: Vec<S::Particle>,
}

impl<S: ParticleSource> Emitter<S> {
    pub fn new(source: S, lifetime: i32, rng: &mut dyn RngCore) -> Self {
        let particles = source.burst(rng);
        Self {
            source,
            remaining_lifetime: lifetime,
            particles,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn particles(&self) -> &[S::Particle] {
        &self.particles
    }

    pub fn remaining_lifetime(&self) -> i32 {
        self.remaining_lifetime
    }

    /// One frame: age, spawn while alive, then update, draw and cull
    /// every particle.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
        self.remaining_lifetime = self.remaining_lifetime.saturating_sub(1);
        if self.remaining_lifetime > 0 {
            let spawned = self.source.trickle(rng);
            self.particles.extend(spawned);
        }
        self.particles.retain_mut(|particle| {
            particle.update();
            particle.draw(canvas);
            !particle.is_dead()
        });
    }
}

#[derive(Clone, Debug)]
pub enum Effect {
    Firework(Emitter<Firework>),
    SmokeUp(Emitter<SmokeUp>),
    SmokeCircle(Emitter<SmokeCircle>),
    Sparkle(Emitter<Sparkle>),
}

impl Effect {
    /// A fountain of shrinking white sparks that fall back under gravity.
    pub fn firework(lifetime: i32, x: f32, y: f32, rng: &mut dyn RngCore) -> Self {
        Effect::Firework(Emitter::new(Firework { x, y }, lifetime, rng))
    }

    /// A column of smoke puffs drifting off the origin and fading.
    pub fn smoke_up(lifetime: i32, x: f32, y: f32, image: Rc<Sprite>, rng: &mut dyn RngCore) -> Self {
        Effect::SmokeUp(Emitter::new(SmokeUp { x, y, image }, lifetime, rng))
    }

    /// A ring of puffs around the origin that blows outward.
    pub fn smoke_circle(
        lifetime: i32,
        x: f32,
        y: f32,
        radius: f32,
        image: Rc<Sprite>,
        rng: &mut dyn RngCore,
    ) -> Self {
        Effect::SmokeCircle(Emitter::new(
            SmokeCircle { x, y, radius, image },
            lifetime,
            rng,
        ))
    }

    /// A single short-lived coloured square near the origin.
    pub fn sparkle(lifetime: i32, x: f32, y: f32, rng: &mut dyn RngCore) -> Self {
        Effect::Sparkle(Emitter::new(Sparkle { x, y }, lifetime, rng))
    }

    pub fn draw(&mut self, canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
        match self {
            Effect::Firework(e) => e.draw(canvas, rng),
            Effect::SmokeUp(e) => e.draw(canvas, rng),
            Effect::SmokeCircle(e) => e.draw(canvas, rng),
            Effect::Sparkle(e) => e.draw(canvas, rng),
        }
    }

    pub fn particle_count(&self) -> usize {
        match self {
            Effect::Firework(e) => e.particles().len(),
            Effect::SmokeUp(e) => e.particles().len(),
            Effect::SmokeCircle(e) => e.particles().len(),
            Effect::Sparkle(e) => e.particles().len(),
        }
    }

    pub fn remaining_lifetime(&self) -> i32 {
        match self {
            Effect::Firework(e) => e.remaining_lifetime(),
            Effect::SmokeUp(e) => e.remaining_lifetime(),
            Effect::SmokeCircle(e) => e.remaining_lifetime(),
            Effect::Sparkle(e) => e.remaining_lifetime(),
        }
    }

    /// No particles left.  May hold before the lifetime runs out and may
    /// still be false after it, while spawned particles keep animating.
    pub fn is_finished(&self) -> bool {
        self.particle_count() == 0
    }
}
