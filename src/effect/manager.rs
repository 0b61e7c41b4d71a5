use rand::RngCore;

use super::Effect;
use crate::display::Canvas;

/// Owns every running effect and drops each one once it has finished.
#[derive(Clone, Debug, Default)]
pub struct EffectManager {
    effects: Vec<Effect>,
}

impl EffectManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Reclaim finished effects, then draw (and so advance) the rest.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
        self.effects.retain(|effect| !effect.is_finished());
        for effect in &mut self.effects {
            effect.draw(canvas, rng);
        }
    }
}
