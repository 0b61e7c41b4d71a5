//! Game-logic behaviour for the entity types in `entities`.
//!
//! Everything here is total: collisions at any offset are defined, removals
//! never fail, and counters saturate instead of overflowing.  All
//! randomness comes through an injected RNG so callers control determinism
//! (tests use a seeded `StdRng` or `StepRng`).

use rand::{Rng, RngCore};

use crate::assets::GameAssets;
use crate::constants::{
    CONTACT_SMOKE_LIFETIME, CONTACT_SMOKE_RADIUS, COOLDOWN, ENEMY_DAMAGE, ENEMY_FIRE_ODDS,
    ENEMY_VEL, HIT_SPARKLE_LIFETIME, PLAYER_DAMAGE, PLAYER_MAX_HEALTH, SCORE_PER_HIT,
    WAVE_INCREMENT, WAVE_SPAWN_X_MARGIN, WAVE_SPAWN_Y_RANGE,
};
use crate::effect::{Effect, EffectManager};
use crate::entities::{Bullet, Enemy, EnemyColor, GameObject, GameState, GameStatus, Player, Ship};

// ── Objects ───────────────────────────────────────────────────────────────────

impl GameObject {
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// Above the top edge or below `height`.
    pub fn is_off_screen(&self, height: i32) -> bool {
        self.y < 0 || self.y > height
    }

    /// Pixel-exact: true only if opaque pixels of both sprites overlap.
    pub fn collides_with(&self, other: &GameObject) -> bool {
        let offset = (
            other.x.saturating_sub(self.x),
            other.y.saturating_sub(self.y),
        );
        self.mask().overlap(other.mask(), offset).is_some()
    }
}

// ── Ships ─────────────────────────────────────────────────────────────────────

impl Ship {
    pub fn can_shoot(&self) -> bool {
        self.cooldown >= COOLDOWN
    }

    /// Fire one bullet from the ship's position if the cooldown allows it.
    /// Returns whether a bullet was fired.
    pub fn shoot(&mut self) -> bool {
        if !self.can_shoot() {
            return false;
        }
        self.cooldown = 0;
        let bullet = Bullet::new(
            self.body.x,
            self.body.y,
            self.bullet_sprite().clone(),
            self.bullet_vel,
        );
        self.bullets.push(bullet);
        true
    }

    /// Tick the cooldown, fly every bullet and drop the ones that left the
    /// screen.
    pub fn update(&mut self, window_height: i32) {
        self.cooldown = self.cooldown.saturating_add(1);
        for bullet in &mut self.bullets {
            bullet.body.move_by(0, bullet.vel_y);
        }
        self.bullets
            .retain(|bullet| !bullet.body.is_off_screen(window_height));
    }

    pub fn receive_damage(&mut self, damage: i32) {
        self.health = self.health.saturating_sub(damage);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

impl Player {
    /// No lives left.
    pub fn is_end(&self) -> bool {
        self.lives < 1
    }

    /// Move by `(dx, dy)`, clamped so the whole sprite stays on the
    /// playfield.
    pub fn move_within(&mut self, dx: i32, dy: i32, width: i32, height: i32) {
        let body = &mut self.ship.body;
        let max_x = (width - body.width()).max(0);
        let max_y = (height - body.height()).max(0);
        body.x = body.x.saturating_add(dx).clamp(0, max_x);
        body.y = body.y.saturating_add(dy).clamp(0, max_y);
    }

    /// Advance the player's ship and resolve its collisions: ramming an
    /// enemy destroys it and hurts the player; otherwise the first player
    /// bullet touching an enemy is spent on it.  Afterwards a dead player
    /// loses a life and, if any remain, respawns in place at full health.
    pub fn update(
        &mut self,
        enemies: &mut Vec<Enemy>,
        window_height: i32,
        effects: &mut EffectManager,
        assets: &GameAssets,
        rng: &mut dyn RngCore,
    ) {
        self.ship.update(window_height);

        let mut i = 0;
        while i < enemies.len() {
            if self.ship.body.collides_with(&enemies[i].ship.body) {
                enemies.remove(i);
                self.ship.receive_damage(PLAYER_DAMAGE);
                effects.add_effect(Effect::smoke_circle(
                    CONTACT_SMOKE_LIFETIME,
                    self.ship.body.x as f32,
                    self.ship.body.y as f32,
                    CONTACT_SMOKE_RADIUS,
                    assets.smoke.clone(),
                    rng,
                ));
                continue;
            }

            let enemy = &mut enemies[i];
            let hit = self
                .ship
                .bullets
                .iter()
                .position(|bullet| bullet.body.collides_with(&enemy.ship.body));
            if let Some(hit) = hit {
                self.ship.bullets.remove(hit);
                enemy.ship.receive_damage(ENEMY_DAMAGE);
                self.score += SCORE_PER_HIT;
                let (cx, cy) = enemy.ship.body.center();
                effects.add_effect(Effect::sparkle(
                    HIT_SPARKLE_LIFETIME,
                    cx as f32,
                    cy as f32,
                    rng,
                ));
            }
            i += 1;
        }

        if self.ship.is_dead() {
            self.lives = self.lives.saturating_sub(1);
            if self.is_end() {
                log::info!("Player destroyed, no lives left (score {})", self.score);
            } else {
                log::info!("Player lost a life, {} remaining", self.lives);
                self.ship.health = PLAYER_MAX_HEALTH;
            }
        }
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

impl Enemy {
    /// Fly down, maybe fire, and spend any of this enemy's bullets that
    /// hit the player.
    pub fn update(&mut self, player: &mut Player, window_height: i32, rng: &mut dyn RngCore) {
        self.ship.update(window_height);
        self.ship.body.move_by(0, ENEMY_VEL);

        if rng.gen_ratio(1, ENEMY_FIRE_ODDS) {
            self.ship.shoot();
        }

        let target = &player.ship.body;
        let before = self.ship.bullets.len();
        self.ship
            .bullets
            .retain(|bullet| !bullet.body.collides_with(target));
        for _ in self.ship.bullets.len()..before {
            player.ship.receive_damage(PLAYER_DAMAGE);
        }
    }

    /// Slipped past the bottom of the playfield.
    pub fn is_reach_goal(&self, height: i32) -> bool {
        self.ship.body.y > height
    }
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

impl GameState {
    /// Enter the game-over state if the player is out of lives.  Returns
    /// whether the game is over.
    fn check_game_over(&mut self) -> bool {
        if self.player.is_end() && self.status == GameStatus::Playing {
            log::info!(
                "Game over at level {} with score {}",
                self.level,
                self.player.score
            );
            self.status = GameStatus::GameOver;
        }
        self.status == GameStatus::GameOver
    }

    /// Start the next wave: one level up and `WAVE_INCREMENT` more enemies
    /// than last time, scattered above the top edge.
    pub fn spawn_wave(&mut self, assets: &GameAssets, rng: &mut dyn RngCore) {
        self.level += 1;
        self.enemies_per_wave += WAVE_INCREMENT;

        // Narrow playfields collapse the range to its left edge.
        let x_end = (self.width - WAVE_SPAWN_X_MARGIN.1).max(WAVE_SPAWN_X_MARGIN.0 + 1);
        let x_range = WAVE_SPAWN_X_MARGIN.0..x_end;
        for _ in 0..self.enemies_per_wave {
            let x = rng.gen_range(x_range.clone());
            let y = rng.gen_range(WAVE_SPAWN_Y_RANGE.0..WAVE_SPAWN_Y_RANGE.1);
            let color = EnemyColor::ALL[rng.gen_range(0..EnemyColor::ALL.len())];
            self.enemies.push(Enemy::new(x, y, color, assets));
        }
        log::debug!(
            "Wave {} spawned with {} enemies",
            self.level,
            self.enemies_per_wave
        );
    }

    /// Advance the simulation by one tick.  Once the game is over this is a
    /// no-op.
    pub fn tick(&mut self, assets: &GameAssets, effects: &mut EffectManager, rng: &mut dyn RngCore) {
        if self.check_game_over() {
            return;
        }

        if self.enemies.is_empty() {
            self.spawn_wave(assets, rng);
        }

        self.player
            .update(&mut self.enemies, self.height, effects, assets, rng);
        if self.check_game_over() {
            return;
        }

        let height = self.height;
        let player = &mut self.player;
        self.enemies.retain_mut(|enemy| {
            let reached_goal = enemy.is_reach_goal(height);
            if reached_goal || enemy.ship.is_dead() {
                if reached_goal {
                    player.ship.receive_damage(PLAYER_DAMAGE);
                }
                return false;
            }
            enemy.update(player, height, rng);
            true
        });
    }
}
