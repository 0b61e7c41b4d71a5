//! Gameplay entity types: data and constructors only.  Behaviour lives in
//! `compute`, drawing in `scene::game`.
//!
//! Entities compose rather than inherit: a [`Ship`] embeds the
//! [`GameObject`] it flies as, and [`Player`] / [`Enemy`] embed a `Ship`
//! plus their own fields.

use std::rc::Rc;

use crate::assets::GameAssets;
use crate::constants::{
    ENEMY_BULLET_VEL, ENEMY_MAX_HEALTH, PLAYER_BULLET_VEL, PLAYER_LIVES, PLAYER_MAX_HEALTH,
    PLAYER_START, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::sprite::{Mask, Sprite};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyColor {
    Red,
    Green,
    Blue,
}

impl EnemyColor {
    pub const ALL: [EnemyColor; 3] = [EnemyColor::Red, EnemyColor::Green, EnemyColor::Blue];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Base object ───────────────────────────────────────────────────────────────

/// Anything with a position and a sprite.  The collision mask is taken
/// from the sprite once, here, and never changes.
#[derive(Clone, Debug)]
pub struct GameObject {
    pub x: i32,
    pub y: i32,
    sprite: Rc<Sprite>,
    mask: Mask,
}

impl GameObject {
    pub fn new(x: i32, y: i32, sprite: Rc<Sprite>) -> Self {
        let mask = sprite.mask();
        Self { x, y, sprite, mask }
    }

    pub fn sprite(&self) -> &Rc<Sprite> {
        &self.sprite
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn width(&self) -> i32 {
        self.sprite.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.sprite.height() as i32
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width() / 2, self.y + self.height() / 2)
    }
}

// ── Projectiles & ships ───────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub body: GameObject,
    pub vel_y: i32,
}

impl Bullet {
    pub fn new(x: i32, y: i32, sprite: Rc<Sprite>, vel_y: i32) -> Self {
        Self {
            body: GameObject::new(x, y, sprite),
            vel_y,
        }
    }
}

/// Shared state of everything that flies and shoots.
#[derive(Clone, Debug)]
pub struct Ship {
    pub body: GameObject,
    /// Bullets this ship fired that are still on screen.
    pub bullets: Vec<Bullet>,
    pub bullet_vel: i32,
    /// Ticks since the last shot.
    pub cooldown: u32,
    pub health: i32,
    bullet_sprite: Rc<Sprite>,
}

impl Ship {
    pub fn new(
        x: i32,
        y: i32,
        sprite: Rc<Sprite>,
        bullet_vel: i32,
        bullet_sprite: Rc<Sprite>,
        health: i32,
    ) -> Self {
        Self {
            body: GameObject::new(x, y, sprite),
            bullets: Vec::new(),
            bullet_vel,
            cooldown: 0,
            health,
            bullet_sprite,
        }
    }

    pub fn bullet_sprite(&self) -> &Rc<Sprite> {
        &self.bullet_sprite
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub ship: Ship,
    pub lives: u32,
    pub score: u32,
}

impl Player {
    pub fn new(x: i32, y: i32, assets: &GameAssets) -> Self {
        Self {
            ship: Ship::new(
                x,
                y,
                assets.player_ship.clone(),
                PLAYER_BULLET_VEL,
                assets.player_laser.clone(),
                PLAYER_MAX_HEALTH,
            ),
            lives: PLAYER_LIVES,
            score: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub ship: Ship,
    pub color: EnemyColor,
}

impl Enemy {
    pub fn new(x: i32, y: i32, color: EnemyColor, assets: &GameAssets) -> Self {
        let (sprite, laser) = assets.enemy(color);
        Self {
            ship: Ship::new(x, y, sprite, ENEMY_BULLET_VEL, laser, ENEMY_MAX_HEALTH),
            color,
        }
    }
}

// ── Simulation state ──────────────────────────────────────────────────────────

/// Everything the gameplay simulation advances each tick.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Number of waves started so far.
    pub level: u32,
    /// Size of the most recent wave; the next one is larger.
    pub enemies_per_wave: u32,
    pub status: GameStatus,
    pub width: i32,
    pub height: i32,
}

impl GameState {
    pub fn new(assets: &GameAssets) -> Self {
        Self {
            player: Player::new(PLAYER_START.0, PLAYER_START.1, assets),
            enemies: Vec::new(),
            level: 0,
            enemies_per_wave: 0,
            status: GameStatus::Playing,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
