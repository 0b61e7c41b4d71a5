//! Gameplay tuning.  All distances are logical playfield pixels and all
//! durations are ticks (one tick per frame).

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const WINDOW_WIDTH: i32 = 600;
pub const WINDOW_HEIGHT: i32 = 600;
pub const TARGET_FPS: u32 = 60;

// ── Ships ─────────────────────────────────────────────────────────────────────

/// Ticks a ship must wait between shots.
pub const COOLDOWN: u32 = 20;

pub const PLAYER_START: (i32, i32) = (280, 500);
pub const PLAYER_SIZE: (u32, u32) = (50, 50);
pub const PLAYER_MAX_HEALTH: i32 = 10;
pub const PLAYER_LIVES: u32 = 3;
pub const PLAYER_VEL: i32 = 5;
pub const PLAYER_BULLET_VEL: i32 = -5;

pub const ENEMY_SIZE: (u32, u32) = (40, 40);
pub const ENEMY_MAX_HEALTH: i32 = 100;
pub const ENEMY_VEL: i32 = 1;
pub const ENEMY_BULLET_VEL: i32 = 5;
/// Enemies fire with probability `1 / ENEMY_FIRE_ODDS` per tick.
pub const ENEMY_FIRE_ODDS: u32 = 120;

// ── Damage & scoring ──────────────────────────────────────────────────────────

/// Damage the player takes from contact, an enemy bullet or a missed enemy.
pub const PLAYER_DAMAGE: i32 = 10;
/// Damage an enemy takes from one player bullet.
pub const ENEMY_DAMAGE: i32 = 100;
pub const SCORE_PER_HIT: u32 = 10;

// ── Waves ─────────────────────────────────────────────────────────────────────

pub const WAVE_INCREMENT: u32 = 5;
pub const WAVE_SPAWN_X_MARGIN: (i32, i32) = (50, 100);
pub const WAVE_SPAWN_Y_RANGE: (i32, i32) = (-500, -50);

// ── Effects emitted by gameplay ───────────────────────────────────────────────

pub const CONTACT_SMOKE_LIFETIME: i32 = 3;
pub const CONTACT_SMOKE_RADIUS: f32 = 15.0;
pub const HIT_SPARKLE_LIFETIME: i32 = 6;
