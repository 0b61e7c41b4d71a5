use space_shooter::assets::{BuiltinAssets, GameAssets};
use space_shooter::constants::*;
use space_shooter::effect::{Effect, EffectManager};
use space_shooter::entities::*;

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assets() -> GameAssets {
    GameAssets::load(&BuiltinAssets).unwrap()
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Every `gen_ratio` check succeeds.
fn always() -> StepRng {
    StepRng::new(0, 0)
}

/// Every `gen_ratio` check fails.
fn never() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

// ── Player movement ───────────────────────────────────────────────────────────

#[test]
fn move_within_clamps_to_playfield() {
    let a = assets();
    let mut p = Player::new(2, 300, &a);
    p.move_within(-PLAYER_VEL, 0, WINDOW_WIDTH, WINDOW_HEIGHT);
    assert_eq!(p.ship.body.x, 0);

    p.ship.body.x = WINDOW_WIDTH - 52;
    p.move_within(PLAYER_VEL, 0, WINDOW_WIDTH, WINDOW_HEIGHT);
    assert_eq!(p.ship.body.x, WINDOW_WIDTH - PLAYER_SIZE.0 as i32);

    p.ship.body.y = WINDOW_HEIGHT - PLAYER_SIZE.1 as i32;
    p.move_within(0, PLAYER_VEL, WINDOW_WIDTH, WINDOW_HEIGHT);
    assert_eq!(p.ship.body.y, WINDOW_HEIGHT - PLAYER_SIZE.1 as i32);
}

#[test]
fn move_within_moves_freely_inside() {
    let a = assets();
    let mut p = Player::new(280, 500, &a);
    p.move_within(0, -PLAYER_VEL, WINDOW_WIDTH, WINDOW_HEIGHT);
    assert_eq!((p.ship.body.x, p.ship.body.y), (280, 495));
}

// ── Player update ─────────────────────────────────────────────────────────────

#[test]
fn bullet_hit_damages_enemy_and_scores() {
    let a = assets();
    let mut effects = EffectManager::new();
    let mut player = Player::new(280, 500, &a);
    let laser = player.ship.bullet_sprite().clone();
    // After the ship update moves it 5px up the bullet sits on the enemy.
    player.ship.bullets.push(Bullet::new(100, 105, laser, PLAYER_BULLET_VEL));
    let mut enemies = vec![Enemy::new(100, 100, EnemyColor::Red, &a)];

    player.update(&mut enemies, WINDOW_HEIGHT, &mut effects, &a, &mut seeded_rng());

    assert!(player.ship.bullets.is_empty());
    assert_eq!(enemies.len(), 1, "the scene removes dead enemies, not the player");
    assert_eq!(enemies[0].ship.health, ENEMY_MAX_HEALTH - ENEMY_DAMAGE);
    assert_eq!(player.score, SCORE_PER_HIT);
    assert_eq!(effects.len(), 1);
    assert!(matches!(effects.effects()[0], Effect::Sparkle(_)));
}

#[test]
fn only_first_bullet_counts_per_enemy_per_tick() {
    let a = assets();
    let mut effects = EffectManager::new();
    let mut player = Player::new(280, 500, &a);
    let laser = player.ship.bullet_sprite().clone();
    player.ship.bullets.push(Bullet::new(100, 105, laser.clone(), PLAYER_BULLET_VEL));
    player.ship.bullets.push(Bullet::new(100, 110, laser, PLAYER_BULLET_VEL));
    let mut enemies = vec![Enemy::new(100, 100, EnemyColor::Green, &a)];

    player.update(&mut enemies, WINDOW_HEIGHT, &mut effects, &a, &mut seeded_rng());

    assert_eq!(player.ship.bullets.len(), 1);
    assert_eq!(player.score, SCORE_PER_HIT);
    assert_eq!(effects.len(), 1);
}

#[test]
fn ramming_an_enemy_removes_it_and_costs_a_life() {
    let a = assets();
    let mut effects = EffectManager::new();
    let mut player = Player::new(280, 500, &a);
    let mut enemies = vec![
        Enemy::new(285, 505, EnemyColor::Blue, &a),
        Enemy::new(50, 50, EnemyColor::Blue, &a),
    ];

    player.update(&mut enemies, WINDOW_HEIGHT, &mut effects, &a, &mut seeded_rng());

    assert_eq!(enemies.len(), 1);
    assert_eq!(enemies[0].ship.body.x, 50);
    // 10 health - 10 damage → dead → respawn in place with full health.
    assert_eq!(player.lives, PLAYER_LIVES - 1);
    assert_eq!(player.ship.health, PLAYER_MAX_HEALTH);
    assert_eq!((player.ship.body.x, player.ship.body.y), (280, 500));
    assert_eq!(effects.len(), 1);
    assert!(matches!(effects.effects()[0], Effect::SmokeCircle(_)));
    assert_eq!(effects.effects()[0].particle_count(), 20);
}

#[test]
fn back_to_back_rams_are_not_skipped() {
    let a = assets();
    let mut effects = EffectManager::new();
    let mut player = Player::new(280, 500, &a);
    player.ship.health = 100;
    let mut enemies = vec![
        Enemy::new(285, 505, EnemyColor::Red, &a),
        Enemy::new(290, 505, EnemyColor::Red, &a),
    ];

    player.update(&mut enemies, WINDOW_HEIGHT, &mut effects, &a, &mut seeded_rng());

    assert!(enemies.is_empty());
    assert_eq!(player.ship.health, 100 - 2 * PLAYER_DAMAGE);
    assert_eq!(effects.len(), 2);
}

#[test]
fn respawn_keeps_one_life_fewer() {
    let a = assets();
    let mut effects = EffectManager::new();
    let mut player = Player::new(280, 500, &a);
    player.ship.health = -5;

    player.update(&mut Vec::new(), WINDOW_HEIGHT, &mut effects, &a, &mut seeded_rng());

    assert_eq!(player.lives, 2);
    assert_eq!(player.ship.health, PLAYER_MAX_HEALTH);
    assert!(!player.is_end());
}

// ── Enemy update ──────────────────────────────────────────────────────────────

#[test]
fn enemy_moves_down_each_tick() {
    let a = assets();
    let mut player = Player::new(280, 500, &a);
    let mut enemy = Enemy::new(100, 100, EnemyColor::Red, &a);
    enemy.update(&mut player, WINDOW_HEIGHT, &mut never());
    enemy.update(&mut player, WINDOW_HEIGHT, &mut never());
    assert_eq!(enemy.ship.body.y, 100 + 2 * ENEMY_VEL);
    assert!(enemy.ship.bullets.is_empty());
}

#[test]
fn enemy_fires_when_the_dice_say_so_and_cooldown_allows() {
    let a = assets();
    let mut player = Player::new(280, 500, &a);
    let mut enemy = Enemy::new(100, 100, EnemyColor::Red, &a);

    // Cooldown 0 → 1: still too early even though the roll succeeds.
    enemy.update(&mut player, WINDOW_HEIGHT, &mut always());
    assert!(enemy.ship.bullets.is_empty());

    enemy.ship.cooldown = COOLDOWN - 1;
    enemy.update(&mut player, WINDOW_HEIGHT, &mut always());
    assert_eq!(enemy.ship.bullets.len(), 1);
    assert_eq!(enemy.ship.bullets[0].vel_y, ENEMY_BULLET_VEL);
    assert_eq!(enemy.ship.cooldown, 0);
}

#[test]
fn enemy_bullet_hitting_player_is_spent() {
    let a = assets();
    let mut player = Player::new(280, 500, &a);
    let mut enemy = Enemy::new(100, 100, EnemyColor::Red, &a);
    let laser = enemy.ship.bullet_sprite().clone();
    enemy
        .ship
        .bullets
        .push(Bullet::new(280, 500 - ENEMY_BULLET_VEL, laser, ENEMY_BULLET_VEL));

    enemy.update(&mut player, WINDOW_HEIGHT, &mut never());

    assert!(enemy.ship.bullets.is_empty());
    assert_eq!(player.ship.health, PLAYER_MAX_HEALTH - PLAYER_DAMAGE);
}

#[test]
fn reach_goal_is_strictly_below_the_playfield() {
    let a = assets();
    let mut enemy = Enemy::new(100, WINDOW_HEIGHT, EnemyColor::Green, &a);
    assert!(!enemy.is_reach_goal(WINDOW_HEIGHT));
    enemy.ship.body.y += 1;
    assert!(enemy.is_reach_goal(WINDOW_HEIGHT));
}

// ── Waves ─────────────────────────────────────────────────────────────────────

#[test]
fn empty_field_spawns_a_wave() {
    let a = assets();
    let mut state = GameState::new(&a);
    let mut effects = EffectManager::new();

    state.tick(&a, &mut effects, &mut seeded_rng());

    assert_eq!(state.level, 1);
    assert_eq!(state.enemies.len(), WAVE_INCREMENT as usize);
    for e in &state.enemies {
        assert!(e.ship.body.x >= 50 && e.ship.body.x < WINDOW_WIDTH - 100);
        // Spawned in [-500, -50), then moved once.
        assert!(e.ship.body.y >= -500 + ENEMY_VEL && e.ship.body.y < -50 + ENEMY_VEL);
    }
}

#[test]
fn each_wave_is_bigger_by_the_increment() {
    let a = assets();
    let mut state = GameState::new(&a);
    let mut effects = EffectManager::new();
    let mut rng = seeded_rng();

    state.tick(&a, &mut effects, &mut rng);
    let first = state.enemies.len();
    state.enemies.clear();
    state.tick(&a, &mut effects, &mut rng);

    assert_eq!(state.level, 2);
    assert_eq!(state.enemies.len(), first + WAVE_INCREMENT as usize);
    assert_eq!(state.enemies_per_wave, 2 * WAVE_INCREMENT);
}

#[test]
fn narrow_playfield_still_spawns() {
    let a = assets();
    let mut state = GameState::new(&a);
    state.width = 120;
    state.spawn_wave(&a, &mut seeded_rng());
    assert_eq!(state.enemies.len(), WAVE_INCREMENT as usize);
    assert!(state.enemies.iter().all(|e| e.ship.body.x == WAVE_SPAWN_X_MARGIN.0));
}

#[test]
fn no_wave_while_enemies_remain() {
    let a = assets();
    let mut state = GameState::new(&a);
    state.enemies.push(Enemy::new(100, 100, EnemyColor::Red, &a));
    state.tick(&a, &mut EffectManager::new(), &mut never());
    assert_eq!(state.level, 0);
    assert_eq!(state.enemies.len(), 1);
}

#[test]
fn enemy_past_the_bottom_is_removed_and_hurts() {
    let a = assets();
    let mut state = GameState::new(&a);
    state.enemies.push(Enemy::new(100, WINDOW_HEIGHT + 1, EnemyColor::Red, &a));
    state.tick(&a, &mut EffectManager::new(), &mut never());
    assert!(state.enemies.is_empty());
    assert_eq!(state.player.ship.health, PLAYER_MAX_HEALTH - PLAYER_DAMAGE);
}

#[test]
fn dead_enemy_is_removed_without_hurting() {
    let a = assets();
    let mut state = GameState::new(&a);
    let mut dead = Enemy::new(100, 100, EnemyColor::Red, &a);
    dead.ship.health = 0;
    state.enemies.push(dead);
    state.tick(&a, &mut EffectManager::new(), &mut never());
    assert!(state.enemies.is_empty());
    assert_eq!(state.player.ship.health, PLAYER_MAX_HEALTH);
}

// ── Lives & game over ─────────────────────────────────────────────────────────

#[test]
fn losing_a_life_with_lives_to_spare_respawns() {
    let a = assets();
    let mut state = GameState::new(&a);
    state.player.ship.health = 0;

    state.tick(&a, &mut EffectManager::new(), &mut seeded_rng());

    assert_eq!(state.player.lives, 2);
    assert_eq!(state.player.ship.health, PLAYER_MAX_HEALTH);
    assert!(state.is_running());
}

#[test]
fn losing_the_last_life_ends_the_game_for_good() {
    let a = assets();
    let mut state = GameState::new(&a);
    let mut effects = EffectManager::new();
    let mut rng = seeded_rng();
    state.player.lives = 1;
    state.player.ship.health = 0;

    state.tick(&a, &mut effects, &mut rng);
    assert_eq!(state.player.lives, 0);
    assert_eq!(state.status, GameStatus::GameOver);
    assert!(!state.is_running());

    let frozen: Vec<i32> = state.enemies.iter().map(|e| e.ship.body.y).collect();
    let level = state.level;
    for _ in 0..10 {
        state.player.ship.receive_damage(PLAYER_DAMAGE);
        state.tick(&a, &mut effects, &mut rng);
    }

    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.player.lives, 0);
    assert_eq!(state.level, level);
    let after: Vec<i32> = state.enemies.iter().map(|e| e.ship.body.y).collect();
    assert_eq!(frozen, after);
}
