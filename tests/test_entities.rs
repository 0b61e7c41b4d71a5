use std::rc::Rc;

use space_shooter::assets::{BuiltinAssets, GameAssets};
use space_shooter::constants::{COOLDOWN, PLAYER_LIVES, PLAYER_MAX_HEALTH, PLAYER_START};
use space_shooter::entities::*;
use space_shooter::sprite::{Rgba, Sprite};

fn assets() -> GameAssets {
    GameAssets::load(&BuiltinAssets).unwrap()
}

fn dot_sprite(rows: &[&str]) -> Rc<Sprite> {
    Rc::new(Sprite::from_art(rows, &[('#', Rgba::WHITE)]))
}

// ── Collision ─────────────────────────────────────────────────────────────────

#[test]
fn overlapping_boxes_with_disjoint_pixels_do_not_collide() {
    let a = GameObject::new(10, 10, dot_sprite(&["#...", "....", "....", "...."]));
    let b = GameObject::new(11, 11, dot_sprite(&["....", "....", "....", "...#"]));
    // Boxes cover 10..14 and 11..15; solid pixels sit at (10,10) and (14,14).
    assert!(!a.collides_with(&b));
    assert!(!b.collides_with(&a));
}

#[test]
fn shared_opaque_pixel_collides() {
    let a = GameObject::new(10, 10, dot_sprite(&["#...", "....", "....", "...."]));
    let b = GameObject::new(7, 7, dot_sprite(&["....", "....", "....", "...#"]));
    assert!(a.collides_with(&b));
    assert!(b.collides_with(&a));
}

#[test]
fn distant_objects_do_not_collide() {
    let solid = dot_sprite(&["##", "##"]);
    let a = GameObject::new(0, 0, solid.clone());
    let b = GameObject::new(i32::MAX, i32::MIN, solid);
    assert!(!a.collides_with(&b));
}

#[test]
fn mask_is_taken_from_sprite() {
    let obj = GameObject::new(0, 0, dot_sprite(&["#.", ".#"]));
    assert_eq!(obj.mask().count(), 2);
    assert_eq!(obj.center(), (1, 1));
}

// ── Ships ─────────────────────────────────────────────────────────────────────

#[test]
fn shoot_is_gated_by_cooldown() {
    let a = assets();
    let mut player = Player::new(100, 300, &a);

    assert!(!player.ship.shoot());
    player.ship.cooldown = COOLDOWN - 1;
    assert!(!player.ship.shoot());
    assert!(player.ship.bullets.is_empty());

    player.ship.cooldown = COOLDOWN;
    assert!(player.ship.shoot());
    assert_eq!(player.ship.bullets.len(), 1);
    assert_eq!(player.ship.cooldown, 0);

    // Immediately again: blocked.
    assert!(!player.ship.shoot());
    assert_eq!(player.ship.bullets.len(), 1);
}

#[test]
fn bullet_spawns_at_ship_position() {
    let a = assets();
    let mut player = Player::new(123, 321, &a);
    player.ship.cooldown = COOLDOWN;
    player.ship.shoot();
    let b = &player.ship.bullets[0];
    assert_eq!((b.body.x, b.body.y), (123, 321));
    assert_eq!(b.vel_y, player.ship.bullet_vel);
}

#[test]
fn cooldown_counts_up_each_update() {
    let a = assets();
    let mut player = Player::new(100, 300, &a);
    for _ in 0..COOLDOWN {
        player.ship.update(600);
    }
    assert!(player.ship.can_shoot());
}

#[test]
fn bullets_leaving_the_screen_are_culled() {
    let a = assets();
    let mut ship = Player::new(100, 300, &a).ship;
    let laser = ship.bullet_sprite().clone();
    ship.bullets.push(Bullet::new(0, 2, laser.clone(), -5)); // → -3
    ship.bullets.push(Bullet::new(0, 598, laser.clone(), 5)); // → 603
    ship.bullets.push(Bullet::new(0, -10, laser.clone(), 5)); // → -5
    ship.bullets.push(Bullet::new(0, 300, laser, -5)); // → 295

    ship.update(600);

    assert_eq!(ship.bullets.len(), 1);
    assert_eq!(ship.bullets[0].body.y, 295);
}

#[test]
fn bullet_on_the_edge_survives() {
    let a = assets();
    let mut ship = Player::new(100, 300, &a).ship;
    let laser = ship.bullet_sprite().clone();
    ship.bullets.push(Bullet::new(0, 5, laser.clone(), -5)); // → 0
    ship.bullets.push(Bullet::new(0, 595, laser, 5)); // → 600
    ship.update(600);
    assert_eq!(ship.bullets.len(), 2);
}

#[test]
fn damage_and_death() {
    let a = assets();
    let mut enemy = Enemy::new(0, 0, EnemyColor::Blue, &a);
    assert!(!enemy.ship.is_dead());
    enemy.ship.receive_damage(100);
    assert!(enemy.ship.is_dead());
    enemy.ship.receive_damage(i32::MAX);
    assert!(enemy.ship.is_dead());
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn new_game_state_defaults() {
    let s = GameState::new(&assets());
    assert_eq!((s.player.ship.body.x, s.player.ship.body.y), PLAYER_START);
    assert_eq!(s.player.lives, PLAYER_LIVES);
    assert_eq!(s.player.ship.health, PLAYER_MAX_HEALTH);
    assert_eq!(s.player.score, 0);
    assert!(s.enemies.is_empty());
    assert_eq!(s.level, 0);
    assert!(s.is_running());
}

#[test]
fn enemy_sprite_follows_colour() {
    let a = assets();
    let red = Enemy::new(0, 0, EnemyColor::Red, &a);
    let green = Enemy::new(0, 0, EnemyColor::Green, &a);
    assert_ne!(red.ship.body.sprite(), green.ship.body.sprite());
    assert_eq!(red.color, EnemyColor::Red);
}
