use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Navigator, Scene, StartScene};
use crate::assets::GameAssets;
use crate::constants::PLAYER_VEL;
use crate::display::Canvas;
use crate::effect::EffectManager;
use crate::entities::{GameObject, GameState, Ship};
use crate::input::{InputState, Key};
use crate::sprite::Rgba;
use crate::widget::{Align, Button, Label};

const HUD: Rgba = Rgba::WHITE;

/// The shooter itself: HUD, simulation and the end-of-game overlay.
pub struct GameScene {
    assets: Rc<GameAssets>,
    state: GameState,
    effects: EffectManager,
    rng: StdRng,
    live_label: Label,
    health_label: Label,
    score_label: Label,
    end_label: Label,
    back: Button,
}

impl GameScene {
    pub fn new(assets: Rc<GameAssets>, rng: StdRng) -> Self {
        let state = GameState::new(&assets);
        let (w, h) = (state.width as f32, state.height as f32);
        Self {
            state,
            assets,
            effects: EffectManager::new(),
            rng,
            live_label: Label::new(10.0, 10.0, "", HUD),
            health_label: Label::new(10.0, 30.0, "", HUD),
            score_label: Label::new(w - 50.0, 10.0, "", HUD).anchored(Align::TopRight),
            end_label: Label::new(w / 2.0, h / 2.0 - 50.0, "You Lose!", HUD)
                .anchored(Align::MidCenter)
                .hidden(),
            back: Button::new(w / 2.0, h / 2.0, 150.0, 40.0, Align::MidCenter, "Back").hidden(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn effects(&self) -> &EffectManager {
        &self.effects
    }

    pub fn hud(&self) -> [&str; 3] {
        [
            &self.live_label.text,
            &self.health_label.text,
            &self.score_label.text,
        ]
    }

    pub fn is_end_screen_visible(&self) -> bool {
        self.end_label.visible && self.back.visible
    }

    fn back_to_start(&mut self, nav: &mut Navigator) {
        let seed = self.rng.gen();
        nav.replace(StartScene::new(
            self.assets.clone(),
            StdRng::seed_from_u64(seed),
        ));
    }
}

fn draw_object(canvas: &mut dyn Canvas, object: &GameObject) {
    canvas.blit(object.sprite(), object.x as f32, object.y as f32, 1.0, 255);
}

fn draw_ship(canvas: &mut dyn Canvas, ship: &Ship) {
    for bullet in &ship.bullets {
        draw_object(canvas, &bullet.body);
    }
    draw_object(canvas, &ship.body);
}

impl Scene for GameScene {
    fn name(&self) -> &str {
        "game"
    }

    fn handle_events(&mut self, input: &InputState, nav: &mut Navigator) {
        if !self.state.is_running() {
            if self.back.handle(input) || input.was_pressed(Key::Enter) {
                self.back_to_start(nav);
            }
            return;
        }
        if input.was_pressed(Key::Escape) {
            self.back_to_start(nav);
            return;
        }

        let (dx, dy) = if input.is_held(Key::Left) {
            (-PLAYER_VEL, 0)
        } else if input.is_held(Key::Right) {
            (PLAYER_VEL, 0)
        } else if input.is_held(Key::Up) {
            (0, -PLAYER_VEL)
        } else if input.is_held(Key::Down) {
            (0, PLAYER_VEL)
        } else {
            (0, 0)
        };
        if (dx, dy) != (0, 0) {
            let (w, h) = (self.state.width, self.state.height);
            self.state.player.move_within(dx, dy, w, h);
        }

        if input.is_held(Key::Space) {
            self.state.player.ship.shoot();
        }
    }

    fn update(&mut self, _nav: &mut Navigator) {
        let player = &self.state.player;
        self.live_label.set_text(format!("Live: {}", player.lives));
        self.health_label
            .set_text(format!("Health: {}", player.ship.health));
        self.score_label.set_text(format!("Score: {}", player.score));

        self.state
            .tick(&self.assets, &mut self.effects, &mut self.rng);

        if !self.state.is_running() {
            self.end_label.visible = true;
            self.back.visible = true;
        }
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.blit(&self.assets.background, 0.0, 0.0, 1.0, 255);
        self.live_label.draw(canvas);
        self.health_label.draw(canvas);
        self.score_label.draw(canvas);
        draw_ship(canvas, &self.state.player.ship);
        for enemy in &self.state.enemies {
            draw_ship(canvas, &enemy.ship);
        }
        self.effects.draw(canvas, &mut self.rng);
        self.end_label.draw(canvas);
        self.back.draw(canvas);
    }
}
