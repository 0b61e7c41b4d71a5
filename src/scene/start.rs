use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{GameScene, Navigator, Scene};
use crate::assets::GameAssets;
use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::display::Canvas;
use crate::effect::{Effect, EffectManager};
use crate::input::{InputState, Key};
use crate::sprite::Rgba;
use crate::widget::{Align, Button, Label};

const FIREWORK_LIFETIME: i32 = 10;
const SMOKE_LIFETIME: i32 = 15;
/// Smoke puffs drift down the screen, so the plume starts near the top.
const SMOKE_ORIGIN_Y: f32 = 40.0;

/// Title screen.  Clicking Start (or pressing Enter) begins a game;
/// clicking anywhere else sets off a firework, `E` a smoke plume.
pub struct StartScene {
    assets: Rc<GameAssets>,
    rng: StdRng,
    effects: EffectManager,
    title: Label,
    hint: Label,
    start: Button,
}

impl StartScene {
    pub fn new(assets: Rc<GameAssets>, rng: StdRng) -> Self {
        let cx = WINDOW_WIDTH as f32 / 2.0;
        let cy = WINDOW_HEIGHT as f32 / 2.0;
        Self {
            assets,
            rng,
            effects: EffectManager::new(),
            title: Label::new(cx, cy - 120.0, "SPACE SHOOTER", Rgba::rgb(0, 255, 255))
                .anchored(Align::MidCenter),
            hint: Label::new(
                cx,
                WINDOW_HEIGHT as f32 - 30.0,
                "Arrows: Move  Space: Shoot  Esc: Back  Q: Quit",
                Rgba::rgb(128, 128, 128),
            )
            .anchored(Align::MidCenter),
            start: Button::new(cx, cy, 100.0, 50.0, Align::MidCenter, "Start"),
        }
    }

    pub fn effects(&self) -> &EffectManager {
        &self.effects
    }

    fn start_game(&mut self, nav: &mut Navigator) {
        let seed = self.rng.gen();
        nav.replace(GameScene::new(
            self.assets.clone(),
            StdRng::seed_from_u64(seed),
        ));
    }
}

impl Scene for StartScene {
    fn name(&self) -> &str {
        "start"
    }

    fn handle_events(&mut self, input: &InputState, nav: &mut Navigator) {
        if input.was_pressed(Key::Escape) {
            nav.pop();
            return;
        }
        if self.start.handle(input) || input.was_pressed(Key::Enter) {
            self.start_game(nav);
            return;
        }

        if input.mouse_pressed {
            if let Some((x, y)) = input.mouse.filter(|&p| !self.start.contains(p)) {
                let effect = Effect::firework(FIREWORK_LIFETIME, x, y, &mut self.rng);
                self.effects.add_effect(effect);
            }
        }
        if input.was_pressed(Key::Smoke) {
            let effect = Effect::smoke_up(
                SMOKE_LIFETIME,
                WINDOW_WIDTH as f32 / 2.0,
                SMOKE_ORIGIN_Y,
                self.assets.smoke.clone(),
                &mut self.rng,
            );
            self.effects.add_effect(effect);
        }
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.fill(Rgba::BLACK);
        self.effects.draw(canvas, &mut self.rng);
        self.title.draw(canvas);
        self.start.draw(canvas);
        self.hint.draw(canvas);
    }
}
