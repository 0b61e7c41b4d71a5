//! The scene stack.
//!
//! Only the scene on top of the stack receives input, updates and draws.
//! Scenes never touch each other: they ask for navigation through the
//! [`Navigator`] they are handed, and the [`SceneManager`] carries the
//! requests out once the scene's callback has returned.

mod game;
mod start;

use crate::display::Canvas;
use crate::input::InputState;

pub use game::GameScene;
pub use start::StartScene;

pub trait Scene {
    /// Short name for logs.
    fn name(&self) -> &str;

    fn handle_events(&mut self, _input: &InputState, _nav: &mut Navigator) {}

    fn update(&mut self, _nav: &mut Navigator) {}

    fn draw(&mut self, _canvas: &mut dyn Canvas) {}

    /// Called right after the scene is pushed.
    fn on_enter(&mut self) {}

    /// Called right before the scene is popped.
    fn on_exit(&mut self) {}
}

pub enum Transition {
    Push(Box<dyn Scene>),
    Pop,
    /// Pop the current scene, then push this one.
    Replace(Box<dyn Scene>),
}

/// Navigation requests collected while a scene callback runs.
#[derive(Default)]
pub struct Navigator {
    requests: Vec<Transition>,
}

impl Navigator {
    pub fn push(&mut self, scene: impl Scene + 'static) {
        self.requests.push(Transition::Push(Box::new(scene)));
    }

    pub fn pop(&mut self) {
        self.requests.push(Transition::Pop);
    }

    pub fn replace(&mut self, scene: impl Scene + 'static) {
        self.requests.push(Transition::Replace(Box::new(scene)));
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// Owns every scene.  The last element of `scenes` is the top.
#[derive(Default)]
pub struct SceneManager {
    scenes: Vec<Box<dyn Scene>>,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty stack means the application should exit.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Name of the active scene.
    pub fn active(&self) -> Option<&str> {
        self.scenes.last().map(|s| s.name())
    }

    pub fn push(&mut self, mut scene: Box<dyn Scene>) {
        log::info!("Entering scene '{}'", scene.name());
        scene.on_enter();
        self.scenes.push(scene);
    }

    /// Remove the top scene after running its exit hook.  No-op when empty.
    pub fn pop(&mut self) {
        if let Some(mut scene) = self.scenes.pop() {
            log::info!("Leaving scene '{}'", scene.name());
            scene.on_exit();
        }
    }

    pub fn replace(&mut self, scene: Box<dyn Scene>) {
        self.pop();
        self.push(scene);
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Push(scene) => self.push(scene),
            Transition::Pop => self.pop(),
            Transition::Replace(scene) => self.replace(scene),
        }
    }

    fn navigate(&mut self, nav: Navigator) {
        for transition in nav.requests {
            self.apply(transition);
        }
    }

    pub fn handle_events(&mut self, input: &InputState) {
        let mut nav = Navigator::default();
        if let Some(top) = self.scenes.last_mut() {
            top.handle_events(input, &mut nav);
        }
        self.navigate(nav);
    }

    pub fn update(&mut self) {
        let mut nav = Navigator::default();
        if let Some(top) = self.scenes.last_mut() {
            top.update(&mut nav);
        }
        self.navigate(nav);
    }

    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        if let Some(top) = self.scenes.last_mut() {
            top.draw(canvas);
        }
    }
}
