//! Keyboard and mouse sampling.
//!
//! Terminals report key presses, not key state.  Instead of acting on each
//! event, [`KeyTracker`] records the frame of the last press/repeat event
//! for every key; a key counts as held while that record is fresh (within
//! the hold window) or until a release event arrives on terminals that send
//! them.  Once per frame the tracker hands out an [`InputState`] snapshot.

use std::collections::{HashMap, HashSet};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::display::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    Enter,
    /// Launches a smoke plume on the title screen.
    Smoke,
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Key::Smoke),
        _ => None,
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Input as seen by one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    held: HashSet<Key>,
    /// Keys that went down this frame.
    pressed: HashSet<Key>,
    /// Last known pointer position in logical coordinates.
    pub mouse: Option<(f32, f32)>,
    pub mouse_down: bool,
    /// Left button went down this frame.
    pub mouse_pressed: bool,
    /// Left button came up this frame.
    pub mouse_released: bool,
}

impl InputState {
    /// A snapshot with `keys` held, none of them newly pressed.
    pub fn holding(keys: &[Key]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// A snapshot where `key` was pressed this frame.
    pub fn pressing(key: Key) -> Self {
        Self {
            held: HashSet::from([key]),
            pressed: HashSet::from([key]),
            ..Self::default()
        }
    }

    /// A snapshot where the left button went down at `(x, y)`.
    pub fn mouse_press(x: f32, y: f32) -> Self {
        Self {
            mouse: Some((x, y)),
            mouse_down: true,
            mouse_pressed: true,
            ..Self::default()
        }
    }

    /// A snapshot where the left button came up at `(x, y)`.
    pub fn mouse_release(x: f32, y: f32) -> Self {
        Self {
            mouse: Some((x, y)),
            mouse_released: true,
            ..Self::default()
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

// ── Tracker ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct KeyTracker {
    /// Frame each held key was last seen (press or repeat).
    key_frame: HashMap<Key, u64>,
    pressed: HashSet<Key>,
    hold_window: u64,
    mouse: Option<(f32, f32)>,
    mouse_down: bool,
    mouse_pressed: bool,
    mouse_released: bool,
    quit: bool,
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        Self {
            key_frame: HashMap::new(),
            pressed: HashSet::new(),
            hold_window,
            mouse: None,
            mouse_down: false,
            mouse_pressed: false,
            mouse_released: false,
            quit: false,
        }
    }

    fn is_held(&self, key: Key, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    /// Ctrl-C or `q` was pressed.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn handle(&mut self, event: &Event, frame: u64, view: &Viewport) {
        match event {
            Event::Key(key) => self.handle_key(key, frame),
            Event::Mouse(mouse) => self.handle_mouse(mouse, view),
            _ => {}
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, frame: u64) {
        let KeyEvent { code, kind, modifiers, .. } = *event;
        if kind == KeyEventKind::Press {
            match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.quit = true;
                    return;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.quit = true;
                    return;
                }
                _ => {}
            }
        }

        let Some(key) = map_key(code) else {
            return;
        };
        match kind {
            // Classic terminals report auto-repeat as further presses, so
            // only a press of a key that is not already held is an edge.
            KeyEventKind::Press => {
                if !self.is_held(key, frame) {
                    self.pressed.insert(key);
                }
                self.key_frame.insert(key, frame);
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(key, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&key);
            }
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent, view: &Viewport) {
        self.mouse = view.to_logical(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.mouse_down = true;
                self.mouse_pressed = true;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.mouse_down = false;
                self.mouse_released = true;
            }
            _ => {}
        }
    }

    /// Input for `frame`.  Clears the per-frame edges.
    pub fn snapshot(&mut self, frame: u64) -> InputState {
        let window = self.hold_window;
        self.key_frame
            .retain(|_, last| frame.saturating_sub(*last) <= window);
        InputState {
            held: self.key_frame.keys().copied().collect(),
            pressed: std::mem::take(&mut self.pressed),
            mouse: self.mouse,
            mouse_down: self.mouse_down,
            mouse_pressed: std::mem::take(&mut self.mouse_pressed),
            mouse_released: std::mem::take(&mut self.mouse_released),
        }
    }
}
