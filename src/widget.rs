//! Thin menu widgets: text labels and clickable buttons.

use crate::display::Canvas;
use crate::input::InputState;
use crate::sprite::Rgba;

/// Which point of a widget its `(x, y)` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MidLeft,
    MidCenter,
    MidRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Align {
    /// Top-left corner of a `w` × `h` box anchored at `(x, y)`.
    pub fn top_left(self, x: f32, y: f32, w: f32, h: f32) -> (f32, f32) {
        let (row, col) = match self {
            Align::TopLeft => (0.0, 0.0),
            Align::TopCenter => (0.0, 1.0),
            Align::TopRight => (0.0, 2.0),
            Align::MidLeft => (1.0, 0.0),
            Align::MidCenter => (1.0, 1.0),
            Align::MidRight => (1.0, 2.0),
            Align::BottomLeft => (2.0, 0.0),
            Align::BottomCenter => (2.0, 1.0),
            Align::BottomRight => (2.0, 2.0),
        };
        (x - w / 2.0 * col, y - h / 2.0 * row)
    }
}

#[derive(Clone, Debug)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: Rgba,
    pub anchor: Align,
    pub visible: bool,
}

impl Label {
    pub fn new(x: f32, y: f32, text: impl Into<String>, color: Rgba) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color,
            anchor: Align::TopLeft,
            visible: true,
        }
    }

    pub fn anchored(mut self, anchor: Align) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }
        let (w, h) = canvas.text_size(&self.text);
        let (x, y) = self.anchor.top_left(self.x, self.y, w, h);
        canvas.draw_text(x, y, &self.text, self.color);
    }
}

/// A filled rectangle with centred text.  A click is a left-button press
/// inside the rectangle followed by a release still inside it.
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    pub text: String,
    pub bg_color: Rgba,
    pub pressed_color: Rgba,
    pub text_color: Rgba,
    pub visible: bool,
    is_pressed: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, anchor: Align, text: impl Into<String>) -> Self {
        let (x, y) = anchor.top_left(x, y, width, height);
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            bg_color: Rgba::WHITE,
            pressed_color: Rgba::rgb(50, 50, 50),
            text_color: Rgba::BLACK,
            visible: true,
            is_pressed: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Feed one frame of input; true when a click completes.
    pub fn handle(&mut self, input: &InputState) -> bool {
        if !self.visible {
            self.is_pressed = false;
            return false;
        }
        let over = input.mouse.map_or(false, |p| self.contains(p));
        if input.mouse_pressed && over {
            self.is_pressed = true;
        }
        if input.mouse_released {
            let clicked = self.is_pressed && over;
            self.is_pressed = false;
            return clicked;
        }
        false
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }
        let fill = if self.is_pressed {
            self.pressed_color
        } else {
            self.bg_color
        };
        canvas.fill_rect(self.x, self.y, self.width, self.height, fill);
        let (tw, th) = canvas.text_size(&self.text);
        let (tx, ty) = Align::MidCenter.top_left(
            self.x + self.width / 2.0,
            self.y + self.height / 2.0,
            tw,
            th,
        );
        canvas.draw_text(tx, ty, &self.text, self.text_color);
    }
}
