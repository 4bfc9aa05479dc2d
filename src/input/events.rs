//! Pointer events delivered by the host, in canvas coordinates.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseDownEvent {
    pub position: (f32, f32),
    pub button: PointerButton,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    pub position: (f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseUpEvent {
    pub position: (f32, f32),
    pub button: PointerButton,
}

impl MouseDownEvent {
    pub fn primary(x: f32, y: f32) -> Self {
        Self {
            position: (x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn secondary(x: f32, y: f32) -> Self {
        Self {
            position: (x, y),
            button: PointerButton::Secondary,
        }
    }
}

impl MouseMoveEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self { position: (x, y) }
    }
}

impl MouseUpEvent {
    pub fn primary(x: f32, y: f32) -> Self {
        Self {
            position: (x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn secondary(x: f32, y: f32) -> Self {
        Self {
            position: (x, y),
            button: PointerButton::Secondary,
        }
    }
}

/// Any pointer event, for hosts that funnel input through one entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(MouseDownEvent),
    Move(MouseMoveEvent),
    Up(MouseUpEvent),
}
