//! Pointer input handling for the canvas.
//!
//! The input system uses an explicit state machine ([`InputState`]) for the
//! drag lifecycle. Handlers are total: an event with no matching transition
//! is ignored.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum
//! - `events` - Pointer event types delivered by the host
//! - `mouse_down` - Selection, drag start, context menu
//! - `drag` - Pointer moves during a drag
//! - `mouse_up` - Drag end
//! - `coords` - Window/canvas coordinate conversion

pub mod coords;
mod drag;
mod events;
mod mouse_down;
mod mouse_up;
mod state;

pub use coords::CanvasLayout;
pub use events::{MouseDownEvent, MouseMoveEvent, MouseUpEvent, PointerButton, PointerEvent};
pub use state::InputState;

use crate::app::Editor;

impl Editor {
    /// Dispatch any pointer event to its handler.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::Down(e) => self.handle_mouse_down(e),
            PointerEvent::Move(e) => self.handle_mouse_move(e),
            PointerEvent::Up(e) => self.handle_mouse_up(e),
        }
    }
}
