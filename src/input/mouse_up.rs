//! Mouse up handling - finalize drags.

use crate::app::Editor;
use crate::input::{MouseUpEvent, PointerButton};

impl Editor {
    pub fn handle_mouse_up(&mut self, event: &MouseUpEvent) {
        if event.button != PointerButton::Primary {
            return;
        }

        let Some(sprite_id) = self.input_state.dragged_sprite_id() else {
            return;
        };

        // Selection persists after the drag.
        if let Err(e) = self.scene.end_drag(sprite_id) {
            tracing::debug!(error = %e, "Dragged sprite no longer exists");
        }
        self.input_state.reset();
        self.notify();
    }
}
