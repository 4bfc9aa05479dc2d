//! Mouse move handling - sprite dragging.
//!
//! Called for every pointer move, so anything but an active drag exits early.

use crate::app::Editor;
use crate::input::MouseMoveEvent;
use crate::profile_scope;

impl Editor {
    pub fn handle_mouse_move(&mut self, event: &MouseMoveEvent) {
        let Some(sprite_id) = self.input_state.dragged_sprite_id() else {
            return;
        };
        profile_scope!("sprite_drag");

        match self.scene.drag_to(sprite_id, event.position) {
            Ok(()) => self.notify(),
            Err(e) => {
                // The sprite went away mid-drag.
                tracing::debug!(error = %e, "Dropping stale drag");
                self.input_state.reset();
            }
        }
    }
}
