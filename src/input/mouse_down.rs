//! Mouse down handling - selection, drag start, context menu.

use crate::app::{ContextMenu, Editor};
use crate::input::{MouseDownEvent, PointerButton};
use crate::profile_scope;
use crate::settings::EmptyClickPolicy;

impl Editor {
    pub fn handle_mouse_down(&mut self, event: &MouseDownEvent) {
        profile_scope!("handle_mouse_down");

        match event.button {
            PointerButton::Primary => self.primary_down(event.position),
            PointerButton::Secondary => self.secondary_down(event.position),
            PointerButton::Middle => {}
        }
    }

    fn primary_down(&mut self, pos: (f32, f32)) {
        if self.context_menu.take().is_some() {
            self.notify();
        }

        // A second press mid-drag has no transition.
        if !self.input_state.is_idle() {
            return;
        }

        let Some(sprite_id) = self.scene.hit_test(pos.0, pos.1) else {
            // Clicked on empty canvas
            if self.settings.empty_click == EmptyClickPolicy::ClearSelection
                && self.scene.selected().is_some()
            {
                self.scene.clear_selection();
                self.notify();
            }
            return;
        };

        if let Err(e) = self.scene.select(sprite_id) {
            self.report(e);
            return;
        }

        match self.scene.begin_drag(sprite_id, pos) {
            Ok(Some(offset)) => self.input_state.start_dragging(sprite_id, offset),
            Ok(None) => tracing::trace!(sprite = %sprite_id, "Sprite is not draggable"),
            Err(e) => self.report(e),
        }
        self.notify();
    }

    fn secondary_down(&mut self, pos: (f32, f32)) {
        let Some(sprite_id) = self.scene.hit_test(pos.0, pos.1) else {
            return;
        };

        if let Err(e) = self.scene.select(sprite_id) {
            self.report(e);
            return;
        }

        self.context_menu = Some(ContextMenu::new(sprite_id, pos));
        self.notify();
    }
}
