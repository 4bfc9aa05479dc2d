//! Outline sidebar and inspector views, plus dragging outline entries onto
//! the canvas to place copies.

use super::{Editor, InspectorView, OutlineEntry};
use crate::types::SpriteId;

impl Editor {
    /// One entry per sprite, in draw order.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        let selected = self.scene.selected();
        self.scene
            .iter()
            .map(|sprite| OutlineEntry {
                id: sprite.id,
                name: sprite.name.clone(),
                selected: selected == Some(sprite.id),
                has_script: sprite.has_script(),
            })
            .collect()
    }

    pub fn inspector(&self) -> Option<InspectorView> {
        self.scene.selected_sprite().map(InspectorView::for_sprite)
    }

    pub fn select_from_outline(&mut self, id: SpriteId) -> bool {
        self.select_sprite(id)
    }

    /// Press on an outline entry: select it and remember it as a drag source.
    pub fn press_outline_entry(&mut self, id: SpriteId) {
        if self.select_sprite(id) {
            self.outline_drag = Some(id);
        }
    }

    /// Release an outline drag at a window position. Over the canvas, the
    /// source is copied with its top-left at the drop point; anywhere else
    /// the drag is cancelled.
    pub fn release_outline_drag(&mut self, window_pos: (f32, f32)) -> Option<SpriteId> {
        let source = self.outline_drag.take()?;
        let Some((x, y)) = self.layout.drop_target(window_pos) else {
            tracing::trace!(sprite = %source, "Outline drag cancelled");
            return None;
        };

        match self.scene.duplicate_at(source, x, y) {
            Ok(copy) => {
                self.notify();
                Some(copy)
            }
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    pub fn cancel_outline_drag(&mut self) {
        self.outline_drag = None;
    }
}
