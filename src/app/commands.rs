//! Editor commands - toolbar, context menu and script editor actions.
//!
//! Commands act on the current selection and are no-ops without one.
//! Scene errors are recovered here and surfaced as toasts.

use super::{ContextAction, Editor, ScriptEditorSession};
use crate::error::SceneError;
use crate::types::{SpriteId, SpriteProperty};
use std::path::Path;

impl Editor {
    /// Place a new sprite with default size and color.
    pub fn create_sprite(&mut self, name: impl Into<String>, x: f32, y: f32) -> SpriteId {
        let id = self.scene.create(name, x, y);
        self.notify();
        id
    }

    /// Select a sprite by identity, e.g. from the outline.
    pub fn select_sprite(&mut self, id: SpriteId) -> bool {
        match self.scene.select(id) {
            Ok(()) => {
                self.notify();
                true
            }
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    pub fn duplicate_selected(&mut self) -> Option<SpriteId> {
        let selected = self.scene.selected()?;
        self.duplicate_sprite(selected)
    }

    pub fn remove_selected(&mut self) -> bool {
        let Some(selected) = self.scene.selected() else {
            return false;
        };
        self.remove_sprite(selected)
    }

    /// Open the script editor on the selected sprite.
    pub fn edit_script_of_selected(&mut self) -> Option<&ScriptEditorSession> {
        let selected = self.scene.selected()?;
        self.open_script_editor(selected)
    }

    fn duplicate_sprite(&mut self, id: SpriteId) -> Option<SpriteId> {
        match self.scene.duplicate(id) {
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

    fn remove_sprite(&mut self, id: SpriteId) -> bool {
        if let Err(e) = self.scene.remove(id) {
            self.report(e);
            return false;
        }

        if self.input_state.dragged_sprite_id() == Some(id) {
            self.input_state.reset();
        }
        if self.context_menu.as_ref().is_some_and(|menu| menu.sprite_id == id) {
            self.context_menu = None;
        }
        if self.outline_drag == Some(id) {
            self.outline_drag = None;
        }
        self.notify();
        true
    }

    fn open_script_editor(&mut self, id: SpriteId) -> Option<&ScriptEditorSession> {
        let Some(sprite) = self.scene.get(id) else {
            self.report(SceneError::NotFound(id));
            return None;
        };
        self.script_editor = Some(ScriptEditorSession::for_sprite(sprite));
        self.script_editor.as_ref()
    }

    // ========================================================================
    // Context Menu
    // ========================================================================

    /// Run a menu action against the sprite the menu was opened on, then
    /// close the menu.
    pub fn activate_context_action(&mut self, action: ContextAction) {
        let Some(menu) = self.context_menu.take() else {
            return;
        };
        self.notify();

        match action {
            ContextAction::Duplicate => {
                self.duplicate_sprite(menu.sprite_id);
            }
            ContextAction::Remove => {
                self.remove_sprite(menu.sprite_id);
            }
            ContextAction::EditScript => {
                self.open_script_editor(menu.sprite_id);
            }
        }
    }

    pub fn dismiss_context_menu(&mut self) {
        if self.context_menu.take().is_some() {
            self.notify();
        }
    }

    // ========================================================================
    // Script Editor
    // ========================================================================

    /// Store the edited text verbatim and close the editor.
    pub fn save_script(&mut self, text: impl Into<String>) -> bool {
        let Some(session) = self.script_editor.take() else {
            return false;
        };

        match self.scene.set_script(session.sprite_id, text) {
            Ok(()) => {
                tracing::debug!(sprite = %session.sprite_id, "Script saved");
                self.notify();
                true
            }
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    pub fn cancel_script_edit(&mut self) {
        self.script_editor = None;
    }

    // ========================================================================
    // Inspector
    // ========================================================================

    /// Apply an inspector edit to the selected sprite.
    pub fn set_selected_property(&mut self, property: SpriteProperty) -> bool {
        let Some(selected) = self.scene.selected() else {
            return false;
        };

        match self.scene.set_property(selected, property) {
            Ok(()) => {
                self.notify();
                true
            }
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    /// Load an image file onto the selected sprite.
    pub fn load_image_for_selected(&mut self, path: &Path) -> bool {
        let Some(selected) = self.scene.selected() else {
            return false;
        };

        match self.scene.load_image(selected, path, self.image_loader.as_ref()) {
            Ok(()) => {
                self.notify();
                true
            }
            Err(e) => {
                self.report(e);
                false
            }
        }
    }
}
