//! Plain data the editor hands to the host UI: menus, editor sessions,
//! the outline listing and the inspector.

use crate::constants::SCRIPT_EDITOR_TITLE;
use crate::types::{Sprite, SpriteId};

/// Actions offered by the sprite context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Duplicate,
    Remove,
    EditScript,
}

impl ContextAction {
    pub const ALL: [ContextAction; 3] = [
        ContextAction::Duplicate,
        ContextAction::Remove,
        ContextAction::EditScript,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContextAction::Duplicate => "Duplicate",
            ContextAction::Remove => "Remove",
            ContextAction::EditScript => "Edit Script",
        }
    }
}

/// An open context menu, bound to the sprite it was opened on.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    pub sprite_id: SpriteId,
    /// Where the menu was requested, in canvas coordinates
    pub position: (f32, f32),
    pub actions: Vec<ContextAction>,
}

impl ContextMenu {
    pub fn new(sprite_id: SpriteId, position: (f32, f32)) -> Self {
        Self {
            sprite_id,
            position,
            actions: ContextAction::ALL.to_vec(),
        }
    }
}

/// An open script editor window.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptEditorSession {
    pub sprite_id: SpriteId,
    pub title: String,
    /// Script text the editor opens with; empty for a new script
    pub text: String,
}

impl ScriptEditorSession {
    pub fn for_sprite(sprite: &Sprite) -> Self {
        Self {
            sprite_id: sprite.id,
            title: format!("{} - {}", SCRIPT_EDITOR_TITLE, sprite.name),
            text: sprite.script.clone().unwrap_or_default(),
        }
    }
}

/// One row of the outline sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub id: SpriteId,
    pub name: String,
    pub selected: bool,
    pub has_script: bool,
}

/// Inspector panel contents for the selected sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorView {
    pub id: SpriteId,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub draggable: bool,
    pub has_texture: bool,
    pub script_button_label: &'static str,
}

impl InspectorView {
    pub fn for_sprite(sprite: &Sprite) -> Self {
        Self {
            id: sprite.id,
            name: sprite.name.clone(),
            x: sprite.position.0,
            y: sprite.position.1,
            width: sprite.size.0,
            height: sprite.size.1,
            color: sprite.color.to_hex(),
            draggable: sprite.draggable,
            has_texture: sprite.texture.is_some(),
            script_button_label: if sprite.has_script() {
                "Edit Script"
            } else {
                "Add Script"
            },
        }
    }
}
