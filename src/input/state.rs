//! Input state machine for pointer interactions on the canvas.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingSprite   (primary down on a draggable sprite)
//! DraggingSprite -> Idle   (primary up, or the dragged sprite disappears)
//! ```
//!
//! Secondary presses open a context menu without touching this state.

use crate::types::SpriteId;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No active pointer operation
    #[default]
    Idle,

    /// Moving one sprite with the pointer
    DraggingSprite {
        sprite_id: SpriteId,
        /// Pointer position minus sprite origin at drag start
        drag_offset: (f32, f32),
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingSprite { .. })
    }

    pub fn dragged_sprite_id(&self) -> Option<SpriteId> {
        match self {
            Self::DraggingSprite { sprite_id, .. } => Some(*sprite_id),
            Self::Idle => None,
        }
    }

    pub fn drag_offset(&self) -> Option<(f32, f32)> {
        match self {
            Self::DraggingSprite { drag_offset, .. } => Some(*drag_offset),
            Self::Idle => None,
        }
    }

    pub fn start_dragging(&mut self, sprite_id: SpriteId, drag_offset: (f32, f32)) {
        *self = Self::DraggingSprite {
            sprite_id,
            drag_offset,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
