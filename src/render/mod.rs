//! Draw commands and the host redraw surface.
//!
//! A frame pass turns the scene into a flat list of [`DrawCommand`]s in draw
//! order and hands them to a [`DrawSurface`]. The host owns the actual
//! pixels; [`DrawList`] records commands for headless runs and tests.

use crate::types::{Bounds, Color, SpriteId, Texture};
use serde::Serialize;

/// One primitive for the host to paint, tagged with the sprite it came from.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        sprite: SpriteId,
        bounds: Bounds,
        color: Color,
    },
    Image {
        sprite: SpriteId,
        bounds: Bounds,
        texture: Texture,
    },
}

impl DrawCommand {
    pub fn sprite(&self) -> SpriteId {
        match self {
            DrawCommand::FillRect { sprite, .. } | DrawCommand::Image { sprite, .. } => *sprite,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            DrawCommand::FillRect { bounds, .. } | DrawCommand::Image { bounds, .. } => *bounds,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, DrawCommand::Image { .. })
    }
}

/// Host-side target for a frame's draw commands.
pub trait DrawSurface {
    /// Replace whatever was drawn before with `commands`, painted in order.
    fn submit(&mut self, commands: &[DrawCommand]);
}

/// Records the most recent frame.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames submitted so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The host-side hit-test: last command containing the point.
    pub fn topmost_at(&self, x: f32, y: f32) -> Option<SpriteId> {
        self.commands
            .iter()
            .rev()
            .find(|cmd| cmd.bounds().contains_point(x, y))
            .map(DrawCommand::sprite)
    }
}

impl DrawSurface for DrawList {
    fn submit(&mut self, commands: &[DrawCommand]) {
        self.commands.clear();
        self.commands.extend_from_slice(commands);
        self.frames += 1;
        tracing::trace!(commands = commands.len(), frame = self.frames, "Frame submitted");
    }
}
