//! Coordinate conversion between the editor window and the canvas.
//!
//! The window is laid out as the outline sidebar on the left and the canvas
//! to its right, both starting at the top edge.

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub sidebar_width: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl CanvasLayout {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            sidebar_width: settings.sidebar_width as f32,
            canvas_width: settings.canvas_width as f32,
            canvas_height: settings.canvas_height as f32,
        }
    }

    /// True if a window point lies over the canvas.
    #[inline]
    pub fn is_over_canvas(&self, window_pos: (f32, f32)) -> bool {
        let (x, y) = window_pos;
        x > self.sidebar_width
            && x <= self.sidebar_width + self.canvas_width
            && y >= 0.0
            && y < self.canvas_height
    }

    #[inline]
    pub fn window_to_canvas(&self, window_pos: (f32, f32)) -> (f32, f32) {
        (window_pos.0 - self.sidebar_width, window_pos.1)
    }

    #[inline]
    pub fn canvas_to_window(&self, canvas_pos: (f32, f32)) -> (f32, f32) {
        (canvas_pos.0 + self.sidebar_width, canvas_pos.1)
    }

    /// Canvas position for a window point, or `None` off-canvas.
    pub fn drop_target(&self, window_pos: (f32, f32)) -> Option<(f32, f32)> {
        self.is_over_canvas(window_pos)
            .then(|| self.window_to_canvas(window_pos))
    }
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
