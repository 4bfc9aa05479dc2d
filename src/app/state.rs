//! Editor state - the context object that owns the scene and everything the
//! interaction layer tracks around it.

use super::{ContextMenu, ScriptEditorSession};
use crate::error::SceneError;
use crate::frame_loop::FrameLoop;
use crate::image_loader::ImageLoader;
use crate::input::{CanvasLayout, InputState};
use crate::notifications::{Toast, ToastManager};
use crate::perf::PerfMonitor;
use crate::scene::Scene;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use crate::types::SpriteId;

/// Interaction controller for one scene.
///
/// There is no global engine: each `Editor` owns its scene, so several can
/// coexist and tests can drive one headless.
pub struct Editor {
    pub scene: Scene,
    /// Pointer state machine
    pub input_state: InputState,
    /// Outline entry pressed and not yet released
    pub outline_drag: Option<SpriteId>,
    pub context_menu: Option<ContextMenu>,
    pub script_editor: Option<ScriptEditorSession>,
    pub toasts: ToastManager,
    pub settings: Settings,
    pub layout: CanvasLayout,
    pub frames: FrameLoop,
    pub perf: PerfMonitor,
    pub(crate) settings_watcher: Option<SettingsWatcher>,
    pub(crate) image_loader: Box<dyn ImageLoader>,
    pub(crate) redraw_requested: bool,
}

impl Editor {
    /// Ask the host for a redraw.
    pub(crate) fn notify(&mut self) {
        self.redraw_requested = true;
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Recover a scene error: log it and tell the user. Never fatal.
    pub(crate) fn report(&mut self, error: SceneError) {
        tracing::warn!(error = %error, "Operation failed");
        self.toasts.push(Toast::error(error.to_string()));
    }
}
