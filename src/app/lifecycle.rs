//! Editor lifecycle - construction, settings reload and the frame pass.

use super::Editor;
use crate::constants::{DEMO_SPRITE_COLOR, DEMO_SPRITE_NAME, DEMO_SPRITE_POSITION};
use crate::frame_loop::FrameLoop;
use crate::image_loader::{FsImageLoader, ImageLoader};
use crate::input::{CanvasLayout, InputState};
use crate::notifications::{Toast, ToastManager};
use crate::perf::PerfMonitor;
use crate::profile_scope;
use crate::render::DrawSurface;
use crate::scene::Scene;
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::types::SpriteProperty;
use std::path::PathBuf;
use std::time::{Duration, Instant};

impl Editor {
    /// Editor with settings from the default location.
    pub fn new() -> Self {
        Self::with_settings(Settings::load())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let frames = FrameLoop::new(settings.fps);
        let perf = PerfMonitor::with_budget(frames.frame_budget());

        let mut editor = Self {
            scene: Scene::with_config(settings.scene_config()),
            input_state: InputState::default(),
            outline_drag: None,
            context_menu: None,
            script_editor: None,
            toasts: ToastManager::new(),
            layout: CanvasLayout::from_settings(&settings),
            frames,
            perf,
            settings_watcher: None,
            image_loader: Box::new(FsImageLoader),
            redraw_requested: false,
            settings,
        };

        if editor.settings.demo_sprite {
            editor.add_demo_sprite();
        }

        tracing::info!(sprites = editor.scene.len(), "Editor ready");
        editor
    }

    /// Replace the image loader (tests inject in-memory loaders).
    pub fn with_image_loader(mut self, loader: impl ImageLoader + 'static) -> Self {
        self.image_loader = Box::new(loader);
        self
    }

    fn add_demo_sprite(&mut self) {
        let (x, y) = DEMO_SPRITE_POSITION;
        let id = self.scene.create(DEMO_SPRITE_NAME, x, y);
        if let Err(e) = self
            .scene
            .set_property(id, SpriteProperty::Color(DEMO_SPRITE_COLOR.to_string()))
        {
            self.report(e);
        }
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Start watching a settings file for changes.
    pub fn watch_settings(&mut self, path: PathBuf) {
        match SettingsWatcher::new(path) {
            Ok(watcher) => self.settings_watcher = Some(watcher),
            Err(e) => tracing::warn!("Settings watcher unavailable: {}", e),
        }
    }

    /// Apply new settings. Existing sprites keep their current values.
    pub fn apply_settings(&mut self, settings: Settings) {
        let settings = settings.sanitized();
        self.scene.set_config(settings.scene_config());
        self.layout = CanvasLayout::from_settings(&settings);
        self.frames.set_fps(settings.fps);
        self.perf.set_budget(self.frames.frame_budget());
        self.settings = settings;
        self.notify();
    }

    /// Check for settings file changes and reload if needed.
    pub fn check_settings_reload(&mut self) {
        let Some(watcher) = self.settings_watcher.as_mut() else {
            return;
        };
        let Some(event) = watcher.poll() else {
            return;
        };
        let path = watcher.path().to_path_buf();

        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                tracing::info!("Settings file changed, reloading...");
                match Settings::load_from(&path) {
                    Ok(settings) => {
                        self.apply_settings(settings);
                        self.toasts.push(Toast::info("Settings reloaded"));
                    }
                    Err(e) => {
                        tracing::error!("Failed to reload settings: {:#}", e);
                        self.toasts.push(Toast::error("Settings file is invalid"));
                    }
                }
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted");
                self.toasts.push(Toast::warning("Settings file deleted"));
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
            }
        }
    }

    // ========================================================================
    // Frame Loop
    // ========================================================================

    pub fn start(&mut self) {
        self.frames.start();
    }

    pub fn stop(&mut self) {
        self.frames.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    /// Run one frame pass at `now`: update, then draw to `surface`.
    ///
    /// Returns the delay until the next pass, or `None` once stopped; the
    /// host re-arms its one-shot timer only on `Some`.
    pub fn run_frame(&mut self, now: Instant, surface: &mut dyn DrawSurface) -> Option<Duration> {
        let tick = self.frames.tick(now)?;
        profile_scope!("run_frame");

        self.perf.begin_frame();
        self.update(tick.delta);
        self.render(surface);
        self.perf.end_frame();
        self.redraw_requested = false;

        Some(tick.next_in)
    }

    /// Per-frame update. Scripts are stored, never executed.
    fn update(&mut self, delta: f32) {
        self.toasts.tick();
        let scripted = self.scene.iter().filter(|sprite| sprite.has_script()).count();
        tracing::trace!(delta, scripted, "Frame update");
    }

    /// Draw the scene immediately, outside the regular cadence.
    pub fn render(&mut self, surface: &mut dyn DrawSurface) {
        let started = Instant::now();
        let commands = self.scene.draw_commands();
        surface.submit(&commands);
        self.perf.record_operation("render", started.elapsed());
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}
