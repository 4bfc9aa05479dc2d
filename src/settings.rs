//! User settings - editor defaults stored as JSON.
//!
//! Settings live at `<config dir>/spritedesk/settings.json`. Every field has
//! a default, so partial files are fine; an unreadable file falls back to
//! defaults with a warning.

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, COPY_SUFFIX, DEFAULT_FPS, DEFAULT_SPRITE_COLOR,
    DEFAULT_SPRITE_SIZE, DUPLICATE_OFFSET, MAX_FPS, MAX_SPRITE_EXTENT, MIN_FPS, SIDEBAR_WIDTH,
};
use crate::scene::SceneConfig;
use crate::types::Color;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a primary click on empty canvas does to the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClickPolicy {
    #[default]
    ClearSelection,
    KeepSelection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fps: u32,
    pub sprite_width: u32,
    pub sprite_height: u32,
    pub sprite_color: String,
    pub duplicate_offset_x: i32,
    pub duplicate_offset_y: i32,
    pub copy_suffix: String,
    pub empty_click: EmptyClickPolicy,
    pub sidebar_width: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Place the demo sprite in a fresh scene
    pub demo_sprite: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            sprite_width: DEFAULT_SPRITE_SIZE.0,
            sprite_height: DEFAULT_SPRITE_SIZE.1,
            sprite_color: DEFAULT_SPRITE_COLOR.to_string(),
            duplicate_offset_x: DUPLICATE_OFFSET.0,
            duplicate_offset_y: DUPLICATE_OFFSET.1,
            copy_suffix: COPY_SUFFIX.to_string(),
            empty_click: EmptyClickPolicy::default(),
            sidebar_width: SIDEBAR_WIDTH,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            demo_sprite: true,
        }
    }
}

/// Default settings file location, if the platform has a config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("spritedesk").join("settings.json"))
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Clamp values that would make the editor misbehave.
    pub fn sanitized(mut self) -> Self {
        self.fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        self.sprite_width = self.sprite_width.clamp(1, MAX_SPRITE_EXTENT);
        self.sprite_height = self.sprite_height.clamp(1, MAX_SPRITE_EXTENT);
        if Color::parse(&self.sprite_color).is_none() {
            tracing::warn!(color = %self.sprite_color, "Unknown sprite color in settings");
            self.sprite_color = DEFAULT_SPRITE_COLOR.to_string();
        }
        self
    }

    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            default_size: (self.sprite_width as f32, self.sprite_height as f32),
            default_color: Color::parse(&self.sprite_color).unwrap_or_default(),
            duplicate_offset: (self.duplicate_offset_x as f32, self.duplicate_offset_y as f32),
            copy_suffix: self.copy_suffix.clone(),
        }
    }
}
