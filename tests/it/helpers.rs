//! Test helpers and builders for reducing boilerplate in tests.
//!
//! - `TestSceneBuilder` - Builder for scenes with named sprites
//! - `test_editor()` - Editor with default settings and no demo sprite
//! - In-memory image loaders so tests never depend on files on disk

#![allow(dead_code)]

use image::{DynamicImage, ImageError};
use spritedesk::image_loader::ImageLoader;
use spritedesk::settings::Settings;
use spritedesk::{Editor, Scene, SceneConfig, SpriteId};
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// TestSceneBuilder
// ============================================================================

/// Builder for scenes with sprites at known positions.
///
/// ```ignore
/// let (scene, ids) = TestSceneBuilder::new()
///     .with_sprite("A", (100.0, 100.0))
///     .with_sprite("B", (120.0, 120.0))
///     .build();
/// ```
#[derive(Default)]
pub struct TestSceneBuilder {
    sprites: Vec<(String, (f32, f32))>,
    config: SceneConfig,
}

impl TestSceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SceneConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_sprite(mut self, name: impl Into<String>, pos: (f32, f32)) -> Self {
        self.sprites.push((name.into(), pos));
        self
    }

    /// The scene plus sprite ids in the order they were added.
    pub fn build(self) -> (Scene, Vec<SpriteId>) {
        let mut scene = Scene::with_config(self.config);
        let ids = self
            .sprites
            .into_iter()
            .map(|(name, (x, y))| scene.create(name, x, y))
            .collect();
        (scene, ids)
    }
}

// ============================================================================
// Editors
// ============================================================================

pub fn test_settings() -> Settings {
    Settings {
        demo_sprite: false,
        ..Settings::default()
    }
}

/// Editor with default settings, an empty scene and an in-memory image loader.
pub fn test_editor() -> Editor {
    Editor::with_settings(test_settings()).with_image_loader(MemoryImageLoader::default())
}

/// Editor holding one sprite "A" at (100, 100), 50x50.
pub fn editor_with_sprite() -> (Editor, SpriteId) {
    let mut editor = test_editor();
    let id = editor.create_sprite("A", 100.0, 100.0);
    editor.take_redraw_request();
    (editor, id)
}

// ============================================================================
// Image Loaders
// ============================================================================

/// Produces a blank image of a fixed size for any path and records requests.
pub struct MemoryImageLoader {
    pub width: u32,
    pub height: u32,
    pub requested: RefCell<Vec<PathBuf>>,
}

impl Default for MemoryImageLoader {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl ImageLoader for MemoryImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, ImageError> {
        self.requested.borrow_mut().push(path.to_path_buf());
        Ok(DynamicImage::new_rgba8(self.width, self.height))
    }
}

/// Fails every load as if the file did not exist.
pub struct MissingImageLoader;

impl ImageLoader for MissingImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, ImageError> {
        Err(ImageError::IoError(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )))
    }
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_sprite_count(scene: &Scene, expected: usize) {
    assert_eq!(
        scene.len(),
        expected,
        "Expected {} sprites, found {}",
        expected,
        scene.len()
    );
}

pub fn position_of(scene: &Scene, id: SpriteId) -> (f32, f32) {
    scene.get(id).expect("sprite should exist").position
}
