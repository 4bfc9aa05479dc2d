//! Scene model - the set of placed sprites and the current selection.
//!
//! Sprites live in a `Vec` whose order is draw order: the last sprite is
//! drawn on top and wins hit-tests. Every change to a sprite's position or
//! size goes through this module so the spatial index never holds stale
//! geometry.
//!
//! ## Performance Notes
//!
//! Hit-testing prefilters candidates through the R-tree, then walks sprites
//! front to back to resolve overlaps.

use crate::constants::{
    COPY_SUFFIX, DEFAULT_SPRITE_COLOR, DEFAULT_SPRITE_SIZE, DUPLICATE_OFFSET, MAX_COORDINATE,
    MAX_SPRITE_EXTENT,
};
use crate::error::{SceneError, SceneResult};
use crate::image_loader::ImageLoader;
use crate::profile_scope;
use crate::render::DrawCommand;
use crate::spatial_index::SpatialIndex;
use crate::types::{Color, Sprite, SpriteId, SpriteProperty, Texture};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Values that shape newly created and duplicated sprites.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub default_size: (f32, f32),
    pub default_color: Color,
    pub duplicate_offset: (f32, f32),
    pub copy_suffix: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            default_size: (DEFAULT_SPRITE_SIZE.0 as f32, DEFAULT_SPRITE_SIZE.1 as f32),
            default_color: Color::parse(DEFAULT_SPRITE_COLOR).unwrap_or_default(),
            duplicate_offset: (DUPLICATE_OFFSET.0 as f32, DUPLICATE_OFFSET.1 as f32),
            copy_suffix: COPY_SUFFIX.to_string(),
        }
    }
}

/// All sprites on the canvas plus the single selection.
#[derive(Default)]
pub struct Scene {
    sprites: Vec<Sprite>,
    index: SpatialIndex,
    selected: Option<SpriteId>,
    config: SceneConfig,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Swap the creation defaults. Existing sprites are left as they are.
    pub fn set_config(&mut self, config: SceneConfig) {
        self.config = config;
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.iter().find(|sprite| sprite.id == id)
    }

    pub fn contains(&self, id: SpriteId) -> bool {
        self.position_of(id).is_some()
    }

    /// Sprites in draw order (bottom first)
    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    pub fn ids(&self) -> Vec<SpriteId> {
        self.sprites.iter().map(|sprite| sprite.id).collect()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    fn position_of(&self, id: SpriteId) -> Option<usize> {
        self.sprites.iter().position(|sprite| sprite.id == id)
    }

    fn sprite_mut(&mut self, id: SpriteId) -> SceneResult<&mut Sprite> {
        self.sprites
            .iter_mut()
            .find(|sprite| sprite.id == id)
            .ok_or(SceneError::NotFound(id))
    }

    fn push(&mut self, sprite: Sprite) -> SpriteId {
        let id = sprite.id;
        self.index.insert(id, sprite.bounds());
        self.sprites.push(sprite);
        id
    }

    fn reindex(&mut self, id: SpriteId) {
        if let Some(bounds) = self.get(id).map(Sprite::bounds) {
            self.index.update(id, bounds);
        }
    }

    // ========================================================================
    // Create / Duplicate / Remove
    // ========================================================================

    /// Place a new sprite with the default size and color on top of the scene.
    pub fn create(&mut self, name: impl Into<String>, x: f32, y: f32) -> SpriteId {
        let sprite = Sprite::new(
            name.into(),
            (x, y),
            self.config.default_size,
            self.config.default_color,
        );
        debug!(sprite = %sprite.id, name = %sprite.name, x, y, "Sprite created");
        self.push(sprite)
    }

    /// Copy a sprite, offset by the configured delta. The texture is shared.
    pub fn duplicate(&mut self, id: SpriteId) -> SceneResult<SpriteId> {
        let source = self.get(id).ok_or(SceneError::NotFound(id))?;
        let position = (
            source.position.0 + self.config.duplicate_offset.0,
            source.position.1 + self.config.duplicate_offset.1,
        );
        self.duplicate_at(id, position.0, position.1)
    }

    /// Copy a sprite and place the copy's top-left corner at (x, y).
    pub fn duplicate_at(&mut self, id: SpriteId, x: f32, y: f32) -> SceneResult<SpriteId> {
        let source = self.get(id).ok_or(SceneError::NotFound(id))?;
        let name = format!("{}{}", source.name, self.config.copy_suffix);
        let copy = source.duplicate(name, (x, y));
        debug!(source = %id, copy = %copy.id, x, y, "Sprite duplicated");
        Ok(self.push(copy))
    }

    /// Remove a sprite. Clears the selection if it pointed at this sprite.
    pub fn remove(&mut self, id: SpriteId) -> SceneResult<()> {
        let pos = self.position_of(id).ok_or(SceneError::NotFound(id))?;
        self.sprites.remove(pos);
        self.index.remove(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(sprite = %id, "Sprite removed");
        Ok(())
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selected(&self) -> Option<SpriteId> {
        self.selected
    }

    pub fn selected_sprite(&self) -> Option<&Sprite> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn select(&mut self, id: SpriteId) -> SceneResult<()> {
        if !self.contains(id) {
            return Err(SceneError::NotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ========================================================================
    // Hit Testing
    // ========================================================================

    /// The topmost sprite whose box contains (x, y). Edges count as inside.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<SpriteId> {
        profile_scope!("hit_test");

        let candidates: HashSet<SpriteId> = self.index.query_point(x, y).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }

        self.sprites
            .iter()
            .rev()
            .find(|sprite| candidates.contains(&sprite.id))
            .map(|sprite| sprite.id)
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Apply one inspector edit. On a validation error nothing changes.
    pub fn set_property(&mut self, id: SpriteId, property: SpriteProperty) -> SceneResult<()> {
        if !self.contains(id) {
            return Err(SceneError::NotFound(id));
        }

        match property {
            SpriteProperty::Name(name) => {
                self.sprite_mut(id)?.name = name;
            }
            SpriteProperty::X(value) => {
                let x = parse_coordinate("x", &value)?;
                let y = self.sprite_mut(id)?.position.1;
                self.move_to(id, x, y)?;
            }
            SpriteProperty::Y(value) => {
                let y = parse_coordinate("y", &value)?;
                let x = self.sprite_mut(id)?.position.0;
                self.move_to(id, x, y)?;
            }
            SpriteProperty::Width(value) => {
                let width = parse_extent("width", &value)?;
                let height = self.sprite_mut(id)?.size.1;
                self.resize(id, width, height)?;
            }
            SpriteProperty::Height(value) => {
                let height = parse_extent("height", &value)?;
                let width = self.sprite_mut(id)?.size.0;
                self.resize(id, width, height)?;
            }
            SpriteProperty::Color(value) => {
                let color = Color::parse(&value).ok_or_else(|| SceneError::validation("color", value))?;
                self.sprite_mut(id)?.color = color;
            }
            SpriteProperty::Draggable(draggable) => {
                let sprite = self.sprite_mut(id)?;
                sprite.draggable = draggable;
                if !draggable {
                    sprite.is_dragging = false;
                }
            }
        }

        Ok(())
    }

    /// Move a sprite's top-left corner.
    pub fn move_to(&mut self, id: SpriteId, x: f32, y: f32) -> SceneResult<()> {
        self.sprite_mut(id)?.position = (x, y);
        self.reindex(id);
        Ok(())
    }

    /// Change a sprite's size. A loaded texture is rescaled to match.
    pub fn resize(&mut self, id: SpriteId, width: f32, height: f32) -> SceneResult<()> {
        let sprite = self.sprite_mut(id)?;
        sprite.size = (width, height);
        let (w, h) = sprite.pixel_size();
        if let Some(texture) = sprite.texture.take() {
            sprite.texture = Some(texture.rescaled(w, h));
        }
        self.reindex(id);
        Ok(())
    }

    // ========================================================================
    // Images
    // ========================================================================

    /// Decode `path`, resize it to the sprite's box, and replace any prior
    /// texture. On failure the old texture stays.
    pub fn load_image(&mut self, id: SpriteId, path: &Path, loader: &dyn ImageLoader) -> SceneResult<()> {
        let (width, height) = self.get(id).ok_or(SceneError::NotFound(id))?.pixel_size();

        let image = loader.load(path).map_err(|source| SceneError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;

        let texture = Texture::from_image(path, &image, width, height);
        self.sprite_mut(id)?.texture = Some(texture);
        debug!(sprite = %id, path = %path.display(), width, height, "Texture loaded");
        Ok(())
    }

    // ========================================================================
    // Scripts
    // ========================================================================

    pub fn script(&self, id: SpriteId) -> SceneResult<Option<&str>> {
        self.get(id)
            .map(|sprite| sprite.script.as_deref())
            .ok_or(SceneError::NotFound(id))
    }

    /// Store script text verbatim.
    pub fn set_script(&mut self, id: SpriteId, text: impl Into<String>) -> SceneResult<()> {
        self.sprite_mut(id)?.script = Some(text.into());
        Ok(())
    }

    // ========================================================================
    // Dragging
    // ========================================================================

    /// Mark a sprite as dragging and return the pointer-to-origin offset.
    /// Returns `Ok(None)` if the sprite is not draggable.
    pub fn begin_drag(&mut self, id: SpriteId, pointer: (f32, f32)) -> SceneResult<Option<(f32, f32)>> {
        let sprite = self.sprite_mut(id)?;
        if !sprite.draggable {
            return Ok(None);
        }
        let offset = (pointer.0 - sprite.position.0, pointer.1 - sprite.position.1);
        sprite.is_dragging = true;
        sprite.drag_offset = offset;
        Ok(Some(offset))
    }

    /// Follow the pointer, keeping the captured offset. No-op unless dragging.
    pub fn drag_to(&mut self, id: SpriteId, pointer: (f32, f32)) -> SceneResult<()> {
        let sprite = self.sprite_mut(id)?;
        if !sprite.is_dragging {
            return Ok(());
        }
        sprite.position = (pointer.0 - sprite.drag_offset.0, pointer.1 - sprite.drag_offset.1);
        self.reindex(id);
        Ok(())
    }

    pub fn end_drag(&mut self, id: SpriteId) -> SceneResult<()> {
        self.sprite_mut(id)?.is_dragging = false;
        Ok(())
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// One command per sprite, bottom first.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        self.sprites
            .iter()
            .map(|sprite| match &sprite.texture {
                Some(texture) => DrawCommand::Image {
                    sprite: sprite.id,
                    bounds: sprite.bounds(),
                    texture: texture.clone(),
                },
                None => DrawCommand::FillRect {
                    sprite: sprite.id,
                    bounds: sprite.bounds(),
                    color: sprite.color,
                },
            })
            .collect()
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> SceneResult<f32> {
    match value.trim().parse::<i32>() {
        Ok(v) if v.unsigned_abs() <= MAX_COORDINATE.unsigned_abs() => Ok(v as f32),
        _ => Err(SceneError::validation(field, value)),
    }
}

fn parse_extent(field: &'static str, value: &str) -> SceneResult<f32> {
    match value.trim().parse::<u32>() {
        Ok(v) if (1..=MAX_SPRITE_EXTENT).contains(&v) => Ok(v as f32),
        _ => Err(SceneError::validation(field, value)),
    }
}
