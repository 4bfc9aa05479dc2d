//! Core types for the sprite scene.
//!
//! Sprites, their identities and visual attributes, plus the tagged union of
//! editable properties used by the inspector.

use crate::constants::MAX_SPRITE_EXTENT;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Identity
// ============================================================================

/// Process-unique sprite identity. Minted once, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteId(Uuid);

impl SpriteId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Axis-aligned box in canvas units. Edges are inclusive for hit-testing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            x: position.0,
            y: position.1,
            width: size.0,
            height: size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

// ============================================================================
// Color
// ============================================================================

/// Opaque RGB fill color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color string: `#rrggbb` hex or one of a few color names.
    pub fn parse(value: &str) -> Option<Color> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        match value.to_ascii_lowercase().as_str() {
            "white" => Some(Self::WHITE),
            "black" => Some(Self::BLACK),
            "red" => Some(Self::rgb(0xff, 0x00, 0x00)),
            "green" => Some(Self::rgb(0x00, 0x80, 0x00)),
            "blue" => Some(Self::rgb(0x00, 0x00, 0xff)),
            "yellow" => Some(Self::rgb(0xff, 0xff, 0x00)),
            "gray" | "grey" => Some(Self::rgb(0x80, 0x80, 0x80)),
            _ => None,
        }
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Texture
// ============================================================================

/// Decoded pixels sized to a sprite's box.
///
/// Cloning is cheap: the pixel buffer is shared, so duplicates of a sprite
/// alias the same image. Pixel data is never mutated in place.
#[derive(Clone, Debug)]
pub struct Texture {
    path: PathBuf,
    pixels: Arc<RgbaImage>,
}

impl Texture {
    /// Resize a decoded image to `width` x `height` and wrap it for sharing.
    pub fn from_image(path: impl Into<PathBuf>, image: &DynamicImage, width: u32, height: u32) -> Self {
        let pixels = image
            .resize_exact(clamp_extent(width), clamp_extent(height), FilterType::Triangle)
            .to_rgba8();
        Self {
            path: path.into(),
            pixels: Arc::new(pixels),
        }
    }

    /// A new buffer holding these pixels scaled to a new size. Other holders
    /// of the current buffer keep it unchanged.
    pub fn rescaled(&self, width: u32, height: u32) -> Self {
        let pixels = image::imageops::resize(
            self.pixels.as_ref(),
            clamp_extent(width),
            clamp_extent(height),
            FilterType::Triangle,
        );
        Self {
            path: self.path.clone(),
            pixels: Arc::new(pixels),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pixels(&self) -> &Arc<RgbaImage> {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// True when both textures point at the same pixel buffer
    pub fn shares_pixels(&self, other: &Texture) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

fn clamp_extent(extent: u32) -> u32 {
    extent.clamp(1, MAX_SPRITE_EXTENT)
}

impl Serialize for Texture {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.path.serialize(serializer)
    }
}

// ============================================================================
// Sprite
// ============================================================================

/// A positioned, sized, colored (or image-backed) rectangle with optional
/// script text.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub id: SpriteId,
    pub name: String,
    /// Top-left corner in canvas units
    pub position: (f32, f32),
    pub size: (f32, f32),
    /// Fill used when no texture is loaded
    pub color: Color,
    pub texture: Option<Texture>,
    pub draggable: bool,
    /// Opaque text, stored verbatim and never interpreted
    pub script: Option<String>,
    pub is_dragging: bool,
    /// Pointer-to-origin offset captured when a drag starts
    pub drag_offset: (f32, f32),
}

impl Sprite {
    pub(crate) fn new(name: String, position: (f32, f32), size: (f32, f32), color: Color) -> Self {
        Self {
            id: SpriteId::new(),
            name,
            position,
            size,
            color,
            texture: None,
            draggable: true,
            script: None,
            is_dragging: false,
            drag_offset: (0.0, 0.0),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.bounds().contains_point(x, y)
    }

    pub fn has_script(&self) -> bool {
        self.script.is_some()
    }

    /// Copy with a fresh identity at `position`; drag state is not carried over.
    pub(crate) fn duplicate(&self, name: String, position: (f32, f32)) -> Self {
        Self {
            id: SpriteId::new(),
            name,
            position,
            size: self.size,
            color: self.color,
            texture: self.texture.clone(),
            draggable: self.draggable,
            script: self.script.clone(),
            is_dragging: false,
            drag_offset: (0.0, 0.0),
        }
    }

    /// Pixel dimensions of the sprite's box, capped at the largest texture
    /// size the editor will allocate.
    pub(crate) fn pixel_size(&self) -> (u32, u32) {
        let max = MAX_SPRITE_EXTENT as f32;
        (
            self.size.0.round().clamp(1.0, max) as u32,
            self.size.1.round().clamp(1.0, max) as u32,
        )
    }
}

// ============================================================================
// Editable Properties
// ============================================================================

/// A single inspector edit. Numeric fields carry the raw text the user typed;
/// the scene validates it.
#[derive(Clone, Debug, PartialEq)]
pub enum SpriteProperty {
    Name(String),
    X(String),
    Y(String),
    Width(String),
    Height(String),
    Color(String),
    Draggable(bool),
}

impl SpriteProperty {
    pub fn field_name(&self) -> &'static str {
        match self {
            SpriteProperty::Name(_) => "name",
            SpriteProperty::X(_) => "x",
            SpriteProperty::Y(_) => "y",
            SpriteProperty::Width(_) => "width",
            SpriteProperty::Height(_) => "height",
            SpriteProperty::Color(_) => "color",
            SpriteProperty::Draggable(_) => "draggable",
        }
    }
}
