//! Application-wide constants.
//!
//! These are the defaults behind [`Settings`](crate::settings::Settings);
//! anything a user may want to change is read from settings at runtime.

// ============================================================================
// Sprite Defaults
// ============================================================================

/// Default sprite size in canvas units
pub const DEFAULT_SPRITE_SIZE: (u32, u32) = (50, 50);

/// Default sprite fill color
pub const DEFAULT_SPRITE_COLOR: &str = "#ffffff";

/// Offset applied to a duplicate relative to its source
pub const DUPLICATE_OFFSET: (i32, i32) = (20, 20);

/// Largest accepted sprite width or height. Textures are sized to the
/// sprite, so this also caps texture allocations.
pub const MAX_SPRITE_EXTENT: u32 = 8192;

/// Largest accepted coordinate magnitude; beyond 2^24 an `f32` can no
/// longer hold every integer.
pub const MAX_COORDINATE: i32 = 1 << 24;

/// Suffix appended to the name of a duplicated sprite
pub const COPY_SUFFIX: &str = "_copy";

/// Name, position and color of the sprite placed in a fresh scene
pub const DEMO_SPRITE_NAME: &str = "TestObject";
pub const DEMO_SPRITE_POSITION: (f32, f32) = (100.0, 100.0);
pub const DEMO_SPRITE_COLOR: &str = "#3498db";

// ============================================================================
// Layout
// ============================================================================

/// Width of the outline sidebar left of the canvas
pub const SIDEBAR_WIDTH: u32 = 200;

/// Canvas size
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

// ============================================================================
// Timing
// ============================================================================

/// Target redraw rate
pub const DEFAULT_FPS: u32 = 60;

/// Lowest and highest accepted redraw rates
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

// ============================================================================
// Script Editor
// ============================================================================

/// Title prefix for the script editor window
pub const SCRIPT_EDITOR_TITLE: &str = "Script Editor";
