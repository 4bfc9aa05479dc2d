//! Spritedesk - scene model and interaction controller for a sprite editor.
//!
//! The host UI owns windows, dialogs and painting. This crate owns the
//! sprites, the selection, the drag state machine and the redraw cadence,
//! and talks to the host through [`render::DrawSurface`],
//! [`image_loader::ImageLoader`] and plain view structs.

pub mod app;
pub mod constants;
pub mod error;
pub mod frame_loop;
pub mod image_loader;
pub mod input;
pub mod notifications;
pub mod perf;
pub mod render;
pub mod scene;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod types;

pub use app::Editor;
pub use error::{SceneError, SceneResult};
pub use scene::{Scene, SceneConfig};
pub use types::{Color, Sprite, SpriteId, SpriteProperty};
