//! Error types for scene operations.
//!
//! Every fallible scene operation returns [`SceneResult`]. The editor
//! recovers all of these at its boundary; none of them is fatal.

use crate::types::SpriteId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while mutating the scene
#[derive(Error, Debug)]
pub enum SceneError {
    /// The identity no longer refers to a live sprite
    #[error("Sprite not found: {0}")]
    NotFound(SpriteId),

    /// The image at `path` is missing or could not be decoded
    #[error("Could not load image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A property edit carried a value the field cannot hold
    #[error("Invalid value for {field}: {value:?}")]
    Validation { field: &'static str, value: String },
}

/// Result type alias for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

impl SceneError {
    pub fn validation(field: &'static str, value: impl Into<String>) -> Self {
        SceneError::Validation {
            field,
            value: value.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SceneError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SceneError::Validation { .. })
    }

    pub fn is_image_decode(&self) -> bool {
        matches!(self, SceneError::ImageDecode { .. })
    }
}
