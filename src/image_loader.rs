//! Image decoding seam.
//!
//! The scene never touches the filesystem directly; it asks an
//! [`ImageLoader`] for decoded pixels and resizes them itself.

use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;

/// Image file extensions offered by open-file dialogs
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Decodes an image file into pixels.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, ImageError>;
}

/// Loads images from the local filesystem, guessing the format from content.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, ImageError> {
        tracing::debug!(path = %path.display(), "Decoding image");
        ImageReader::open(path)?.with_guessed_format()?.decode()
    }
}

/// Returns true if the path has an extension the file dialog would offer.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
