//! Background image metadata.
//!
//! Only the pixel size is needed by the core: it defines world-pixel space
//! and the camera starts centered on the image's midpoint.

use crate::types::Vec2;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl BackgroundImage {
    /// Read the image header for its dimensions without decoding pixels.
    pub fn probe(path: impl AsRef<Path>) -> Result<Self, image::ImageError> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)?;
        tracing::info!(?path, width, height, "background image");
        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
        })
    }

    /// World point at the middle of the image.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
