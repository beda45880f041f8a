use std::path::Path;

use image::RgbImage;
use lumen_core::{Canvas, DrawError, Point, Result};

/// A raster image copied onto the grid at a fixed top-left anchor.
#[derive(Clone, Debug)]
pub struct Icon {
    anchor: Point,
    image: RgbImage,
}

impl Icon {
    pub fn new(anchor: Point, image: RgbImage) -> Self {
        Self { anchor, image }
    }

    /// Decode any format `image` supports; alpha is discarded.
    pub fn from_path(anchor: Point, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|e| DrawError::Image(format!("{}: {e}", path.display())))?
            .to_rgb8();
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "loaded icon"
        );
        Ok(Self::new(anchor, image))
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.blit_image(&self.image, self.anchor.x, self.anchor.y);
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
