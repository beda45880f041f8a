use image::RgbImage;

use crate::color::Rgb;
use crate::scene::{GridBounds, Point, PointSet};

/// Pixel sink shared by every drawable within one frame.
///
/// Coordinates outside the grid must be ignored silently; rasterizers do not
/// pre-clip their point sets.
pub trait Canvas {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);

    /// Copy a bitmap with its top-left corner at `(x, y)`.
    fn blit_image(&mut self, image: &RgbImage, x: i32, y: i32) {
        for (ix, iy, px) in image.enumerate_pixels() {
            self.set_pixel(x + ix as i32, y + iy as i32, Rgb::from(*px));
        }
    }

    fn bounds(&self) -> GridBounds {
        GridBounds::new(self.width().max(0) as u32, self.height().max(0) as u32)
    }
}

/// In-memory canvas. Row-major, black when cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    bounds: GridBounds,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            pixels: vec![Rgb::BLACK; bounds.area()],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.bounds
            .contains(Point::new(x, y))
            .then(|| y as usize * self.bounds.width as usize + x as usize)
    }

    /// Color at `(x, y)`, or `None` off-grid.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// All cells that are not black.
    pub fn lit_points(&self) -> PointSet {
        self.bounds
            .cells()
            .filter(|p| self.pixel(p.x, p.y).is_some_and(|c| !c.is_black()))
            .collect()
    }

    /// Cells holding exactly `color`.
    pub fn points_with(&self, color: Rgb) -> PointSet {
        self.bounds
            .cells()
            .filter(|p| self.pixel(p.x, p.y) == Some(color))
            .collect()
    }

    /// Snapshot as an `image` buffer, e.g. for saving a PNG preview.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.bounds.width, self.bounds.height, |x, y| {
            self.pixels[y as usize * self.bounds.width as usize + x as usize].into()
        })
    }
}

impl Canvas for FrameBuffer {
    fn width(&self) -> i32 {
        self.bounds.width as i32
    }

    fn height(&self) -> i32 {
        self.bounds.height as i32
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn bounds(&self) -> GridBounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(GridBounds::new(4, 4));
        fb.set_pixel(-1, 0, Rgb::WHITE);
        fb.set_pixel(4, 4, Rgb::WHITE);
        fb.set_pixel(1, 2, Rgb::WHITE);
        assert_eq!(fb.lit_points().len(), 1);
        assert_eq!(fb.pixel(1, 2), Some(Rgb::WHITE));
        assert_eq!(fb.pixel(9, 9), None);
    }

    #[test]
    fn blit_clips_partially_visible_image() {
        let mut fb = FrameBuffer::new(GridBounds::new(4, 4));
        let img = RgbImage::from_pixel(3, 3, image::Rgb([10, 20, 30]));
        fb.blit_image(&img, 2, -1);
        // Columns 2..4, rows 0..2 survive.
        assert_eq!(fb.points_with(Rgb::rgb(10, 20, 30)).len(), 4);
    }

    #[test]
    fn clear_resets_to_black() {
        let mut fb = FrameBuffer::new(GridBounds::new(2, 2));
        fb.set_pixel(0, 0, Rgb::WHITE);
        fb.clear();
        assert!(fb.lit_points().is_empty());
        assert_eq!(fb.to_image().get_pixel(0, 0).0, [0, 0, 0]);
    }
}
