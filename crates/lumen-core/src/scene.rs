use serde::{Deserialize, Serialize};

/// A single grid cell, y-down, origin at the top-left of the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Deduplicated collection of grid cells. Draw order is irrelevant because
/// drawables never blend.
pub type PointSet = hashbrown::HashSet<Point>;

/// Extent of the pixel grid a drawable is laid out against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub width: u32,
    pub height: u32,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
        }
    }
}

impl GridBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Every cell of the grid, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
