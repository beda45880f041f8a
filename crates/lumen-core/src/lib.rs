//! lumen-core: grid primitives shared by the rasterizer, text and animation layers.
//!
//! Everything here works in integer pixel coordinates on a small LED-style grid:
//! - [`Point`] / [`PointSet`]: grid cells and deduplicated collections of them
//! - [`Rgb`]: 8-bit color triple, with hex / CSS-name parsing
//! - [`Canvas`]: the pixel sink every drawable writes into, and [`FrameBuffer`],
//!   an in-memory implementation
//! - [`Transform2D`] and [`rotate_points`]: rotation of point sets about a pivot

mod canvas;
mod color;
mod error;
mod scene;
mod transform;

pub use canvas::{Canvas, FrameBuffer};
pub use color::Rgb;
pub use error::{DrawError, Result};
pub use scene::{GridBounds, Point, PointSet};
pub use transform::{Transform2D, rotate_points};
