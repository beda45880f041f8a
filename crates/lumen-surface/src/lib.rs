//! lumen-surface: drawables that sit directly on the pixel grid.
//!
//! Shapes compute their fill and stroke point sets once, when constructed or
//! when a parameter changes, and replay them into the canvas on every draw.

mod icon;
mod raster;
pub mod shapes;
mod text;

pub use icon::Icon;
pub use raster::{
    ELLIPSE_TOLERANCE, HYPOTENUSE_EPSILON, TRIANGLE_TOLERANCE, ellipse_points, line_points,
    rect_points, right_triangle_points,
};
pub use shapes::{Line, Primitive, PrimitiveKind, Shape, ShapeStyle};
pub use text::TextRun;
