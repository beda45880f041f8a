//! 2D affine transforms and rotation of grid point sets.
//!
//! Rotation works in continuous space and snaps back to the grid with
//! round-half-away-from-zero (`f64::round`). Rounding collisions collapse
//! because the result is a set; nothing is clipped to the canvas here.

use std::f64::consts::PI;

use crate::scene::{Point, PointSet};

/// A 2D affine transformation matrix.
///
/// Stored as a 3x2 matrix (the bottom row [0, 0, 1] is implicit):
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub fn identity() -> Self {
        Self::translate(0.0, 0.0)
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx,
            ty,
        }
    }

    /// Rotation matrix `[[cos, -sin], [sin, cos]]`.
    pub fn rotate(angle_rad: f64) -> Self {
        let cos = angle_rad.cos();
        let sin = angle_rad.sin();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn rotate_deg(angle_deg: f64) -> Self {
        Self::rotate(angle_deg * PI / 180.0)
    }

    /// Compose this transform with another (this * other).
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn then(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Apply this transform about `pivot` instead of the origin.
    pub fn about(&self, pivot: Point) -> Self {
        let (px, py) = (pivot.x as f64, pivot.y as f64);
        Self::translate(px, py)
            .then(self)
            .then(&Self::translate(-px, -py))
    }

    pub fn apply_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    /// Map a grid cell and snap it back to the grid.
    pub fn apply_cell(&self, p: Point) -> Point {
        let (x, y) = self.apply_point(p.x as f64, p.y as f64);
        Point::new(x.round() as i32, y.round() as i32)
    }

    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.a - 1.0).abs() < epsilon
            && self.b.abs() < epsilon
            && self.c.abs() < epsilon
            && (self.d - 1.0).abs() < epsilon
            && self.tx.abs() < epsilon
            && self.ty.abs() < epsilon
    }
}

/// Rotate `points` about `pivot` by `degrees`.
///
/// Multiples of 360 return the input untouched.
pub fn rotate_points(points: PointSet, pivot: Point, degrees: i32) -> PointSet {
    if degrees.rem_euclid(360) == 0 {
        return points;
    }
    let t = Transform2D::rotate_deg(degrees as f64).about(pivot);
    points.into_iter().map(|p| t.apply_cell(p)).collect()
}
