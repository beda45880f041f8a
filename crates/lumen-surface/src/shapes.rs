use lumen_core::{Canvas, DrawError, GridBounds, Point, PointSet, Result, Rgb, rotate_points};

use crate::raster::{ellipse_points, line_points, rect_points, right_triangle_points};

/// Anything that paints a cached fill set and stroke set.
pub trait Shape {
    fn fill_points(&self) -> &PointSet;
    fn stroke_points(&self) -> &PointSet;
    fn fill_color(&self) -> Option<Rgb>;
    fn stroke_color(&self) -> Option<Rgb>;

    /// Push the cached point sets into the canvas. No blending; the two sets
    /// are disjoint so paint order does not matter.
    fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(color) = self.fill_color() {
            for p in self.fill_points() {
                canvas.set_pixel(p.x, p.y, color);
            }
        }
        if let Some(color) = self.stroke_color() {
            for p in self.stroke_points() {
                canvas.set_pixel(p.x, p.y, color);
            }
        }
    }
}

/// Geometry and paint shared by every filled primitive.
///
/// The stroke is applied inside `width` x `height`.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    /// Top-left corner of the bounding box; also the rotation pivot.
    pub anchor: Point,
    pub width: i32,
    pub height: i32,
    pub fill: Option<Rgb>,
    pub stroke: Option<Rgb>,
    pub stroke_weight: i32,
    pub rotation: i32,
}

impl ShapeStyle {
    /// White fill, no stroke, no rotation.
    pub fn new(anchor: Point, width: i32, height: i32) -> Self {
        Self {
            anchor,
            width,
            height,
            fill: Some(Rgb::WHITE),
            stroke: None,
            stroke_weight: 0,
            rotation: 0,
        }
    }

    pub fn with_fill(mut self, fill: Option<Rgb>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, color: Rgb, weight: i32) -> Self {
        self.stroke = Some(color);
        self.stroke_weight = weight;
        self
    }

    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Check construction invariants and zero the stroke weight when there is
    /// no stroke color.
    pub fn validated(mut self) -> Result<Self> {
        if self.width <= 0 || self.height <= 0 {
            return Err(DrawError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.stroke.is_none() {
            self.stroke_weight = 0;
        }
        if self.stroke_weight < 0 {
            return Err(DrawError::NegativeStroke(self.stroke_weight));
        }
        let max = self.height / 2;
        if self.stroke_weight > max {
            return Err(DrawError::StrokeTooWide {
                weight: self.stroke_weight,
                max,
            });
        }
        Ok(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Rect,
    Ellipse,
    RightTriangle,
}

/// A filled shape with cached, rotated point sets.
#[derive(Clone, Debug)]
pub struct Primitive {
    kind: PrimitiveKind,
    style: ShapeStyle,
    bounds: GridBounds,
    fill_points: PointSet,
    stroke_points: PointSet,
}

impl Primitive {
    /// Validate `style` and rasterize against a grid of `bounds`.
    pub fn new(kind: PrimitiveKind, style: ShapeStyle, bounds: GridBounds) -> Result<Self> {
        let mut shape = Self {
            kind,
            style: style.validated()?,
            bounds,
            fill_points: PointSet::new(),
            stroke_points: PointSet::new(),
        };
        shape.rasterize();
        Ok(shape)
    }

    pub fn rect(style: ShapeStyle, bounds: GridBounds) -> Result<Self> {
        Self::new(PrimitiveKind::Rect, style, bounds)
    }

    pub fn ellipse(style: ShapeStyle, bounds: GridBounds) -> Result<Self> {
        Self::new(PrimitiveKind::Ellipse, style, bounds)
    }

    pub fn right_triangle(style: ShapeStyle, bounds: GridBounds) -> Result<Self> {
        Self::new(PrimitiveKind::RightTriangle, style, bounds)
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.style.anchor = anchor;
        self.rasterize();
    }

    pub fn set_rotation(&mut self, degrees: i32) {
        self.style.rotation = degrees;
        self.rasterize();
    }

    pub fn set_colors(&mut self, fill: Option<Rgb>, stroke: Option<(Rgb, i32)>) -> Result<()> {
        let mut style = self.style.clone();
        style.fill = fill;
        style.stroke = stroke.map(|(c, _)| c);
        style.stroke_weight = stroke.map_or(0, |(_, w)| w);
        self.style = style.validated()?;
        self.rasterize();
        Ok(())
    }

    pub fn set_bounds(&mut self, bounds: GridBounds) {
        self.bounds = bounds;
        self.rasterize();
    }

    fn rasterize(&mut self) {
        let (fill, stroke) = match self.kind {
            PrimitiveKind::Rect => rect_points(&self.style),
            PrimitiveKind::Ellipse => ellipse_points(&self.style, self.bounds),
            PrimitiveKind::RightTriangle => right_triangle_points(&self.style, self.bounds),
        };
        let pivot = self.style.anchor;
        let degrees = self.style.rotation;

        self.stroke_points = if self.style.stroke.is_some() {
            rotate_points(stroke, pivot, degrees)
        } else {
            PointSet::new()
        };
        self.fill_points = if self.style.fill.is_some() {
            // Rounding after rotation can land a fill cell on a stroke cell.
            let mut fill = rotate_points(fill, pivot, degrees);
            fill.retain(|p| !self.stroke_points.contains(p));
            fill
        } else {
            PointSet::new()
        };

        tracing::debug!(
            kind = ?self.kind,
            fill = self.fill_points.len(),
            stroke = self.stroke_points.len(),
            rotation = degrees,
            "rasterized primitive"
        );
    }
}

impl Shape for Primitive {
    fn fill_points(&self) -> &PointSet {
        &self.fill_points
    }

    fn stroke_points(&self) -> &PointSet {
        &self.stroke_points
    }

    fn fill_color(&self) -> Option<Rgb> {
        self.style.fill
    }

    fn stroke_color(&self) -> Option<Rgb> {
        self.style.stroke
    }
}

/// Straight line; stroke only.
#[derive(Clone, Debug)]
pub struct Line {
    start: Point,
    end: Point,
    color: Rgb,
    weight: i32,
    points: PointSet,
    empty: PointSet,
}

impl Line {
    pub fn new(start: Point, end: Point, color: Rgb, weight: i32) -> Result<Self> {
        if weight < 1 {
            return Err(DrawError::InvalidLineWeight(weight));
        }
        let points = line_points(start, end, weight);
        tracing::debug!(?start, ?end, weight, points = points.len(), "rasterized line");
        Ok(Self {
            start,
            end,
            color,
            weight,
            points,
            empty: PointSet::new(),
        })
    }

    pub fn endpoints(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn set_endpoints(&mut self, start: Point, end: Point) {
        self.start = start;
        self.end = end;
        self.points = line_points(start, end, self.weight);
    }
}

impl Shape for Line {
    fn fill_points(&self) -> &PointSet {
        &self.empty
    }

    fn stroke_points(&self) -> &PointSet {
        &self.points
    }

    fn fill_color(&self) -> Option<Rgb> {
        None
    }

    fn stroke_color(&self) -> Option<Rgb> {
        Some(self.color)
    }
}
