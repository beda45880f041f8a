//! Point-set rasterization of the primitive shapes.
//!
//! Every function returns `(fill, stroke)` in unrotated grid space; rotation
//! and color gating are applied by [`Primitive`](crate::Primitive). Ellipses and
//! triangles are evaluated over every cell of the grid rather than the shape's
//! bounding box, so cells outside the grid never appear in their sets.

use lumen_core::{GridBounds, Point, PointSet};

use crate::shapes::ShapeStyle;

/// Slack added to the implicit ellipse inequality so coarse grids don't show
/// broken outlines.
pub const ELLIPSE_TOLERANCE: f64 = 0.05;

/// Half-cell band that decides whether a cell straddling a triangle edge
/// belongs to the stroke.
pub const TRIANGLE_TOLERANCE: f64 = 0.5;

/// Float guard for cells lying exactly on a hypotenuse boundary.
pub const HYPOTENUSE_EPSILON: f64 = 1e-9;

/// Rectangle: fill is inset by the stroke weight on every side; the stroke is
/// full-width top/bottom bands plus left/right bands over the remaining rows.
pub fn rect_points(style: &ShapeStyle) -> (PointSet, PointSet) {
    let Point { x, y } = style.anchor;
    let (w, h, sw) = (style.width, style.height, style.stroke_weight);

    let fill = (y + sw..y + h - sw)
        .flat_map(|py| (x + sw..x + w - sw).map(move |px| Point::new(px, py)))
        .collect();

    let mut stroke = PointSet::new();
    for band in 0..sw {
        for px in x..x + w {
            stroke.insert(Point::new(px, y + band));
            stroke.insert(Point::new(px, y + h - 1 - band));
        }
    }
    // Side bands never reach past the box on narrow rects.
    for band in 0..sw.min(w) {
        for py in y + sw..y + h - sw {
            stroke.insert(Point::new(x + band, py));
            stroke.insert(Point::new(x + w - 1 - band, py));
        }
    }
    (fill, stroke)
}

/// Ellipse inscribed in the style's bounding box.
///
/// The center sits on the middle of the box's cells, `(w - 1) / 2` from the
/// anchor, with semi-axes `w / 2` and `h / 2`. The inner (fill) ellipse shrinks
/// both semi-axes by the stroke weight; the stroke is outer minus inner.
pub fn ellipse_points(style: &ShapeStyle, bounds: GridBounds) -> (PointSet, PointSet) {
    let cx = style.anchor.x as f64 + (style.width - 1) as f64 / 2.0;
    let cy = style.anchor.y as f64 + (style.height - 1) as f64 / 2.0;
    let a = style.width as f64 / 2.0;
    let b = style.height as f64 / 2.0;
    let sw = style.stroke_weight as f64;

    let inside = |p: Point, a: f64, b: f64| {
        if a <= 0.0 || b <= 0.0 {
            return false;
        }
        let dx = (p.x as f64 - cx) / a;
        let dy = (p.y as f64 - cy) / b;
        dx * dx + dy * dy <= 1.0 + ELLIPSE_TOLERANCE
    };

    let mut fill = PointSet::new();
    let mut stroke = PointSet::new();
    for cell in bounds.cells() {
        if !inside(cell, a, b) {
            continue;
        }
        if inside(cell, a - sw, b - sw) {
            fill.insert(cell);
        } else {
            stroke.insert(cell);
        }
    }
    (fill, stroke)
}

/// Right triangle with the right angle at the bottom-left of its bounding box;
/// the hypotenuse runs from the top-left to the bottom-right corner.
///
/// With `v = ly - slope * lx` in box-local coordinates (y down), the fill is
/// the intersection of three half-planes inset by the stroke weight. Each
/// stroke band reaches `stroke_weight - 1` cells in from its edge, widened by
/// the half-cell tolerance along the hypotenuse, and the three bands are
/// clipped to the outer triangle.
pub fn right_triangle_points(style: &ShapeStyle, bounds: GridBounds) -> (PointSet, PointSet) {
    let Point { x, y } = style.anchor;
    let slope = style.height as f64 / style.width as f64;
    let sw = style.stroke_weight;
    let outer_shift = sw - 1;
    let bottom = style.height - 1;

    let mut fill = PointSet::new();
    let mut stroke = PointSet::new();
    for cell in bounds.cells() {
        let (lx, ly) = (cell.x - x, cell.y - y);
        let v = ly as f64 - slope * lx as f64;

        let in_fill = v >= sw as f64 + HYPOTENUSE_EPSILON && lx >= sw && ly <= bottom - sw;
        if in_fill {
            fill.insert(cell);
            continue;
        }
        if sw == 0 {
            continue;
        }

        let in_outer = v >= -TRIANGLE_TOLERANCE && lx >= 0 && ly <= bottom;
        let on_hypotenuse = v <= outer_shift as f64 + TRIANGLE_TOLERANCE;
        let on_left = lx <= outer_shift;
        let on_bottom = ly >= bottom - outer_shift;
        if in_outer && (on_hypotenuse || on_left || on_bottom) {
            stroke.insert(cell);
        }
    }
    (fill, stroke)
}

/// Offset of the i-th stroke pass: 0, +1, -1, +2, -2, ...
fn widen_offset(pass: i32) -> i32 {
    if pass % 2 == 1 {
        (pass + 1) / 2
    } else {
        -(pass / 2)
    }
}

/// Thick line approximation: one cell per column (or per row for vertical
/// lines), repeated `weight` times with alternating offsets perpendicular to
/// the stepping axis. Steep lines leave gaps; that is the expected look.
pub fn line_points(start: Point, end: Point, weight: i32) -> PointSet {
    let mut points = PointSet::new();
    if start.x == end.x {
        for py in start.y.min(end.y)..=start.y.max(end.y) {
            for pass in 0..weight {
                points.insert(Point::new(start.x + widen_offset(pass), py));
            }
        }
        return points;
    }

    let slope = (end.y - start.y) as f64 / (end.x - start.x) as f64;
    for px in start.x.min(end.x)..=start.x.max(end.x) {
        let base = slope * (px - start.x) as f64 + start.y as f64;
        for pass in 0..weight {
            let py = (base + widen_offset(pass) as f64).round() as i32;
            points.insert(Point::new(px, py));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Rgb;

    const GRID: GridBounds = GridBounds::new(64, 32);

    fn style(x: i32, y: i32, w: i32, h: i32, sw: i32) -> ShapeStyle {
        ShapeStyle::new(Point::new(x, y), w, h).with_stroke(Rgb::WHITE, sw)
    }

    #[test]
    fn widen_offsets_alternate() {
        let offsets: Vec<i32> = (0..5).map(widen_offset).collect();
        assert_eq!(offsets, vec![0, 1, -1, 2, -2]);
    }

    #[test]
    fn rect_without_stroke_is_all_fill() {
        let (fill, stroke) = rect_points(&style(2, 3, 5, 4, 0));
        assert_eq!(fill.len(), 20);
        assert!(stroke.is_empty());
    }

    #[test]
    fn rect_stroke_bands_do_not_double_count_corners() {
        let (fill, stroke) = rect_points(&style(0, 0, 4, 4, 1));
        assert_eq!(stroke.len(), 12);
        assert_eq!(fill.len(), 4);
        assert!(fill.is_disjoint(&stroke));
    }

    #[test]
    fn narrow_rect_stroke_stays_inside_its_box() {
        let (fill, stroke) = rect_points(&style(10, 0, 1, 10, 3));
        assert!(fill.is_empty());
        assert_eq!(stroke.len(), 10);
        assert!(stroke.iter().all(|p| p.x == 10), "{stroke:?}");

        let (_, stroke) = rect_points(&style(4, 0, 2, 8, 3));
        assert_eq!(stroke.len(), 16);
        assert!(stroke.iter().all(|p| p.x == 4 || p.x == 5));
    }

    #[test]
    fn ellipse_sets_are_disjoint_and_inside_box() {
        let s = style(10, 5, 12, 8, 2);
        let (fill, stroke) = ellipse_points(&s, GRID);
        assert!(!fill.is_empty());
        assert!(!stroke.is_empty());
        assert!(fill.is_disjoint(&stroke));
        for p in fill.iter().chain(stroke.iter()) {
            assert!(p.x >= 10 && p.x < 22 && p.y >= 5 && p.y < 13, "{p:?} outside box");
        }
    }

    #[test]
    fn ellipse_touches_box_midpoints() {
        let (fill, stroke) = ellipse_points(&style(0, 0, 9, 9, 1), GRID);
        for p in [Point::new(4, 0), Point::new(0, 4), Point::new(8, 4), Point::new(4, 8)] {
            assert!(stroke.contains(&p), "{p:?} missing from outline");
        }
        assert!(fill.contains(&Point::new(4, 4)));
        // Corners stay outside.
        assert!(!stroke.contains(&Point::new(0, 0)));
    }

    #[test]
    fn ellipse_is_clipped_to_grid() {
        let (fill, stroke) = ellipse_points(&style(-4, -4, 8, 8, 0), GRID);
        assert!(fill.iter().all(|p| GRID.contains(*p)));
        assert!(stroke.is_empty());
        assert!(!fill.is_empty());
    }

    #[test]
    fn triangle_without_stroke_fills_below_the_hypotenuse() {
        let (fill, stroke) = right_triangle_points(&style(0, 0, 4, 4, 0), GRID);
        // Cells on the diagonal itself sit exactly on the hypotenuse.
        assert_eq!(fill.len(), 6);
        assert!(stroke.is_empty());
        assert!(fill.contains(&Point::new(0, 3)));
        assert!(fill.contains(&Point::new(0, 1)));
        assert!(!fill.contains(&Point::new(0, 0)));
        assert!(!fill.contains(&Point::new(3, 3)));
        assert!(!fill.contains(&Point::new(3, 0)));
    }

    #[test]
    fn triangle_single_stroke_outlines_all_three_edges() {
        let (fill, stroke) = right_triangle_points(&style(0, 0, 4, 4, 1), GRID);
        assert!(fill.is_empty());
        let left = (0..4).map(|y| Point::new(0, y));
        let bottom = (1..4).map(|x| Point::new(x, 3));
        let diagonal = [Point::new(1, 1), Point::new(2, 2)];
        let expected: PointSet = left.chain(bottom).chain(diagonal).collect();
        assert_eq!(stroke, expected);
    }

    #[test]
    fn triangle_fill_stays_inside_the_inset_hypotenuse() {
        let sw = 2;
        let (fill, stroke) = right_triangle_points(&style(0, 0, 8, 8, sw), GRID);
        assert_eq!(fill, [Point::new(2, 5)].into_iter().collect::<PointSet>());
        for p in &fill {
            let v = (p.y - p.x) as f64;
            assert!(v >= sw as f64 + HYPOTENUSE_EPSILON, "{p:?} crosses the hypotenuse band");
        }
        assert!(fill.is_disjoint(&stroke));
        // Two-cell bands along the left and bottom edges.
        assert!(stroke.contains(&Point::new(1, 4)));
        assert!(stroke.contains(&Point::new(4, 6)));
        // Hypotenuse band covers v in [-0.5, 1.5].
        assert!(stroke.contains(&Point::new(4, 5)));
        assert!(!stroke.contains(&Point::new(5, 4)));
    }

    #[test]
    fn horizontal_line_widens_both_sides() {
        let pts = line_points(Point::new(0, 5), Point::new(4, 5), 3);
        assert_eq!(pts.len(), 15);
        for y in [4, 5, 6] {
            assert!(pts.contains(&Point::new(2, y)));
        }
    }

    #[test]
    fn vertical_line_takes_explicit_branch() {
        let pts = line_points(Point::new(3, 6), Point::new(3, 2), 2);
        assert_eq!(pts.len(), 10);
        assert!(pts.contains(&Point::new(4, 2)));
        assert!(!pts.contains(&Point::new(2, 2)));
    }

    #[test]
    fn diagonal_line_single_weight() {
        let pts = line_points(Point::new(0, 0), Point::new(3, 3), 1);
        let expected: PointSet = (0..4).map(|i| Point::new(i, i)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn degenerate_line_is_single_cell() {
        let pts = line_points(Point::new(7, 7), Point::new(7, 7), 1);
        assert_eq!(pts.len(), 1);
    }
}
