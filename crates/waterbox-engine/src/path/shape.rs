use core::f32::consts::{FRAC_PI_4, SQRT_2};

use crate::coords::{Affine, Rect, Vec2};

use super::Outline;

/// One face outline, described by the inputs that determine its geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathShape {
    /// Diamond whose diagonals equal `area.w` and `area.h`.
    Rhombus { area: Rect },
    /// Skewed side wall. `depth` is the height of the rhombus capping the prism;
    /// the wall spans `area.h - depth` vertically, starting `depth / 2` below
    /// `area.y`. Its left edge is shifted down by `left_offset`, its right edge by
    /// `right_offset`.
    Wall { area: Rect, depth: f32, left_offset: f32, right_offset: f32 },
    /// Open chevron marking a division level. `size` is in percent-like units:
    /// the arms reach `size / 200` of the area out from the apex.
    Separator { area: Rect, size: f32 },
}

// ── local shapes ──────────────────────────────────────────────────────────

/// Unit square corners, clockwise from the top-left.
const UNIT_SQUARE: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Chevron in apex-relative units: left arm, apex, right arm.
const CHEVRON: [Vec2; 3] = [
    Vec2::new(-1.0, 1.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 1.0),
];

impl PathShape {
    /// Transform from local shape coordinates into device pixels.
    pub fn transform(&self) -> Affine {
        match *self {
            PathShape::Rhombus { area } => {
                // A square of side `a` turned by 45° has diagonal `b = √2·a`;
                // scaling by `w/b`, `h/b` stretches those diagonals onto the area.
                let a = 0.5 * area.w.hypot(area.h);
                let b = SQRT_2 * a;
                if b == 0.0 {
                    return Affine::translate(area.x, area.y) * Affine::scale(0.0, 0.0);
                }
                let center = area.center();
                Affine::translate(center.x, center.y)
                    * Affine::scale(area.w / b, area.h / b)
                    * Affine::rotate(FRAC_PI_4)
                    * Affine::translate(-a / 2.0, -a / 2.0)
                    * Affine::scale(a, a)
            }
            PathShape::Wall { area, depth, left_offset, right_offset } => {
                let top = area.y + depth / 2.0;
                let height = area.h - depth;
                let skew = if area.w == 0.0 { 0.0 } else { (right_offset - left_offset) / area.w };
                Affine::translate(area.x, top + left_offset)
                    * Affine::skew_y(skew)
                    * Affine::scale(area.w, height)
            }
            PathShape::Separator { area, size } => {
                let s = size / 200.0;
                Affine::translate(area.x + area.w / 2.0, area.y) * Affine::scale(area.w * s, area.h * s)
            }
        }
    }

    fn local_points(&self) -> &'static [Vec2] {
        match self {
            PathShape::Rhombus { .. } | PathShape::Wall { .. } => &UNIT_SQUARE,
            PathShape::Separator { .. } => &CHEVRON,
        }
    }

    /// Faces are closed; separators are open polylines.
    pub fn is_closed(&self) -> bool {
        !matches!(self, PathShape::Separator { .. })
    }

    /// Device-space outline of this shape.
    pub fn outline(&self) -> Outline {
        let m = self.transform();
        Outline {
            points: self.local_points().iter().map(|&p| m.apply(p)).collect(),
            closed: self.is_closed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < EPS
    }

    #[test]
    fn rhombus_bounds_equal_area() {
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let bounds = PathShape::Rhombus { area }.outline().bounds().unwrap();
        assert!(bounds.approx_eq(area, EPS), "{:?}", bounds);
    }

    #[test]
    fn rhombus_bounds_hold_for_any_aspect() {
        for area in [
            Rect::new(12.5, 7.0, 40.0, 200.0),
            Rect::new(-3.0, 4.0, 1.0, 1.0),
            Rect::new(100.0, 100.0, 300.0, 30.0),
        ] {
            let bounds = PathShape::Rhombus { area }.outline().bounds().unwrap();
            assert!(bounds.approx_eq(area, EPS), "{:?} vs {:?}", bounds, area);
        }
    }

    #[test]
    fn rhombus_vertices_are_edge_midpoints() {
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let pts = PathShape::Rhombus { area }.outline().points;
        assert!(close(pts[0], Vec2::new(50.0, 0.0)));
        assert!(close(pts[1], Vec2::new(100.0, 25.0)));
        assert!(close(pts[2], Vec2::new(50.0, 50.0)));
        assert!(close(pts[3], Vec2::new(0.0, 25.0)));
    }

    #[test]
    fn degenerate_rhombus_stays_finite() {
        let outline = PathShape::Rhombus { area: Rect::new(5.0, 5.0, 0.0, 0.0) }.outline();
        assert!(outline.points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn wall_edges_follow_offsets() {
        // Left back wall of a 100px-wide prism: right edge raised by depth / 2.
        let area = Rect::new(0.0, 0.0, 50.0, 200.0);
        let shape = PathShape::Wall { area, depth: 50.0, left_offset: 0.0, right_offset: -25.0 };
        let pts = shape.outline().points;
        assert!(close(pts[0], Vec2::new(0.0, 25.0)));
        assert!(close(pts[1], Vec2::new(50.0, 0.0)));
        assert!(close(pts[2], Vec2::new(50.0, 150.0)));
        assert!(close(pts[3], Vec2::new(0.0, 175.0)));
    }

    #[test]
    fn wall_spans_area_width() {
        let area = Rect::new(30.0, 10.0, 80.0, 120.0);
        let shape = PathShape::Wall { area, depth: 40.0, left_offset: 20.0, right_offset: 0.0 };
        let bounds = shape.outline().bounds().unwrap();
        assert!((bounds.x - area.x).abs() < EPS);
        assert!((bounds.w - area.w).abs() < EPS);
    }

    #[test]
    fn zero_width_wall_has_no_skew() {
        let area = Rect::new(0.0, 0.0, 0.0, 100.0);
        let shape = PathShape::Wall { area, depth: 20.0, left_offset: 5.0, right_offset: -5.0 };
        assert!(shape.transform().is_finite());
    }

    #[test]
    fn separator_is_open_chevron() {
        let area = Rect::new(0.0, 100.0, 200.0, 100.0);
        let outline = PathShape::Separator { area, size: 50.0 }.outline();
        assert!(!outline.closed);
        // s = 0.25: arms reach 50px sideways and 25px down from the apex.
        assert!(close(outline.points[0], Vec2::new(50.0, 125.0)));
        assert!(close(outline.points[1], Vec2::new(100.0, 100.0)));
        assert!(close(outline.points[2], Vec2::new(150.0, 125.0)));
    }
}
