use tiny_skia::{Path, PathBuilder};

use crate::coords::{Rect, Vec2};

/// Device-space polygon or polyline produced by a [`PathShape`](super::PathShape).
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

impl Outline {
    /// Axis-aligned bounds of the outline's vertices.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.points.iter().copied())
    }

    /// Builds a raster path.
    ///
    /// Returns `None` for outlines with fewer than two points, non-finite
    /// coordinates, or zero extent; such faces have nothing to paint.
    pub fn to_path(&self) -> Option<Path> {
        let (first, rest) = self.points.split_first()?;
        if rest.is_empty() || !self.points.iter().all(|p| p.is_finite()) {
            return None;
        }

        let mut pb = PathBuilder::with_capacity(self.points.len() + 1, self.points.len() + 1);
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        if self.closed {
            pb.close();
        }
        pb.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline(points: &[(f32, f32)], closed: bool) -> Outline {
        Outline { points: points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(), closed }
    }

    #[test]
    fn closed_square_builds() {
        let path = outline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], true)
            .to_path()
            .unwrap();
        let b = path.bounds();
        assert_eq!((b.left(), b.top(), b.right(), b.bottom()), (0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn open_polyline_builds() {
        assert!(outline(&[(0.0, 5.0), (5.0, 0.0), (10.0, 5.0)], false).to_path().is_some());
    }

    #[test]
    fn single_point_is_rejected() {
        assert!(outline(&[(1.0, 1.0)], true).to_path().is_none());
        assert!(outline(&[], true).to_path().is_none());
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(outline(&[(0.0, 0.0), (f32::NAN, 1.0)], false).to_path().is_none());
    }
}
