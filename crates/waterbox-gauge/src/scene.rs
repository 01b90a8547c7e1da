//! Back-to-front drawing plan for one frame.
//!
//! The plan is pure geometry: it names each face's outline, group and tone
//! but holds no colors or raster state, so it can be inspected in tests and
//! replayed by the renderer.

use waterbox_engine::coords::Rect;
use waterbox_engine::path::PathShape;

use crate::layout::{clamp_value, separator_levels, Layout};
use crate::theme::{Slot, Theme, Tone};

/// One filled face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Face {
    pub shape: PathShape,
    pub slot: Slot,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill a face with its group's tone and pattern.
    Fill(Face),
    /// Stroke a batch of outlines with the group's stroke color.
    Edges { slot: Slot, shapes: Vec<PathShape> },
}

impl DrawOp {
    #[inline]
    pub fn slot(&self) -> Slot {
        match self {
            DrawOp::Fill(face) => face.slot,
            DrawOp::Edges { slot, .. } => *slot,
        }
    }
}

fn wall(area: Rect, depth: f32, left_offset: f32, right_offset: f32) -> PathShape {
    PathShape::Wall { area, depth, left_offset, right_offset }
}

/// Fills every face, then strokes their outlines as one batch.
fn push_group(ops: &mut Vec<DrawOp>, slot: Slot, faces: [(PathShape, Tone); 3]) {
    ops.extend(faces.iter().map(|&(shape, tone)| DrawOp::Fill(Face { shape, slot, tone })));
    ops.push(DrawOp::Edges { slot, shapes: faces.iter().map(|&(shape, _)| shape).collect() });
}

/// Lays out the faces for `value` percent in back-to-front order:
/// container back, separators, water (when `value > 0`), front (when enabled).
pub fn plan(layout: &Layout, value: f32, theme: &Theme) -> Vec<DrawOp> {
    let value = clamp_value(value);
    let depth = layout.size.h;
    let half = depth / 2.0;
    let mut ops = Vec::with_capacity(13);

    // ── container back ──
    let (left, right) = layout.walls(layout.rect.h);
    push_group(&mut ops, Slot::Back, [
        (PathShape::Rhombus { area: layout.bottom() }, Tone::Base),
        (wall(left, depth, 0.0, -half), Tone::Light),
        (wall(right, depth, -half, 0.0), Tone::Dark),
    ]);

    let separators: Vec<PathShape> = separator_levels(theme.divisions)
        .into_iter()
        .map(|level| PathShape::Separator { area: layout.separator(level), size: theme.separator_size })
        .collect();
    if !separators.is_empty() {
        ops.push(DrawOp::Edges { slot: Slot::Back, shapes: separators });
    }

    // ── water ──
    if value > 0.0 {
        let (left, right) = layout.walls(layout.fill_height(value));
        push_group(&mut ops, Slot::Water, [
            (wall(left, depth, 0.0, half), Tone::Dark),
            (wall(right, depth, half, 0.0), Tone::Light),
            (PathShape::Rhombus { area: layout.water_top(value) }, Tone::Base),
        ]);
    }

    // ── front ──
    if theme.draw_front {
        push_group(&mut ops, Slot::Front, [
            (wall(left, depth, 0.0, half), Tone::Dark),
            (wall(right, depth, half, 0.0), Tone::Light),
            (PathShape::Rhombus { area: layout.top() }, Tone::Base),
        ]);
    }

    ops
}

#[cfg(test)]
mod tests {
    use waterbox_engine::coords::Viewport;

    use super::*;

    fn layout() -> Layout {
        Layout::new(Viewport::new(201.0, 301.0), 0.0)
    }

    fn fills(ops: &[DrawOp], slot: Slot) -> Vec<Face> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Fill(face) if face.slot == slot => Some(*face),
                _ => None,
            })
            .collect()
    }

    fn separators(ops: &[DrawOp]) -> Vec<PathShape> {
        ops.iter()
            .flat_map(|op| match op {
                DrawOp::Edges { shapes, .. } => shapes.clone(),
                DrawOp::Fill(_) => Vec::new(),
            })
            .filter(|s| matches!(s, PathShape::Separator { .. }))
            .collect()
    }

    #[test]
    fn empty_gauge_has_no_water() {
        let ops = plan(&layout(), 0.0, &Theme::default());
        assert!(ops.iter().all(|op| op.slot() != Slot::Water));
        assert_eq!(fills(&ops, Slot::Back).len(), 3);
    }

    #[test]
    fn negative_value_counts_as_empty() {
        let ops = plan(&layout(), -5.0, &Theme::default());
        assert!(ops.iter().all(|op| op.slot() != Slot::Water));
    }

    #[test]
    fn filled_gauge_has_three_water_faces() {
        let ops = plan(&layout(), 40.0, &Theme::default());
        let water = fills(&ops, Slot::Water);
        assert_eq!(water.iter().map(|f| f.tone).collect::<Vec<_>>(), [Tone::Dark, Tone::Light, Tone::Base]);
    }

    #[test]
    fn five_divisions_give_four_separators() {
        let l = layout();
        let seps = separators(&plan(&l, 0.0, &Theme::default()));
        assert_eq!(seps.len(), 4);
        let apexes: Vec<f32> = seps
            .iter()
            .map(|s| match s {
                PathShape::Separator { area, .. } => area.y,
                _ => unreachable!(),
            })
            .collect();
        // Span 200px above the bottom face: 20% steps are 40px apart.
        assert_eq!(apexes, vec![160.0, 120.0, 80.0, 40.0]);
    }

    #[test]
    fn single_division_has_no_separators() {
        let theme = Theme { divisions: 1, ..Theme::default() };
        assert!(separators(&plan(&layout(), 50.0, &theme)).is_empty());
        let theme = Theme { divisions: 0, ..Theme::default() };
        assert!(separators(&plan(&layout(), 50.0, &theme)).is_empty());
    }

    #[test]
    fn front_only_when_enabled() {
        let off = plan(&layout(), 50.0, &Theme::default());
        assert!(fills(&off, Slot::Front).is_empty());

        let theme = Theme { draw_front: true, ..Theme::default() };
        let on = plan(&layout(), 50.0, &theme);
        assert_eq!(fills(&on, Slot::Front).len(), 3);
        assert_eq!(on.last().map(DrawOp::slot), Some(Slot::Front));
    }

    #[test]
    fn groups_fill_before_edges() {
        let theme = Theme { draw_front: true, ..Theme::default() };
        let ops = plan(&layout(), 60.0, &theme);
        let kinds: Vec<(Slot, bool)> = ops.iter().map(|op| (op.slot(), matches!(op, DrawOp::Fill(_)))).collect();
        assert_eq!(kinds, vec![
            (Slot::Back, true), (Slot::Back, true), (Slot::Back, true), (Slot::Back, false),
            (Slot::Back, false),
            (Slot::Water, true), (Slot::Water, true), (Slot::Water, true), (Slot::Water, false),
            (Slot::Front, true), (Slot::Front, true), (Slot::Front, true), (Slot::Front, false),
        ]);
    }

    #[test]
    fn back_walls_rise_towards_the_middle() {
        let ops = plan(&layout(), 0.0, &Theme::default());
        let back = fills(&ops, Slot::Back);
        let left = back[1].shape.outline().points;
        // Left back wall: outer edge starts at depth/2, inner edge at 0.
        assert!((left[0].y - 50.0).abs() < 1e-3);
        assert!(left[1].y.abs() < 1e-3);
    }

    #[test]
    fn water_top_tracks_value() {
        let l = layout();
        let ops = plan(&l, 50.0, &Theme::default());
        let top = fills(&ops, Slot::Water)[2];
        assert_eq!(top.shape, PathShape::Rhombus { area: l.water_top(50.0) });
        assert_eq!(l.water_top(50.0).y, 100.0);
    }
}
