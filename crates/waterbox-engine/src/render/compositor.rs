use log::trace;
use tiny_skia::{
    BlendMode, FillRule, FilterQuality, LineCap, LineJoin, Paint, Path, Pattern, Pixmap, PixmapMut,
    PixmapPaint, SpreadMode, Stroke, Transform,
};

use crate::paint::Color;
use crate::pattern::PatternTile;

use super::{RenderError, RendererConfig};

/// Owns the off-screen frame buffer and a same-size scratch buffer.
///
/// Faces that need blend modes are composed on the scratch buffer first and
/// then blitted, so a blend only ever sees the face it belongs to.
#[derive(Debug)]
pub struct Compositor {
    buffer: Pixmap,
    scratch: Pixmap,
    config: RendererConfig,
}

impl Compositor {
    /// Allocates both buffers. Fails if either cannot be allocated.
    pub fn new(width: u32, height: u32, config: RendererConfig) -> Result<Self, RenderError> {
        let alloc = || Pixmap::new(width, height).ok_or(RenderError::BufferAllocation { width, height });
        Ok(Self { buffer: alloc()?, scratch: alloc()?, config })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// The composed frame.
    #[inline]
    pub fn buffer(&self) -> &Pixmap {
        &self.buffer
    }

    /// Clears the frame buffer to transparent.
    pub fn clear(&mut self) {
        self.buffer.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn solid(&self, color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = self.config.anti_alias;
        paint
    }

    /// Fills `path` with `color`, then lays `pattern` over the same region.
    ///
    /// Without a pattern the fill goes straight into the frame buffer.
    pub fn paint_filling(&mut self, path: &Path, color: Color, pattern: &PatternTile) {
        let fill = self.solid(color);

        let Some(tile) = pattern.pixmap() else {
            self.buffer.fill_path(path, &fill, FillRule::Winding, Transform::identity(), None);
            return;
        };

        self.scratch.fill(tiny_skia::Color::TRANSPARENT);
        self.scratch.fill_path(path, &fill, FillRule::Winding, Transform::identity(), None);

        let overlay = Paint {
            shader: Pattern::new(
                tile.as_ref(),
                SpreadMode::Repeat,
                FilterQuality::Nearest,
                1.0,
                Transform::identity(),
            ),
            blend_mode: self.config.pattern_blend.to_skia(),
            anti_alias: self.config.anti_alias,
            ..Paint::default()
        };
        self.scratch.fill_path(path, &overlay, FillRule::Winding, Transform::identity(), None);

        blit(&mut self.buffer, &self.scratch, BlendMode::SourceOver);
    }

    /// Strokes a batch of adjoining outlines as one layer.
    ///
    /// Each path first erases its own footprint on the scratch layer and is
    /// then stroked, so a shared edge is covered once rather than twice.
    /// With `clip_edges` the layer is subtracted from the frame instead of
    /// drawn over it.
    pub fn paint_edges(&mut self, paths: &[Path], color: Color, width: f32, clip_edges: bool) {
        if paths.is_empty() || width.is_nan() || width <= 0.0 {
            return;
        }

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        let mut erase = self.solid(Color::black());
        erase.blend_mode = BlendMode::DestinationOut;
        let ink = if clip_edges { self.solid(Color::black()) } else { self.solid(color) };

        self.scratch.fill(tiny_skia::Color::TRANSPARENT);
        for path in paths {
            self.scratch.stroke_path(path, &erase, &stroke, Transform::identity(), None);
            self.scratch.stroke_path(path, &ink, &stroke, Transform::identity(), None);
        }

        let mode = if clip_edges { BlendMode::DestinationOut } else { BlendMode::SourceOver };
        trace!("edges: {} paths, width {width}, {mode:?}", paths.len());
        blit(&mut self.buffer, &self.scratch, mode);
    }

    /// Replaces the contents of `target` with the frame buffer.
    pub fn present(&self, target: &mut PixmapMut<'_>) {
        target.fill(tiny_skia::Color::TRANSPARENT);
        target.draw_pixmap(
            0,
            0,
            self.buffer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}

fn blit(dst: &mut Pixmap, src: &Pixmap, blend_mode: BlendMode) {
    let paint = PixmapPaint { blend_mode, ..PixmapPaint::default() };
    dst.draw_pixmap(0, 0, src.as_ref(), &paint, Transform::identity(), None);
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use tiny_skia::{PathBuilder, Rect};

    use super::*;
    use crate::pattern::generate;

    fn rect_path(x: f32, y: f32, w: f32, h: f32) -> Path {
        PathBuilder::from_rect(Rect::from_xywh(x, y, w, h).unwrap())
    }

    fn compositor() -> Compositor {
        compositor_sized(100, 100)
    }

    fn compositor_sized(w: u32, h: u32) -> Compositor {
        Compositor::new(w, h, RendererConfig::default()).unwrap()
    }

    fn rgba(c: &Compositor, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let p = c.buffer().pixel(x, y).unwrap();
        (p.red(), p.green(), p.blue(), p.alpha())
    }

    fn opaque_count(c: &Compositor) -> usize {
        c.buffer().pixels().iter().filter(|p| p.alpha() == 255).count()
    }

    #[test]
    fn zero_size_buffers_are_rejected() {
        let err = Compositor::new(0, 10, RendererConfig::default()).unwrap_err();
        assert_eq!(err, RenderError::BufferAllocation { width: 0, height: 10 });
    }

    #[test]
    fn plain_fill_paints_inside_only() {
        let mut c = compositor();
        c.paint_filling(&rect_path(20.0, 20.0, 60.0, 60.0), Color::from_srgb_u8(255, 0, 0, 255), &PatternTile::None);
        assert_eq!(rgba(&c, 50, 50), (255, 0, 0, 255));
        assert_eq!(rgba(&c, 5, 5).3, 0);
    }

    #[test]
    fn pattern_overlay_stays_within_fill() {
        let mut c = compositor();
        let tile = generate::checkered(100, 100, 10.0, 1.0).unwrap();
        let gray = Color::from_srgb_u8(128, 128, 128, 255);
        c.paint_filling(&rect_path(20.0, 20.0, 60.0, 60.0), gray, &PatternTile::Tile(Rc::new(tile)));

        // (25, 25) lies on a filled checker cell, (35, 25) on an empty one.
        let lit = rgba(&c, 25, 25);
        let plain = rgba(&c, 35, 25);
        assert!(lit.0 > plain.0, "{lit:?} vs {plain:?}");
        assert!(plain.0.abs_diff(128) <= 1 && plain.3 == 255, "{plain:?}");
        assert_eq!(rgba(&c, 5, 5).3, 0);
        assert_eq!(rgba(&c, 95, 95).3, 0);
    }

    #[test]
    fn edges_draw_over_fill() {
        let mut c = compositor();
        let square = rect_path(20.0, 20.0, 60.0, 60.0);
        c.paint_filling(&square, Color::from_srgb_u8(255, 0, 0, 255), &PatternTile::None);
        c.paint_edges(&[square], Color::from_srgb_u8(0, 0, 255, 255), 4.0, false);
        assert_eq!(rgba(&c, 20, 50), (0, 0, 255, 255));
        assert_eq!(rgba(&c, 50, 50), (255, 0, 0, 255));
    }

    #[test]
    fn clipped_edges_cut_into_fill() {
        let square = rect_path(20.0, 20.0, 60.0, 60.0);
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        let blue = Color::from_srgb_u8(0, 0, 255, 255);

        let mut drawn = compositor();
        drawn.paint_filling(&square, red, &PatternTile::None);
        drawn.paint_edges(std::slice::from_ref(&square), blue, 4.0, false);

        let mut clipped = compositor();
        clipped.paint_filling(&square, red, &PatternTile::None);
        clipped.paint_edges(std::slice::from_ref(&square), blue, 4.0, true);

        assert!(opaque_count(&clipped) < opaque_count(&drawn));
        assert_eq!(rgba(&clipped, 20, 50).3, 0);
        assert_eq!(rgba(&clipped, 50, 50), (255, 0, 0, 255));
    }

    #[test]
    fn shared_edges_are_not_stroked_twice() {
        let mut c = compositor();
        let left = rect_path(10.0, 10.0, 40.0, 80.0);
        let right = rect_path(50.0, 10.0, 40.0, 80.0);
        let half = Color::from_srgb_u8(0, 0, 0, 128);
        c.paint_edges(&[left, right], half, 4.0, false);

        // x = 50 is on both outlines; a double stroke would reach ~192.
        let shared = rgba(&c, 50, 50).3;
        let single = rgba(&c, 10, 50).3;
        assert_eq!(shared, single);
        assert!((120..=136).contains(&shared), "{shared}");
    }

    #[test]
    fn open_edges_get_round_caps() {
        use crate::coords::Rect as Area;
        use crate::path::PathShape;

        // Apex at (100, 40), left arm ending at (40, 100).
        let chevron = PathShape::Separator { area: Area::new(0.0, 40.0, 200.0, 200.0), size: 60.0 };
        let path = chevron.outline().to_path().unwrap();
        let mut c = compositor_sized(200, 200);
        c.paint_edges(&[path], Color::black(), 10.0, false);

        // (37, 102) lies about 3.5px past the arm's end, inside the cap radius.
        assert!(rgba(&c, 37, 102).3 > 200, "{:?}", rgba(&c, 37, 102));
        assert_eq!(rgba(&c, 32, 108).3, 0);
    }

    #[test]
    fn non_positive_stroke_width_is_skipped() {
        let mut c = compositor();
        c.paint_edges(&[rect_path(20.0, 20.0, 60.0, 60.0)], Color::black(), 0.0, false);
        assert_eq!(opaque_count(&c), 0);
    }

    #[test]
    fn present_replaces_target_contents() {
        let mut c = compositor();
        c.paint_filling(&rect_path(0.0, 0.0, 10.0, 10.0), Color::black(), &PatternTile::None);

        let mut target = Pixmap::new(100, 100).unwrap();
        target.fill(tiny_skia::Color::WHITE);
        c.present(&mut target.as_mut());

        assert_eq!(target.pixel(5, 5).unwrap().alpha(), 255);
        assert_eq!(target.pixel(5, 5).unwrap().red(), 0);
        assert_eq!(target.pixel(50, 50).unwrap().alpha(), 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut c = compositor();
        c.paint_filling(&rect_path(0.0, 0.0, 100.0, 100.0), Color::black(), &PatternTile::None);
        c.clear();
        assert!(c.buffer().pixels().iter().all(|p| p.alpha() == 0));
    }
}
