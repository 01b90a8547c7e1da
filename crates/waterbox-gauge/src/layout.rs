//! Container placement inside the surface and the areas derived from it.
//!
//! All values are device pixels. The container is a prism standing in a
//! square column centered horizontally; its top and bottom faces are rhombi
//! of `size.w × size.h`, with `size.h = size.w / 2`.

use waterbox_engine::coords::{Rect, Viewport};

/// Width and height of the prism's top/bottom rhombus.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    /// Bounding box of the whole prism.
    pub rect: Rect,
    pub size: Size,
}

/// Brings `value` into `[0, 100]`. NaN counts as empty.
pub fn clamp_value(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

/// Percent levels of the separators for `divisions` bands:
/// `100 / divisions, 200 / divisions, …` strictly below 100.
pub fn separator_levels(divisions: u32) -> Vec<f32> {
    (1..divisions.max(1)).map(|i| i as f32 * 100.0 / divisions as f32).collect()
}

impl Layout {
    /// Fits the prism into `viewport`, leaving room for strokes of
    /// `stroke_width` on every side.
    pub fn new(viewport: Viewport, stroke_width: f32) -> Self {
        let sw = stroke_width.max(0.0);
        let side = viewport.min_side();
        let rect = Rect::new(
            viewport.width / 2.0 - side / 2.0 + sw / 2.0,
            sw / 2.0,
            side - sw - 1.0,
            viewport.height - sw - 1.0,
        );
        Self { rect, size: Size { w: rect.w, h: rect.w / 2.0 } }
    }

    /// Vertical extent of the water for a fill percentage, from `size.h`
    /// when empty up to `rect.h` when full.
    pub fn fill_height(&self, value: f32) -> f32 {
        self.size.h + clamp_value(value) / 100.0 * (self.rect.h - self.size.h)
    }

    /// Area of the bottom face.
    pub fn bottom(&self) -> Rect {
        Rect::new(self.rect.x, self.rect.bottom() - self.size.h, self.size.w, self.size.h)
    }

    /// Area of the top face.
    pub fn top(&self) -> Rect {
        Rect::new(self.rect.x, self.rect.y, self.size.w, self.size.h)
    }

    /// Left and right wall columns for a prism reaching `height` up from the bottom.
    pub fn walls(&self, height: f32) -> (Rect, Rect) {
        let y = self.rect.bottom() - height;
        let half = self.size.w / 2.0;
        (
            Rect::new(self.rect.x, y, half, height),
            Rect::new(self.rect.x + half, y, half, height),
        )
    }

    /// Surface of the water at `value` percent.
    pub fn water_top(&self, value: f32) -> Rect {
        let h = self.fill_height(value);
        Rect::new(self.rect.x, self.rect.bottom() - h, self.size.w, self.size.h)
    }

    /// Area whose top-center is the apex of the separator at `level` percent.
    pub fn separator(&self, level: f32) -> Rect {
        let span = self.rect.h - self.size.h;
        Rect::new(
            self.rect.x,
            self.rect.bottom() - self.size.h - span * level / 100.0,
            self.size.w,
            self.size.h,
        )
    }
}
