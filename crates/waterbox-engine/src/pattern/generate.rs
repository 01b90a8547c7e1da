//! Pattern tile generators.
//!
//! Each generator rasterizes a `width × height` tile meant to be repeated
//! across a face. Marks are white at the requested opacity; the compositor
//! blends them over the face color, so they only shift its luminance.

use rand::Rng;
use tiny_skia::{Paint, PathBuilder, Pixmap, PremultipliedColorU8, Rect, Stroke, Transform};

use crate::render::RenderError;

use super::{PatternName, PatternSpec};

/// Rasterizes `spec` into a tile the size of the target surface.
///
/// Returns `Ok(None)` for [`PatternName::None`].
pub fn generate(spec: &PatternSpec, width: u32, height: u32) -> Result<Option<Pixmap>, RenderError> {
    let size = spec.effective_size(width as f32);
    let tile = match spec.name {
        PatternName::None => return Ok(None),
        PatternName::Blocky | PatternName::Noise => coarse_noise(width, height, size, spec.alpha),
        PatternName::Dotted => dot_matrix(width, height, size, spec.alpha),
        PatternName::Grid => grid(width, height, size, spec.alpha),
        PatternName::Checkered => checkered(width, height, size, spec.alpha),
    };
    tile.map(Some)
        .ok_or(RenderError::PatternTile { name: spec.name, width, height })
}

#[inline]
fn alpha_u8(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn white(alpha: f32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, alpha_u8(alpha));
    paint.anti_alias = true;
    paint
}

/// Grid of `cell × cell` squares, each a random gray level at opacity `alpha`.
///
/// The last row and column are clipped to the tile. Output is not deterministic.
pub fn coarse_noise(width: u32, height: u32, cell: f32, alpha: f32) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    // Cells below one pixel are indistinguishable from per-pixel noise.
    let cell = cell.max(1.0);
    let cols = ((width as f32 / cell).ceil() as usize).max(1);
    let rows = ((height as f32 / cell).ceil() as usize).max(1);

    let mut rng = rand::thread_rng();
    let levels: Vec<u8> = (0..cols * rows).map(|_| rng.r#gen()).collect();

    let a = alpha_u8(alpha);
    let w = width as usize;
    for (i, px) in pixmap.pixels_mut().iter_mut().enumerate() {
        let cx = (((i % w) as f32 / cell) as usize).min(cols - 1);
        let cy = (((i / w) as f32 / cell) as usize).min(rows - 1);
        let level = levels[cy * cols + cx];
        let v = ((level as u32 * a as u32 + 127) / 255) as u8;
        *px = PremultipliedColorU8::from_rgba(v, v, v, a).unwrap_or(PremultipliedColorU8::TRANSPARENT);
    }

    Some(pixmap)
}

/// Dots of radius `0.2 × spacing` centered in an evenly stretched grid.
///
/// The cell count per axis is `round(extent / spacing)` (at least one), and
/// the actual spacing is recomputed so the dots fill the tile exactly.
pub fn dot_matrix(width: u32, height: u32, spacing: f32, alpha: f32) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    let (w, h) = (width as f32, height as f32);
    let radius = spacing * 0.2;
    let cols = (w / spacing).round().max(1.0) as u32;
    let rows = (h / spacing).round().max(1.0) as u32;
    let step_x = w / cols as f32;
    let step_y = h / rows as f32;

    let mut pb = PathBuilder::new();
    for row in 0..rows {
        for col in 0..cols {
            let cx = (col as f32 + 0.5) * step_x;
            let cy = (row as f32 + 0.5) * step_y;
            pb.push_circle(cx, cy, radius);
        }
    }

    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, &white(alpha), tiny_skia::FillRule::Winding, Transform::identity(), None);
    }
    Some(pixmap)
}

/// Vertical and horizontal lines every `cell` pixels, `0.1 × cell` wide.
///
/// Lines sit on half-pixel centers so thin lines stay crisp.
pub fn grid(width: u32, height: u32, cell: f32, alpha: f32) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    let (w, h) = (width as f32, height as f32);
    if cell <= 0.0 {
        return Some(pixmap);
    }

    let mut pb = PathBuilder::new();
    let mut x = 0.0;
    while x <= w {
        pb.move_to(x + 0.5, 0.0);
        pb.line_to(x + 0.5, h);
        x += cell;
    }
    let mut y = 0.0;
    while y <= h {
        pb.move_to(0.0, y + 0.5);
        pb.line_to(w, y + 0.5);
        y += cell;
    }

    if let Some(path) = pb.finish() {
        let stroke = Stroke { width: cell * 0.1, ..Stroke::default() };
        pixmap.stroke_path(&path, &white(alpha), &stroke, Transform::identity(), None);
    }
    Some(pixmap)
}

/// Alternating filled/empty squares of side `cell`, starting filled at the origin.
pub fn checkered(width: u32, height: u32, cell: f32, alpha: f32) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    if cell <= 0.0 {
        return Some(pixmap);
    }
    let cols = (width as f32 / cell).ceil() as u32;
    let rows = (height as f32 / cell).ceil() as u32;

    let mut pb = PathBuilder::new();
    for row in 0..rows {
        for col in (row % 2..cols).step_by(2) {
            if let Some(rect) = Rect::from_xywh(col as f32 * cell, row as f32 * cell, cell, cell) {
                pb.push_rect(rect);
            }
        }
    }

    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, &white(alpha), tiny_skia::FillRule::Winding, Transform::identity(), None);
    }
    Some(pixmap)
}
