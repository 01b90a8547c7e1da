use log::{info, trace, warn};
use tiny_skia::{Path, Pixmap};
use waterbox_engine::coords::Viewport;
use waterbox_engine::pattern::{PatternCache, PatternTile};
use waterbox_engine::render::{Compositor, RenderError, RendererConfig, Surface};

use crate::layout::Layout;
use crate::scene::{self, DrawOp};
use crate::theme::{Palette, Slot, Theme};

// ── pattern slots ─────────────────────────────────────────────────────────

/// One pattern cache per face group, all sized to the surface.
#[derive(Debug)]
struct PatternSlots {
    back: PatternCache,
    water: PatternCache,
    front: PatternCache,
}

/// Tiles looked up for one frame.
struct FrameTiles {
    back: PatternTile,
    water: PatternTile,
    front: PatternTile,
}

impl PatternSlots {
    fn new(width: u32, height: u32) -> Self {
        Self {
            back: PatternCache::new(width, height),
            water: PatternCache::new(width, height),
            front: PatternCache::new(width, height),
        }
    }

    fn lookup(&mut self, theme: &Theme) -> FrameTiles {
        FrameTiles {
            back: self.back.get(theme.pattern(Slot::Back)),
            water: self.water.get(theme.pattern(Slot::Water)),
            front: self.front.get(theme.pattern(Slot::Front)),
        }
    }
}

impl FrameTiles {
    fn get(&self, slot: Slot) -> &PatternTile {
        match slot {
            Slot::Back => &self.back,
            Slot::Water => &self.water,
            Slot::Front => &self.front,
        }
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Draws the gauge into a host surface.
///
/// Owns the off-screen buffers and pattern caches for the surface's current
/// size. Rendering never fails: a lost surface context drops the frame, a
/// failed pattern degrades to a plain fill, a bad color paints transparent.
#[derive(Debug)]
pub struct Renderer<S: Surface = Pixmap> {
    surface: S,
    compositor: Compositor,
    patterns: PatternSlots,
    /// Palette of the last theme drawn, reused while the theme is unchanged.
    palette: Option<(Theme, Palette)>,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Result<Self, RenderError> {
        Self::with_config(surface, RendererConfig::default())
    }

    /// Fails if `surface` yields no drawing context or the off-screen
    /// buffers cannot be allocated at its size.
    pub fn with_config(mut surface: S, config: RendererConfig) -> Result<Self, RenderError> {
        if surface.context().is_none() {
            return Err(RenderError::ContextUnavailable);
        }

        let (width, height) = (surface.width(), surface.height());
        let compositor = Compositor::new(width, height, config)?;
        info!("gauge renderer ready: {width}x{height}");

        Ok(Self {
            surface,
            compositor,
            patterns: PatternSlots::new(width, height),
            palette: None,
        })
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The last composed frame, before presentation.
    #[inline]
    pub fn frame(&self) -> &Pixmap {
        self.compositor.buffer()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::from_pixels(self.compositor.width(), self.compositor.height())
    }

    /// Swaps in a surface of a possibly different size and returns the old one.
    ///
    /// Buffers and pattern caches for the new size are built first; on error
    /// the renderer keeps its current surface and state.
    pub fn replace_surface(&mut self, mut surface: S) -> Result<S, RenderError> {
        if surface.context().is_none() {
            return Err(RenderError::ContextUnavailable);
        }

        let (width, height) = (surface.width(), surface.height());
        let compositor = Compositor::new(width, height, self.compositor.config().clone())?;
        let patterns = PatternSlots::new(width, height);

        info!(
            "gauge surface resized: {}x{} -> {width}x{height}",
            self.compositor.width(),
            self.compositor.height()
        );
        self.compositor = compositor;
        self.patterns = patterns;
        Ok(std::mem::replace(&mut self.surface, surface))
    }

    /// Draws the gauge at `value` percent (clamped to `[0, 100]`) and
    /// presents it. Identical inputs give identical pixels.
    pub fn render(&mut self, value: f32, theme: &Theme) {
        let layout = Layout::new(self.viewport(), theme.stroke_width);
        let palette = self.palette_for(theme);
        let tiles = self.patterns.lookup(theme);
        let ops = scene::plan(&layout, value, theme);

        self.compositor.clear();
        for op in &ops {
            match op {
                DrawOp::Fill(face) => {
                    let Some(path) = face.shape.outline().to_path() else {
                        continue;
                    };
                    let color = palette.group(face.slot).fill(face.tone);
                    self.compositor.paint_filling(&path, color, tiles.get(face.slot));
                }
                DrawOp::Edges { slot, shapes } => {
                    let paths: Vec<Path> = shapes.iter().filter_map(|s| s.outline().to_path()).collect();
                    self.compositor.paint_edges(
                        &paths,
                        palette.group(*slot).stroke,
                        theme.stroke_width,
                        theme.clip_edges,
                    );
                }
            }
        }
        trace!("gauge frame: value {value}, {} draw ops", ops.len());

        self.present();
    }

    fn palette_for(&mut self, theme: &Theme) -> Palette {
        if let Some((last, palette)) = &self.palette {
            if last == theme {
                return *palette;
            }
        }
        let palette = theme.palette();
        self.palette = Some((theme.clone(), palette));
        palette
    }

    fn present(&mut self) {
        let Some(mut ctx) = self.surface.context() else {
            warn!("surface has no drawing context; frame dropped");
            return;
        };
        self.compositor.present(&mut ctx);
    }
}
