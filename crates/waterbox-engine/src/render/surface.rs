use tiny_skia::{Pixmap, PixmapMut};

use crate::coords::Viewport;

/// Host-owned raster target the renderer presents into.
///
/// The renderer never owns the pixels; it borrows a drawing context for the
/// duration of one present. A surface that cannot hand out a context (a lost
/// canvas, a detached window buffer) returns `None`.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Borrows the surface as a drawable 2D raster context.
    fn context(&mut self) -> Option<PixmapMut<'_>>;

    #[inline]
    fn viewport(&self) -> Viewport {
        Viewport::from_pixels(self.width(), self.height())
    }
}

impl Surface for Pixmap {
    #[inline]
    fn width(&self) -> u32 {
        Pixmap::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        Pixmap::height(self)
    }

    #[inline]
    fn context(&mut self) -> Option<PixmapMut<'_>> {
        Some(self.as_mut())
    }
}

/// Caller-owned RGBA8 byte buffer (premultiplied, row-major, no padding).
///
/// Lets hosts that already own a framebuffer render into it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zeroed buffer of `width × height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self { width, height, data: vec![0; len] }
    }

    /// Wraps existing bytes. The length is checked when a context is taken.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self { width, height, data }
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Surface for PixelBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    fn context(&mut self) -> Option<PixmapMut<'_>> {
        PixmapMut::from_bytes(&mut self.data, self.width, self.height)
    }
}
