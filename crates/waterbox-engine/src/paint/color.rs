use waterbox_css::{parse_color, ParseError, Rgba};

/// Premultiplied RGBA color with `f32` channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Rationale:
/// - Matches the raster backend's pixel format, so compositing never fringes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Parses a CSS color string (`#rgb`, `rgba()`, `hsla()`, named colors, …).
    pub fn parse(css: &str) -> Result<Self, ParseError> {
        parse_color(css).map(Self::from)
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha bytes, rounded.
    pub fn to_rgba(self) -> Rgba {
        let (r, g, b, a) = self.to_straight();
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba::new(byte(r), byte(g), byte(b), byte(a))
    }

    /// Formats as `rgba(r, g, b, a)`, the form theme files store.
    pub fn to_css(self) -> String {
        let Rgba { r, g, b, a } = self.to_rgba();
        let alpha = (a as f32 / 255.0 * 1000.0).round() / 1000.0;
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Converts to the raster backend's color type.
    pub fn to_skia(self) -> tiny_skia::Color {
        let (r, g, b, a) = self.to_straight();
        tiny_skia::Color::from_rgba(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), a)
            .unwrap_or(tiny_skia::Color::TRANSPARENT)
    }
}

impl From<Rgba> for Color {
    #[inline]
    fn from(c: Rgba) -> Self {
        Self::from_srgb_u8(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_premultiplies() {
        let c = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert!((c.r - 0.5).abs() < 0.01);
        assert!((c.a - 0.5).abs() < 0.01);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn parse_failure_is_reported() {
        assert!(Color::parse("not-a-color").is_err());
    }

    #[test]
    fn straight_round_trip_through_bytes() {
        let c = Color::from_srgb_u8(68, 188, 68, 153);
        assert_eq!(c.to_rgba(), Rgba::new(68, 188, 68, 153));
    }

    #[test]
    fn transparent_has_no_color() {
        assert_eq!(Color::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(Color::transparent().to_rgba(), Rgba::TRANSPARENT);
    }

    #[test]
    fn css_output_parses_back() {
        let c = Color::from_srgb_u8(10, 20, 30, 51);
        assert_eq!(c.to_css(), "rgba(10, 20, 30, 0.2)");
        assert_eq!(Color::parse(&c.to_css()).unwrap().to_rgba(), c.to_rgba());
    }

    #[test]
    fn skia_conversion_keeps_straight_channels() {
        let c = Color::from_srgb_u8(255, 0, 0, 128).to_skia();
        assert!((c.red() - 1.0).abs() < 1e-4);
        assert!((c.alpha() - 128.0 / 255.0).abs() < 1e-4);
    }
}
