//! Palette adjustments used to derive light/dark face variants from a base color.

use waterbox_css::hsl::{hsl_to_rgb, rgb_to_hsl};

use super::Color;

impl Color {
    /// Perceived brightness in `[0, 255]` (ITU-R BT.601 weights on straight channels).
    pub fn brightness(self) -> f32 {
        let (r, g, b, _) = self.to_straight();
        (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0 * 255.0
    }

    /// Adds `amount` percent of full scale to every channel. Alpha is kept.
    pub fn brighten(self, amount: f32) -> Color {
        let (r, g, b, a) = self.to_straight();
        let delta = (255.0 * amount / 100.0).round() / 255.0;
        Color::from_straight(r + delta, g + delta, b + delta, a)
    }

    /// Lowers HSL lightness by `amount` percent. Alpha is kept.
    pub fn darken(self, amount: f32) -> Color {
        let (r, g, b, a) = self.to_straight();
        let (h, s, l) = rgb_to_hsl(r, g, b);
        let (r, g, b) = hsl_to_rgb(h, s, (l - amount / 100.0).clamp(0.0, 1.0));
        Color::from_straight(r, g, b, a)
    }

    /// Same color with a different straight alpha.
    pub fn with_alpha(self, alpha: f32) -> Color {
        let (r, g, b, _) = self.to_straight();
        Color::from_straight(r, g, b, alpha)
    }
}
