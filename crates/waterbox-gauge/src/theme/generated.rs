use waterbox_engine::paint::Color;
use waterbox_engine::pattern::{PatternName, PatternSpec};

use super::{Theme, ThemeError};

const FRONT_ALPHA: f32 = 0.2;

impl Theme {
    /// Derives a complete theme from a container color and a water color.
    ///
    /// Light and dark variants move away from the base by `contrast` percent,
    /// scaled down for colors that are already bright. Strokes are darkened
    /// by twice the contrast. The front group reuses the container palette
    /// at 20% opacity.
    pub fn generated(container: &str, water: &str, contrast: f32) -> Result<Theme, ThemeError> {
        let container = parse(container)?;
        let water = parse(water)?;

        let front = |c: Color| c.with_alpha(FRONT_ALPHA).to_css();

        Ok(Theme {
            back_fill_color: container.to_css(),
            back_fill_color_light: lighten(container, contrast).to_css(),
            back_fill_color_dark: darken(container, contrast).to_css(),
            back_stroke_color: darken(container, 2.0 * contrast).to_css(),
            back_pattern: PatternSpec::NONE,

            front_fill_color: front(container),
            front_fill_color_light: front(lighten(container, contrast)),
            front_fill_color_dark: front(darken(container, contrast)),
            front_stroke_color: front(darken(container, 2.0 * contrast)),
            front_pattern: PatternSpec::NONE,

            water_fill_color: water.to_css(),
            water_fill_color_light: lighten(water, contrast).to_css(),
            water_fill_color_dark: darken(water, contrast).to_css(),
            water_stroke_color: darken(water, 2.0 * contrast).to_css(),
            water_pattern: PatternSpec::new(PatternName::Blocky, 50.0, 0.1),

            draw_front: true,
            ..Theme::default()
        })
    }
}

fn parse(css: &str) -> Result<Color, ThemeError> {
    Color::parse(css).map_err(|source| ThemeError::Color { input: css.to_owned(), source })
}

/// `1.0` for black down to `0.5` for white.
fn damping(c: Color) -> f32 {
    1.0 - 0.5 * c.brightness() / 255.0
}

fn lighten(c: Color, amount: f32) -> Color {
    c.brighten(amount * damping(c))
}

fn darken(c: Color, amount: f32) -> Color {
    c.darken((amount * damping(c)).round())
}
