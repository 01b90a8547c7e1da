use serde::{Deserialize, Serialize};
use tiny_skia::BlendMode;

/// How a pattern tile is composited over a face's solid fill.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternBlend {
    /// Shifts luminance of the fill; the pattern never adds hue of its own.
    #[default]
    Overlay,
    SoftLight,
    Multiply,
    Screen,
    /// Punches the pattern out of the fill.
    DestinationOut,
}

impl PatternBlend {
    pub fn to_skia(self) -> BlendMode {
        match self {
            PatternBlend::Overlay => BlendMode::Overlay,
            PatternBlend::SoftLight => BlendMode::SoftLight,
            PatternBlend::Multiply => BlendMode::Multiply,
            PatternBlend::Screen => BlendMode::Screen,
            PatternBlend::DestinationOut => BlendMode::DestinationOut,
        }
    }
}

/// Construction parameters for the compositor.
///
/// Holds visual parameters that are fixed for a renderer's lifetime rather
/// than supplied per frame with the theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Blend mode used to lay pattern tiles over fills.
    pub pattern_blend: PatternBlend,

    /// Anti-alias fills and strokes. Pattern tiles are unaffected.
    pub anti_alias: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { pattern_blend: PatternBlend::Overlay, anti_alias: true }
    }
}
