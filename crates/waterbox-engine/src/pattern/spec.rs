use std::fmt;

use serde::{Deserialize, Serialize};

/// Procedural texture kinds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternName {
    /// No texture; the face is painted with its solid color only.
    #[default]
    None,
    /// Coarse noise with large cells.
    Blocky,
    /// Fine noise, one cell per pixel by default.
    Noise,
    /// Regular dot matrix.
    Dotted,
    /// Crossing horizontal and vertical lines.
    Grid,
    /// Alternating filled and empty squares.
    Checkered,
}

impl PatternName {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternName::None => "none",
            PatternName::Blocky => "blocky",
            PatternName::Noise => "noise",
            PatternName::Dotted => "dotted",
            PatternName::Grid => "grid",
            PatternName::Checkered => "checkered",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pattern descriptor. Two descriptors select the same tile iff they are equal.
///
/// `size == 0` asks for a default cell size derived from the tile width.
/// `alpha` is the pattern opacity in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSpec {
    pub name: PatternName,
    pub size: f32,
    pub alpha: f32,
}

impl PatternSpec {
    pub const NONE: PatternSpec = PatternSpec { name: PatternName::None, size: 0.0, alpha: 0.0 };

    #[inline]
    pub const fn new(name: PatternName, size: f32, alpha: f32) -> Self {
        Self { name, size, alpha }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.name == PatternName::None
    }

    /// Cell size to generate with for a tile `width` pixels wide.
    pub fn effective_size(&self, width: f32) -> f32 {
        if self.size > 0.0 {
            return self.size;
        }
        match self.name {
            PatternName::Noise => 1.0,
            PatternName::None => 0.0,
            PatternName::Blocky | PatternName::Dotted | PatternName::Grid | PatternName::Checkered => {
                width * 0.1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(PatternSpec::default(), PatternSpec::NONE);
        assert!(PatternSpec::default().is_none());
    }

    #[test]
    fn equality_is_by_value() {
        let a = PatternSpec::new(PatternName::Grid, 10.0, 0.5);
        assert_eq!(a, PatternSpec::new(PatternName::Grid, 10.0, 0.5));
        assert_ne!(a, PatternSpec::new(PatternName::Grid, 10.0, 0.4));
        assert_ne!(a, PatternSpec::new(PatternName::Dotted, 10.0, 0.5));
    }

    #[test]
    fn zero_size_uses_defaults() {
        assert_eq!(PatternSpec::new(PatternName::Noise, 0.0, 0.2).effective_size(200.0), 1.0);
        assert_eq!(PatternSpec::new(PatternName::Blocky, 0.0, 0.2).effective_size(200.0), 20.0);
        assert_eq!(PatternSpec::new(PatternName::Grid, 7.0, 0.2).effective_size(200.0), 7.0);
    }

    #[test]
    fn names_display_lowercase() {
        assert_eq!(PatternName::Checkered.to_string(), "checkered");
    }
}
