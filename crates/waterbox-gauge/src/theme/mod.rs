//! Gauge theme: colors, patterns and structural options.
//!
//! A [`Theme`] is a flat set of named fields. Every field has a default, so
//! a theme file only lists what it overrides:
//!
//! ```toml
//! water_fill_color = "rgba(68, 188, 68, 0.6)"
//! water_pattern = { name = "blocky", size = 50, alpha = 0.1 }
//! divisions = 4
//! ```
//!
//! Colors are kept as CSS strings and resolved into a [`Palette`] when a
//! frame is drawn.

mod generated;
mod load;

pub use load::{load_from_path, ThemeError};

use log::warn;
use serde::{Deserialize, Serialize};
use waterbox_engine::paint::Color;
use waterbox_engine::pattern::PatternSpec;

/// Face group a face belongs to. Each group has its own palette and pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Container structure behind the water.
    Back,
    Water,
    /// Translucent near side of the container.
    Front,
}

/// Which of a group's three fill colors a face uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Horizontal faces (rhombi).
    Base,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub back_fill_color: String,
    pub back_fill_color_light: String,
    pub back_fill_color_dark: String,
    pub back_stroke_color: String,
    pub back_pattern: PatternSpec,

    pub front_fill_color: String,
    pub front_fill_color_light: String,
    pub front_fill_color_dark: String,
    pub front_stroke_color: String,
    pub front_pattern: PatternSpec,

    pub water_fill_color: String,
    pub water_fill_color_light: String,
    pub water_fill_color_dark: String,
    pub water_stroke_color: String,
    pub water_pattern: PatternSpec,

    /// Edge stroke width in pixels. `0` disables edges.
    pub stroke_width: f32,
    /// Number of bands the container is divided into; `divisions - 1`
    /// separators are drawn. `0` and `1` draw none.
    pub divisions: u32,
    /// Separator arm length, in percent of the container width.
    pub separator_size: f32,
    /// Edges cut into the fill instead of being drawn over it.
    pub clip_edges: bool,
    pub draw_front: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            back_fill_color: "rgb(148, 160, 178)".into(),
            back_fill_color_light: "rgb(178, 190, 208)".into(),
            back_fill_color_dark: "rgb(112, 124, 142)".into(),
            back_stroke_color: "rgb(64, 74, 90)".into(),
            back_pattern: PatternSpec::NONE,

            front_fill_color: "rgba(148, 160, 178, 0.2)".into(),
            front_fill_color_light: "rgba(178, 190, 208, 0.2)".into(),
            front_fill_color_dark: "rgba(112, 124, 142, 0.2)".into(),
            front_stroke_color: "rgba(64, 74, 90, 0.2)".into(),
            front_pattern: PatternSpec::NONE,

            water_fill_color: "rgba(64, 132, 224, 0.8)".into(),
            water_fill_color_light: "rgba(102, 162, 240, 0.8)".into(),
            water_fill_color_dark: "rgba(38, 92, 176, 0.8)".into(),
            water_stroke_color: "rgba(20, 52, 112, 0.8)".into(),
            water_pattern: PatternSpec::NONE,

            stroke_width: 0.5,
            divisions: 5,
            separator_size: 25.0,
            clip_edges: false,
            draw_front: false,
        }
    }
}

impl Theme {
    pub fn pattern(&self, slot: Slot) -> &PatternSpec {
        match slot {
            Slot::Back => &self.back_pattern,
            Slot::Water => &self.water_pattern,
            Slot::Front => &self.front_pattern,
        }
    }

    /// Resolves every color field.
    ///
    /// Unparseable colors are logged and resolve to transparent, so a bad
    /// field hides the faces it paints instead of failing the frame.
    pub fn palette(&self) -> Palette {
        Palette {
            back: GroupColors {
                base: resolve("back_fill_color", &self.back_fill_color),
                light: resolve("back_fill_color_light", &self.back_fill_color_light),
                dark: resolve("back_fill_color_dark", &self.back_fill_color_dark),
                stroke: resolve("back_stroke_color", &self.back_stroke_color),
            },
            water: GroupColors {
                base: resolve("water_fill_color", &self.water_fill_color),
                light: resolve("water_fill_color_light", &self.water_fill_color_light),
                dark: resolve("water_fill_color_dark", &self.water_fill_color_dark),
                stroke: resolve("water_stroke_color", &self.water_stroke_color),
            },
            front: GroupColors {
                base: resolve("front_fill_color", &self.front_fill_color),
                light: resolve("front_fill_color_light", &self.front_fill_color_light),
                dark: resolve("front_fill_color_dark", &self.front_fill_color_dark),
                stroke: resolve("front_stroke_color", &self.front_stroke_color),
            },
        }
    }
}

fn resolve(field: &str, css: &str) -> Color {
    Color::parse(css).unwrap_or_else(|e| {
        warn!("theme field `{field}` = {css:?}: {e}; painting transparent");
        Color::transparent()
    })
}

// ── resolved colors ───────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GroupColors {
    pub base: Color,
    pub light: Color,
    pub dark: Color,
    pub stroke: Color,
}

impl GroupColors {
    #[inline]
    pub fn fill(&self, tone: Tone) -> Color {
        match tone {
            Tone::Base => self.base,
            Tone::Light => self.light,
            Tone::Dark => self.dark,
        }
    }
}

/// Parsed colors of all three face groups.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Palette {
    pub back: GroupColors,
    pub water: GroupColors,
    pub front: GroupColors,
}

impl Palette {
    #[inline]
    pub fn group(&self, slot: Slot) -> &GroupColors {
        match slot {
            Slot::Back => &self.back,
            Slot::Water => &self.water,
            Slot::Front => &self.front,
        }
    }
}
