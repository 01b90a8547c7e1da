use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use waterbox_engine::render::PatternBlend;

/// Waterbox studio: renders gauge frames to PNG.
#[derive(Parser, Debug)]
#[command(name = "waterbox-studio", version, about)]
pub struct Args {
    /// Fill percentage, 0 to 100.
    #[arg(short, long, default_value_t = 42.0)]
    pub value: f32,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 200)]
    pub width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 300)]
    pub height: u32,

    /// TOML theme file. Fields it omits keep their defaults.
    #[arg(short, long, conflicts_with = "generate")]
    pub theme: Option<PathBuf>,

    /// Derive the theme from a container color, with the water hue following the value.
    #[arg(short, long)]
    pub generate: bool,

    /// Container color for generated themes.
    #[arg(long, default_value = "hsla(180, 30%, 60%, 1)", requires = "generate")]
    pub container: String,

    /// Light/dark spread for generated themes, in percent.
    #[arg(long, default_value_t = 20.0, requires = "generate")]
    pub contrast: f32,

    /// Draw the translucent front faces.
    #[arg(long)]
    pub draw_front: bool,

    /// Let edges cut into the fill.
    #[arg(long)]
    pub clip_edges: bool,

    /// Blend mode for pattern overlays.
    #[arg(long, value_enum, default_value_t = Blend::Overlay)]
    pub blend: Blend,

    /// Render this many frames, advancing the value by `--step` each frame.
    #[arg(long, value_name = "FRAMES")]
    pub sweep: Option<u32>,

    /// Value increment per sweep frame. Wraps at 100.
    #[arg(long, default_value_t = 1.0)]
    pub step: f32,

    /// Output file. Sweeps insert a frame number before the extension.
    #[arg(short, long, default_value = "waterbox.png")]
    pub out: PathBuf,

    /// Print the resolved theme as TOML and exit.
    #[arg(long)]
    pub dump_theme: bool,

    /// Log filter (error, warn, info, debug, trace, or env_logger syntax).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Blend {
    Overlay,
    SoftLight,
    Multiply,
    Screen,
    DestinationOut,
}

impl From<Blend> for PatternBlend {
    fn from(b: Blend) -> Self {
        match b {
            Blend::Overlay => PatternBlend::Overlay,
            Blend::SoftLight => PatternBlend::SoftLight,
            Blend::Multiply => PatternBlend::Multiply,
            Blend::Screen => PatternBlend::Screen,
            Blend::DestinationOut => PatternBlend::DestinationOut,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["waterbox-studio"]).unwrap();
        assert_eq!(args.value, 42.0);
        assert_eq!((args.width, args.height), (200, 300));
        assert_eq!(args.blend, Blend::Overlay);
        assert!(args.sweep.is_none());
        assert!(!args.generate);
    }

    #[test]
    fn sweep_options() {
        let args = Args::try_parse_from(["waterbox-studio", "--sweep", "10", "--step", "5", "-o", "out/f.png"]).unwrap();
        assert_eq!(args.sweep, Some(10));
        assert_eq!(args.step, 5.0);
        assert_eq!(args.out, PathBuf::from("out/f.png"));
    }

    #[test]
    fn blend_names_are_kebab_case() {
        let args = Args::try_parse_from(["waterbox-studio", "--blend", "soft-light"]).unwrap();
        assert_eq!(PatternBlend::from(args.blend), PatternBlend::SoftLight);
    }

    #[test]
    fn theme_file_conflicts_with_generate() {
        assert!(Args::try_parse_from(["waterbox-studio", "-t", "a.toml", "-g"]).is_err());
    }

    #[test]
    fn contrast_requires_generate() {
        assert!(Args::try_parse_from(["waterbox-studio", "--contrast", "10"]).is_err());
    }
}
