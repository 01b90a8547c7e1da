mod cli;
mod export;

use anyhow::{Context, Result};
use log::info;
use tiny_skia::Pixmap;
use waterbox_engine::logging::{init_logging, LoggingConfig};
use waterbox_engine::render::RendererConfig;
use waterbox_gauge::{theme, Renderer, Theme};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = cli::parse();

    init_logging(match &args.log_level {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });

    let base = match &args.theme {
        Some(path) => theme::load_from_path(path)
            .with_context(|| format!("failed to load theme {}", path.display()))?,
        None => Theme::default(),
    };

    if args.dump_theme {
        print!("{}", theme_at(&args, &base, args.value)?.to_toml()?);
        return Ok(());
    }

    let surface = Pixmap::new(args.width, args.height)
        .with_context(|| format!("invalid surface size {}x{}", args.width, args.height))?;
    let config = RendererConfig { pattern_blend: args.blend.into(), ..RendererConfig::default() };
    let mut gauge = Renderer::with_config(surface, config).context("failed to create gauge renderer")?;

    let Some(frames) = args.sweep else {
        gauge.render(args.value, &theme_at(&args, &base, args.value)?);
        export::save_png(gauge.surface(), &args.out)?;
        info!("wrote {}", args.out.display());
        return Ok(());
    };

    let mut value = args.value;
    for index in 0..frames {
        gauge.render(value, &theme_at(&args, &base, value)?);
        export::save_png(gauge.surface(), &export::frame_path(&args.out, index))?;
        value = advance(value, args.step);
    }
    info!("wrote {frames} frames next to {}", args.out.display());
    Ok(())
}

/// Theme for a frame at `value`: the loaded or default theme, or a generated
/// one whose water hue runs from red at 0 to green at 100.
fn theme_at(args: &Args, base: &Theme, value: f32) -> Result<Theme> {
    let mut theme = if args.generate {
        Theme::generated(&args.container, &water_color(value), args.contrast)?
    } else {
        base.clone()
    };
    theme.draw_front |= args.draw_front;
    theme.clip_edges |= args.clip_edges;
    Ok(theme)
}

fn water_color(value: f32) -> String {
    format!("hsla({}, 90%, 50%, 0.7)", value / 100.0 * 120.0)
}

/// Next sweep value, wrapping into `[0, 100)`.
fn advance(value: f32, step: f32) -> f32 {
    (value + step).rem_euclid(100.0)
}
