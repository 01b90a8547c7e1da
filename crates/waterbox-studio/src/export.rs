use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tiny_skia::Pixmap;

/// Writes `pixmap` as a straight-alpha RGBA PNG.
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .context("pixel data does not match the image size")?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// `dir/name.png` becomes `dir/name-0007.png` for frame 7.
pub fn frame_path(out: &Path, index: u32) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_owned());
    let name = match out.extension() {
        Some(ext) => format!("{stem}-{index:04}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{index:04}"),
    };
    out.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_numbers_go_before_extension() {
        assert_eq!(frame_path(Path::new("out/gauge.png"), 7), PathBuf::from("out/gauge-0007.png"));
        assert_eq!(frame_path(Path::new("gauge"), 12), PathBuf::from("gauge-0012"));
    }

    #[test]
    fn png_is_written_unpremultiplied() {
        let mut pixmap = Pixmap::new(2, 1).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(200, 100, 50, 128));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        save_png(&pixmap, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (2, 1));
        let px = img.get_pixel(0, 0).0;
        assert_eq!(px[3], 128);
        assert!(px[0].abs_diff(200) <= 2, "{px:?}");
        assert!(px[1].abs_diff(100) <= 2, "{px:?}");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let pixmap = Pixmap::new(1, 1).unwrap();
        assert!(save_png(&pixmap, Path::new("/nonexistent/dir/frame.png")).is_err());
    }
}
