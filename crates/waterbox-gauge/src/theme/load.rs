use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;
use waterbox_engine::paint::ColorParseError;

use super::Theme;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode theme: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("invalid color {input:?}: {source}")]
    Color {
        input: String,
        #[source]
        source: ColorParseError,
    },
}

impl Theme {
    /// Parses a TOML theme. Missing fields keep their defaults.
    pub fn from_toml(src: &str) -> Result<Theme, ThemeError> {
        Ok(toml::from_str(src)?)
    }

    /// Serializes every field, defaults included.
    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Loads a theme from a TOML file.
pub fn load_from_path(path: &Path) -> Result<Theme, ThemeError> {
    let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let theme = Theme::from_toml(&content)?;
    info!("loaded theme from {}", path.display());
    Ok(theme)
}
