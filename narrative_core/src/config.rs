//! Engine configuration: screen geometry and input timing.
//!
//! Every field has a default matching the reference handheld, so an empty TOML
//! document is a valid configuration.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::display::ScreenGeometry;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("font cell must be at least 1x1 pixels, got {width}x{height}")]
    EmptyFontCell { width: u8, height: u8 },
    #[error("screen of {width_px}x{height_px} px holds {columns} columns and {rows} rows; need at least 2 columns and 1 row")]
    ScreenTooSmall {
        width_px: u16,
        height_px: u16,
        columns: usize,
        rows: usize,
    },
}

/// Auto-repeat delays, in frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputTiming {
    /// Up/down scrolling.
    pub scroll_repeat_delay: u8,
    /// Left/right movement inside a menu.
    pub menu_repeat_delay: u8,
}

impl Default for InputTiming {
    fn default() -> Self {
        Self {
            scroll_repeat_delay: 4,
            menu_repeat_delay: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub screen: ScreenGeometry,
    pub timing: InputTiming,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let screen = &self.screen;
        if screen.font_width == 0 || screen.font_height == 0 {
            return Err(ConfigError::EmptyFontCell {
                width: screen.font_width,
                height: screen.font_height,
            });
        }

        let columns = screen.width_cells();
        let rows = screen.height_cells();
        if columns < 2 || rows < 1 {
            return Err(ConfigError::ScreenTooSmall {
                width_px: screen.width_px,
                height_px: screen.height_px,
                columns,
                rows,
            });
        }

        Ok(())
    }
}
