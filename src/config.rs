use crate::error::CanvasError;
use crate::state::{DEFAULT_IMAGE_SOURCE, SelectionMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default = "default_panel_width")]
    pub panel_width: i32,
    #[serde(default)]
    pub show_panel_on_start: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_image_source")]
    pub image_source: String,
    #[serde(default)]
    pub default_mode: SelectionMode,
}

fn default_panel_width() -> i32 {
    320
}

fn default_image_source() -> String {
    DEFAULT_IMAGE_SOURCE.to_string()
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            panel_width: default_panel_width(),
            show_panel_on_start: false,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            image_source: default_image_source(),
            default_mode: SelectionMode::default(),
        }
    }
}

/// Get the path to the config file, if the platform has a config directory
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "magic-canvas")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from the default location, falling back to defaults
pub fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        log::warn!("No config directory available; using defaults");
        return AppConfig::default();
    };

    if !path.exists() {
        return AppConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{e}. Using defaults.");
            AppConfig::default()
        }
    }
}

/// Load configuration from a specific file
pub fn load_config_from(path: &Path) -> Result<AppConfig, CanvasError> {
    let content = std::fs::read_to_string(path).map_err(|source| CanvasError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| CanvasError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
