use std::path::Path;

use crate::error::ConfigError;
use crate::game::{GameMode, GridSpec};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub ui: UiConfig,
}

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side length of the square grid
    pub size: usize,
    /// Marks in a row needed to win
    pub run_length: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            size: GridSpec::STANDARD.size(),
            run_length: GridSpec::STANDARD.run_length(),
        }
    }
}

impl GridConfig {
    pub fn spec(&self) -> Result<GridSpec, ConfigError> {
        Ok(GridSpec::new(self.size, self.run_length)?)
    }
}

/// Front-end preferences.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Start with cues silenced
    pub muted: bool,
    /// Skip the menu and start straight into this mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<GameMode>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.spec().map(|_| ())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
