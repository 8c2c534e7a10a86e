use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::models::request::{DEFAULT_BRIGHTNESS, DEFAULT_SIZE, DEFAULT_TOLERANCE};
use crate::rendering::ExportFormat;
use crate::services::ShuffleMode;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "LUMA_PALETTE_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Target brightness when none is given
    pub brightness: u8,

    /// Tolerance when none is given
    pub tolerance: u32,

    /// Palette size when none is given
    pub size: usize,

    /// Largest tolerance the CLI accepts
    pub max_tolerance: u32,

    /// Shuffle used when sampling the band
    pub shuffle: ShuffleMode,

    /// Fixed RNG seed for reproducible palettes
    pub seed: Option<u64>,

    /// Build the brightness index before the first request
    pub eager_index: bool,

    /// Output format when none is given
    pub format: ExportFormat,

    /// Swatches per row in SVG output
    pub svg_columns: usize,
}

fn default_max_tolerance() -> u32 {
    20
}

fn default_svg_columns() -> usize {
    6
}

impl AppConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            brightness = config.brightness,
            tolerance = config.tolerance,
            size = config.size,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Reject values the selector or renderer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Invalid("size must be at least 1".to_string()));
        }
        if self.svg_columns == 0 {
            return Err(ConfigError::Invalid(
                "svg_columns must be at least 1".to_string(),
            ));
        }
        if self.tolerance > self.max_tolerance {
            return Err(ConfigError::Invalid(format!(
                "tolerance {} exceeds max_tolerance {}",
                self.tolerance, self.max_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            tolerance: DEFAULT_TOLERANCE,
            size: DEFAULT_SIZE,
            max_tolerance: default_max_tolerance(),
            shuffle: ShuffleMode::default(),
            seed: None,
            eager_index: true,
            format: ExportFormat::default(),
            svg_columns: default_svg_columns(),
        }
    }
}
