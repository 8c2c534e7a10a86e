use luma_index::IndexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(#[from] IndexError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize palette: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid render option: {0}")]
    InvalidOption(String),
}
