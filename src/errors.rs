use thiserror::Error;

/// Main error type for the tw-merge crate
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Class group '{group}' references undefined theme scale '{theme}'")]
    UnknownTheme { group: String, theme: String },

    #[error("Theme scale '{0}' references itself")]
    ThemeCycle(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MergeError>;
