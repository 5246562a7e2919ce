//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Settings-file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("settings file parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("settings serialization error")]
    Serialize(#[from] toml::ser::Error),

    #[error("section `[{0}]` did not serialize to a table")]
    Shape(&'static str),
}
