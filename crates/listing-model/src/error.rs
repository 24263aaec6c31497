use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating model inputs.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to read a run configuration file.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Run configuration is not valid TOML or has the wrong shape.
    #[error("failed to parse config: {source}")]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    /// A `COLUMN=VALUE` default assignment without `=`.
    #[error("invalid default '{assignment}': expected COLUMN=VALUE")]
    InvalidDefault { assignment: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
