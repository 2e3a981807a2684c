//! Error types for loading run options
//!
//! Building [`RunParams`](crate::RunParams) from options never fails. These
//! errors come from reading options out of records, files and the
//! environment.

use runtrack_runconfig::{json_kind, ConfigError};
use std::path::PathBuf;

/// Errors while turning external input into run options
#[derive(Debug, thiserror::Error)]
pub enum RunOptionsError {
    /// Record key that is not a known option
    #[error("unknown run option: '{0}'")]
    UnknownOption(String),

    /// Known option with a value of the wrong kind
    #[error("invalid value for '{key}': expected {expected}, got {actual}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Option record whose top level is not a mapping
    #[error("option record must be an object, got {0}")]
    NotAnObject(&'static str),

    /// Record text is not valid JSON
    #[error("invalid JSON option record: {0}")]
    Json(#[from] serde_json::Error),

    /// Record text is not valid YAML
    #[error("invalid YAML option record: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Record text is not valid TOML
    #[error("invalid TOML option record: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration value could not be built
    #[error("invalid run config: {0}")]
    Config(#[from] ConfigError),

    /// Environment variable holds an unusable value
    #[error("invalid environment variable {var}: {source}")]
    Env {
        var: String,
        #[source]
        source: ConfigError,
    },

    /// IO error while reading a record file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record file extension with no known format
    #[error("unsupported option record format: '{0}'")]
    UnsupportedFormat(String),
}

impl RunOptionsError {
    /// Create invalid-value error
    pub fn invalid_value(key: impl Into<String>, expected: &'static str, actual: &serde_json::Value) -> Self {
        Self::InvalidValue {
            key: key.into(),
            expected,
            actual: json_kind(actual),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create environment error for a variable
    pub fn env_error(var: impl Into<String>, source: ConfigError) -> Self {
        Self::Env {
            var: var.into(),
            source,
        }
    }
}
