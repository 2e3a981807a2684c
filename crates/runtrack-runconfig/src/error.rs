//! Error types for run configuration parsing

/// Errors raised while building a [`RunConfig`](crate::RunConfig) from text or typed values
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Source text is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Source text is not valid YAML
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Source text is not valid TOML
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// The document parsed, but its top level is not a key/value mapping
    #[error("run config must be an object, got {0}")]
    NotAnObject(&'static str),

    /// Converting to or from a typed value failed
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ConfigError {
    /// Create a not-an-object error naming the JSON kind that was found
    #[must_use]
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        Self::NotAnObject(json_kind(value))
    }
}

/// Human-readable name of a JSON value's kind
#[must_use]
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
