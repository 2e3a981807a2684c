//! Run configuration values
//!
//! A flat, ordered map from string keys to JSON values. Nested objects are
//! stored as-is; the map itself never interprets them.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::ConfigError;

/// Configuration attached to a run
///
/// Serializes transparently as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunConfig {
    values: Map<String, JsonValue>,
}

impl RunConfig {
    /// Create an empty configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a JSON value
    ///
    /// # Errors
    /// Returns [`ConfigError::NotAnObject`] if the value is not an object
    pub fn from_value(value: JsonValue) -> Result<Self, ConfigError> {
        match value {
            JsonValue::Object(values) => Ok(Self { values }),
            other => Err(ConfigError::not_an_object(&other)),
        }
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or the top level is not an object
    #[inline]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or the top level is not a mapping
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let value: JsonValue = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Parse from TOML string
    ///
    /// # Errors
    /// Returns error if TOML is invalid
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(source)?;
        Self::from_value(toml_to_json(toml::Value::Table(table)))
    }

    /// Create from typed struct
    ///
    /// # Errors
    /// Returns error if the value cannot be serialized or is not a struct/map
    pub fn from_typed<T: Serialize>(value: &T) -> Result<Self, ConfigError> {
        let json =
            serde_json::to_value(value).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        Self::from_value(json)
    }

    /// Convert to typed struct
    ///
    /// # Errors
    /// Returns error if the values don't match the type
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        serde_json::from_value(JsonValue::Object(self.values.clone()))
            .map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Get a top-level value by key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.values.get(key)
    }

    /// Get a nested value by JSON pointer
    ///
    /// # Examples
    /// ```
    /// # use runtrack_runconfig::RunConfig;
    /// # use serde_json::json;
    /// let config = RunConfig::from_json(r#"{"model": {"layers": 4}}"#).unwrap();
    /// assert_eq!(config.pointer("/model/layers"), Some(&json!(4)));
    /// ```
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&JsonValue> {
        let rest = pointer.strip_prefix('/')?;
        let (head, tail) = match rest.split_once('/') {
            Some((head, tail)) => (head, Some(tail)),
            None => (rest, None),
        };
        let key = head.replace("~1", "/").replace("~0", "~");
        let value = self.values.get(&key)?;
        match tail {
            Some(tail) => value.pointer(&format!("/{tail}")),
            None => Some(value),
        }
    }

    /// Insert a value, returning the previous one for that key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
        self.values.insert(key.into(), value.into())
    }

    /// With an additional value
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a value by key
    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.values.remove(key)
    }

    /// Shallow merge: every key of `other` replaces the same key here
    pub fn update(&mut self, other: &RunConfig) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Number of top-level keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the configuration has no keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Top-level keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to pretty JSON string
    ///
    /// # Errors
    /// Returns error if serialization fails (rare for JSON)
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&self.values)
            .map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Consume into the underlying JSON object
    #[inline]
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.values)
    }
}

impl TryFrom<JsonValue> for RunConfig {
    type Error = ConfigError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Map<String, JsonValue>> for RunConfig {
    fn from(values: Map<String, JsonValue>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for RunConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}

/// Convert a TOML value into JSON
///
/// Dates and times become their TOML text, e.g. `"1979-05-27T07:32:00Z"`. Non-finite floats have no JSON
/// form and become `null`.
#[must_use]
pub fn toml_to_json(value: toml::Value) -> JsonValue {
    match value {
        toml::Value::String(s) => JsonValue::String(s),
        toml::Value::Integer(i) => JsonValue::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number),
        toml::Value::Boolean(b) => JsonValue::Bool(b),
        toml::Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        toml::Value::Array(items) => JsonValue::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => JsonValue::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
