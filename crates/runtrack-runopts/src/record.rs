//! Option records
//!
//! A record is a key/value document listing options in the order they should
//! be applied:
//!
//! ```yaml
//! project: vision
//! name: baseline
//! runID: 3f9a
//! config:
//!   lr: 0.01
//! ```
//!
//! Recognized keys are `config`, `name`, `runID` (also `run_id`, `id`) and
//! `project`. A `null` value leaves the field unset.
//!
//! A key repeated within one JSON record yields a single option carrying the
//! last value, positioned where the key first appeared. Layer separate records
//! to override a field.

use runtrack_runconfig::{json_kind, toml_to_json, RunConfig};
use serde_json::Value as JsonValue;
use std::path::Path;

use crate::error::RunOptionsError;
use crate::option::{RunField, RunOption};

/// Turn a parsed record into options, in document order
///
/// # Errors
/// Returns error on unknown keys, wrongly typed values, or a non-object record
///
/// # Examples
/// ```
/// # use runtrack_runopts::{parse_options, RunParams};
/// # use serde_json::json;
/// let options = parse_options(&json!({"name": "run1", "runID": "id-42"})).unwrap();
/// let params = RunParams::from_options(options);
/// assert_eq!(params.run_id(), Some("id-42"));
/// ```
pub fn parse_options(record: &JsonValue) -> Result<Vec<RunOption>, RunOptionsError> {
    let map = match record {
        JsonValue::Object(map) => map,
        // An empty YAML document parses to null
        JsonValue::Null => return Ok(Vec::new()),
        other => return Err(RunOptionsError::NotAnObject(json_kind(other))),
    };

    let mut options = Vec::with_capacity(map.len());
    for (key, value) in map {
        let field = RunField::from_record_key(key)
            .ok_or_else(|| RunOptionsError::UnknownOption(key.clone()))?;

        if value.is_null() {
            tracing::trace!("Skipping null run option: {}", key);
            continue;
        }

        let option = match field {
            RunField::Config => {
                if !value.is_object() {
                    return Err(RunOptionsError::invalid_value(key, "object", value));
                }
                RunOption::Config(RunConfig::from_value(value.clone())?)
            }
            RunField::Name => RunOption::Name(expect_string(key, value)?),
            RunField::RunId => RunOption::RunId(expect_string(key, value)?),
            RunField::Project => RunOption::Project(expect_string(key, value)?),
            RunField::Telemetry => return Err(RunOptionsError::UnknownOption(key.clone())),
        };
        options.push(option);
    }

    tracing::debug!("Parsed {} run options from record", options.len());
    Ok(options)
}

fn expect_string(key: &str, value: &JsonValue) -> Result<String, RunOptionsError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| RunOptionsError::invalid_value(key, "string", value))
}

/// Parse options from a JSON record
///
/// # Errors
/// Returns error if the JSON is invalid or the record is rejected by [`parse_options`]
pub fn options_from_json(source: &str) -> Result<Vec<RunOption>, RunOptionsError> {
    let record: JsonValue = serde_json::from_str(source)?;
    parse_options(&record)
}

/// Parse options from a YAML record
///
/// # Errors
/// Returns error if the YAML is invalid or the record is rejected by [`parse_options`]
pub fn options_from_yaml(source: &str) -> Result<Vec<RunOption>, RunOptionsError> {
    let record: JsonValue = serde_yaml::from_str(source)?;
    parse_options(&record)
}

/// Parse options from a TOML record
///
/// # Errors
/// Returns error if the TOML is invalid or the record is rejected by [`parse_options`]
pub fn options_from_toml(source: &str) -> Result<Vec<RunOption>, RunOptionsError> {
    let table: toml::Table = toml::from_str(source)?;
    parse_options(&toml_to_json(toml::Value::Table(table)))
}

/// Read an option record file, choosing the format from its extension
///
/// Supported extensions: `json`, `yaml`, `yml`, `toml`.
///
/// # Errors
/// Returns error if the file cannot be read, the extension is unknown, or
/// the content is rejected
pub fn options_from_path(path: &Path) -> Result<Vec<RunOption>, RunOptionsError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> Result<Vec<RunOption>, RunOptionsError> = match ext.as_str() {
        "json" => options_from_json,
        "yaml" | "yml" => options_from_yaml,
        "toml" => options_from_toml,
        other => return Err(RunOptionsError::UnsupportedFormat(other.to_owned())),
    };

    let source =
        std::fs::read_to_string(path).map_err(|e| RunOptionsError::io_error(path, e))?;
    tracing::debug!("Loading run options from {}", path.display());
    parse(&source)
}
