//! Run telemetry
//!
//! Client metadata sent alongside a run: library versions, platform, enabled
//! features and free-form labels. Recording and uploading telemetry happens
//! elsewhere; this crate only defines the record.

#![warn(unreachable_pub)]

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Telemetry record attached to a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Version of the command line tool that started the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli_version: Option<String>,
    /// Version of the client core library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_version: Option<String>,
    /// Operating system and architecture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Client features used by the run
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub features: BTreeSet<String>,
    /// Free-form labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl TelemetryRecord {
    /// Create an empty record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record describing this client build and host
    #[must_use]
    pub fn current() -> Self {
        Self::new()
            .with_core_version(VERSION)
            .with_platform(format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH))
    }

    /// With CLI version
    #[inline]
    #[must_use]
    pub fn with_cli_version(mut self, version: impl Into<String>) -> Self {
        self.cli_version = Some(version.into());
        self
    }

    /// With core version
    #[inline]
    #[must_use]
    pub fn with_core_version(mut self, version: impl Into<String>) -> Self {
        self.core_version = Some(version.into());
        self
    }

    /// With platform
    #[inline]
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// With an enabled feature
    #[inline]
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    /// With a label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Check whether a feature was recorded
    #[inline]
    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cli_version.is_none()
            && self.core_version.is_none()
            && self.platform.is_none()
            && self.features.is_empty()
            && self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_record() {
        let record = TelemetryRecord::new();
        assert!(record.is_empty());
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({}));
    }

    #[test]
    fn current_fills_version_and_platform() {
        let record = TelemetryRecord::current();
        assert_eq!(record.core_version.as_deref(), Some(VERSION));
        assert!(record
            .platform
            .as_deref()
            .is_some_and(|p| p.starts_with(std::env::consts::OS)));
        assert!(!record.is_empty());
    }

    #[test]
    fn features_are_deduplicated() {
        let record = TelemetryRecord::new()
            .with_feature("offline")
            .with_feature("offline")
            .with_feature("resume");
        assert_eq!(record.features.len(), 2);
        assert!(record.has_feature("resume"));
        assert!(!record.has_feature("sweep"));
    }

    #[test]
    fn serde_skips_unset_fields() {
        let record = TelemetryRecord::new()
            .with_cli_version("0.19.1")
            .with_label("team", "vision");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"cli_version": "0.19.1", "labels": {"team": "vision"}})
        );

        let back: TelemetryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
