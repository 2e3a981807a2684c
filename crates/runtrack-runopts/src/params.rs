//! Run parameters
//!
//! The record handed to the run constructor. Every field is optional and
//! `None` means "not specified by the caller", which is different from
//! `Some(String::new())`.

use runtrack_runconfig::RunConfig;
use runtrack_telemetry::TelemetryRecord;
use serde::{Deserialize, Serialize};

use crate::builder::RunParamsBuilder;
use crate::option::{RunField, RunOption};

/// Parameters for initializing a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    /// Run configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RunConfig>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Run identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    /// Project the run belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Telemetry record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryRecord>,
}

impl RunParams {
    /// Create a record with every field unset
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fluent builder
    #[inline]
    #[must_use]
    pub fn builder() -> RunParamsBuilder {
        RunParamsBuilder::new()
    }

    /// Apply options in order to a fresh record
    #[must_use]
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = RunOption>,
    {
        let mut params = Self::new();
        params.apply_all(options);
        params
    }

    /// Apply a single option
    pub fn apply(&mut self, option: &RunOption) -> &mut Self {
        option.apply(self);
        self
    }

    /// Apply options in order; later options win
    pub fn apply_all<I>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = RunOption>,
    {
        let mut applied = 0usize;
        for option in options {
            option.apply_owned(self);
            applied += 1;
        }
        tracing::debug!("Applied {} run options", applied);
        self
    }

    /// Merge `other` on top of this record: fields set there replace ours
    #[must_use]
    pub fn overlay(mut self, other: RunParams) -> Self {
        if other.config.is_some() {
            self.config = other.config;
        }
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.run_id.is_some() {
            self.run_id = other.run_id;
        }
        if other.project.is_some() {
            self.project = other.project;
        }
        if other.telemetry.is_some() {
            self.telemetry = other.telemetry;
        }
        self
    }

    /// Configuration, if set
    #[inline]
    #[must_use]
    pub fn config(&self) -> Option<&RunConfig> {
        self.config.as_ref()
    }

    /// Name, if set
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run identifier, if set
    #[inline]
    #[must_use]
    pub fn run_id(&self) -> Option<&str> {
        self.run_id.as_deref()
    }

    /// Project, if set
    #[inline]
    #[must_use]
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Telemetry record, if set
    #[inline]
    #[must_use]
    pub fn telemetry(&self) -> Option<&TelemetryRecord> {
        self.telemetry.as_ref()
    }

    /// Whether a field has been set
    #[must_use]
    pub fn is_set(&self, field: RunField) -> bool {
        match field {
            RunField::Config => self.config.is_some(),
            RunField::Name => self.name.is_some(),
            RunField::RunId => self.run_id.is_some(),
            RunField::Project => self.project.is_some(),
            RunField::Telemetry => self.telemetry.is_some(),
        }
    }

    /// Fields that have been set, in declaration order
    #[must_use]
    pub fn set_fields(&self) -> Vec<RunField> {
        RunField::ALL
            .into_iter()
            .filter(|field| self.is_set(*field))
            .collect()
    }

    /// Whether no field has been set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set_fields().is_empty()
    }
}

impl FromIterator<RunOption> for RunParams {
    fn from_iter<I: IntoIterator<Item = RunOption>>(iter: I) -> Self {
        Self::from_options(iter)
    }
}

impl Extend<RunOption> for RunParams {
    fn extend<I: IntoIterator<Item = RunOption>>(&mut self, iter: I) {
        self.apply_all(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{with_config, with_name, with_project, with_run_id, with_telemetry};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn zero_options_leave_everything_unset() {
        let params = RunParams::from_options(Vec::new());
        assert!(params.is_empty());
        assert_eq!(params, RunParams::default());
    }

    #[test]
    fn last_write_wins() {
        let params = RunParams::from_options([with_project("alpha"), with_project("beta")]);
        assert_eq!(params.project(), Some("beta"));
    }

    #[test]
    fn name_and_run_id() {
        let params = RunParams::from_options([with_name("run1"), with_run_id("id-42")]);
        assert_eq!(params.name(), Some("run1"));
        assert_eq!(params.run_id(), Some("id-42"));
        assert!(params.config().is_none());
        assert_eq!(params.project(), None);
        assert_eq!(params.set_fields(), vec![RunField::Name, RunField::RunId]);
    }

    #[test]
    fn empty_name_is_set() {
        let params = RunParams::from_options([with_name("")]);
        assert_eq!(params.name(), Some(""));
        assert!(params.is_set(RunField::Name));
        assert_ne!(params, RunParams::default());
    }

    #[test]
    fn reused_option_does_not_share_state() {
        let option = with_name("shared");
        let mut a = RunParams::new();
        let mut b = RunParams::new();
        a.apply(&option);
        b.apply(&option);

        a.name.as_mut().unwrap().push_str("-changed");
        assert_eq!(a.name(), Some("shared-changed"));
        assert_eq!(b.name(), Some("shared"));
    }

    #[test]
    fn collect_and_extend() {
        let mut params: RunParams = vec![with_project("p1")].into_iter().collect();
        params.extend([with_project("p2"), with_name("n")]);
        assert_eq!(params.project(), Some("p2"));
        assert_eq!(params.name(), Some("n"));
    }

    #[test]
    fn overlay_prefers_set_fields_of_other() {
        let base = RunParams::from_options([with_name("base"), with_project("proj")]);
        let top = RunParams::from_options([with_name("top"), with_run_id("xyz")]);
        let merged = base.overlay(top);

        assert_eq!(merged.name(), Some("top"));
        assert_eq!(merged.project(), Some("proj"));
        assert_eq!(merged.run_id(), Some("xyz"));
    }

    #[test]
    fn serializes_only_set_fields() {
        let params = RunParams::from_options([
            with_config(RunConfig::new().with("epochs", 3)),
            with_name(""),
            with_telemetry(TelemetryRecord::new().with_feature("offline")),
        ]);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "config": {"epochs": 3},
                "name": "",
                "telemetry": {"features": ["offline"]}
            })
        );

        let back: RunParams = serde_json::from_value(value).unwrap();
        assert_eq!(back, params);
    }
}
