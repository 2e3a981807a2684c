//! Run options
//!
//! A [`RunOption`] is a deferred change to exactly one field of a
//! [`RunParams`]. It owns its value and copies it into the record on every
//! application, so one option can be applied to any number of records.

use runtrack_runconfig::RunConfig;
use runtrack_telemetry::TelemetryRecord;

use crate::params::RunParams;

/// The field of [`RunParams`] an option writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RunField {
    /// Run configuration
    Config,
    /// Display name
    Name,
    /// Run identifier
    RunId,
    /// Project the run belongs to
    Project,
    /// Telemetry record
    Telemetry,
}

impl RunField {
    /// All fields, in declaration order
    pub const ALL: [RunField; 5] = [
        RunField::Config,
        RunField::Name,
        RunField::RunId,
        RunField::Project,
        RunField::Telemetry,
    ];

    /// Canonical key used in option records
    #[inline]
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            RunField::Config => "config",
            RunField::Name => "name",
            RunField::RunId => "runID",
            RunField::Project => "project",
            RunField::Telemetry => "telemetry",
        }
    }

    /// Resolve an option record key
    ///
    /// Telemetry is attached by the run constructor and has no record key.
    #[must_use]
    pub fn from_record_key(key: &str) -> Option<Self> {
        match key {
            "config" => Some(RunField::Config),
            "name" => Some(RunField::Name),
            "runID" | "run_id" | "id" => Some(RunField::RunId),
            "project" => Some(RunField::Project),
            _ => None,
        }
    }
}

impl std::fmt::Display for RunField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A single-field mutation of [`RunParams`]
#[derive(Debug, Clone, PartialEq)]
pub enum RunOption {
    /// Sets the configuration
    Config(RunConfig),
    /// Sets the display name
    Name(String),
    /// Sets the run identifier
    RunId(String),
    /// Sets the project
    Project(String),
    /// Sets the telemetry record
    Telemetry(TelemetryRecord),
}

impl RunOption {
    /// The field this option writes
    #[inline]
    #[must_use]
    pub fn field(&self) -> RunField {
        match self {
            RunOption::Config(_) => RunField::Config,
            RunOption::Name(_) => RunField::Name,
            RunOption::RunId(_) => RunField::RunId,
            RunOption::Project(_) => RunField::Project,
            RunOption::Telemetry(_) => RunField::Telemetry,
        }
    }

    /// Write this option's value into `params`, replacing any previous value
    pub fn apply(&self, params: &mut RunParams) {
        tracing::trace!("Applying run option: {}", self.field());
        match self {
            RunOption::Config(config) => params.config = Some(config.clone()),
            RunOption::Name(name) => params.name = Some(name.clone()),
            RunOption::RunId(id) => params.run_id = Some(id.clone()),
            RunOption::Project(project) => params.project = Some(project.clone()),
            RunOption::Telemetry(record) => params.telemetry = Some(record.clone()),
        }
    }

    /// Consume this option into `params` without cloning its value
    pub fn apply_owned(self, params: &mut RunParams) {
        tracing::trace!("Applying run option: {}", self.field());
        match self {
            RunOption::Config(config) => params.config = Some(config),
            RunOption::Name(name) => params.name = Some(name),
            RunOption::RunId(id) => params.run_id = Some(id),
            RunOption::Project(project) => params.project = Some(project),
            RunOption::Telemetry(record) => params.telemetry = Some(record),
        }
    }
}

/// Option that sets the run configuration to a copy of `config`
#[inline]
#[must_use]
pub fn with_config(config: RunConfig) -> RunOption {
    RunOption::Config(config)
}

/// Option that sets the run name
#[inline]
#[must_use]
pub fn with_name(name: impl Into<String>) -> RunOption {
    RunOption::Name(name.into())
}

/// Option that sets the run identifier
#[inline]
#[must_use]
pub fn with_run_id(run_id: impl Into<String>) -> RunOption {
    RunOption::RunId(run_id.into())
}

/// Option that sets the project
#[inline]
#[must_use]
pub fn with_project(project: impl Into<String>) -> RunOption {
    RunOption::Project(project.into())
}

/// Option that sets the telemetry record
#[inline]
#[must_use]
pub fn with_telemetry(record: TelemetryRecord) -> RunOption {
    RunOption::Telemetry(record)
}
