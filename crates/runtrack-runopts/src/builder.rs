//! Fluent builder for [`RunParams`]
//!
//! Usage:
//! ```
//! use runtrack_runopts::{with_run_id, RunParams};
//!
//! let params = RunParams::builder()
//!     .project("vision")
//!     .name("baseline")
//!     .option(with_run_id("3f9a"))
//!     .build();
//!
//! assert_eq!(params.run_id(), Some("3f9a"));
//! ```

use runtrack_runconfig::RunConfig;
use runtrack_telemetry::TelemetryRecord;

use crate::option::RunOption;
use crate::params::RunParams;

/// Builder that owns an in-progress [`RunParams`]
///
/// Setters and [`option`](Self::option) calls are applied immediately in call
/// order, so the last call touching a field wins.
#[derive(Debug, Clone, Default)]
pub struct RunParamsBuilder {
    params: RunParams,
}

impl RunParamsBuilder {
    /// Create a builder over a fresh record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building from an existing record
    #[inline]
    #[must_use]
    pub fn from_params(params: RunParams) -> Self {
        Self { params }
    }

    /// With configuration
    #[inline]
    #[must_use]
    pub fn config(mut self, config: RunConfig) -> Self {
        self.params.config = Some(config);
        self
    }

    /// With name
    #[inline]
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.params.name = Some(name.into());
        self
    }

    /// With run identifier
    #[inline]
    #[must_use]
    pub fn run_id(mut self, run_id: impl Into<String>) -> Self {
        self.params.run_id = Some(run_id.into());
        self
    }

    /// With project
    #[inline]
    #[must_use]
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.params.project = Some(project.into());
        self
    }

    /// With telemetry record
    #[inline]
    #[must_use]
    pub fn telemetry(mut self, record: TelemetryRecord) -> Self {
        self.params.telemetry = Some(record);
        self
    }

    /// Apply one option
    #[inline]
    #[must_use]
    pub fn option(mut self, option: RunOption) -> Self {
        option.apply_owned(&mut self.params);
        self
    }

    /// Apply options in order
    #[must_use]
    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = RunOption>,
    {
        self.params.apply_all(options);
        self
    }

    /// Inspect the record built so far
    #[inline]
    #[must_use]
    pub fn params(&self) -> &RunParams {
        &self.params
    }

    /// Finish and hand over the record
    #[inline]
    #[must_use]
    pub fn build(self) -> RunParams {
        self.params
    }
}

impl From<RunParams> for RunParamsBuilder {
    fn from(params: RunParams) -> Self {
        Self::from_params(params)
    }
}
