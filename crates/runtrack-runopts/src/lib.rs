//! Run options
//!
//! Optional parameters collected before a run is created: configuration,
//! display name, run identifier, project and telemetry. Every field starts
//! unset; options are applied in order and the last one to touch a field wins.
//!
//! Three equivalent ways to produce a [`RunParams`]:
//! - a list of [`RunOption`] values from [`with_config`], [`with_name`],
//!   [`with_run_id`], [`with_project`] and [`with_telemetry`]
//! - the fluent [`RunParamsBuilder`]
//! - an option record (JSON, YAML or TOML map) or environment variables,
//!   which both yield an ordered `Vec<RunOption>`
//!
//! # Example
//!
//! ```
//! use runtrack_runopts::{with_name, with_project, with_run_id, RunParams};
//!
//! let params = RunParams::from_options([
//!     with_project("alpha"),
//!     with_name("run1"),
//!     with_run_id("id-42"),
//!     with_project("beta"),
//! ]);
//!
//! assert_eq!(params.project(), Some("beta"));
//! assert_eq!(params.name(), Some("run1"));
//! assert!(params.config().is_none());
//! ```

#![warn(unreachable_pub)]

pub mod builder;
pub mod env;
pub mod error;
pub mod option;
pub mod params;
pub mod record;

pub use builder::RunParamsBuilder;
pub use env::{options_from_env, options_from_lookup, DEFAULT_ENV_PREFIX};
pub use error::RunOptionsError;
pub use option::{with_config, with_name, with_project, with_run_id, with_telemetry, RunField, RunOption};
pub use params::RunParams;
pub use record::{
    options_from_json, options_from_path, options_from_toml, options_from_yaml, parse_options,
};

pub use runtrack_runconfig::RunConfig;
pub use runtrack_telemetry::TelemetryRecord;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building run parameters
    pub use crate::{
        with_config, with_name, with_project, with_run_id, with_telemetry, RunConfig, RunOption,
        RunParams, RunParamsBuilder, TelemetryRecord,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
