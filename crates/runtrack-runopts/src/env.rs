//! Options from environment variables
//!
//! With prefix `P` the recognized variables are `P_CONFIG` (a JSON object),
//! `P_NAME`, `P_RUN_ID` and `P_PROJECT`. A variable that is present but empty
//! sets the field to an empty string.

use runtrack_runconfig::RunConfig;

use crate::error::RunOptionsError;
use crate::option::RunOption;

/// Prefix used when none is given
pub const DEFAULT_ENV_PREFIX: &str = "RUNTRACK";

/// Build options from a variable lookup
///
/// Options come out in field order: config, name, run id, project.
///
/// # Errors
/// Returns error if `<prefix>_CONFIG` is not a JSON object
///
/// # Examples
/// ```
/// # use runtrack_runopts::{options_from_lookup, RunParams};
/// let options = options_from_lookup("APP", |var| match var {
///     "APP_PROJECT" => Some("vision".to_string()),
///     _ => None,
/// })
/// .unwrap();
/// assert_eq!(RunParams::from_options(options).project(), Some("vision"));
/// ```
pub fn options_from_lookup<F>(prefix: &str, lookup: F) -> Result<Vec<RunOption>, RunOptionsError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| format!("{prefix}_{suffix}");
    let mut options = Vec::new();

    let config_var = var("CONFIG");
    if let Some(raw) = lookup(&config_var) {
        let config = RunConfig::from_json(&raw)
            .map_err(|e| RunOptionsError::env_error(&config_var, e))?;
        options.push(RunOption::Config(config));
    }
    if let Some(name) = lookup(&var("NAME")) {
        options.push(RunOption::Name(name));
    }
    if let Some(run_id) = lookup(&var("RUN_ID")) {
        options.push(RunOption::RunId(run_id));
    }
    if let Some(project) = lookup(&var("PROJECT")) {
        options.push(RunOption::Project(project));
    }

    tracing::debug!("Read {} run options from {}_* environment", options.len(), prefix);
    Ok(options)
}

/// Build options from the process environment
///
/// Variables that are not valid unicode are ignored.
///
/// # Errors
/// Returns error if `<prefix>_CONFIG` is not a JSON object
pub fn options_from_env(prefix: &str) -> Result<Vec<RunOption>, RunOptionsError> {
    options_from_lookup(prefix, |var| std::env::var(var).ok())
}
