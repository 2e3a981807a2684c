//! Testing utilities for runtrack workspace
//!
//! Shared fixtures and proptest strategies for run options.

#![allow(missing_docs)]

use proptest::prelude::*;
use runtrack_runconfig::RunConfig;
use runtrack_runopts::{
    with_config, with_name, with_project, with_run_id, with_telemetry, RunField, RunOption,
    RunParams,
};
use runtrack_telemetry::TelemetryRecord;
use serde_json::json;

pub fn sample_config() -> RunConfig {
    RunConfig::new()
        .with("learning_rate", 0.001)
        .with("epochs", 20)
        .with("layers", json!([128, 64]))
}

pub fn sample_telemetry() -> TelemetryRecord {
    TelemetryRecord::new()
        .with_cli_version("0.17.0")
        .with_platform("linux-x86_64")
        .with_feature("resume")
}

/// One option of every kind, telemetry last
pub fn all_options() -> Vec<RunOption> {
    vec![
        with_config(sample_config()),
        with_name("baseline"),
        with_run_id("3f9a2c"),
        with_project("vision"),
        with_telemetry(sample_telemetry()),
    ]
}

pub fn full_params() -> RunParams {
    RunParams::from_options(all_options())
}

/// Expected final value of `field` after `options`: the last write, if any
pub fn last_write(options: &[RunOption], field: RunField) -> Option<&RunOption> {
    options.iter().rev().find(|option| option.field() == field)
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z0-9-]{1,12}"]
}

fn arb_config() -> impl Strategy<Value = RunConfig> {
    prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

pub fn arb_option() -> impl Strategy<Value = RunOption> {
    prop_oneof![
        arb_config().prop_map(with_config),
        arb_text().prop_map(with_name),
        arb_text().prop_map(with_run_id),
        arb_text().prop_map(with_project),
        "[a-z]{1,8}".prop_map(|f| with_telemetry(TelemetryRecord::new().with_feature(f))),
    ]
}

pub fn arb_options(max: usize) -> impl Strategy<Value = Vec<RunOption>> {
    prop::collection::vec(arb_option(), 0..max)
}
