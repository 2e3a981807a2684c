use pretty_assertions::assert_eq;
use proptest::prelude::*;
use runtrack_runopts::prelude::*;
use runtrack_runopts::{options_from_path, RunField};
use runtrack_test_utils::{all_options, arb_options, full_params, last_write, sample_config};

#[test]
fn test_fresh_params_are_unset() {
    let params = RunParams::new();
    for field in RunField::ALL {
        assert!(!params.is_set(field));
    }
}

#[test]
fn test_project_alpha_then_beta() {
    let params = RunParams::from_options([with_project("alpha"), with_project("beta")]);
    assert_eq!(params.project(), Some("beta"));
}

#[test]
fn test_name_and_run_id_only() {
    let params = RunParams::from_options([with_name("run1"), with_run_id("id-42")]);
    assert_eq!(params.name(), Some("run1"));
    assert_eq!(params.run_id(), Some("id-42"));
    assert!(params.config().is_none());
    assert!(params.project().is_none());
}

#[test]
fn test_empty_name_differs_from_unset() {
    let explicit = RunParams::from_options([with_name("")]);
    let unset = RunParams::new();
    assert_eq!(explicit.name(), Some(""));
    assert_eq!(unset.name(), None);
}

#[test]
fn test_full_params_from_fixture() {
    let params = full_params();
    assert_eq!(params.config(), Some(&sample_config()));
    assert_eq!(params.set_fields(), RunField::ALL.to_vec());
}

#[test]
fn test_record_file_matches_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    std::fs::write(
        &path,
        "config:\n  learning_rate: 0.001\n  epochs: 20\n  layers: [128, 64]\nname: baseline\nrunID: 3f9a2c\nproject: vision\n",
    )
    .unwrap();

    let from_file = RunParams::from_options(options_from_path(&path).unwrap());
    let from_code = RunParams::from_options(all_options().into_iter().take(4));
    assert_eq!(from_file, from_code);
}

#[test]
fn test_json_record_file_matches_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(
        &path,
        r#"{
            "config": {"learning_rate": 0.001, "epochs": 20, "layers": [128, 64]},
            "name": "baseline",
            "runID": "3f9a2c",
            "project": "vision"
        }"#,
    )
    .unwrap();

    let from_file = RunParams::from_options(options_from_path(&path).unwrap());
    let from_code = RunParams::from_options(all_options().into_iter().take(4));
    assert_eq!(from_file, from_code);
}

#[test]
fn test_toml_record_file_matches_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.toml");
    std::fs::write(
        &path,
        "name = \"baseline\"\nrunID = \"3f9a2c\"\nproject = \"vision\"\n\n[config]\nlearning_rate = 0.001\nepochs = 20\nlayers = [128, 64]\n",
    )
    .unwrap();

    let from_file = RunParams::from_options(options_from_path(&path).unwrap());
    let from_code = RunParams::from_options(all_options().into_iter().take(4));
    assert_eq!(from_file, from_code);
}

#[test]
fn test_toml_record_file_with_date() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.toml");
    std::fs::write(&path, "[config]\nstarted = 1979-05-27T07:32:00Z\n").unwrap();

    let params = RunParams::from_options(options_from_path(&path).unwrap());
    let config = params.config().unwrap();
    assert_eq!(config.get("started"), Some(&serde_json::json!("1979-05-27T07:32:00Z")));
}

proptest! {
    #[test]
    fn prop_last_write_wins(options in arb_options(16)) {
        let params = RunParams::from_options(options.clone());

        for field in RunField::ALL {
            match last_write(&options, field) {
                Some(option) => {
                    let mut expected = RunParams::new();
                    option.apply(&mut expected);
                    match field {
                        RunField::Config => prop_assert_eq!(params.config(), expected.config()),
                        RunField::Name => prop_assert_eq!(params.name(), expected.name()),
                        RunField::RunId => prop_assert_eq!(params.run_id(), expected.run_id()),
                        RunField::Project => prop_assert_eq!(params.project(), expected.project()),
                        RunField::Telemetry => prop_assert_eq!(params.telemetry(), expected.telemetry()),
                    }
                }
                None => prop_assert!(!params.is_set(field)),
            }
        }
    }

    #[test]
    fn prop_reused_options_give_independent_records(options in arb_options(8)) {
        let mut first = RunParams::new();
        let mut second = RunParams::new();
        for option in &options {
            first.apply(option);
        }
        for option in &options {
            second.apply(option);
        }
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(second, RunParams::from_options(options));
    }

    #[test]
    fn prop_builder_matches_option_list(options in arb_options(12)) {
        let built = RunParams::builder().options(options.clone()).build();
        prop_assert_eq!(built, RunParams::from_options(options));
    }

    #[test]
    fn prop_overlay_equals_concatenation(a in arb_options(8), b in arb_options(8)) {
        let overlaid = RunParams::from_options(a.clone()).overlay(RunParams::from_options(b.clone()));
        let concatenated = RunParams::from_options(a.into_iter().chain(b));
        prop_assert_eq!(overlaid, concatenated);
    }
}
