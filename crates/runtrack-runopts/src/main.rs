//! `runopts`: inspect how run options resolve.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use runtrack_runopts::{
    options_from_env, options_from_path, with_config, with_name, with_project, with_run_id,
    RunConfig, RunParams, DEFAULT_ENV_PREFIX,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("runopts")
        .version(runtrack_runopts::VERSION)
        .about("Resolve run-initialization options")
        .subcommand_required(true)
        .subcommand(
            Command::new("resolve")
                .about("Layer options from a record file, the environment and flags, then print the result")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Option record (.json, .yaml, .yml or .toml)"),
                )
                .arg(
                    Arg::new("env")
                        .long("env")
                        .action(ArgAction::SetTrue)
                        .help("Read <PREFIX>_CONFIG, _NAME, _RUN_ID and _PROJECT"),
                )
                .arg(
                    Arg::new("env-prefix")
                        .long("env-prefix")
                        .default_value(DEFAULT_ENV_PREFIX)
                        .help("Prefix for environment variables"),
                )
                .arg(Arg::new("name").long("name").help("Run name"))
                .arg(Arg::new("run-id").long("run-id").help("Run identifier"))
                .arg(Arg::new("project").long("project").help("Project"))
                .arg(
                    Arg::new("config-json")
                        .long("config-json")
                        .help("Run configuration as a JSON object"),
                ),
        )
}

fn resolve(args: &ArgMatches) -> anyhow::Result<RunParams> {
    let mut params = RunParams::new();

    if let Some(path) = args.get_one::<PathBuf>("file") {
        let options = options_from_path(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?;
        params.apply_all(options);
    }

    if args.get_flag("env") {
        let prefix = args
            .get_one::<String>("env-prefix")
            .map_or(DEFAULT_ENV_PREFIX, String::as_str);
        params.apply_all(options_from_env(prefix)?);
    }

    let mut flags = Vec::new();
    if let Some(raw) = args.get_one::<String>("config-json") {
        let config = RunConfig::from_json(raw).context("invalid --config-json")?;
        flags.push(with_config(config));
    }
    if let Some(name) = args.get_one::<String>("name") {
        flags.push(with_name(name.as_str()));
    }
    if let Some(run_id) = args.get_one::<String>("run-id") {
        flags.push(with_run_id(run_id.as_str()));
    }
    if let Some(project) = args.get_one::<String>("project") {
        flags.push(with_project(project.as_str()));
    }
    params.apply_all(flags);

    Ok(params)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("resolve", args)) => {
            let params = resolve(args)?;
            let fields: Vec<_> = params.set_fields().iter().map(ToString::to_string).collect();
            tracing::info!("Resolved run params with fields: [{}]", fields.join(", "));
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}
