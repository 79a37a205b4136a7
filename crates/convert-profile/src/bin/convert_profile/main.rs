mod cli;

use anyhow::Context;
use convert_profile::convert::{ConvertError, ConvertOptions};
use convert_profile::diagnostic::TracingReport;
use convert_profile::model::Profile;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// Exit status for a profile that does not pass validation
const EXIT_VALIDATION_FAILED: i32 = 2;

fn main() {
    let cli = cli::Cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("CONVERT_PROFILE_LOG")
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        for error in e.chain() {
            eprintln!("{error}")
        }

        let validation_failed = e
            .downcast_ref::<ConvertError>()
            .is_some_and(|error| *error == ConvertError::ValidationFailed);
        std::process::exit(if validation_failed {
            EXIT_VALIDATION_FAILED
        } else {
            1
        });
    }
}

pub fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let input_profile = required(cli.input_profile, "input_profile")?;
    let rules = required(cli.rules, "rules")?;

    tracing::info!("Traffic Control Profile Conversion Utility");
    tracing::info!(path=%input_profile.display(), "Input Profile");
    tracing::info!(path=%rules.display(), "Conversion Rules");
    if cli.force {
        tracing::warn!(
            "Ignoring existing parameter values in comparisons, making all suggested changes"
        );
    }

    let profile = convert_profile::document::load_profile(&input_profile)?;
    let policy = convert_profile::document::load_policy(&rules)?;

    let profile = convert_profile::convert::convert(
        profile,
        &policy,
        ConvertOptions::new(cli.force),
        &mut TracingReport,
    )?;

    output(&cli.format, cli.out.as_deref(), &profile)?;
    Ok(())
}

fn required(path: Option<PathBuf>, flag: &str) -> anyhow::Result<PathBuf> {
    path.with_context(|| format!("Missing required --{flag} parameter"))
}

fn output(format: &cli::OutputFormat, out: Option<&Path>, profile: &Profile) -> anyhow::Result<()> {
    let rendered = match format {
        cli::OutputFormat::Json => convert_profile::document::render_json(profile)?,
        cli::OutputFormat::Yaml => convert_profile::document::render_yaml(profile)?,
    };

    match out {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Cannot write output file {}", path.display()))?,
        None => print!("{rendered}"),
    };

    Ok(())
}
