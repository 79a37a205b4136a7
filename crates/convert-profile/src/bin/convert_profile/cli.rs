//! convert_profile cli interface

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use std::ffi::OsString;
use std::fmt::Formatter;
use std::path::PathBuf;

/// Convert a Traffic Control Traffic Server mid/edge cache profile to a newer version
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of input profile
    #[clap(long = "input_profile", alias = "input-profile")]
    pub input_profile: Option<PathBuf>,

    /// Path to conversion rules
    #[clap(long = "rules")]
    pub rules: Option<PathBuf>,

    /// Path to write output file to. If not given, uses stdout
    #[clap(long = "out")]
    pub out: Option<PathBuf>,

    /// Ignore parameter value, making all recommended changes
    ///
    /// Also accepts an explicit value: --force=true, --force=false
    #[clap(
        long = "force",
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
    )]
    pub force: bool,

    #[arg(long = "output-format", default_value_t)]
    pub format: OutputFormat,
}

impl Cli {
    /// Parses the process arguments, accepting single dash long flags
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

const LONG_FLAGS: &[&str] = &[
    "input_profile",
    "input-profile",
    "rules",
    "out",
    "force",
    "output-format",
];

/// Rewrites `-input_profile x` and `-force` into their `--` form
pub fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .enumerate()
        .map(|(position, arg)| {
            if position == 0 {
                return arg;
            }

            let Some(text) = arg.to_str() else {
                return arg;
            };

            let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };

            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if LONG_FLAGS.contains(&name) {
                format!("-{text}").into()
            } else {
                arg
            }
        })
        .collect()
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}
