//! CLI argument definitions for the case builder.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use crate::config::parse_dry_run_token;

#[derive(Parser)]
#[command(
    name = "gef-cases",
    version,
    about = "Build treatment/control case tables for the GEF program evaluation",
    long_about = "Classify GEF projects by focal area, geographic and agency scope, then \
                  build one labeled treatment/control table per comparison design.\n\n\
                  Pass a truthy DRY_RUN token (1, true, yes, on, ...) to compute statistics \
                  without writing case tables."
)]
pub struct Cli {
    /// Dry-run switch: 1/true/t/yes/y/on or 0/false/f/no/n/off.
    #[arg(value_name = "DRY_RUN", value_parser = parse_dry_run_token)]
    pub dry_run: Option<bool>,

    /// Working root holding `data_prep/` and `raw_data/` (default: $GEF_CASES_ROOT or cwd).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory for case tables and the run report (default: <ROOT>/data_prep/analysis_cases).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Seed for the random-control flag draw.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// In dry-run mode, skip the designs that are otherwise always written.
    #[arg(long = "strict-dry-run")]
    pub strict_dry_run: bool,

    /// Build only the named design (repeatable).
    #[arg(long = "case", value_name = "NAME")]
    pub cases: Vec<String>,

    /// Print the design catalog and exit.
    #[arg(long = "list-cases")]
    pub list_cases: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
