//! Run configuration assembled from command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};

use gef_cases::RunOptions;
use gef_classify::ClassifyOptions;
use gef_ingest::{ProjectPaths, resolve_root};

use crate::cli::Cli;

const TRUTHY: [&str; 6] = ["1", "true", "t", "yes", "y", "on"];
const FALSY: [&str; 6] = ["0", "false", "f", "no", "n", "off"];

/// Parse the positional dry-run token (case-insensitive).
pub fn parse_dry_run_token(token: &str) -> Result<bool, String> {
    let lowered = token.trim().to_ascii_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(format!(
            "expected one of {} (dry run) or {} (write outputs), got '{token}'",
            TRUTHY.join("/"),
            FALSY.join("/")
        ))
    }
}

/// Everything a run needs to know, independent of clap.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub strict_dry_run: bool,
    pub seed: Option<u64>,
    /// Design names to build; empty means the whole catalog.
    pub cases: Vec<String>,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = resolve_root(cli.root.as_deref()).context("resolve working root")?;
        Ok(Self {
            root,
            output_dir: cli.output_dir.clone(),
            dry_run: cli.dry_run.unwrap_or(false),
            strict_dry_run: cli.strict_dry_run,
            seed: cli.seed,
            cases: cli.cases.clone(),
        })
    }

    pub fn paths(&self) -> ProjectPaths {
        let paths = ProjectPaths::new(&self.root);
        match &self.output_dir {
            Some(dir) => paths.with_case_dir(dir),
            None => paths,
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            dry_run: self.dry_run,
            strict_dry_run: self.strict_dry_run,
        }
    }

    pub fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions { seed: self.seed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_tokens() {
        for token in ["1", "true", "T", "Yes", "y", "ON"] {
            assert_eq!(parse_dry_run_token(token), Ok(true), "{token}");
        }
        for token in ["0", "false", "F", "NO", "n", "off"] {
            assert_eq!(parse_dry_run_token(token), Ok(false), "{token}");
        }
        assert!(parse_dry_run_token("maybe").is_err());
        assert!(parse_dry_run_token("").is_err());
    }

    #[test]
    fn output_dir_overrides_case_dir() {
        let config = RunConfig {
            root: PathBuf::from("/work"),
            output_dir: Some(PathBuf::from("/out")),
            dry_run: false,
            strict_dry_run: false,
            seed: None,
            cases: Vec::new(),
        };
        let paths = config.paths();
        assert_eq!(paths.case_table("m1"), PathBuf::from("/out/m1_data.csv"));
        assert_eq!(
            paths.classified_table(),
            PathBuf::from("/work/data_prep/classified_data.csv")
        );
    }
}
