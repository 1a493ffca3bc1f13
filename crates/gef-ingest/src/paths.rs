//! Working-root resolution and the fixed input/output layout beneath it.

use std::path::{Path, PathBuf};

use gef_model::AncillarySource;

/// Environment variable for overriding the working root.
pub const ROOT_ENV_VAR: &str = "GEF_CASES_ROOT";

/// Resolve the working root.
///
/// Resolution order:
/// 1. an explicit path (the `--root` flag)
/// 2. `GEF_CASES_ROOT` environment variable
/// 3. the current directory
pub fn resolve_root(explicit: Option<&Path>) -> std::io::Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }
    if let Ok(root) = std::env::var(ROOT_ENV_VAR) {
        if !root.trim().is_empty() {
            return Ok(PathBuf::from(root));
        }
    }
    std::env::current_dir()
}

/// Input and output locations relative to the working root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
    case_dir: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let case_dir = root.join("data_prep").join("analysis_cases");
        Self { root, case_dir }
    }

    /// Redirect case tables and the run report to another directory.
    #[must_use]
    pub fn with_case_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.case_dir = dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_table(&self) -> PathBuf {
        self.root.join("data_prep").join("merged_data.csv")
    }

    pub fn ancillary(&self, source: AncillarySource) -> PathBuf {
        self.root
            .join("raw_data")
            .join("ancillary")
            .join(source.file_name())
    }

    pub fn classified_table(&self) -> PathBuf {
        self.root.join("data_prep").join("classified_data.csv")
    }

    pub fn case_dir(&self) -> &Path {
        &self.case_dir
    }

    pub fn case_table(&self, name: &str) -> PathBuf {
        self.case_dir.join(format!("{name}_data.csv"))
    }

    pub fn run_report(&self) -> PathBuf {
        self.case_dir.join("case_summary.json")
    }
}
