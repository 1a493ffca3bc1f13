//! Output slots for finished case tables.

use std::path::PathBuf;

use polars::prelude::DataFrame;

use gef_ingest::{ProjectPaths, write_frame};

use crate::error::{CaseError, Result};

/// Destination for persisted case tables.
pub trait CaseSink {
    /// Write `table` into the slot for case `name`, returning where it went.
    fn write_case(&self, name: &str, table: &DataFrame) -> Result<PathBuf>;
}

/// Writes `{name}_data.csv` into the project's case directory.
#[derive(Debug, Clone)]
pub struct CsvCaseSink {
    paths: ProjectPaths,
}

impl CsvCaseSink {
    pub fn new(paths: ProjectPaths) -> Self {
        Self { paths }
    }
}

impl CaseSink for CsvCaseSink {
    fn write_case(&self, name: &str, table: &DataFrame) -> Result<PathBuf> {
        let path = self.paths.case_table(name);
        write_frame(table, &path).map_err(|source| CaseError::Write {
            name: name.to_string(),
            source,
        })?;
        Ok(path)
    }
}
