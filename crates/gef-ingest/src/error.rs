#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("input file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to build table from {path}: {source}")]
    Frame {
        path: PathBuf,
        #[source]
        source: polars::prelude::PolarsError,
    },

    #[error("{path} has no header row")]
    EmptyHeader { path: PathBuf },

    #[error("{path} is missing required column {column:?}")]
    MissingColumn { path: PathBuf, column: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn frame(path: impl Into<PathBuf>, source: polars::prelude::PolarsError) -> Self {
        Self::Frame {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
