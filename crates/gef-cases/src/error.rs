use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("case table operation failed: {0}")]
    Frame(#[from] polars::prelude::PolarsError),
    #[error("failed to write case {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: gef_ingest::IngestError,
    },
    #[error("unknown case design: {0}")]
    UnknownDesign(String),
}

pub type Result<T> = std::result::Result<T, CaseError>;
