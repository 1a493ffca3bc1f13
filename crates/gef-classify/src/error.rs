use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("table operation failed: {0}")]
    Frame(#[from] polars::prelude::PolarsError),
    #[error("{table} is missing column {column:?}")]
    MissingColumn { table: String, column: String },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
