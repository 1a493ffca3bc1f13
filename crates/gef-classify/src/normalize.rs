//! Identifier normalization over the merged base table.

use polars::prelude::{BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::{debug, warn};

use gef_common::{optional_string_column, string_column};
use gef_model::{GEF_ID_COLUMN, GefId, ModelError, ProjectType, TYPE_COLUMN, normalize_gef_id};

use crate::error::{ClassifyError, Result};

/// One base-table row after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub project_type: ProjectType,
    pub gef_id: GefId,
}

/// A base-table row dropped because its identifier could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Zero-based row index in the table as loaded.
    pub row: usize,
    pub reason: ModelError,
}

/// The base table with every surviving `gef_id` in canonical form.
#[derive(Debug, Clone)]
pub struct NormalizedBase {
    pub data: DataFrame,
    pub records: Vec<ProjectRecord>,
    pub rejected: Vec<RejectedRecord>,
}

fn require(df: &DataFrame, column: &str) -> Result<()> {
    if df.column(column).is_err() {
        return Err(ClassifyError::MissingColumn {
            table: "base table".to_string(),
            column: column.to_string(),
        });
    }
    Ok(())
}

/// Normalize `gef_id` for every row and drop rows whose identifier is rejected.
///
/// The returned frame keeps the original column order with `gef_id` rewritten
/// as text; `records` is row-aligned with it.
pub fn normalize_base(df: &DataFrame) -> Result<NormalizedBase> {
    require(df, TYPE_COLUMN)?;
    require(df, GEF_ID_COLUMN)?;
    let types = string_column(df, TYPE_COLUMN)?;
    let raw_ids = optional_string_column(df, GEF_ID_COLUMN)?;

    let mut keep = Vec::with_capacity(df.height());
    let mut records = Vec::with_capacity(df.height());
    let mut rejected = Vec::new();
    for (row, (tag, raw)) in types.iter().zip(raw_ids.iter()).enumerate() {
        let project_type = ProjectType::from_tag(tag);
        match normalize_gef_id(raw.as_deref(), &project_type) {
            Ok(gef_id) => {
                keep.push(true);
                records.push(ProjectRecord {
                    project_type,
                    gef_id,
                });
            }
            Err(reason) => {
                debug!(row, %reason, "dropping record with unusable gef_id");
                keep.push(false);
                rejected.push(RejectedRecord { row, reason });
            }
        }
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let mut data = df.filter(&mask)?;
    let ids: Vec<String> = records
        .iter()
        .map(|record| record.gef_id.as_str().to_string())
        .collect();
    data.with_column(Series::new(GEF_ID_COLUMN.into(), ids))?;

    if !rejected.is_empty() {
        warn!(
            rejected = rejected.len(),
            kept = records.len(),
            "dropped base records with malformed gef_id"
        );
    }
    Ok(NormalizedBase {
        data,
        records,
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    fn frame(types: &[&str], ids: &[Option<&str>]) -> DataFrame {
        let types: Vec<String> = types.iter().map(|t| (*t).to_string()).collect();
        let ids: Vec<Option<String>> = ids.iter().map(|id| id.map(str::to_string)).collect();
        DataFrame::new(vec![
            Column::from(Series::new(TYPE_COLUMN.into(), types)),
            Column::from(Series::new(GEF_ID_COLUMN.into(), ids)),
        ])
        .unwrap()
    }

    #[test]
    fn drops_malformed_and_keeps_controls() {
        let df = frame(
            &["prog", "rand", "land", "mfa"],
            &[Some("3.0"), None, Some("abc"), Some("12")],
        );
        let base = normalize_base(&df).unwrap();
        assert_eq!(base.data.height(), 3);
        let ids: Vec<&str> = base.records.iter().map(|r| r.gef_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "-1", "12"]);
        assert_eq!(base.rejected.len(), 1);
        assert_eq!(base.rejected[0].row, 2);
        assert_eq!(
            string_column(&base.data, GEF_ID_COLUMN).unwrap(),
            vec!["3", "-1", "12"]
        );
    }

    #[test]
    fn missing_type_column_is_an_error() {
        let df = DataFrame::new(vec![Column::from(Series::new(
            GEF_ID_COLUMN.into(),
            vec!["1".to_string()],
        ))])
        .unwrap();
        assert!(matches!(
            normalize_base(&df),
            Err(ClassifyError::MissingColumn { .. })
        ));
    }
}
