//! Row-level matching rules over ancillary reference tables.
//!
//! Every rule yields a [`MembershipSet`] of normalized identifiers. Rows whose
//! identifier does not normalize, or normalizes to the random-control
//! sentinel, are skipped, never fatal.

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use gef_common::{any_to_string_non_empty, optional_string_column};
use gef_model::{GefId, ProjectType};

use crate::error::{ClassifyError, Result};
use crate::membership::MembershipSet;
use crate::normalize::ProjectRecord;

fn column_or_error(df: &DataFrame, table: &str, column: &str) -> Result<Vec<Option<String>>> {
    optional_string_column(df, column).map_err(|_| ClassifyError::MissingColumn {
        table: table.to_string(),
        column: column.to_string(),
    })
}

/// Collect identifiers of rows where `matches(row)` holds.
fn collect_ids(
    table: &str,
    ids: &[Option<String>],
    mut matches: impl FnMut(usize) -> bool,
) -> MembershipSet {
    let mut set = MembershipSet::new();
    let mut skipped = 0usize;
    for (row, raw) in ids.iter().enumerate() {
        if !matches(row) {
            continue;
        }
        match raw.as_deref().and_then(GefId::parse) {
            Some(id) if !id.is_sentinel() => {
                set.insert(id);
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(table, skipped, "skipped matching rows without a usable identifier");
    }
    set
}

/// Identifiers of base records whose type is one of `types`.
pub fn ids_with_type(records: &[ProjectRecord], types: &[ProjectType]) -> MembershipSet {
    records
        .iter()
        .filter(|record| types.contains(&record.project_type))
        .map(|record| record.gef_id.clone())
        .collect()
}

/// Identifiers of rows where `token` equals one of the non-identifier cells.
///
/// This is an exact cell match: `"LD"` matches a cell `LD` but not `LD/BD`.
pub fn token_scan(df: &DataFrame, table: &str, id_column: &str, token: &str) -> Result<MembershipSet> {
    let ids = column_or_error(df, table, id_column)?;
    let others: Vec<_> = df
        .get_columns()
        .iter()
        .filter(|column| column.name().as_str() != id_column)
        .collect();
    Ok(collect_ids(table, &ids, |row| {
        others.iter().any(|column| {
            any_to_string_non_empty(column.get(row).unwrap_or(AnyValue::Null))
                .is_some_and(|value| value == token)
        })
    }))
}

/// Case-sensitive substring test of free text against a keyword list.
///
/// Missing text never matches.
pub fn contains_any(text: Option<&str>, keywords: &[&str]) -> bool {
    match text {
        Some(text) => keywords.iter().any(|keyword| text.contains(keyword)),
        None => false,
    }
}

/// Identifiers of rows whose `text_column` contains any of `keywords`.
pub fn keyword_match(
    df: &DataFrame,
    table: &str,
    id_column: &str,
    text_column: &str,
    keywords: &[&str],
) -> Result<MembershipSet> {
    let ids = column_or_error(df, table, id_column)?;
    let texts = column_or_error(df, table, text_column)?;
    Ok(collect_ids(table, &ids, |row| {
        contains_any(texts[row].as_deref(), keywords)
    }))
}

/// Identifiers of rows whose `column` equals one of `values`.
pub fn value_in(
    df: &DataFrame,
    table: &str,
    id_column: &str,
    column: &str,
    values: &[&str],
) -> Result<MembershipSet> {
    let ids = column_or_error(df, table, id_column)?;
    let cells = column_or_error(df, table, column)?;
    Ok(collect_ids(table, &ids, |row| {
        cells[row]
            .as_deref()
            .is_some_and(|value| values.contains(&value))
    }))
}

/// Identifiers of rows where `column` is present.
pub fn non_missing(df: &DataFrame, table: &str, id_column: &str, column: &str) -> Result<MembershipSet> {
    let ids = column_or_error(df, table, id_column)?;
    let cells = column_or_error(df, table, column)?;
    Ok(collect_ids(table, &ids, |row| cells[row].is_some()))
}
