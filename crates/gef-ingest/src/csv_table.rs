use std::collections::BTreeSet;
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};

use gef_common::any_to_string;

use crate::error::{IngestError, Result};

/// Raw CSV contents: normalized headers plus string cells padded to the header width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Build a string-typed frame; empty cells become nulls.
    pub fn into_frame(self) -> std::result::Result<DataFrame, polars::prelude::PolarsError> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.headers.len());
        for (idx, header) in self.headers.iter().enumerate() {
            let values: Vec<Option<String>> = self
                .rows
                .iter()
                .map(|row| {
                    let value = row.get(idx).map(String::as_str).unwrap_or("");
                    if value.is_empty() {
                        None
                    } else {
                        Some(value.to_string())
                    }
                })
                .collect();
            columns.push(Series::new(header.as_str().into(), values).into());
        }
        DataFrame::new(columns)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Name blank headers by position and suffix repeats with `.1`, `.2`, ...
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut unique = Vec::with_capacity(headers.len());
    for (idx, header) in headers.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("column_{}", idx + 1)
        } else {
            header
        };
        let mut name = base.clone();
        let mut suffix = 1usize;
        while seen.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(name.clone());
        unique.push(name);
    }
    unique
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a header-first, double-quoted UTF-8 CSV file.
///
/// Blank lines are skipped and short rows are padded with missing cells.
/// Blank or repeated header names are made unique.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    if !path.is_file() {
        return Err(IngestError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quote(b'"')
        .from_path(path)
        .map_err(|error| IngestError::csv(path, error))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| IngestError::csv(path, error))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }
    let headers = unique_headers(headers);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::csv(path, error))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

/// Load a CSV file straight into a string-typed frame.
pub fn read_frame(path: &Path) -> Result<DataFrame> {
    let table = read_csv_table(path)?;
    table
        .into_frame()
        .map_err(|error| IngestError::frame(path, error))
}

/// Fail with [`IngestError::MissingColumn`] unless every column is present.
pub fn require_columns(df: &DataFrame, path: &Path, columns: &[&str]) -> Result<()> {
    for column in columns {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

/// Write a frame as CSV, rendering nulls as empty text.
///
/// Parent directories are created as needed.
pub fn write_frame(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|error| IngestError::io(parent, error))?;
    }
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_path(path)
        .map_err(|error| IngestError::csv(path, error))?;
    let headers: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    writer
        .write_record(&headers)
        .map_err(|error| IngestError::csv(path, error))?;
    let columns = df.get_columns();
    let mut record: Vec<String> = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        for column in columns {
            record.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        writer
            .write_record(&record)
            .map_err(|error| IngestError::csv(path, error))?;
    }
    writer.flush().map_err(|error| IngestError::io(path, error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_whitespace_is_collapsed() {
        assert_eq!(normalize_header("\u{feff} GEF   ID "), "GEF ID");
        assert_eq!(normalize_header("Secondary agency(ies)"), "Secondary agency(ies)");
    }

    #[test]
    fn blank_and_repeated_headers_are_renamed() {
        let headers = ["GEF ID", "", "Focal", "", "Focal", "Focal.1"]
            .map(String::from)
            .to_vec();
        assert_eq!(
            unique_headers(headers),
            vec!["GEF ID", "column_2", "Focal", "column_4", "Focal.1", "Focal.1.1"]
        );
    }

    #[test]
    fn empty_cells_become_nulls() {
        let table = CsvTable {
            headers: vec!["GEF_ID".to_string(), "Country".to_string()],
            rows: vec![
                vec!["1".to_string(), "Global".to_string()],
                vec!["2".to_string()],
                vec!["3".to_string(), String::new()],
            ],
        };
        let df = table.into_frame().unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.column("Country").unwrap().null_count(), 2);
    }
}
