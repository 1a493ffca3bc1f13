//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions, identifier parsing and string column access.

use polars::prelude::{AnyValue, DataFrame, PolarsResult};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, properly formats numeric types without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use gef_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("LD")), "LD");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "1" } else { "0" }.to_string(),
        other => other.to_string(),
    }
}

/// Converts `AnyValue` to `String`, returning `None` if the result is empty.
///
/// Empty text is the missing-value marker for every table in this workspace.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use gef_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Parses an integer or an integer-valued float (`"7"`, `"7.0"`, `" 12 "`).
///
/// Returns `None` for empty, non-numeric, non-finite or fractional values.
pub fn parse_integral(value: &str) -> Option<i64> {
    if let Some(parsed) = parse_i64(value) {
        return Some(parsed);
    }
    let parsed = value.trim().parse::<f64>().ok()?;
    if !parsed.is_finite() || parsed.fract() != 0.0 {
        return None;
    }
    if parsed < i64::MIN as f64 || parsed >= i64::MAX as f64 {
        return None;
    }
    Some(parsed as i64)
}

/// Extract a column as trimmed strings, with missing values rendered empty.
pub fn string_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        values.push(value.trim().to_string());
    }
    Ok(values)
}

/// Extract a column as optional strings; nulls and blank text become `None`.
pub fn optional_string_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string_non_empty(
            column.get(idx).unwrap_or(AnyValue::Null),
        ));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_numbers() {
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::Float64(1234.0)), "1234");
        assert_eq!(any_to_string(AnyValue::Float64(1.50)), "1.5");
    }

    #[test]
    fn test_any_to_string_boolean() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "1");
        assert_eq!(any_to_string(AnyValue::Boolean(false)), "0");
    }

    #[test]
    fn test_any_to_string_non_empty() {
        assert_eq!(any_to_string_non_empty(AnyValue::Null), None);
        assert_eq!(any_to_string_non_empty(AnyValue::String("  ")), None);
        assert_eq!(
            any_to_string_non_empty(AnyValue::String("Global")),
            Some("Global".to_string())
        );
    }

    #[test]
    fn test_format_numeric_keeps_integers() {
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(-0.0), "0");
    }

    #[test]
    fn test_parse_integral() {
        assert_eq!(parse_integral("7"), Some(7));
        assert_eq!(parse_integral(" 7.0 "), Some(7));
        assert_eq!(parse_integral("4512.000"), Some(4512));
        assert_eq!(parse_integral("-1"), Some(-1));
        assert_eq!(parse_integral("7.5"), None);
        assert_eq!(parse_integral("abc"), None);
        assert_eq!(parse_integral(""), None);
        assert_eq!(parse_integral("NaN"), None);
        assert_eq!(parse_integral("inf"), None);
    }

    #[test]
    fn test_optional_string_column() {
        let series = Series::new(
            "Country".into(),
            vec![Some("Global".to_string()), None, Some(" ".to_string())],
        );
        let df = DataFrame::new(vec![Column::from(series)]).unwrap();
        let values = optional_string_column(&df, "Country").unwrap();
        assert_eq!(values, vec![Some("Global".to_string()), None, None]);
        assert!(optional_string_column(&df, "Missing").is_err());
    }

    mod props {
        use super::super::parse_integral;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn integers_round_trip_through_text(value in -1_000_000_000i64..1_000_000_000) {
                prop_assert_eq!(parse_integral(&value.to_string()), Some(value));
                prop_assert_eq!(parse_integral(&format!("{value}.0")), Some(value));
            }
        }
    }
}
