//! Shared utilities for the GEF treatment-case crates.
//!
//! This crate provides the Polars helpers used across the workspace: value
//! rendering, integer parsing for identifiers, and string column access.

pub mod polars;

pub use polars::{
    any_to_string, any_to_string_non_empty, format_numeric, optional_string_column, parse_i64,
    parse_integral, string_column,
};
