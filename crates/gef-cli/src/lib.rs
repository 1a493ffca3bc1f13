//! CLI library components for the GEF case builder.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
