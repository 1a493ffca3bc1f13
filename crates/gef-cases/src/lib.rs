//! Case construction for the GEF program evaluation.
//!
//! A [`CaseDesign`] pairs a treatment and a control [`Predicate`]. The
//! [`CaseBuilder`] applies a design to the classified base table and yields a
//! labeled case table; [`run_designs`] drives the whole catalog.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod predicate;
pub mod runner;
pub mod sink;

pub use builder::{BuiltCase, CaseBuilder, Persist};
pub use catalog::{CaseDesign, catalog, find_design};
pub use error::{CaseError, Result};
pub use predicate::{Predicate, is};
pub use runner::{RunOptions, run_designs, select_designs};
pub use sink::{CaseSink, CsvCaseSink};
