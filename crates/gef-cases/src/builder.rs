//! Treatment/control partitioning of the classified base table.

use std::path::PathBuf;

use polars::prelude::{BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::debug;

use gef_classify::ClassifiedTable;
use gef_model::{CaseStats, TREATMENT_COLUMN, Treatment};

use crate::error::Result;
use crate::predicate::Predicate;
use crate::sink::CaseSink;

/// Whether a build writes its table.
#[derive(Clone, Copy)]
pub enum Persist<'s> {
    /// Compute the table and statistics only.
    DryRun,
    /// Write the table through the sink.
    To(&'s dyn CaseSink),
}

impl Persist<'_> {
    pub fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun)
    }
}

/// A finished case: the labeled table, its counts, and where it was written.
#[derive(Debug, Clone)]
pub struct BuiltCase {
    pub data: DataFrame,
    pub stats: CaseStats,
    pub written: Option<PathBuf>,
}

/// Builds case tables from a shared, read-only classified table.
///
/// Every build labels its own copy of the base frame; the base is never
/// mutated.
#[derive(Debug, Clone, Copy)]
pub struct CaseBuilder<'a> {
    base: &'a ClassifiedTable,
}

impl<'a> CaseBuilder<'a> {
    pub fn new(base: &'a ClassifiedTable) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &'a ClassifiedTable {
        self.base
    }

    /// Label every base record.
    ///
    /// Treatment is applied first and control second, so a record matching
    /// both predicates ends up as control.
    pub fn label(&self, treatment: &Predicate, control: &Predicate) -> (Vec<Treatment>, CaseStats) {
        let xref = &self.base.cross_reference;
        let mut stats = CaseStats::default();
        let mut labels = vec![Treatment::Unassigned; self.base.records.len()];
        for (label, record) in labels.iter_mut().zip(&self.base.records) {
            let is_treatment = treatment.matches(record, xref);
            let is_control = control.matches(record, xref);
            if is_treatment {
                stats.treatment += 1;
                *label = Treatment::Treatment;
            }
            if is_control {
                stats.control += 1;
                *label = Treatment::Control;
            }
            if is_treatment && is_control {
                stats.overlap += 1;
            }
            if label.is_assigned() {
                stats.total += 1;
            }
        }
        (labels, stats)
    }

    /// Build the case table for one predicate pair.
    ///
    /// Unassigned records are dropped. With [`Persist::To`] the table is
    /// written into `slot`; with [`Persist::DryRun`] nothing is written and the
    /// same statistics are returned.
    pub fn build_case(
        &self,
        slot: &str,
        treatment: &Predicate,
        control: &Predicate,
        persist: Persist<'_>,
    ) -> Result<BuiltCase> {
        let (labels, stats) = self.label(treatment, control);
        if stats.overlap > 0 {
            debug!(
                case = slot,
                overlap = stats.overlap,
                "records matched both predicates and were labeled control"
            );
        }

        let codes: Vec<i32> = labels.iter().copied().map(Treatment::code).collect();
        let keep: Vec<bool> = labels.iter().copied().map(Treatment::is_assigned).collect();
        let mut data = self.base.data.clone();
        data.with_column(Series::new(TREATMENT_COLUMN.into(), codes))?;
        let mask = BooleanChunked::from_slice("assigned".into(), &keep);
        let data = data.filter(&mask)?;

        let written = match persist {
            Persist::DryRun => None,
            Persist::To(sink) => Some(sink.write_case(slot, &data)?),
        };
        Ok(BuiltCase {
            data,
            stats,
            written,
        })
    }
}
