//! Catalog evaluation: one case build per design.

use std::time::Instant;

use tracing::{info, info_span, warn};

use gef_classify::ClassifiedTable;
use gef_model::CaseSummary;

use crate::builder::{CaseBuilder, Persist};
use crate::catalog::{CaseDesign, find_design};
use crate::error::{CaseError, Result};
use crate::sink::CaseSink;

/// Write policy for a catalog run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip writes for ordinary designs.
    pub dry_run: bool,
    /// Also skip writes for designs marked always-persist.
    pub strict_dry_run: bool,
}

impl RunOptions {
    pub fn should_persist(&self, design: &CaseDesign) -> bool {
        if !self.dry_run {
            return true;
        }
        design.always_persist && !self.strict_dry_run
    }
}

/// Keep only the named designs, preserving catalog order.
///
/// An empty `names` list selects the whole catalog.
pub fn select_designs(catalog: Vec<CaseDesign>, names: &[String]) -> Result<Vec<CaseDesign>> {
    if names.is_empty() {
        return Ok(catalog);
    }
    for name in names {
        if find_design(&catalog, name).is_none() {
            return Err(CaseError::UnknownDesign(name.clone()));
        }
    }
    Ok(catalog
        .into_iter()
        .filter(|design| names.iter().any(|name| name == design.name))
        .collect())
}

/// Build every design in order and summarize the results.
pub fn run_designs(
    base: &ClassifiedTable,
    designs: &[CaseDesign],
    sink: &dyn CaseSink,
    options: RunOptions,
) -> Result<Vec<CaseSummary>> {
    let builder = CaseBuilder::new(base);
    let mut summaries = Vec::with_capacity(designs.len());
    for design in designs {
        let span = info_span!("case", name = design.name);
        let _guard = span.enter();
        let start = Instant::now();
        let persist = if options.should_persist(design) {
            if options.dry_run {
                warn!(case = design.name, "design always persists; writing despite dry run");
            }
            Persist::To(sink)
        } else {
            Persist::DryRun
        };
        let built = builder.build_case(design.name, &design.treatment, &design.control, persist)?;
        info!(
            case = design.name,
            treatment = built.stats.treatment,
            control = built.stats.control,
            total = built.stats.total,
            written = built.written.is_some(),
            duration_ms = start.elapsed().as_millis(),
            "case built"
        );
        summaries.push(CaseSummary {
            name: design.name.to_string(),
            family: design.family,
            stats: built.stats,
            output_path: built.written,
        });
    }
    Ok(summaries)
}
