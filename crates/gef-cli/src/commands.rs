use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use gef_cases::{CsvCaseSink, catalog, run_designs, select_designs};
use gef_classify::{ClassifiedTable, classify, normalize_base};
use gef_ingest::{load_ancillary_tables, load_base_table, write_frame};
use gef_model::RunReport;

use crate::config::RunConfig;
use crate::summary::apply_table_style;

/// Result of a full run.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: RunReport,
    /// Set when the classified base table was written.
    pub classified_table: Option<PathBuf>,
    /// Set when the run report was written.
    pub report_path: Option<PathBuf>,
}

/// Print the design catalog without touching any data.
pub fn run_list_cases() {
    let mut table = Table::new();
    table.set_header(vec!["Case", "Family", "Treatment", "Control", "Description"]);
    apply_table_style(&mut table);
    for design in catalog() {
        let name = if design.always_persist {
            format!("{}*", design.name)
        } else {
            design.name.to_string()
        };
        table.add_row(vec![
            name,
            design.family.label().to_string(),
            design.treatment.to_string(),
            design.control.to_string(),
            design.description.to_string(),
        ]);
    }
    println!("{table}");
    println!("* written even in dry-run mode unless --strict-dry-run is given");
}

pub fn run_cases(config: &RunConfig) -> Result<RunOutcome> {
    let run_span = info_span!("run", root = %config.root.display(), dry_run = config.dry_run);
    let _run_guard = run_span.enter();
    let paths = config.paths();
    let designs = select_designs(catalog(), &config.cases).context("select case designs")?;

    // Load and classify
    let classify_start = Instant::now();
    let classified = info_span!("classify").in_scope(|| -> Result<ClassifiedTable> {
        let base = load_base_table(&paths.base_table()).context("load base table")?;
        let normalized = normalize_base(&base).context("normalize base table")?;
        let ancillary = load_ancillary_tables(&paths).context("load ancillary tables")?;
        classify(normalized, &ancillary, config.classify_options()).context("classify projects")
    })?;
    info!(
        records = classified.len(),
        rejected = classified.rejected,
        duration_ms = classify_start.elapsed().as_millis(),
        "classification stage complete"
    );

    let classified_table = if config.dry_run {
        None
    } else {
        let path = paths.classified_table();
        write_frame(&classified.data, &path)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    // Build cases
    let cases_start = Instant::now();
    let sink = CsvCaseSink::new(paths.clone());
    let cases = info_span!("cases", designs = designs.len())
        .in_scope(|| run_designs(&classified, &designs, &sink, config.run_options()))
        .context("build cases")?;
    info!(
        cases = cases.len(),
        written = cases.iter().filter(|case| case.output_path.is_some()).count(),
        duration_ms = cases_start.elapsed().as_millis(),
        "case stage complete"
    );

    let report = RunReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        root: config.root.clone(),
        dry_run: config.dry_run,
        seed: config.seed,
        base_records: classified.len(),
        rejected_records: classified.rejected,
        membership: classified.sets.counts(),
        cases,
    };
    let report_path = if config.dry_run {
        None
    } else {
        let path = paths.run_report();
        write_report(&report, &path)?;
        Some(path)
    };

    Ok(RunOutcome {
        report,
        classified_table,
        report_path,
    })
}

fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
