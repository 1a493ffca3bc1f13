use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gef_model::{CaseFamily, CaseStats};

use crate::commands::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    let report = &outcome.report;
    println!("Root: {}", report.root.display());
    if report.dry_run {
        println!("Mode: dry run");
    }
    if let Some(seed) = report.seed {
        println!("Seed: {seed}");
    }
    println!(
        "Records: {} ({} rejected)",
        report.base_records, report.rejected_records
    );
    println!(
        "Sets: land {} | bio {} | multi-country {} | multi-agency {}",
        report.membership.land_focus,
        report.membership.bio_focus,
        report.membership.multicountry,
        report.membership.multiagency
    );
    if let Some(path) = &outcome.classified_table {
        println!("Classified table: {}", path.display());
    }
    if let Some(path) = &outcome.report_path {
        println!("Run report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Case"),
        header_cell("Family"),
        header_cell("Treatment"),
        header_cell("Control"),
        header_cell("Overlap"),
        header_cell("Total"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 6, CellAlignment::Center);

    let mut totals = CaseStats::default();
    for case in &report.cases {
        totals.treatment += case.stats.treatment;
        totals.control += case.stats.control;
        totals.overlap += case.stats.overlap;
        totals.total += case.stats.total;
        table.add_row(vec![
            Cell::new(&case.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            family_cell(case.family),
            count_cell(case.stats.treatment, None),
            count_cell(case.stats.control, None),
            count_cell(case.stats.overlap, Some(Color::Yellow)),
            count_cell(case.stats.total, None),
            written_cell(case.output_path.as_ref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} cases", report.cases.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals.treatment).add_attribute(Attribute::Bold),
        Cell::new(totals.control).add_attribute(Attribute::Bold),
        count_cell(totals.overlap, Some(Color::Yellow)).add_attribute(Attribute::Bold),
        Cell::new(totals.total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn family_cell(family: CaseFamily) -> Cell {
    let color = match family {
        CaseFamily::Programmatic => Color::Green,
        CaseFamily::Biodiversity => Color::Magenta,
        CaseFamily::MultiFocalArea => Color::Yellow,
    };
    Cell::new(family.label()).fg(color)
}

fn count_cell(count: usize, highlight: Option<Color>) -> Cell {
    match highlight {
        _ if count == 0 => dim_cell(count),
        Some(color) => Cell::new(count).fg(color).add_attribute(Attribute::Bold),
        None => Cell::new(count),
    }
}

fn written_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
