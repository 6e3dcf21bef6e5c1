use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mmis_cli::pipeline::TableReport;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.survey_csv.display());
    println!("Output: {}", result.output_dir.display());
    if result.dry_run {
        println!("Dry run: no files written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Duplicates dropped"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    add_table_row(&mut table, &result.report.participant);
    add_table_row(&mut table, &result.report.mental_health);
    println!("{table}");
    println!(
        "Input rows: {}  Codes decoded: {} (misses: {})  Duration parse failures: {}",
        result.report.input_rows,
        result.report.decode.decoded,
        result.report.decode.misses,
        result.report.duration_failures
    );
}

fn add_table_row(table: &mut Table, report: &TableReport) {
    table.add_row(vec![
        Cell::new(report.name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(report.rows),
        Cell::new(report.columns),
        count_cell(report.duplicates_dropped),
        path_cell(report.path.as_ref()),
    ]);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn path_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
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
