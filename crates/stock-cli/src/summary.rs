use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stock_cli::types::{FileOutcome, FileReport, RunMode, RunResult};

pub fn print_summary(result: &RunResult) {
    let mode = match result.mode {
        RunMode::File => "file",
        RunMode::Directory => "directory",
    };
    println!("Target ({mode}): {}", result.target.display());
    if result.reports.is_empty() {
        println!("No matching report files.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Period"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Big customer"),
        header_cell("Output / Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_rows = 0usize;
    let mut total_big = 0usize;
    for report in &result.reports {
        let (rows, big) = match &report.outcome {
            FileOutcome::Written(summary) => (Some(summary.rows), Some(summary.big_customer_rows)),
            _ => (None, None),
        };
        total_rows += rows.unwrap_or(0);
        total_big += big.unwrap_or(0);
        table.add_row(vec![
            Cell::new(report.file_name()),
            period_cell(report),
            status_cell(&report.outcome),
            count_cell(rows),
            count_cell(big),
            detail_cell(&report.outcome),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_big).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn period_cell(report: &FileReport) -> Cell {
    match &report.period {
        Some(period) => Cell::new(period),
        None => dim_cell("-"),
    }
}

fn status_cell(outcome: &FileOutcome) -> Cell {
    match outcome {
        FileOutcome::Written(_) => Cell::new("written").fg(Color::Green),
        FileOutcome::NoData => Cell::new("no data").fg(Color::Yellow),
        FileOutcome::Skipped { .. } => Cell::new("skipped").fg(Color::Yellow),
        FileOutcome::Failed { .. } => Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn detail_cell(outcome: &FileOutcome) -> Cell {
    match outcome {
        FileOutcome::Written(summary) => Cell::new(summary.path.display()),
        FileOutcome::NoData => dim_cell("nothing written"),
        FileOutcome::Skipped { reason } => dim_cell(reason),
        FileOutcome::Failed { message } => Cell::new(message).fg(Color::Red),
    }
}

fn count_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) => Cell::new(value),
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
