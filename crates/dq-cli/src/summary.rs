use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use dq_api::DeliveryOutcome;

use crate::types::CheckResult;

pub fn print_summary(result: &CheckResult) {
    println!("Dataset: {}", result.dataset);
    println!("Records: {}", result.record_count);
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Result"),
        header_cell("Expected"),
        header_cell("Actual"),
    ]);
    apply_verdict_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for verdict in &result.report.verdicts {
        table.add_row(vec![
            rule_cell(verdict.kind.label()),
            result_cell(verdict.passed),
            Cell::new(&verdict.expected),
            Cell::new(&verdict.actual),
        ]);
    }
    println!("{table}");
    print_delivery_table(&result.deliveries);
    println!(
        "{} passed, {} failed",
        result.report.passed_count(),
        result.report.failed_count()
    );
}

fn print_delivery_table(deliveries: &[DeliveryOutcome]) {
    if deliveries.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Delivery"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for outcome in deliveries {
        let row = match outcome {
            DeliveryOutcome::Delivered { field_id, status } => vec![
                Cell::new(field_id),
                Cell::new("SENT").fg(Color::Green),
                Cell::new(format!("HTTP {status}")),
            ],
            DeliveryOutcome::Failed { field_id, error } => vec![
                Cell::new(field_id),
                Cell::new("FAILED")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                Cell::new(error),
            ],
        };
        table.add_row(row);
    }
    println!();
    println!("Feedback:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_verdict_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(22)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::UpperBoundary(Width::Percentage(40)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn rule_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn result_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("PASS").fg(Color::Green)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}
