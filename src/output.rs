use colored::Colorize;
use prettytable::{Cell, Row as TableRow, Table};

use crate::data::model::Dataset;
use crate::query::aggregate::AggregateResult;

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

/// Print a dataset as a grid table (green), or a notice when it has no rows.
pub fn print_rows(dataset: &Dataset) {
    if dataset.is_empty() {
        notice("no rows to display");
        return;
    }

    let mut table = Table::new();
    table.add_row(TableRow::new(
        dataset.columns.iter().map(|c| Cell::new(c)).collect(),
    ));
    for row in &dataset.rows {
        let cells = dataset
            .columns
            .iter()
            .map(|col| Cell::new(row.get(col).unwrap_or("")))
            .collect();
        table.add_row(TableRow::new(cells));
    }
    println!("{}", table.to_string().green());
}

/// Print one aggregation record as a three-column table (cyan).
pub fn print_aggregate(result: &AggregateResult) {
    let mut table = Table::new();
    table.add_row(TableRow::new(vec![
        Cell::new("function"),
        Cell::new("column"),
        Cell::new("value"),
    ]));
    table.add_row(TableRow::new(vec![
        Cell::new(&result.function.to_string()),
        Cell::new(&result.column),
        Cell::new(&result.value.to_string()),
    ]));
    println!("{}", table.to_string().cyan());
}

/// Informational notice (yellow).
pub fn notice(message: &str) {
    println!("{}", message.yellow());
}
