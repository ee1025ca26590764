//! Text-table rendering for query results.
//!
//! Kept out of the core on purpose: executors return plain
//! [`TabularResult`]s and anything user-facing happens here.

use std::fmt::Display;

use comfy_table::{Cell, ColumnConstraint, ContentArrangement, Table, Width};
use threatsearch_core::result::{TabularResult, Value};

const DEFAULT_PRESET: &str = "││──╞═╪╡│    ┬┴┌┐└┘";
const DEFAULT_MAX_ROWS: usize = 20;
const MIN_COLUMN_WIDTH: u16 = 10;

/// Pretty format a tabular result.
///
/// Headers show the column name and, where the engine declared one, the
/// inferred type. At most `max_rows` rows are rendered; a trailing marker
/// row notes how many were omitted.
pub fn pretty_format_result(
    result: &TabularResult,
    width: Option<usize>,
    max_rows: Option<usize>,
) -> impl Display {
    let mut table = Table::new();
    table.load_preset(DEFAULT_PRESET);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some(width) = width {
        table.set_width(width as u16);
        table.set_constraints(
            std::iter::repeat(ColumnConstraint::LowerBoundary(Width::Fixed(
                MIN_COLUMN_WIDTH,
            )))
            .take(result.num_columns()),
        );
    }

    table.set_header(result.columns.iter().map(|col| match col.decl_type {
        Some(decl_type) => Cell::new(format!("{}\n{decl_type}", col.name)),
        None => Cell::new(&col.name),
    }));

    let max_rows = max_rows.unwrap_or(DEFAULT_MAX_ROWS);
    for row in result.rows.iter().take(max_rows) {
        table.add_row(row.iter().map(format_value));
    }

    if result.num_rows() > max_rows {
        table.add_row(vec![Cell::new(format!(
            "… {} more rows",
            result.num_rows() - max_rows
        ))]);
    }

    table
}

fn format_value(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::new("NULL"),
        Value::Integer(i) => Cell::new(i),
        Value::Real(r) => Cell::new(r),
        Value::Text(t) => Cell::new(t),
        Value::Blob(b) => Cell::new(format!("<{} bytes>", b.len())),
    }
}
