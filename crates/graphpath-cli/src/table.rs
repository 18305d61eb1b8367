//! comfy-table rendering of row data produced by `graphpath_core::graph::render`.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// Builds a table whose first row is the header.
///
/// Every column but the first is right-aligned, which suits matrices and
/// numeric columns.
pub fn build_table(rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let Some((header, body)) = rows.split_first() else {
        return table;
    };
    table.set_header(header.clone());
    for row in body {
        table.add_row(row.iter().enumerate().map(|(i, value)| {
            let cell = Cell::new(value);
            if i == 0 {
                cell
            } else {
                cell.set_alignment(CellAlignment::Right)
            }
        }));
    }
    table
}

/// Builds a table from an explicit header and body rows.
pub fn build_table_with_header(header: &[&str], body: Vec<Vec<String>>) -> Table {
    let mut rows = Vec::with_capacity(body.len() + 1);
    rows.push(header.iter().map(ToString::to_string).collect());
    rows.extend(body);
    build_table(&rows)
}
