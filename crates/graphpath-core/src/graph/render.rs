//! Rendering helpers: matrices, paths and distance tables as rows of text.
//!
//! Nothing here performs I/O. Each function returns strings or row vectors
//! that a terminal table, a log line or a test can consume.

use crate::config::DisplayConfig;

use super::dijkstra::{DistanceTable, ShortestPath};
use super::types::GraphSnapshot;

/// Separator printed between path nodes.
pub const PATH_SEPARATOR: &str = " -> ";

/// Formats a weight with fixed precision, or the infinity symbol.
#[must_use]
pub fn format_weight(weight: f64, precision: usize, infinity_symbol: &str) -> String {
    if weight.is_finite() {
        format!("{weight:.precision$}")
    } else {
        infinity_symbol.to_string()
    }
}

/// Formats a snapshot weight cell; `None` is infinite.
#[must_use]
pub fn format_cell(cell: Option<f64>, display: &DisplayConfig) -> String {
    format_weight(
        cell.unwrap_or(f64::INFINITY),
        display.precision,
        &display.infinity_symbol,
    )
}

/// Joins node names with `" -> "`.
#[must_use]
pub fn format_path<S: AsRef<str>>(nodes: &[S]) -> String {
    nodes
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// One-line summary: `"A -> B -> C (total weight 3.0)"`.
#[must_use]
pub fn describe_path(path: &ShortestPath, precision: usize) -> String {
    format!(
        "{} (total weight {:.precision$})",
        format_path(&path.nodes),
        path.distance
    )
}

/// Header row: an empty corner cell followed by every node name.
#[must_use]
pub fn header_row(snapshot: &GraphSnapshot) -> Vec<String> {
    std::iter::once(String::new())
        .chain(snapshot.nodes.iter().cloned())
        .collect()
}

/// Connection matrix as `1`/`0` rows, each prefixed with its node name.
///
/// The first row is the header.
#[must_use]
pub fn connection_rows(snapshot: &GraphSnapshot) -> Vec<Vec<String>> {
    let mut rows = vec![header_row(snapshot)];
    for (name, row) in snapshot.nodes.iter().zip(&snapshot.connections) {
        let mut cells = Vec::with_capacity(row.len() + 1);
        cells.push(name.clone());
        cells.extend(row.iter().map(|&c| if c { "1" } else { "0" }.to_string()));
        rows.push(cells);
    }
    rows
}

/// Weight matrix rows, each prefixed with its node name.
///
/// The first row is the header.
#[must_use]
pub fn weight_rows(snapshot: &GraphSnapshot, display: &DisplayConfig) -> Vec<Vec<String>> {
    let mut rows = vec![header_row(snapshot)];
    for (name, row) in snapshot.nodes.iter().zip(&snapshot.weights) {
        let mut cells = Vec::with_capacity(row.len() + 1);
        cells.push(name.clone());
        cells.extend(row.iter().map(|&w| format_cell(w, display)));
        rows.push(cells);
    }
    rows
}

/// Rows of `[node, distance, path]` for every node of a distance table.
///
/// Unreachable nodes get the infinity symbol and an empty path.
#[must_use]
pub fn distance_rows(
    nodes: &[String],
    table: &DistanceTable,
    display: &DisplayConfig,
) -> Vec<Vec<String>> {
    nodes
        .iter()
        .enumerate()
        .map(|(id, name)| {
            let path = table
                .path_to(id)
                .map(|ids| {
                    let names: Vec<&str> = ids.iter().map(|&i| nodes[i].as_str()).collect();
                    format_path(&names)
                })
                .unwrap_or_default();
            vec![
                name.clone(),
                format_weight(
                    table.distance(id),
                    display.precision,
                    &display.infinity_symbol,
                ),
                path,
            ]
        })
        .collect()
}
