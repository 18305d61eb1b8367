//! Tests for Dijkstra shortest paths and path reconstruction.

use super::dijkstra::{dijkstra, path_weight};
use super::store::WeightedGraph;
use crate::error::Error;

/// A -> B (1), B -> C (2), A -> C (5)
fn build_triangle() -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    graph.add_arc("A", "B", 1.0).unwrap();
    graph.add_arc("B", "C", 2.0).unwrap();
    graph.add_arc("A", "C", 5.0).unwrap();
    graph
}

/// A -2- B -1- D -4- E, A -10- C -0- E, all arcs pointing right.
///
/// Shortest A -> E is 7 via A, B, D, E.
fn build_two_routes() -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    graph.add_arc("A", "B", 2.0).unwrap();
    graph.add_arc("A", "C", 10.0).unwrap();
    graph.add_arc("B", "D", 1.0).unwrap();
    graph.add_arc("D", "E", 4.0).unwrap();
    graph.add_arc("C", "E", 0.0).unwrap();
    graph
}

#[test]
fn test_shortest_path_prefers_cheaper_detour() {
    let graph = build_triangle();
    let path = graph.shortest_path("A", "C").unwrap();

    assert_eq!(path.distance, 3.0);
    assert_eq!(path.nodes, vec!["A", "B", "C"]);
    assert_eq!(path.indices, vec![0, 1, 2]);
    assert_eq!(path.hops(), 2);
    assert_eq!(path.arcs(), vec![(0, 1), (1, 2)]);
}

#[test]
fn test_shortest_path_two_routes() {
    let graph = build_two_routes();
    let path = graph.shortest_path("A", "E").unwrap();
    assert_eq!(path.distance, 7.0);
    assert_eq!(path.nodes, vec!["A", "B", "D", "E"]);
}

#[test]
fn test_shortest_path_to_self() {
    let graph = build_triangle();
    let path = graph.shortest_path("B", "B").unwrap();
    assert_eq!(path.distance, 0.0);
    assert_eq!(path.nodes, vec!["B"]);
    assert_eq!(path.hops(), 0);
}

#[test]
fn test_shortest_path_to_self_on_isolated_node() {
    let mut graph = WeightedGraph::new();
    graph.add_node("solo");
    let path = graph.shortest_path("solo", "solo").unwrap();
    assert_eq!(path.distance, 0.0);
    assert_eq!(path.nodes, vec!["solo"]);
}

#[test]
fn test_no_path_between_disconnected_nodes() {
    let mut graph = WeightedGraph::new();
    graph.add_node("A");
    graph.add_node("B");

    let err = graph.shortest_path("A", "B").unwrap_err();

    assert_eq!(
        err,
        Error::NoPath {
            origin: "A".to_string(),
            destination: "B".to_string(),
        }
    );
}

#[test]
fn test_arcs_are_directed() {
    let graph = build_triangle();
    let err = graph.shortest_path("C", "A").unwrap_err();
    assert_eq!(err.code(), "NO_PATH");
}

#[test]
fn test_unknown_endpoint() {
    let graph = build_triangle();
    assert_eq!(
        graph.shortest_path("A", "Z").unwrap_err(),
        Error::NodeNotFound("Z".to_string())
    );
    assert_eq!(
        graph.shortest_path("Z", "A").unwrap_err(),
        Error::NodeNotFound("Z".to_string())
    );
}

#[test]
fn test_reweight_changes_route() {
    let mut graph = build_triangle();
    graph.set_arc_weight("A", "C", 2.5).unwrap();

    let path = graph.shortest_path("A", "C").unwrap();

    assert_eq!(path.distance, 2.5);
    assert_eq!(path.nodes, vec!["A", "C"]);
}

#[test]
fn test_path_survives_rename() {
    let mut graph = build_triangle();
    graph.rename_node("B", "Bridge").unwrap();
    let path = graph.shortest_path("A", "C").unwrap();
    assert_eq!(path.nodes, vec!["A", "Bridge", "C"]);
}

#[test]
fn test_path_weight_matches_distance() {
    let graph = build_two_routes();
    for origin in graph.nodes() {
        for destination in graph.nodes() {
            if let Ok(path) = graph.shortest_path(origin, destination) {
                assert_eq!(path_weight(&graph, &path.indices), Some(path.distance));
            }
        }
    }
}

#[test]
fn test_path_weight_rejects_missing_arc() {
    let graph = build_triangle();
    assert_eq!(path_weight(&graph, &[2, 0]), None);
    assert_eq!(path_weight(&graph, &[1]), Some(0.0));
}

#[test]
fn test_shortest_path_is_deterministic() {
    let graph = build_two_routes();
    let first = graph.shortest_path("A", "E").unwrap();
    for _ in 0..10 {
        assert_eq!(graph.shortest_path("A", "E").unwrap(), first);
    }
}

#[test]
fn test_equal_cost_tie_is_stable() {
    // Two routes of cost 2: S -> L -> T and S -> R -> T
    let mut graph = WeightedGraph::new();
    graph.add_arc("S", "L", 1.0).unwrap();
    graph.add_arc("S", "R", 1.0).unwrap();
    graph.add_arc("L", "T", 1.0).unwrap();
    graph.add_arc("R", "T", 1.0).unwrap();

    let path = graph.shortest_path("S", "T").unwrap();

    assert_eq!(path.distance, 2.0);
    // L has the lower index, is settled first and claims T
    assert_eq!(path.nodes, vec!["S", "L", "T"]);
}

#[test]
fn test_stale_entries_are_skipped() {
    // D is first reached at cost 10 via A, later improved to 3 via B, C.
    let mut graph = WeightedGraph::new();
    graph.add_arc("A", "D", 10.0).unwrap();
    graph.add_arc("A", "B", 1.0).unwrap();
    graph.add_arc("B", "C", 1.0).unwrap();
    graph.add_arc("C", "D", 1.0).unwrap();
    graph.add_arc("D", "E", 1.0).unwrap();

    let path = graph.shortest_path("A", "E").unwrap();

    assert_eq!(path.distance, 4.0);
    assert_eq!(path.nodes, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_distance_table_covers_all_nodes() {
    let mut graph = build_triangle();
    graph.add_node("island");

    let table = graph.shortest_distances("A").unwrap();

    assert_eq!(table.origin(), 0);
    assert_eq!(table.distances().len(), 4);
    assert_eq!(table.distance(0), 0.0);
    assert_eq!(table.distance(1), 1.0);
    assert_eq!(table.distance(2), 3.0);
    assert!(!table.is_reachable(3));
    assert_eq!(table.predecessor(2), Some(1));
    assert_eq!(table.predecessor(0), None);
    assert_eq!(table.path_to(3), None);
}

#[test]
fn test_shortest_distances_unknown_origin() {
    let graph = build_triangle();
    assert!(matches!(
        graph.shortest_distances("nowhere"),
        Err(Error::NodeNotFound(_))
    ));
}

#[test]
fn test_dijkstra_out_of_range_origin() {
    let graph = build_triangle();
    let table = dijkstra(&graph, 42);
    assert!(table.distances().iter().all(|d| d.is_infinite()));
}
