//! Directed weighted graph: mutation, queries, searches, cycles, Dijkstra.

use adjgraph::graph::{CycleDetection, DirectedGraph, GraphConfig};
use adjgraph::types::{Distance, EdgeFault, GraphError, WeightedEdge};

// ==================== Helpers ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const SAMPLE_EDGES: [(usize, usize, u32); 7] = [
    (0, 1, 10),
    (4, 0, 12),
    (1, 4, 15),
    (4, 3, 3),
    (3, 1, 5),
    (2, 1, 23),
    (3, 2, 7),
];

fn sample_graph() -> DirectedGraph {
    DirectedGraph::from_edges(&SAMPLE_EDGES)
}

fn finite(values: &[Distance]) -> Vec<Option<u64>> {
    values.iter().map(Distance::value).collect()
}

// ==================== Mutation Tests ====================

#[test]
fn test_add_vertex_returns_count() {
    let mut g = DirectedGraph::new();
    assert_eq!(g.add_vertex(), 1);
    assert_eq!(g.add_vertex(), 2);
    assert_eq!(g.add_vertex(), 3);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.get_vertices(), vec![0, 1, 2]);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_add_edge_and_overwrite() {
    init_logger();
    let mut g = DirectedGraph::new();
    for _ in 0..3 {
        g.add_vertex();
    }
    g.add_edge(0, 1, 4);
    assert_eq!(g.weight(0, 1), Some(4));
    assert_eq!(g.weight(1, 0), None);

    g.add_edge(0, 1, 9);
    assert_eq!(g.weight(0, 1), Some(9));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_add_edge_ignores_invalid_requests() {
    init_logger();
    let mut g = DirectedGraph::new();
    g.add_vertex();
    g.add_vertex();

    g.add_edge(0, 0, 5);
    g.add_edge(0, 2, 5);
    g.add_edge(7, 1, 5);
    g.add_edge(0, 1, 0);

    assert!(g.get_edges().is_empty());
}

#[test]
fn test_try_add_edge_reports_errors() {
    let mut g = DirectedGraph::new();
    g.add_vertex();
    g.add_vertex();

    match g.try_add_edge(1, 1, 3).unwrap_err() {
        GraphError::InvalidEdge { reason, .. } => assert_eq!(reason, EdgeFault::SelfLoop),
        e => panic!("Expected InvalidEdge, got {:?}", e),
    }
    match g.try_add_edge(0, 1, 0).unwrap_err() {
        GraphError::InvalidEdge { reason, .. } => {
            assert_eq!(reason, EdgeFault::NonPositiveWeight)
        }
        e => panic!("Expected InvalidEdge, got {:?}", e),
    }
    assert_eq!(
        g.try_add_edge(0, 5, 3).unwrap_err(),
        GraphError::InvalidVertex("5".to_string())
    );
    assert!(g.try_add_edge(0, 1, 3).is_ok());
}

#[test]
fn test_remove_edge_is_idempotent() {
    init_logger();
    let mut g = sample_graph();
    g.remove_edge(0, 1);
    assert_eq!(g.weight(0, 1), None);
    g.remove_edge(0, 1);
    assert_eq!(g.edge_count(), SAMPLE_EDGES.len() - 1);

    // Out of range is ignored by the lenient call, reported by the strict one.
    g.remove_edge(0, 42);
    assert!(g.try_remove_edge(0, 42).is_err());
    assert!(g.try_remove_edge(2, 3).is_ok());
}

#[test]
fn test_add_unit_edge_uses_default_weight() {
    let mut g = DirectedGraph::new();
    g.add_vertex();
    g.add_vertex();
    g.add_unit_edge(1, 0);
    assert_eq!(g.weight(1, 0), Some(adjgraph::DEFAULT_WEIGHT));
}

// ==================== Query Tests ====================

#[test]
fn test_from_edges_sizes_graph() {
    let g = sample_graph();
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edge_count(), 7);

    let empty = DirectedGraph::from_edges(&[]);
    assert_eq!(empty.vertex_count(), 0);
    assert!(empty.get_edges().is_empty());
}

#[test]
fn test_get_edges_row_major() {
    let g = sample_graph();
    let edges: Vec<(usize, usize, u32)> = g.get_edges().into_iter().map(Into::into).collect();
    assert_eq!(
        edges,
        vec![
            (0, 1, 10),
            (1, 4, 15),
            (2, 1, 23),
            (3, 1, 5),
            (3, 2, 7),
            (4, 0, 12),
            (4, 3, 3),
        ]
    );
    assert_eq!(WeightedEdge::new(3, 2, 7).to_string(), "(3, 2, 7)");
}

#[test]
fn test_successors_ascending() {
    let g = sample_graph();
    let succ: Vec<(usize, u32)> = g.successors(4).collect();
    assert_eq!(succ, vec![(0, 12), (3, 3)]);
    assert_eq!(g.successors(99).count(), 0);
}

#[test]
fn test_is_valid_path() {
    let g = sample_graph();
    assert!(g.is_valid_path(&[0, 1, 4, 3]));
    assert!(!g.is_valid_path(&[1, 3, 2, 1]));
    assert!(!g.is_valid_path(&[0, 4]));
    assert!(g.is_valid_path(&[4, 0]));
    assert!(g.is_valid_path(&[]));
    assert!(g.is_valid_path(&[2]));
    assert!(!g.is_valid_path(&[9]));
    assert!(!g.is_valid_path(&[0, 1, 9]));
}

// ==================== Search Tests ====================

#[test]
fn test_dfs_ascending_tie_break() {
    let g = sample_graph();
    assert_eq!(g.dfs(0, None), vec![0, 1, 4, 3, 2]);
    assert_eq!(g.dfs(1, None), vec![1, 4, 0, 3, 2]);
    assert_eq!(g.dfs(2, None), vec![2, 1, 4, 0, 3]);
    assert_eq!(g.dfs(3, None), vec![3, 1, 4, 0, 2]);
    assert_eq!(g.dfs(4, None), vec![4, 0, 1, 3, 2]);
}

#[test]
fn test_bfs_ascending_order() {
    let g = sample_graph();
    assert_eq!(g.bfs(0, None), vec![0, 1, 4, 3, 2]);
    assert_eq!(g.bfs(3, None), vec![3, 1, 2, 4, 0]);
    assert_eq!(g.bfs(4, None), vec![4, 0, 3, 1, 2]);
}

#[test]
fn test_search_stops_at_end() {
    let g = sample_graph();
    assert_eq!(g.dfs(0, Some(3)), vec![0, 1, 4, 3]);
    assert_eq!(g.bfs(4, Some(1)), vec![4, 0, 3, 1]);
    assert_eq!(g.dfs(2, Some(2)), vec![2]);
}

#[test]
fn test_search_invalid_start() {
    init_logger();
    let g = sample_graph();
    assert!(g.dfs(5, None).is_empty());
    assert!(g.bfs(5, None).is_empty());
    assert!(matches!(g.try_dfs(5, None), Err(GraphError::InvalidVertex(_))));
    assert!(matches!(g.try_bfs(5, None), Err(GraphError::InvalidVertex(_))));
}

#[test]
fn test_search_unreachable_end_visits_everything_reachable() {
    let mut g = DirectedGraph::from_edges(&[(0, 1, 1), (2, 0, 1)]);
    g.add_vertex();
    assert_eq!(g.dfs(0, Some(2)), vec![0, 1]);
    assert_eq!(g.bfs(0, Some(3)), vec![0, 1]);
}

// ==================== Cycle Tests ====================

fn cycle_sequence(strategy: CycleDetection) -> Vec<bool> {
    let mut g = sample_graph();
    g.set_config(GraphConfig::new().with_cycle_detection(strategy));

    let mut seen = vec![g.has_cycle()];
    for (src, dst) in [(3, 1), (4, 0), (3, 2)] {
        g.remove_edge(src, dst);
        seen.push(g.has_cycle());
    }
    for (src, dst) in [(4, 3), (2, 3), (1, 3), (4, 0)] {
        g.add_unit_edge(src, dst);
        seen.push(g.has_cycle());
    }
    seen
}

#[test]
fn test_has_cycle_add_remove_sequence() {
    let expected = vec![true, true, true, false, false, false, false, true];
    assert_eq!(cycle_sequence(CycleDetection::ThreeColor), expected);
    assert_eq!(cycle_sequence(CycleDetection::PairwiseReach), expected);
}

#[test]
fn test_triangle_vs_dag() {
    let triangle = DirectedGraph::from_edges(&[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
    assert!(triangle.has_cycle());

    let dag = DirectedGraph::from_edges(&[(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
    assert!(!dag.has_cycle());

    let mut pairwise = dag.clone();
    pairwise.set_config(GraphConfig::new().with_cycle_detection(CycleDetection::PairwiseReach));
    assert!(!pairwise.has_cycle());
}

#[test]
fn test_two_cycle_and_empty_graph() {
    let two = DirectedGraph::from_edges(&[(0, 1, 2), (1, 0, 2)]);
    assert!(two.has_cycle());
    assert!(!DirectedGraph::new().has_cycle());
}

// ==================== Dijkstra Tests ====================

#[test]
fn test_dijkstra_sample() {
    let g = sample_graph();
    assert_eq!(
        finite(&g.dijkstra(4)),
        vec![Some(12), Some(8), Some(10), Some(3), Some(0)]
    );
    assert_eq!(
        finite(&g.dijkstra(0)),
        vec![Some(0), Some(10), Some(35), Some(28), Some(25)]
    );
    assert_eq!(
        finite(&g.dijkstra(2)),
        vec![Some(50), Some(23), Some(0), Some(41), Some(38)]
    );
}

#[test]
fn test_dijkstra_after_edge_removal() {
    let mut g = sample_graph();
    g.remove_edge(4, 3);
    assert_eq!(
        finite(&g.dijkstra(4)),
        vec![Some(12), Some(22), None, None, Some(0)]
    );
    assert_eq!(
        finite(&g.dijkstra(0)),
        vec![Some(0), Some(10), None, None, Some(25)]
    );
}

#[test]
fn test_dijkstra_invalid_source() {
    init_logger();
    let g = sample_graph();
    let dist = g.dijkstra(9);
    assert_eq!(dist.len(), 5);
    assert!(dist.iter().all(|d| !d.is_finite()));
    assert!(g.try_dijkstra(9).is_err());
}

#[test]
fn test_shortest_path_reconstruction() {
    let g = sample_graph();
    let paths = g.shortest_paths(4);
    assert_eq!(paths.source(), 4);
    assert_eq!(paths.path_to(1), Some(vec![4, 3, 1]));
    assert_eq!(paths.path_to(2), Some(vec![4, 3, 2]));
    assert_eq!(paths.path_to(4), Some(vec![4]));
    assert_eq!(paths.predecessor(0), Some(4));
    assert_eq!(paths.distance_to(1), Distance::new(8));

    let mut cut = g.clone();
    cut.remove_edge(4, 3);
    let paths = cut.shortest_paths(4);
    assert!(!paths.is_reachable(3));
    assert_eq!(paths.path_to(3), None);
    assert_eq!(paths.path_to(1), Some(vec![4, 0, 1]));
}

#[test]
fn test_bfs_shortest_paths_counts_hops() {
    let g = sample_graph();
    let hops = g.bfs_shortest_paths(0);
    assert_eq!(
        finite(hops.distances()),
        vec![Some(0), Some(1), Some(4), Some(3), Some(2)]
    );
    assert_eq!(hops.path_to(2), Some(vec![0, 1, 4, 3, 2]));

    let nowhere = g.bfs_shortest_paths(17);
    assert!(nowhere.distances().iter().all(|d| !d.is_finite()));
}

#[test]
fn test_shortest_paths_serialize() {
    let g = DirectedGraph::from_edges(&[(0, 1, 2)]);
    let json = serde_json::to_value(g.shortest_paths(1)).unwrap();
    assert_eq!(json["source"], 1);
    assert_eq!(json["distances"][1], 0);
    assert_eq!(json["distances"][0], u64::MAX);
}

// ==================== Display / Config Tests ====================

#[test]
fn test_display_matrix() {
    assert_eq!(DirectedGraph::new().to_string(), "EMPTY GRAPH\n");

    let mut g = sample_graph();
    g.remove_edge(4, 3);
    let expected = "GRAPH (5 vertices):\n\
                    \x20  | 0  1  2  3  4\n\
                    ------------------\n\
                    \x200 | 0 10  0  0  0\n\
                    \x201 | 0  0  0  0 15\n\
                    \x202 | 0 23  0  0  0\n\
                    \x203 | 0  5  7  0  0\n\
                    \x204 |12  0  0  0  0\n";
    assert_eq!(g.to_string(), expected);
}

#[test]
fn test_config_deserialize_defaults() {
    let config: GraphConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.cycle_detection, CycleDetection::ThreeColor);

    let config: GraphConfig =
        serde_json::from_str(r#"{"cycle_detection": "pairwise_reach"}"#).unwrap();
    assert_eq!(config.cycle_detection, CycleDetection::PairwiseReach);

    let g = DirectedGraph::with_config(config.clone());
    assert_eq!(g.config(), &config);
}
