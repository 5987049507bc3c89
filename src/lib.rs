//! adjgraph — small in-memory graphs.
//!
//! Two independent graph types:
//! - [`DirectedGraph`]: integer vertices, adjacency matrix, positive integer
//!   weights; DFS, BFS, cycle detection and Dijkstra.
//! - [`UndirectedGraph`]: string-labelled vertices, adjacency list, no
//!   weights; DFS, BFS, connected components and cycle detection.
//!
//! Mutators are lenient: an invalid request (unknown vertex, self-loop,
//! zero weight) is logged and ignored. Every such operation has a `try_`
//! twin that reports the problem as a [`GraphError`] instead.
//!
//! Neither type is synchronized. Share one across threads behind a lock.

pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::ShortestPaths;
pub use graph::{CycleDetection, DirectedGraph, GraphConfig, UndirectedGraph};
pub use types::{
    Distance, EdgeFault, GraphError, GraphResult, UndirectedEdge, Weight, WeightedEdge,
    DEFAULT_WEIGHT,
};
