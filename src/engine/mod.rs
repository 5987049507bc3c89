//! Graph algorithms: searches, cycle detection, components and shortest
//! paths, implemented on the graph types.

pub mod components;
pub mod cycle;
pub mod search;
pub mod shortest_path;

pub use shortest_path::ShortestPaths;
