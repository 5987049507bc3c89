//! In-memory graph storage and mutation.

pub mod config;
pub mod directed;
pub mod undirected;

pub use config::{CycleDetection, GraphConfig};
pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;
