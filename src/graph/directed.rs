//! Directed weighted graph stored as a dense adjacency matrix.

use std::fmt;

use crate::types::{EdgeFault, GraphError, GraphResult, Weight, WeightedEdge, DEFAULT_WEIGHT};

use super::config::GraphConfig;

/// A directed graph with integer vertices `0..vertex_count` and strictly
/// positive edge weights.
///
/// `matrix[i][j] == 0` means there is no edge `i -> j`. The matrix is always
/// square and the diagonal is always zero. Vertices are never removed, so the
/// matrix only grows.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Row `i` holds the weights of the edges leaving vertex `i`.
    matrix: Vec<Vec<Weight>>,
    /// Algorithm settings.
    config: GraphConfig,
}

impl DirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with explicit settings.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            matrix: Vec::new(),
            config,
        }
    }

    /// Build a graph from `(src, dst, weight)` triples.
    ///
    /// Enough vertices are created to cover the largest index mentioned.
    /// Triples that `add_edge` would reject are skipped.
    pub fn from_edges(edges: &[(usize, usize, Weight)]) -> Self {
        let mut graph = Self::new();
        if let Some(max) = edges.iter().map(|&(u, v, _)| u.max(v)).max() {
            for _ in 0..=max {
                graph.add_vertex();
            }
        }
        for &(src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// The algorithm settings.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Replace the algorithm settings.
    pub fn set_config(&mut self, config: GraphConfig) {
        self.config = config;
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&w| w > 0).count())
            .sum()
    }

    /// True if `v` is a vertex index of this graph.
    pub fn has_vertex(&self, v: usize) -> bool {
        v < self.matrix.len()
    }

    /// Weight of the edge `src -> dst`, if it exists.
    pub fn weight(&self, src: usize, dst: usize) -> Option<Weight> {
        self.matrix
            .get(src)
            .and_then(|row| row.get(dst))
            .copied()
            .filter(|&w| w > 0)
    }

    /// Direct successors of `v` in ascending index order, with edge weights.
    pub fn successors(&self, v: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.matrix
            .get(v)
            .into_iter()
            .flat_map(|row| row.iter().copied().enumerate())
            .filter(|&(_, w)| w > 0)
    }

    pub(crate) fn check_vertex(&self, v: usize) -> GraphResult<()> {
        if self.has_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::vertex(v))
        }
    }

    /// Append a vertex. Returns the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        for row in &mut self.matrix {
            row.push(0);
        }
        let count = self.matrix.len() + 1;
        self.matrix.push(vec![0; count]);
        count
    }

    /// Add the edge `src -> dst`, overwriting any existing weight.
    pub fn try_add_edge(&mut self, src: usize, dst: usize, weight: Weight) -> GraphResult<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        if src == dst {
            return Err(GraphError::edge(src, dst, EdgeFault::SelfLoop));
        }
        if weight < 1 {
            return Err(GraphError::edge(src, dst, EdgeFault::NonPositiveWeight));
        }
        self.matrix[src][dst] = weight;
        Ok(())
    }

    /// Add the edge `src -> dst`.
    ///
    /// Silently ignored for self-loops, unknown vertices and a zero weight.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: Weight) {
        if let Err(e) = self.try_add_edge(src, dst, weight) {
            log::debug!("add_edge ignored: {}", e);
        }
    }

    /// Add the edge `src -> dst` with `DEFAULT_WEIGHT`.
    pub fn add_unit_edge(&mut self, src: usize, dst: usize) {
        self.add_edge(src, dst, DEFAULT_WEIGHT);
    }

    /// Remove the edge `src -> dst`.
    ///
    /// Removing an edge that is not there is fine as long as both vertices
    /// exist.
    pub fn try_remove_edge(&mut self, src: usize, dst: usize) -> GraphResult<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        self.matrix[src][dst] = 0;
        Ok(())
    }

    /// Remove the edge `src -> dst`. Ignored for unknown vertices.
    pub fn remove_edge(&mut self, src: usize, dst: usize) {
        if let Err(e) = self.try_remove_edge(src, dst) {
            log::debug!("remove_edge ignored: {}", e);
        }
    }

    /// All vertex indices in ascending order.
    pub fn get_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count()).collect()
    }

    /// All edges in row-major order.
    pub fn get_edges(&self) -> Vec<WeightedEdge> {
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(src, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &w)| w > 0)
                    .map(move |(dst, &w)| WeightedEdge::new(src, dst, w))
            })
            .collect()
    }

    /// True if every consecutive pair in `path` is joined by an edge in the
    /// right direction and every index is a vertex.
    ///
    /// The empty path is valid. A single vertex is valid if it exists.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        if path.iter().any(|&v| !self.has_vertex(v)) {
            return false;
        }
        path.windows(2).all(|pair| self.matrix[pair[0]][pair[1]] > 0)
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count();
        if n == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }
        writeln!(f, "GRAPH ({} vertices):", n)?;
        let header: Vec<String> = (0..n).map(|i| format!("{:2}", i)).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;
        for (i, row) in self.matrix.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|w| format!("{:2}", w)).collect();
            writeln!(f, "{:2} |{}", i, cells.join(" "))?;
        }
        Ok(())
    }
}
