//! Undirected graph stored as a label-keyed adjacency list.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::types::{EdgeFault, GraphError, GraphResult, UndirectedEdge};

/// An unweighted undirected graph with string-labelled vertices.
///
/// Invariants kept by every mutator:
/// - `v` is in `u`'s neighbor list iff `u` is in `v`'s;
/// - no vertex lists itself;
/// - no neighbor list holds a label twice.
///
/// Vertices iterate in label order. Neighbor lists keep insertion order;
/// traversals sort a copy and never reorder storage.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl UndirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(u, v)` pairs. Self-loops are skipped.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref());
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// True if `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: &str) -> bool {
        self.adjacency.contains_key(v)
    }

    /// True if the edge `u-v` exists.
    pub fn are_adjacent(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|list| list.iter().any(|n| n == v))
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: &str) -> Option<&[String]> {
        self.adjacency.get(v).map(Vec::as_slice)
    }

    /// Neighbors of `v` sorted ascending. Empty if `v` is unknown.
    pub(crate) fn sorted_neighbors(&self, v: &str) -> Vec<&str> {
        let mut list: Vec<&str> = self
            .adjacency
            .get(v)
            .map(|l| l.iter().map(String::as_str).collect())
            .unwrap_or_default();
        list.sort();
        list
    }

    pub(crate) fn check_vertex(&self, v: &str) -> GraphResult<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::vertex(v))
        }
    }

    /// Add a vertex. Adding an existing label does nothing.
    pub fn add_vertex(&mut self, v: &str) {
        if !self.adjacency.contains_key(v) {
            self.adjacency.insert(v.to_string(), Vec::new());
        }
    }

    /// Add the edge `u-v`, creating missing endpoints.
    pub fn try_add_edge(&mut self, u: &str, v: &str) -> GraphResult<()> {
        if u == v {
            return Err(GraphError::edge(u, v, EdgeFault::SelfLoop));
        }
        self.add_vertex(u);
        self.add_vertex(v);
        self.link(u, v);
        self.link(v, u);
        Ok(())
    }

    /// Add the edge `u-v`. Ignored for self-loops.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        if let Err(e) = self.try_add_edge(u, v) {
            log::debug!("add_edge ignored: {}", e);
        }
    }

    fn link(&mut self, from: &str, to: &str) {
        if let Some(list) = self.adjacency.get_mut(from) {
            if !list.iter().any(|n| n == to) {
                list.push(to.to_string());
            }
        }
    }

    fn unlink(&mut self, from: &str, to: &str) {
        if let Some(list) = self.adjacency.get_mut(from) {
            list.retain(|n| n != to);
        }
    }

    /// Remove the edge `u-v`.
    pub fn try_remove_edge(&mut self, u: &str, v: &str) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if !self.are_adjacent(u, v) {
            return Err(GraphError::edge(u, v, EdgeFault::Missing));
        }
        self.unlink(u, v);
        self.unlink(v, u);
        Ok(())
    }

    /// Remove the edge `u-v`. Ignored if either vertex or the edge is absent.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if let Err(e) = self.try_remove_edge(u, v) {
            log::debug!("remove_edge ignored: {}", e);
        }
    }

    /// Remove `v` and every edge touching it.
    pub fn try_remove_vertex(&mut self, v: &str) -> GraphResult<()> {
        let neighbors = self
            .adjacency
            .get(v)
            .cloned()
            .ok_or_else(|| GraphError::vertex(v))?;
        // Back-references first, then the entry itself.
        for n in &neighbors {
            self.unlink(n, v);
        }
        self.adjacency.remove(v);
        Ok(())
    }

    /// Remove `v` and every edge touching it. Ignored if `v` is absent.
    pub fn remove_vertex(&mut self, v: &str) {
        if let Err(e) = self.try_remove_vertex(v) {
            log::debug!("remove_vertex ignored: {}", e);
        }
    }

    /// All vertex labels.
    pub fn get_vertices(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// All edges, each reported once.
    pub fn get_edges(&self) -> Vec<UndirectedEdge> {
        let mut seen: HashSet<UndirectedEdge> = HashSet::new();
        let mut edges = Vec::new();
        for (u, list) in &self.adjacency {
            for v in list {
                let edge = UndirectedEdge::new(u.as_str(), v.as_str());
                if seen.insert(edge.clone()) {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    /// True if every consecutive pair in `path` is adjacent.
    ///
    /// The empty path is valid; a single vertex is valid if it exists.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        match path {
            [] => true,
            [only] => self.contains_vertex(only.as_ref()),
            _ => path
                .windows(2)
                .all(|pair| self.are_adjacent(pair[0].as_ref(), pair[1].as_ref())),
        }
    }

    pub(crate) fn labels(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .adjacency
            .iter()
            .map(|(v, list)| format!("{}: [{}]", v, list.join(", ")))
            .collect();
        let inline = lines.join(", ");
        if inline.len() < 70 {
            write!(f, "GRAPH: {{{}}}", inline)
        } else {
            write!(f, "GRAPH: {{\n  {}}}", lines.join("\n  "))
        }
    }
}
