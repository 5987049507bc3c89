//! Depth-first and breadth-first reachability searches.
//!
//! Ties are broken toward the smaller vertex: ascending index for the
//! directed graph, ascending label for the undirected graph. DFS pushes
//! successors in descending order so that the smallest is popped first.

use std::collections::{HashSet, VecDeque};

use crate::graph::{DirectedGraph, UndirectedGraph};
use crate::types::GraphResult;

impl DirectedGraph {
    /// Depth-first search from `start`, stopping once `end` is visited.
    pub fn try_dfs(&self, start: usize, end: Option<usize>) -> GraphResult<Vec<usize>> {
        self.check_vertex(start)?;

        let n = self.vertex_count();
        let mut seen = vec![false; n];
        let mut visited = Vec::new();
        let mut stack = vec![start];

        while let Some(v) = stack.pop() {
            if seen[v] {
                continue;
            }
            seen[v] = true;
            visited.push(v);
            if end == Some(v) {
                break;
            }
            let next: Vec<usize> = self
                .successors(v)
                .map(|(w, _)| w)
                .filter(|&w| !seen[w])
                .collect();
            stack.extend(next.into_iter().rev());
        }

        log::trace!("dfs from {} visited {} vertices", start, visited.len());
        Ok(visited)
    }

    /// Depth-first search. Empty if `start` is not a vertex.
    pub fn dfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        self.try_dfs(start, end).unwrap_or_else(|e| {
            log::debug!("dfs: {}", e);
            Vec::new()
        })
    }

    /// Breadth-first search from `start`, stopping once `end` is visited.
    pub fn try_bfs(&self, start: usize, end: Option<usize>) -> GraphResult<Vec<usize>> {
        self.check_vertex(start)?;

        let n = self.vertex_count();
        let mut seen = vec![false; n];
        let mut visited = Vec::new();
        let mut queue = VecDeque::from([start]);

        while let Some(v) = queue.pop_front() {
            if seen[v] {
                continue;
            }
            seen[v] = true;
            visited.push(v);
            if end == Some(v) {
                break;
            }
            queue.extend(self.successors(v).map(|(w, _)| w).filter(|&w| !seen[w]));
        }

        log::trace!("bfs from {} visited {} vertices", start, visited.len());
        Ok(visited)
    }

    /// Breadth-first search. Empty if `start` is not a vertex.
    pub fn bfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        self.try_bfs(start, end).unwrap_or_else(|e| {
            log::debug!("bfs: {}", e);
            Vec::new()
        })
    }
}

impl UndirectedGraph {
    /// Depth-first search from `start`, stopping once `end` is visited.
    pub fn try_dfs(&self, start: &str, end: Option<&str>) -> GraphResult<Vec<String>> {
        self.check_vertex(start)?;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut visited = Vec::new();
        let mut stack = vec![start];

        while let Some(v) = stack.pop() {
            if !seen.insert(v) {
                continue;
            }
            visited.push(v.to_string());
            if end == Some(v) {
                break;
            }
            let next: Vec<&str> = self
                .sorted_neighbors(v)
                .into_iter()
                .filter(|w| !seen.contains(w))
                .collect();
            stack.extend(next.into_iter().rev());
        }

        log::trace!("dfs from {} visited {} vertices", start, visited.len());
        Ok(visited)
    }

    /// Depth-first search in alphabetical tie-break order. Empty if `start`
    /// is not a vertex.
    pub fn dfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        self.try_dfs(start, end).unwrap_or_else(|e| {
            log::debug!("dfs: {}", e);
            Vec::new()
        })
    }

    /// Breadth-first search from `start`, stopping once `end` is visited.
    pub fn try_bfs(&self, start: &str, end: Option<&str>) -> GraphResult<Vec<String>> {
        self.check_vertex(start)?;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut visited = Vec::new();
        let mut queue = VecDeque::from([start]);

        while let Some(v) = queue.pop_front() {
            if !seen.insert(v) {
                continue;
            }
            visited.push(v.to_string());
            if end == Some(v) {
                break;
            }
            for w in self.sorted_neighbors(v) {
                if !seen.contains(w) {
                    queue.push_back(w);
                }
            }
        }

        log::trace!("bfs from {} visited {} vertices", start, visited.len());
        Ok(visited)
    }

    /// Breadth-first search in alphabetical tie-break order. Empty if
    /// `start` is not a vertex.
    pub fn bfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        self.try_bfs(start, end).unwrap_or_else(|e| {
            log::debug!("bfs: {}", e);
            Vec::new()
        })
    }
}
