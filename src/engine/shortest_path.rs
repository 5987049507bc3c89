//! Single-source shortest paths on the directed graph.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::graph::DirectedGraph;
use crate::types::{Distance, GraphResult};

/// Shortest distances from one source plus the predecessor of every
/// reachable vertex on its shortest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    fn unreached(source: usize, n: usize) -> Self {
        Self {
            source,
            distances: vec![Distance::INFINITY; n],
            predecessors: vec![None; n],
        }
    }

    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance to every vertex, indexed by vertex.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Consume into the distance vector.
    pub fn into_distances(self) -> Vec<Distance> {
        self.distances
    }

    /// Distance to `target`. `INFINITY` if unreachable or unknown.
    pub fn distance_to(&self, target: usize) -> Distance {
        self.distances
            .get(target)
            .copied()
            .unwrap_or(Distance::INFINITY)
    }

    /// The vertex before `target` on its shortest path.
    pub fn predecessor(&self, target: usize) -> Option<usize> {
        self.predecessors.get(target).copied().flatten()
    }

    /// True if `target` can be reached from the source.
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance_to(target).is_finite()
    }

    /// Vertices from the source to `target`, both included.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(pred) = self.predecessor(current) {
            path.push(pred);
            current = pred;
        }
        path.reverse();
        (path.first() == Some(&self.source)).then_some(path)
    }
}

impl DirectedGraph {
    /// Dijkstra from `src`, recording predecessors.
    ///
    /// A vertex is final the first time it leaves the heap; later, stale
    /// heap entries for it are skipped.
    pub fn try_shortest_paths(&self, src: usize) -> GraphResult<ShortestPaths> {
        self.check_vertex(src)?;

        let mut result = ShortestPaths::unreached(src, self.vertex_count());
        let mut finalized = vec![false; self.vertex_count()];
        let mut heap = BinaryHeap::new();

        result.distances[src] = Distance::ZERO;
        heap.push(Reverse((Distance::ZERO, src)));

        while let Some(Reverse((dist, v))) = heap.pop() {
            if finalized[v] {
                continue;
            }
            finalized[v] = true;

            for (w, weight) in self.successors(v) {
                let candidate = dist.plus(u64::from(weight));
                if !finalized[w] && candidate < result.distances[w] {
                    result.distances[w] = candidate;
                    result.predecessors[w] = Some(v);
                    heap.push(Reverse((candidate, w)));
                }
            }
        }

        log::trace!(
            "dijkstra from {} reached {} of {} vertices",
            src,
            finalized.iter().filter(|&&f| f).count(),
            self.vertex_count()
        );
        Ok(result)
    }

    /// Dijkstra with predecessors. Everything unreachable if `src` is not a
    /// vertex.
    pub fn shortest_paths(&self, src: usize) -> ShortestPaths {
        self.try_shortest_paths(src).unwrap_or_else(|e| {
            log::debug!("shortest_paths: {}", e);
            ShortestPaths::unreached(src, self.vertex_count())
        })
    }

    /// Shortest total weight from `src` to every vertex.
    pub fn try_dijkstra(&self, src: usize) -> GraphResult<Vec<Distance>> {
        self.try_shortest_paths(src).map(ShortestPaths::into_distances)
    }

    /// Shortest total weight from `src` to every vertex. All `INFINITY` if
    /// `src` is not a vertex.
    pub fn dijkstra(&self, src: usize) -> Vec<Distance> {
        self.shortest_paths(src).into_distances()
    }

    /// Fewest-edges paths from `src`, ignoring weights.
    pub fn try_bfs_shortest_paths(&self, src: usize) -> GraphResult<ShortestPaths> {
        self.check_vertex(src)?;

        let mut result = ShortestPaths::unreached(src, self.vertex_count());
        let mut queue = VecDeque::from([src]);
        result.distances[src] = Distance::ZERO;

        while let Some(v) = queue.pop_front() {
            let next = result.distances[v].plus(1);
            for (w, _) in self.successors(v) {
                if !result.distances[w].is_finite() {
                    result.distances[w] = next;
                    result.predecessors[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }
        Ok(result)
    }

    /// Fewest-edges paths from `src`. Everything unreachable if `src` is
    /// not a vertex.
    pub fn bfs_shortest_paths(&self, src: usize) -> ShortestPaths {
        self.try_bfs_shortest_paths(src).unwrap_or_else(|e| {
            log::debug!("bfs_shortest_paths: {}", e);
            ShortestPaths::unreached(src, self.vertex_count())
        })
    }
}
