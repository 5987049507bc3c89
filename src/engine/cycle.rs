//! Cycle detection.

use std::collections::HashSet;

use crate::graph::{CycleDetection, DirectedGraph, UndirectedGraph};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Grey,
    Black,
}

impl DirectedGraph {
    /// True if the graph contains a directed cycle.
    ///
    /// The algorithm is picked by `GraphConfig::cycle_detection`; both give
    /// the same answer.
    pub fn has_cycle(&self) -> bool {
        match self.config().cycle_detection {
            CycleDetection::ThreeColor => self.has_cycle_three_color(),
            CycleDetection::PairwiseReach => self.has_cycle_pairwise(),
        }
    }

    /// Iterative white/grey/black DFS. A grey successor is a back edge.
    fn has_cycle_three_color(&self) -> bool {
        let n = self.vertex_count();
        let mut color = vec![Color::White; n];

        for root in 0..n {
            if color[root] != Color::White {
                continue;
            }
            // (vertex, next successor index to examine)
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
            color[root] = Color::Grey;

            while let Some(&(v, next)) = stack.last() {
                let successor = self.successors(v).map(|(w, _)| w).find(|&w| w >= next);
                match successor {
                    Some(w) => {
                        let top = stack.len() - 1;
                        stack[top].1 = w + 1;
                        match color[w] {
                            Color::Grey => return true,
                            Color::White => {
                                color[w] = Color::Grey;
                                stack.push((w, 0));
                            }
                            Color::Black => {}
                        }
                    }
                    None => {
                        color[v] = Color::Black;
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    /// For every edge `v -> w`, a DFS from `w` that reaches `v` closes a
    /// cycle through that edge. O(E * (V + E)).
    fn has_cycle_pairwise(&self) -> bool {
        self.get_edges()
            .iter()
            .any(|edge| self.dfs(edge.dst, Some(edge.src)).contains(&edge.src))
    }
}

impl UndirectedGraph {
    /// True if the graph contains a cycle.
    ///
    /// Runs a DFS per component, remembering the vertex each entry was
    /// reached from. Meeting an already discovered vertex other than that
    /// parent means there are two distinct routes to it.
    pub fn has_cycle(&self) -> bool {
        let mut discovered: HashSet<&str> = HashSet::new();

        for root in self.labels() {
            if !discovered.insert(root) {
                continue;
            }
            let mut stack: Vec<(&str, Option<&str>)> = vec![(root, None)];

            while let Some((v, parent)) = stack.pop() {
                for w in self.neighbors(v).unwrap_or_default() {
                    let w = w.as_str();
                    if discovered.insert(w) {
                        stack.push((w, Some(v)));
                    } else if parent != Some(w) {
                        log::trace!("cycle found closing edge {}-{}", v, w);
                        return true;
                    }
                }
            }
        }
        false
    }
}
