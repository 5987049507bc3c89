//! Connected components of the undirected graph.

use std::collections::HashSet;

use crate::graph::UndirectedGraph;

impl UndirectedGraph {
    /// Every connected component, each listed in DFS order from its
    /// smallest label.
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut components = Vec::new();

        for v in self.labels() {
            if seen.contains(v) {
                continue;
            }
            let component = self.dfs(v, None);
            seen.extend(component.iter().cloned());
            components.push(component);
        }

        log::trace!(
            "{} components over {} vertices",
            components.len(),
            self.vertex_count()
        );
        components
    }

    /// Number of connected components. O(V + E).
    pub fn count_connected_components(&self) -> usize {
        self.connected_components().len()
    }
}
