//! Edge value types returned by the graph queries.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Weight;

/// A directed, weighted edge `src -> dst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Tail vertex index.
    pub src: usize,
    /// Head vertex index.
    pub dst: usize,
    /// Strictly positive weight.
    pub weight: Weight,
}

impl WeightedEdge {
    /// Create a new weighted edge.
    pub fn new(src: usize, dst: usize, weight: Weight) -> Self {
        Self { src, dst, weight }
    }
}

impl From<(usize, usize, Weight)> for WeightedEdge {
    fn from((src, dst, weight): (usize, usize, Weight)) -> Self {
        Self::new(src, dst, weight)
    }
}

impl From<WeightedEdge> for (usize, usize, Weight) {
    fn from(edge: WeightedEdge) -> Self {
        (edge.src, edge.dst, edge.weight)
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.src, self.dst, self.weight)
    }
}

/// An unweighted edge between two labelled vertices.
///
/// Endpoint order is irrelevant: `A-B` and `B-A` compare equal.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct UndirectedEdge {
    pub u: String,
    pub v: String,
}

impl UndirectedEdge {
    /// Create a new undirected edge.
    pub fn new(u: impl Into<String>, v: impl Into<String>) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
        }
    }

    /// True if `label` is one of the endpoints.
    pub fn touches(&self, label: &str) -> bool {
        self.u == label || self.v == label
    }

    /// Endpoints in label order, used for order-insensitive comparison.
    fn ordered(&self) -> (&str, &str) {
        if self.u <= self.v {
            (self.u.as_str(), self.v.as_str())
        } else {
            (self.v.as_str(), self.u.as_str())
        }
    }
}

impl PartialEq for UndirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Hash for UndirectedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl fmt::Display for UndirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.u, self.v)
    }
}
