//! Error types for the adjgraph library.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why an edge request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EdgeFault {
    /// Both endpoints are the same vertex.
    SelfLoop,
    /// Directed edges need a weight of at least 1.
    NonPositiveWeight,
    /// The edge does not exist.
    Missing,
}

impl fmt::Display for EdgeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::SelfLoop => "self-loops are not allowed",
            Self::NonPositiveWeight => "weight must be a positive integer",
            Self::Missing => "no such edge",
        };
        f.write_str(text)
    }
}

/// All errors that the strict (`try_*`) graph operations can report.
///
/// The lenient operations never surface these; they log the error and fall
/// back to a no-op or an empty result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex index is out of range, or the label is not in the graph.
    #[error("Vertex {0} does not exist")]
    InvalidVertex(String),

    /// The edge cannot be added or removed.
    #[error("Invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: EdgeFault,
    },
}

impl GraphError {
    pub(crate) fn vertex(v: impl fmt::Display) -> Self {
        Self::InvalidVertex(v.to_string())
    }

    pub(crate) fn edge(from: impl fmt::Display, to: impl fmt::Display, reason: EdgeFault) -> Self {
        Self::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason,
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
