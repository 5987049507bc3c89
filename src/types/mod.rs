//! Value types shared by the graph API.

pub mod distance;
pub mod edge;
pub mod error;

pub use distance::Distance;
pub use edge::{UndirectedEdge, WeightedEdge};
pub use error::{EdgeFault, GraphError, GraphResult};

/// Edge weight of the directed graph. Zero means "no edge".
pub type Weight = u32;

/// Weight used when a caller does not pick one.
pub const DEFAULT_WEIGHT: Weight = 1;
