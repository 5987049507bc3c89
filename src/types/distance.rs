//! Path lengths with an explicit "unreachable" value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Total weight (or hop count) of a shortest path.
///
/// `Distance::INFINITY` marks a vertex that cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Distance(pub u64);

impl Distance {
    /// Unreachable.
    pub const INFINITY: Distance = Distance(u64::MAX);
    /// Distance from a vertex to itself.
    pub const ZERO: Distance = Distance(0);

    /// Create a finite distance.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// True unless this is `INFINITY`.
    pub fn is_finite(&self) -> bool {
        *self != Self::INFINITY
    }

    /// The finite value, or `None` when unreachable.
    pub fn value(&self) -> Option<u64> {
        self.is_finite().then_some(self.0)
    }

    /// Extend by one edge. Saturates at `INFINITY`.
    pub fn plus(self, step: u64) -> Self {
        if !self.is_finite() {
            return self;
        }
        Self(self.0.saturating_add(step))
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(d) => write!(f, "{}", d),
            None => f.write_str("inf"),
        }
    }
}
