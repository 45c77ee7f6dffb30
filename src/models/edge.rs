//! Undirected weighted edge.

use serde::{Deserialize, Serialize};

/// A road segment between two collection points.
///
/// Undirected: `(from, to)` and `(to, from)` name the same edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Endpoint id.
    pub from: usize,
    /// Endpoint id.
    pub to: usize,
    /// Length in km.
    pub distance: f64,
    /// Travel time in minutes.
    pub time: f64,
    /// kg CO₂ emitted per km travelled on this edge.
    pub co2_per_km: f64,
}

impl Edge {
    /// Returns `true` if this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Endpoints ordered `(min, max)`.
    pub fn key(&self) -> (usize, usize) {
        if self.from < self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}
