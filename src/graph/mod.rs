//! Graph of collection points.
//!
//! Provides the authoritative store of nodes and undirected edges, plus a
//! dense adjacency matrix derived from it.

mod matrix;
mod network;

pub use matrix::AdjacencyMatrix;
pub use network::{Graph, GraphInfo};
