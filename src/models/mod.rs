//! Domain model types for collection circuits.
//!
//! Provides the record types shared by every component: collection points,
//! undirected edges, closed cycles over the whole graph, and scored routes.

mod cycle;
mod edge;
mod node;
mod route;

pub use cycle::Cycle;
pub use edge::Edge;
pub use node::{Node, NodeType};
pub use route::RouteResult;
