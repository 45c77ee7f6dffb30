//! # u-circuit
//!
//! Collection circuit optimization for small graphs: exhaustive
//! Hamiltonian-cycle enumeration, brute-force TSP selection and the time,
//! emissions and cost impact of choosing the optimal route.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Edge, Cycle, RouteResult)
//! - [`graph`] — Graph of collection points and its adjacency matrix
//! - [`enumeration`] — Backtracking enumeration of Hamiltonian cycles
//! - [`evaluation`] — Route scoring, optimal/worst selection and reports
//! - [`metrics`] — Time, CO₂, fuel, cost and annual impact figures
//! - [`generator`] — Seeded random layouts and edge sets
//! - [`session`] — One configuration driving the whole pipeline
//! - [`config`] — Constants and limits, loadable from JSON
//! - [`logging`] — Optional stderr logger for hosts
//!
//! ## Example
//!
//! ```
//! use u_circuit::config::{Config, GraphLimits};
//! use u_circuit::graph::Graph;
//! use u_circuit::models::Node;
//! use u_circuit::session::Session;
//!
//! let config = Config {
//!     graph: GraphLimits::new(4, 16).unwrap(),
//!     ..Config::default()
//! };
//! let mut graph = Graph::with_config(4, &config).unwrap();
//! for (id, (x, y)) in [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]
//!     .into_iter()
//!     .enumerate()
//! {
//!     graph.add_node(Node::new(id).at(x, y)).unwrap();
//! }
//! for a in 0..4 {
//!     for b in (a + 1)..4 {
//!         graph.add_edge(a, b, None).unwrap();
//!     }
//! }
//!
//! let report = Session::new(config).run(&graph, 0).unwrap();
//! assert_eq!(report.solution.optimal.distance, 4.0);
//! assert_eq!(report.solution.worst.distance, 4.82);
//! ```

pub mod config;
pub mod enumeration;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod graph;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod session;

pub use error::{Error, Result};
