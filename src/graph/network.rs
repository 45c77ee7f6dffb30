//! Graph store: nodes, undirected edges and the derived adjacency matrix.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::{Config, GraphLimits, MetricsConfig};
use crate::error::{Error, Result};
use crate::metrics::{round_to, MetricsEngine, PRECISION};
use crate::models::{Edge, Node};

use super::AdjacencyMatrix;

/// Summary counts for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphInfo {
    pub node_count: usize,
    pub edge_count: usize,
    pub is_complete: bool,
    /// kg.
    pub total_waste: f64,
}

/// An undirected weighted graph of collection points.
///
/// The graph declares its size `n` up front and accepts at most `n` nodes.
/// Edge queries scan the edge list; the adjacency matrix is a cache that is
/// dropped on every mutation and rebuilt on demand.
///
/// # Examples
///
/// ```
/// use u_circuit::graph::Graph;
/// use u_circuit::models::Node;
///
/// let mut g = Graph::new(8).unwrap();
/// g.add_node(Node::new(0).at(0.0, 0.0)).unwrap();
/// g.add_node(Node::new(1).at(30.0, 40.0)).unwrap();
/// g.add_edge(0, 1, None).unwrap();
///
/// // 50 coordinate units at 0.1 km per unit
/// assert_eq!(g.get_distance(1, 0), Some(5.0));
/// assert_eq!(g.edges()[0].time, 12.0);
/// assert!(g.is_complete());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    n: usize,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    engine: MetricsEngine,
    #[serde(rename = "adjacency_matrix")]
    matrix: Option<AdjacencyMatrix>,
}

/// Serialized form read back by [`Graph::from_json`].
#[derive(Deserialize)]
struct GraphRecord {
    n: usize,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph for `n` nodes, `8 <= n <= 16`.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_config(n, &Config::default())
    }

    /// Creates an empty graph for `n` nodes within custom limits.
    pub fn with_limits(n: usize, limits: GraphLimits) -> Result<Self> {
        Self::build(n, limits, MetricsConfig::default())
    }

    /// Creates an empty graph using the limits and constants of `config`.
    pub fn with_config(n: usize, config: &Config) -> Result<Self> {
        Self::build(n, config.graph, config.metrics)
    }

    fn build(n: usize, limits: GraphLimits, metrics: MetricsConfig) -> Result<Self> {
        limits.validate()?;
        metrics.validate()?;
        if !limits.contains(n) {
            return Err(Error::InvalidSize {
                n,
                min: limits.min_nodes,
                max: limits.max_nodes,
            });
        }
        Ok(Self {
            n,
            nodes: Vec::with_capacity(n),
            edges: Vec::new(),
            engine: MetricsEngine::new(metrics),
            matrix: None,
        })
    }

    /// Creates a graph under `config` and fills it with the given nodes and
    /// `(from, to, distance)` edges, in order.
    pub fn from_parts(
        n: usize,
        config: &Config,
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = (usize, usize, Option<f64>)>,
    ) -> Result<Self> {
        let mut graph = Self::with_config(n, config)?;
        for node in nodes {
            graph.add_node(node)?;
        }
        for (from, to, distance) in edges {
            graph.add_edge(from, to, distance)?;
        }
        Ok(graph)
    }

    /// Pretty-printed JSON of the size, nodes, edges and cached matrix.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuilds a graph from [`Graph::to_json`] output under `config`.
    ///
    /// Nodes and edges are re-inserted, so every invariant is checked again.
    /// Edge distances are kept as stored and travel times are derived from
    /// them with the constants of `config`. The matrix cache starts empty.
    pub fn from_json(json: &str, config: &Config) -> Result<Self> {
        let record: GraphRecord = serde_json::from_str(json)?;
        Self::from_parts(
            record.n,
            config,
            record.nodes,
            record
                .edges
                .into_iter()
                .map(|e| (e.from, e.to, Some(e.distance))),
        )
    }

    /// Appends a node.
    ///
    /// Fails with [`Error::CapacityExceeded`] once `n` nodes are present and
    /// with [`Error::DuplicateId`] if the id is taken.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.nodes.len() >= self.n {
            return Err(Error::CapacityExceeded { capacity: self.n });
        }
        if self.index_of(node.id()).is_some() {
            return Err(Error::DuplicateId(node.id()));
        }
        self.nodes.push(node);
        self.matrix = None;
        Ok(())
    }

    /// Connects two existing nodes.
    ///
    /// Without an explicit `distance` the Euclidean distance between the
    /// nodes is used, scaled to km. Distance and travel time are rounded to
    /// two decimals.
    pub fn add_edge(&mut self, from: usize, to: usize, distance: Option<f64>) -> Result<()> {
        let a = self.node(from).ok_or(Error::UnknownNode(from))?;
        let b = self.node(to).ok_or(Error::UnknownNode(to))?;
        if from == to {
            return Err(Error::SelfLoop(from));
        }
        if self.has_edge(from, to) {
            return Err(Error::DuplicateEdge { from, to });
        }

        let distance = distance.unwrap_or_else(|| self.scaled_distance(a, b));
        let config = self.engine.config();
        let edge = Edge {
            from,
            to,
            distance: round_to(distance, PRECISION),
            time: self.engine.time(distance),
            co2_per_km: config.co2_per_km,
        };
        log::trace!(
            "graph.add_edge: {from}-{to} distance={} time={}",
            edge.distance,
            edge.time
        );
        self.edges.push(edge);
        self.matrix = None;
        Ok(())
    }

    /// Euclidean distance between two nodes in km.
    pub fn scaled_distance(&self, a: &Node, b: &Node) -> f64 {
        a.distance_to(b) * self.engine.config().distance_scale_km
    }

    /// Returns `true` if an edge joins `a` and `b` in either direction.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// Length of the edge joining `a` and `b`, if any.
    pub fn get_distance(&self, a: usize, b: usize) -> Option<f64> {
        self.edges
            .iter()
            .find(|e| e.connects(a, b))
            .map(|e| e.distance)
    }

    /// Fresh adjacency matrix over the current nodes and edges.
    ///
    /// Rows and columns follow node insertion order.
    pub fn compute_matrix(&self) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::new(self.nodes.len());
        for edge in &self.edges {
            if let (Some(i), Some(j)) = (self.index_of(edge.from), self.index_of(edge.to)) {
                matrix.set_symmetric(i, j, edge.distance);
            }
        }
        matrix
    }

    /// Rebuilds and caches the adjacency matrix.
    pub fn build_adjacency_matrix(&mut self) -> &AdjacencyMatrix {
        let matrix = self.compute_matrix();
        log::debug!(
            "graph.matrix: built size={} edges={}",
            matrix.size(),
            self.edges.len()
        );
        self.matrix.insert(matrix)
    }

    /// Cached matrix, building it first if the cache is stale.
    pub fn get_matrix(&mut self) -> &AdjacencyMatrix {
        match self.matrix.take() {
            Some(matrix) => &*self.matrix.insert(matrix),
            None => self.build_adjacency_matrix(),
        }
    }

    /// Cached matrix, or `None` if it has not been built since the last
    /// mutation.
    pub fn matrix(&self) -> Option<&AdjacencyMatrix> {
        self.matrix.as_ref()
    }

    /// Returns `true` if every pair of distinct nodes is connected.
    pub fn is_complete(&self) -> bool {
        let n = self.nodes.len();
        let unique: HashSet<(usize, usize)> = self.edges.iter().map(Edge::key).collect();
        unique.len() == n * n.saturating_sub(1) / 2
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            is_complete: self.is_complete(),
            total_waste: self.engine.total_waste(&self.nodes),
        }
    }

    /// Declared node count.
    pub fn capacity(&self) -> usize {
        self.n
    }

    /// Nodes added so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Node at insertion position `index`.
    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Insertion position of the node with `id`.
    pub fn index_of(&self, id: usize) -> Option<usize> {
        self.nodes.iter().position(|n| n.id() == id)
    }

    /// The metric formulas this graph derives edge times with.
    pub fn metrics(&self) -> &MetricsEngine {
        &self.engine
    }
}
