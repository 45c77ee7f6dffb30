//! Collection point types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of site a collection point serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    #[default]
    Residential,
    Commercial,
    Industrial,
}

impl NodeType {
    pub const ALL: [NodeType; 3] = [
        NodeType::Residential,
        NodeType::Commercial,
        NodeType::Industrial,
    ];
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeType::Residential => "residential",
            NodeType::Commercial => "commercial",
            NodeType::Industrial => "industrial",
        };
        f.write_str(s)
    }
}

/// A waste collection point.
///
/// Omitted fields take their defaults at construction: name `"Point {id}"`,
/// coordinates `(0, 0)`, no waste, residential.
///
/// # Examples
///
/// ```
/// use u_circuit::models::{Node, NodeType};
///
/// let n = Node::new(3);
/// assert_eq!(n.name(), "Point 3");
/// assert_eq!(n.kind(), NodeType::Residential);
///
/// let m = Node::new(4).at(10.0, 20.0).with_waste(45.0).with_kind(NodeType::Commercial);
/// assert_eq!(m.x(), 10.0);
/// assert_eq!(m.waste_amount(), 45.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    name: String,
    x: f64,
    y: f64,
    waste_amount: f64,
    #[serde(rename = "type")]
    kind: NodeType,
}

impl Node {
    /// Creates a node with default attributes.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            name: format!("Point {id}"),
            x: 0.0,
            y: 0.0,
            waste_amount: 0.0,
            kind: NodeType::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Places the node at the given coordinates.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the waste to collect here, in kg.
    pub fn with_waste(mut self, kg: f64) -> Self {
        self.waste_amount = kg;
        self
    }

    pub fn with_kind(mut self, kind: NodeType) -> Self {
        self.kind = kind;
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Waste to collect, in kg.
    pub fn waste_amount(&self) -> f64 {
        self.waste_amount
    }

    pub fn kind(&self) -> NodeType {
        self.kind
    }

    /// Euclidean distance to another node, in coordinate units.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let n = Node::new(7);
        assert_eq!(n.id(), 7);
        assert_eq!(n.name(), "Point 7");
        assert_eq!(n.x(), 0.0);
        assert_eq!(n.y(), 0.0);
        assert_eq!(n.waste_amount(), 0.0);
        assert_eq!(n.kind(), NodeType::Residential);
    }

    #[test]
    fn test_builder() {
        let n = Node::new(1)
            .with_name("Market")
            .at(3.0, 4.0)
            .with_waste(60.0)
            .with_kind(NodeType::Industrial);
        assert_eq!(n.name(), "Market");
        assert_eq!(n.y(), 4.0);
        assert_eq!(n.kind(), NodeType::Industrial);
    }

    #[test]
    fn test_distance() {
        let a = Node::new(0);
        let b = Node::new(1).at(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_serde_type_field() {
        let n = Node::new(2).with_kind(NodeType::Commercial);
        let json = serde_json::to_string(&n).expect("serialize");
        assert!(json.contains(r#""type":"commercial""#));
        let back: Node = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, n);
    }

    #[test]
    fn test_type_display() {
        assert_eq!(NodeType::Industrial.to_string(), "industrial");
        assert_eq!(NodeType::ALL.len(), 3);
    }
}
