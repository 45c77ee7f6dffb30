//! Random collection-point layouts and edge sets.
//!
//! Nodes only carry coordinates; edge distances are always derived by
//! [`Graph::add_edge`] from the graph's own distance scale.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{Config, GeneratorOptions};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::models::{Node, NodeType};

const ZONE_NAMES: [&str; 17] = [
    "Downtown",
    "North",
    "South",
    "East",
    "West",
    "Main Square",
    "Park",
    "Market",
    "Station",
    "University",
    "Hospital",
    "Industrial Park",
    "Uptown",
    "Harbor",
    "Avenue",
    "Residential",
    "Industrial",
];

/// Which pairs of nodes get an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeSet {
    /// Every pair.
    Complete,
    /// A chain through all nodes plus each other pair with probability
    /// [`GeneratorOptions::connectivity`].
    Partial,
}

/// Seedable generator of collection-point graphs.
///
/// # Examples
///
/// ```
/// use u_circuit::config::Config;
/// use u_circuit::generator::{EdgeSet, RandomGenerator};
///
/// let mut config = Config::default();
/// config.generator.seed = Some(7);
/// let graph = RandomGenerator::new(&config)
///     .generate_graph(8, EdgeSet::Complete)
///     .unwrap();
/// assert_eq!(graph.node_count(), 8);
/// assert!(graph.is_complete());
/// ```
pub struct RandomGenerator {
    rng: StdRng,
    config: Config,
}

impl RandomGenerator {
    /// Uses `config.generator.seed` when set, OS entropy otherwise.
    pub fn new(config: &Config) -> Self {
        let rng = match config.generator.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            config: config.clone(),
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.config.generator
    }

    fn check_size(&self, n: usize) -> Result<()> {
        let limits = self.config.graph;
        if !limits.contains(n) {
            return Err(Error::InvalidSize {
                n,
                min: limits.min_nodes,
                max: limits.max_nodes,
            });
        }
        Ok(())
    }

    /// Scatters `n` nodes over the layout area, keeping them apart.
    ///
    /// Each node is retried up to `max_placement_attempts` times to stay at
    /// least `min(width, height) / (n / 2)` from every earlier node; the
    /// last attempt is kept regardless. Kinds split 60/25/15 between
    /// residential, commercial and industrial, with waste drawn from
    /// 20-50, 40-80 and 60-120 kg respectively.
    pub fn generate_nodes(&mut self, n: usize) -> Result<Vec<Node>> {
        self.check_size(n)?;
        let GeneratorOptions {
            width,
            height,
            margin,
            max_placement_attempts,
            ..
        } = self.config.generator;
        if width <= 2.0 * margin || height <= 2.0 * margin {
            return Err(Error::Config(format!(
                "layout area {width}x{height} leaves no room inside margin {margin}"
            )));
        }

        let min_separation = width.min(height) / (n as f64 / 2.0);
        let mut nodes: Vec<Node> = Vec::with_capacity(n);

        for i in 0..n {
            let mut attempts = 0;
            let (x, y) = loop {
                let x = self.rng.random_range(margin..width - margin);
                let y = self.rng.random_range(margin..height - margin);
                attempts += 1;
                let too_close = nodes.iter().any(|node| {
                    let dx = node.x() - x;
                    let dy = node.y() - y;
                    (dx * dx + dy * dy).sqrt() < min_separation
                });
                if !too_close || attempts >= max_placement_attempts {
                    break (x, y);
                }
            };

            let zone = ZONE_NAMES[self.rng.random_range(0..ZONE_NAMES.len())];
            let kind = self.random_kind();
            let waste = self.random_waste(kind);
            nodes.push(
                Node::new(i)
                    .with_name(format!("Point {} - {zone}", letter(i)))
                    .at(x.round(), y.round())
                    .with_waste(waste)
                    .with_kind(kind),
            );
        }

        log::debug!("generator.nodes: n={n} min_separation={min_separation:.1}");
        Ok(nodes)
    }

    /// Places `n` nodes evenly on a circle centred in the layout area,
    /// starting at the top and going clockwise on screen.
    ///
    /// Kinds are uniform and waste is drawn from 20-100 kg.
    pub fn circular_layout(&mut self, n: usize) -> Result<Vec<Node>> {
        self.check_size(n)?;
        let GeneratorOptions {
            width,
            height,
            margin,
            ..
        } = self.config.generator;
        let (cx, cy) = (width / 2.0, height / 2.0);
        let radius = (width.min(height) / 2.0 - margin).max(0.0);
        let step = std::f64::consts::TAU / n as f64;

        let nodes = (0..n)
            .map(|i| {
                let angle = i as f64 * step - std::f64::consts::FRAC_PI_2;
                let kind = NodeType::ALL[self.rng.random_range(0..NodeType::ALL.len())];
                let waste = self.rng.random_range(20..=100) as f64;
                Node::new(i)
                    .with_name(format!("Point {} - {}", letter(i), ZONE_NAMES[i % ZONE_NAMES.len()]))
                    .at(
                        (cx + radius * angle.cos()).round(),
                        (cy + radius * angle.sin()).round(),
                    )
                    .with_waste(waste)
                    .with_kind(kind)
            })
            .collect();

        log::debug!("generator.circular: n={n} radius={radius:.1}");
        Ok(nodes)
    }

    /// Every unordered pair of node ids, `i < j` by position.
    pub fn complete_pairs(nodes: &[Node]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(nodes.len() * nodes.len().saturating_sub(1) / 2);
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                pairs.push((a.id(), b.id()));
            }
        }
        pairs
    }

    /// A chain through the nodes in order, plus each non-adjacent pair with
    /// probability `connectivity`.
    ///
    /// The chain keeps the graph connected but does not guarantee a
    /// Hamiltonian cycle exists.
    pub fn partial_pairs(&mut self, nodes: &[Node]) -> Vec<(usize, usize)> {
        let p = self.config.generator.connectivity.clamp(0.0, 1.0);
        let mut pairs: Vec<(usize, usize)> =
            nodes.windows(2).map(|w| (w[0].id(), w[1].id())).collect();
        for i in 0..nodes.len() {
            for j in (i + 2)..nodes.len() {
                if self.rng.random_bool(p) {
                    pairs.push((nodes[i].id(), nodes[j].id()));
                }
            }
        }
        log::debug!(
            "generator.partial: nodes={} edges={} connectivity={p}",
            nodes.len(),
            pairs.len()
        );
        pairs
    }

    /// Generates a scattered layout of `n` nodes and connects it.
    ///
    /// The graph is built with the generator's own configuration, so its
    /// limits and metric constants match the options the layout came from.
    pub fn generate_graph(&mut self, n: usize, edges: EdgeSet) -> Result<Graph> {
        let nodes = self.generate_nodes(n)?;
        let pairs = match edges {
            EdgeSet::Complete => Self::complete_pairs(&nodes),
            EdgeSet::Partial => self.partial_pairs(&nodes),
        };
        let mut graph = Graph::with_config(n, &self.config)?;
        populate(&mut graph, nodes, &pairs)?;
        Ok(graph)
    }

    fn random_kind(&mut self) -> NodeType {
        let r: f64 = self.rng.random();
        if r < 0.6 {
            NodeType::Residential
        } else if r < 0.85 {
            NodeType::Commercial
        } else {
            NodeType::Industrial
        }
    }

    fn random_waste(&mut self, kind: NodeType) -> f64 {
        let kg = match kind {
            NodeType::Residential => self.rng.random_range(20..=50),
            NodeType::Commercial => self.rng.random_range(40..=80),
            NodeType::Industrial => self.rng.random_range(60..=120),
        };
        kg as f64
    }
}

/// Adds `nodes` and an edge per pair to `graph`, distances computed by the
/// graph.
pub fn populate(graph: &mut Graph, nodes: Vec<Node>, pairs: &[(usize, usize)]) -> Result<()> {
    for node in nodes {
        graph.add_node(node)?;
    }
    for &(from, to) in pairs {
        graph.add_edge(from, to, None)?;
    }
    log::info!(
        "generator.populate: nodes={} edges={}",
        graph.node_count(),
        graph.edges().len()
    );
    Ok(())
}

/// `A`, `B`, ... for the first 26 positions, then the position number.
fn letter(i: usize) -> String {
    match u8::try_from(i) {
        Ok(b) if b < 26 => char::from(b'A' + b).to_string(),
        _ => i.to_string(),
    }
}
