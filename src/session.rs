//! End-to-end runs over a graph with one shared configuration.

use serde::Serialize;

use crate::config::Config;
use crate::enumeration::{CycleEnumerator, SearchStatistics};
use crate::error::{Error, Result};
use crate::evaluation::{RouteEvaluator, Solution};
use crate::generator::{EdgeSet, RandomGenerator};
use crate::graph::Graph;
use crate::metrics::{impact_report, EnvironmentalSummary};

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub statistics: SearchStatistics,
    pub solution: Solution,
    pub environment: EnvironmentalSummary,
}

impl RunReport {
    /// Route report followed by the environmental impact report.
    pub fn text(&self) -> String {
        let mut out = self.solution.generate_report();
        out.push('\n');
        out.push_str(&impact_report(&self.environment));
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Owns the configuration for a sequence of runs.
///
/// # Examples
///
/// ```
/// use u_circuit::config::Config;
/// use u_circuit::generator::EdgeSet;
/// use u_circuit::session::Session;
///
/// let mut config = Config::default();
/// config.generator.seed = Some(1);
/// let session = Session::new(config);
/// let graph = session.generate_graph(8, EdgeSet::Complete).unwrap();
/// let report = session.run(&graph, 0).unwrap();
/// assert_eq!(report.statistics.cycles_found, 5040);
/// assert!(report.solution.optimal.distance <= report.solution.worst.distance);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds a random graph of `n` nodes from the session's generator
    /// options.
    pub fn generate_graph(&self, n: usize, edges: EdgeSet) -> Result<Graph> {
        RandomGenerator::new(&self.config).generate_graph(n, edges)
    }

    /// Enumerates every cycle from `start`, selects the optimal and worst
    /// routes and derives their environmental impact.
    ///
    /// The graph must have been built with the session's metric constants,
    /// since its edges already carry them; otherwise the run fails with
    /// [`Error::Config`]. A graph with no Hamiltonian cycle fails with
    /// [`Error::EmptyCycleSet`].
    pub fn run(&self, graph: &Graph, start: usize) -> Result<RunReport> {
        let engine = graph.metrics();
        if engine.config() != &self.config.metrics {
            log::error!("session.run: graph metric constants differ from session configuration");
            return Err(Error::Config(
                "graph was built with different metric constants than the session".to_string(),
            ));
        }

        let mut enumerator = CycleEnumerator::new(graph);
        let cycles = enumerator.find_all_cycles(start)?;
        let statistics = enumerator.statistics();
        log::debug!(
            "session.enumerate: cycles={} visits={} backtracks={} dead_ends={}",
            statistics.cycles_found,
            statistics.nodes_visited,
            statistics.backtracks,
            statistics.dead_ends
        );

        let solution = RouteEvaluator::new(graph).solve(&cycles)?;
        let environment =
            engine.environmental_summary(&solution.optimal, &solution.worst, graph.nodes());

        log::info!(
            "session.run: cycles={} optimal={:.2} worst={:.2} co2_saved={:.2}",
            cycles.len(),
            solution.optimal.distance,
            solution.worst.distance,
            solution.savings.co2_saved
        );
        Ok(RunReport {
            statistics,
            solution,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GraphLimits, MetricsConfig};
    use crate::models::Node;

    fn small_config() -> Config {
        Config {
            graph: GraphLimits::new(3, 16).expect("valid"),
            ..Config::default()
        }
    }

    fn square(config: &Config) -> Graph {
        let mut g = Graph::with_config(4, config).expect("valid");
        g.add_node(Node::new(0).at(0.0, 0.0).with_waste(30.0)).expect("add");
        g.add_node(Node::new(1).at(0.0, 10.0).with_waste(40.0)).expect("add");
        g.add_node(Node::new(2).at(10.0, 10.0).with_waste(50.0)).expect("add");
        g.add_node(Node::new(3).at(10.0, 0.0).with_waste(80.0)).expect("add");
        for a in 0..4 {
            for b in (a + 1)..4 {
                g.add_edge(a, b, None).expect("add");
            }
        }
        g
    }

    #[test]
    fn test_run_square() {
        let config = small_config();
        let graph = square(&config);
        let report = Session::new(config).run(&graph, 0).expect("feasible");

        assert_eq!(report.statistics.cycles_found, 6);
        assert_eq!(report.solution.optimal.distance, 4.0);
        assert_eq!(report.solution.worst.distance, 4.82);
        assert_eq!(report.environment.waste_info.total, 200.0);
        assert_eq!(report.environment.daily.optimal.efficiency, 50.0);
        assert_eq!(report.environment.annual.days, 365);
        assert_eq!(
            report.environment.daily.savings.savings,
            report.solution.savings
        );
    }

    #[test]
    fn test_run_without_cycle_is_infeasible() {
        let config = small_config();
        let mut graph = Graph::with_config(4, &config).expect("valid");
        for id in 0..4 {
            graph.add_node(Node::new(id)).expect("add");
        }
        graph.add_edge(0, 1, Some(1.0)).expect("add");
        graph.add_edge(1, 2, Some(1.0)).expect("add");
        graph.add_edge(2, 3, Some(1.0)).expect("add");

        assert_eq!(
            Session::new(config).run(&graph, 0).map(|r| r.statistics),
            Err(Error::EmptyCycleSet)
        );
    }

    #[test]
    fn test_run_unknown_start() {
        let config = small_config();
        let graph = square(&config);
        assert_eq!(
            Session::new(config).run(&graph, 9).map(|r| r.statistics),
            Err(Error::UnknownNode(9))
        );
    }

    #[test]
    fn test_run_rejects_graph_with_other_constants() {
        let graph = square(&small_config());
        let session = Session::new(Config {
            metrics: MetricsConfig {
                average_speed_kmh: 50.0,
                distance_scale_km: 1.0,
                ..MetricsConfig::default()
            },
            ..small_config()
        });
        assert!(matches!(
            session.run(&graph, 0).map(|r| r.statistics),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_route_time_matches_edge_times() {
        let config = Config {
            metrics: MetricsConfig {
                average_speed_kmh: 50.0,
                ..MetricsConfig::default()
            },
            ..small_config()
        };
        let graph = square(&config);
        let report = Session::new(config).run(&graph, 0).expect("feasible");
        let optimal = &report.solution.optimal;
        let edge_time: f64 = optimal
            .cycle
            .legs()
            .map(|(a, b)| {
                graph
                    .edges()
                    .iter()
                    .find(|e| e.connects(a, b))
                    .map(|e| e.time)
                    .expect("edge")
            })
            .sum();
        // four 1 km sides at 50 km/h
        assert_eq!(optimal.time, 4.8);
        assert!((optimal.time - edge_time).abs() < 1e-9);
    }

    #[test]
    fn test_report_text_and_json() {
        let config = small_config();
        let graph = square(&config);
        let report = Session::new(config).run(&graph, 0).expect("feasible");

        let text = report.text();
        assert!(text.contains("ROUTE OPTIMIZATION REPORT"));
        assert!(text.contains("ENVIRONMENTAL IMPACT"));

        let value: serde_json::Value =
            serde_json::from_str(&report.to_json().expect("serialize")).expect("parse");
        assert_eq!(value["statistics"]["cycles_found"], 6);
        assert_eq!(value["solution"]["optimal"]["distance"], 4.0);
    }
}
