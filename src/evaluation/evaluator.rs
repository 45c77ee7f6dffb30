//! Route evaluator that scores cycles and selects the optimal and worst.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::metrics::{round_to, MetricsEngine, PRECISION};
use crate::models::{Cycle, RouteResult};

use super::{Solution, Summary};

/// Scores Hamiltonian cycles by total distance, time and CO₂.
///
/// Selection scans in enumeration order with strict comparisons, so ties
/// keep the first cycle encountered.
///
/// # Examples
///
/// ```
/// use u_circuit::config::GraphLimits;
/// use u_circuit::evaluation::RouteEvaluator;
/// use u_circuit::graph::Graph;
/// use u_circuit::models::{Cycle, Node};
///
/// let mut g = Graph::with_limits(3, GraphLimits::new(3, 16).unwrap()).unwrap();
/// for id in 0..3 {
///     g.add_node(Node::new(id)).unwrap();
/// }
/// g.add_edge(0, 1, Some(1.0)).unwrap();
/// g.add_edge(1, 2, Some(2.0)).unwrap();
/// g.add_edge(2, 0, Some(3.0)).unwrap();
///
/// let evaluator = RouteEvaluator::new(&g);
/// let solution = evaluator
///     .solve(&[Cycle::new(vec![0, 1, 2, 0]), Cycle::new(vec![0, 2, 1, 0])])
///     .unwrap();
/// assert_eq!(solution.optimal.distance, 6.0);
/// assert_eq!(solution.optimal.index, 0);
/// assert_eq!(solution.summary.total_evaluated, 2);
/// ```
pub struct RouteEvaluator<'a> {
    graph: &'a Graph,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator. Time and CO₂ use the same constants the graph
    /// used for its edges.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Total length of a cycle, closing edge included, rounded to two
    /// decimals.
    ///
    /// Fails with [`Error::MissingEdge`] at the first pair of consecutive
    /// nodes without an edge.
    pub fn cycle_distance(&self, cycle: &Cycle) -> Result<f64> {
        let mut total = 0.0;
        for (from, to) in cycle.legs() {
            match self.graph.get_distance(from, to) {
                Some(d) => total += d,
                None => {
                    log::error!(
                        "evaluator: cycle {cycle} uses missing edge {from}-{to}; \
                         cycle does not belong to this graph"
                    );
                    return Err(Error::MissingEdge { from, to });
                }
            }
        }
        Ok(round_to(total, PRECISION))
    }

    /// Scores one cycle.
    pub fn evaluate(&self, cycle: &Cycle, index: usize) -> Result<RouteResult> {
        let distance = self.cycle_distance(cycle)?;
        Ok(RouteResult {
            cycle: cycle.clone(),
            distance,
            time: self.engine().time(distance),
            co2: self.engine().co2(distance),
            index,
        })
    }

    /// Scores every cycle and selects the cheapest and the most expensive.
    ///
    /// Fails with [`Error::EmptyCycleSet`] when there is nothing to score,
    /// meaning no feasible route exists.
    pub fn solve(&self, cycles: &[Cycle]) -> Result<Solution> {
        if cycles.is_empty() {
            log::warn!("evaluator: no cycles to evaluate");
            return Err(Error::EmptyCycleSet);
        }
        log::info!("evaluator: start cycles={}", cycles.len());

        let mut results = Vec::with_capacity(cycles.len());
        let mut min_distance = f64::INFINITY;
        let mut max_distance = f64::NEG_INFINITY;
        let mut best = 0;
        let mut worst = 0;

        for (index, cycle) in cycles.iter().enumerate() {
            let result = self.evaluate(cycle, index)?;
            log::trace!(
                "evaluator: cycle #{} distance={:.2} time={:.2} co2={:.2}",
                index + 1,
                result.distance,
                result.time,
                result.co2
            );

            if result.distance < min_distance {
                min_distance = result.distance;
                best = index;
            }
            if result.distance > max_distance {
                max_distance = result.distance;
                worst = index;
            }
            results.push(result);
        }

        let optimal = results[best].clone();
        let worst = results[worst].clone();
        let savings = self.engine().savings(&optimal, &worst);
        let summary = Summary::from_results(&results, &optimal, &worst);

        log::info!(
            "evaluator: done optimal=#{} distance={:.2} worst=#{} distance={:.2} saved={:.2}",
            optimal.index + 1,
            optimal.distance,
            worst.index + 1,
            worst.distance,
            savings.distance_saved
        );

        Ok(Solution {
            optimal,
            worst,
            savings,
            all_results: results,
            summary,
        })
    }

    pub fn engine(&self) -> &MetricsEngine {
        self.graph.metrics()
    }
}
