//! Evaluation output and the queries it supports.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::metrics::{round_to, Savings, PRECISION};
use crate::models::RouteResult;

/// How many routes [`Solution::export_results`] lists at each end.
pub const EXPORT_TOP_N: usize = 5;

/// Headline figures of an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_evaluated: usize,
    pub best_distance: f64,
    pub worst_distance: f64,
    pub average_distance: f64,
}

impl Summary {
    pub(crate) fn from_results(
        results: &[RouteResult],
        optimal: &RouteResult,
        worst: &RouteResult,
    ) -> Self {
        let distances: Vec<f64> = results.iter().map(|r| r.distance).collect();
        Self {
            total_evaluated: results.len(),
            best_distance: optimal.distance,
            worst_distance: worst.distance,
            average_distance: round_to(mean(&distances), PRECISION),
        }
    }
}

/// Min, max, average and median of one figure across all results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricStats {
    pub min: f64,
    pub max: f64,
    /// Rounded to two decimals.
    pub average: f64,
    /// Middle value, or the mean of the two middle values for an even count.
    pub median: f64,
}

impl MetricStats {
    /// Returns `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };
        Some(Self {
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            average: round_to(mean(values), PRECISION),
            median,
        })
    }
}

/// Distribution of distance, time and CO₂ across all evaluated routes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteStatistics {
    pub distance: MetricStats,
    pub time: MetricStats,
    pub co2: MetricStats,
}

/// Second-minus-first deltas between two routes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Difference {
    pub distance: f64,
    pub time: f64,
    pub co2: f64,
}

/// Pairwise comparison of two evaluated routes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first: RouteResult,
    pub second: RouteResult,
    pub difference: Difference,
    /// Index of the shorter route; the second on a tie.
    pub better: usize,
}

/// Everything a results view needs, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedResults {
    pub optimal: RouteResult,
    pub worst: RouteResult,
    pub all_results: Vec<RouteResult>,
    pub statistics: RouteStatistics,
    pub top: Vec<RouteResult>,
    pub bottom: Vec<RouteResult>,
}

impl ExportedResults {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Result of evaluating a non-empty set of cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Shortest route; the first one found on ties.
    pub optimal: RouteResult,
    /// Longest route; the first one found on ties.
    pub worst: RouteResult,
    pub savings: Savings,
    /// Every route in enumeration order.
    pub all_results: Vec<RouteResult>,
    pub summary: Summary,
}

impl Solution {
    /// The `k` shortest routes, ascending. Ties keep enumeration order.
    pub fn top_n(&self, k: usize) -> Vec<&RouteResult> {
        self.sorted_by(k, |a, b| a.distance.total_cmp(&b.distance))
    }

    /// The `k` longest routes, descending. Ties keep enumeration order.
    pub fn worst_n(&self, k: usize) -> Vec<&RouteResult> {
        self.sorted_by(k, |a, b| b.distance.total_cmp(&a.distance))
    }

    fn sorted_by(
        &self,
        k: usize,
        cmp: impl Fn(&RouteResult, &RouteResult) -> Ordering,
    ) -> Vec<&RouteResult> {
        let mut sorted: Vec<&RouteResult> = self.all_results.iter().collect();
        sorted.sort_by(|a, b| cmp(*a, *b));
        sorted.truncate(k);
        sorted
    }

    pub fn statistics(&self) -> RouteStatistics {
        let distances: Vec<f64> = self.all_results.iter().map(|r| r.distance).collect();
        let times: Vec<f64> = self.all_results.iter().map(|r| r.time).collect();
        let co2s: Vec<f64> = self.all_results.iter().map(|r| r.co2).collect();
        let empty = MetricStats {
            min: 0.0,
            max: 0.0,
            average: 0.0,
            median: 0.0,
        };
        RouteStatistics {
            distance: MetricStats::from_values(&distances).unwrap_or(empty),
            time: MetricStats::from_values(&times).unwrap_or(empty),
            co2: MetricStats::from_values(&co2s).unwrap_or(empty),
        }
    }

    /// Compares the routes at enumeration indices `i` and `j`.
    pub fn compare(&self, i: usize, j: usize) -> Result<Comparison> {
        let len = self.all_results.len();
        let first = self
            .all_results
            .get(i)
            .ok_or(Error::IndexOutOfRange { index: i, len })?;
        let second = self
            .all_results
            .get(j)
            .ok_or(Error::IndexOutOfRange { index: j, len })?;

        Ok(Comparison {
            difference: Difference {
                distance: second.distance - first.distance,
                time: second.time - first.time,
                co2: second.co2 - first.co2,
            },
            better: if first.distance < second.distance { i } else { j },
            first: first.clone(),
            second: second.clone(),
        })
    }

    pub fn export_results(&self) -> ExportedResults {
        ExportedResults {
            optimal: self.optimal.clone(),
            worst: self.worst.clone(),
            all_results: self.all_results.clone(),
            statistics: self.statistics(),
            top: self.top_n(EXPORT_TOP_N).into_iter().cloned().collect(),
            bottom: self.worst_n(EXPORT_TOP_N).into_iter().cloned().collect(),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
