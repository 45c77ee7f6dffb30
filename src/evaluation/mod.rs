//! Route evaluation and solution selection.
//!
//! - [`RouteEvaluator`] — scores every enumerated cycle and picks the
//!   optimal and worst routes
//! - [`Solution`] — the scored set, with ranking, statistics, pairwise
//!   comparison, JSON export and a text report

mod evaluator;
mod report;
mod solution;

pub use evaluator::RouteEvaluator;
pub use solution::{
    Comparison, Difference, ExportedResults, MetricStats, RouteStatistics, Solution, Summary,
    EXPORT_TOP_N,
};
