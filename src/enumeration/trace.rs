//! Search counters and the optional step-by-step trace.

use std::fmt;

use serde::Serialize;

/// What happened at one step of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Info,
    Warning,
    /// Extended the path by one unvisited neighbour.
    Exploring,
    /// Removed the last node from the path.
    Backtrack,
    /// Closed a path over every node back to the start.
    CycleFound,
    /// Visited every node but the tail has no edge back to the start.
    DeadEnd,
}

/// A recorded search event, for step-by-step views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchStep {
    pub kind: StepKind,
    /// Node ids on the path when the step was recorded.
    pub path: Vec<usize>,
    /// Recursive visits made so far.
    pub visit_count: usize,
    pub message: String,
}

impl fmt::Display for SearchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)
    }
}

/// Counters collected by one enumeration run.
///
/// Diagnostic only; they never influence the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    pub cycles_found: usize,
    /// Recursive calls, including the root.
    pub nodes_visited: usize,
    pub explorations: usize,
    pub backtracks: usize,
    pub dead_ends: usize,
    /// Every transition: explorations, backtracks, cycles and dead ends.
    pub total_steps: usize,
}
