//! Hamiltonian-cycle enumeration.
//!
//! - [`CycleEnumerator`] — exhaustive depth-first backtracking from a fixed
//!   start node, with search counters and an optional step trace
//! - [`is_hamiltonian`] — cycle validity check against a graph
//! - [`unique_cycles`] — rotation-based deduplication (not applied by the
//!   enumerator itself)

mod backtrack;
mod trace;

pub use backtrack::{is_hamiltonian, unique_cycles, CycleEnumerator, CycleExport, MIN_CYCLE_NODES};
pub use trace::{SearchStatistics, SearchStep, StepKind};
