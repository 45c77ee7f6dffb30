//! Exhaustive Hamiltonian-cycle enumeration by depth-first backtracking.
//!
//! # Algorithm
//!
//! Starting from a fixed node, extend the path with every unvisited node that
//! shares an edge with the current tail, in graph node order. Once the path
//! holds every node, record it as a cycle if the tail connects back to the
//! start. After each recursive call the node is removed from the path and
//! unmarked, so every alternative is explored.
//!
//! # Complexity
//!
//! O((n-1)!) recursive calls on a complete graph. No pruning is applied
//! beyond skipping visited nodes and missing edges, so a tour and its mirror
//! image are both reported.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{AdjacencyMatrix, Graph};
use crate::models::Cycle;

use super::{SearchStatistics, SearchStep, StepKind};

/// Minimum node count for which a Hamiltonian cycle can exist.
pub const MIN_CYCLE_NODES: usize = 3;

/// All cycles from one run together with their counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleExport {
    pub cycles: Vec<Cycle>,
    pub count: usize,
    pub unique_count: usize,
    pub statistics: SearchStatistics,
}

/// Finds every Hamiltonian cycle of a graph from a given start node.
///
/// The enumerator only reads the graph. Each call to
/// [`find_all_cycles`](Self::find_all_cycles) resets the counters, so
/// repeated runs over an unchanged graph yield identical output. The cycle
/// list is handed to the caller; the enumerator keeps only the counters and
/// the optional trace.
///
/// # Examples
///
/// ```
/// use u_circuit::config::GraphLimits;
/// use u_circuit::enumeration::CycleEnumerator;
/// use u_circuit::graph::Graph;
/// use u_circuit::models::Node;
///
/// let mut g = Graph::with_limits(4, GraphLimits::new(3, 16).unwrap()).unwrap();
/// for id in 0..4 {
///     g.add_node(Node::new(id)).unwrap();
/// }
/// for a in 0..4 {
///     for b in (a + 1)..4 {
///         g.add_edge(a, b, Some(1.0)).unwrap();
///     }
/// }
///
/// let mut finder = CycleEnumerator::new(&g);
/// let cycles = finder.find_all_cycles(0).unwrap();
/// assert_eq!(cycles.len(), 6);
/// assert_eq!(cycles[0].ids(), &[0, 1, 2, 3, 0]);
/// assert_eq!(finder.statistics().cycles_found, 6);
/// ```
#[derive(Debug)]
pub struct CycleEnumerator<'a> {
    graph: &'a Graph,
    record_steps: bool,
    cycles: Vec<Cycle>,
    steps: Vec<SearchStep>,
    stats: SearchStatistics,
}

impl<'a> CycleEnumerator<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            record_steps: false,
            cycles: Vec::new(),
            steps: Vec::new(),
            stats: SearchStatistics::default(),
        }
    }

    /// Records every search event as a [`SearchStep`].
    ///
    /// The trace grows with the search tree; only enable it for small graphs.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.record_steps = enabled;
        self
    }

    /// Returns every Hamiltonian cycle that starts and ends at `start`, in
    /// discovery order.
    ///
    /// Graphs with fewer than three nodes yield no cycles. Fails with
    /// [`Error::UnknownNode`] if `start` is not in the graph.
    pub fn find_all_cycles(&mut self, start: usize) -> Result<Vec<Cycle>> {
        self.cycles.clear();
        self.steps.clear();
        self.stats = SearchStatistics::default();

        let n = self.graph.node_count();
        if n < MIN_CYCLE_NODES {
            log::warn!("enumerator: need at least {MIN_CYCLE_NODES} nodes, graph has {n}");
            self.record(StepKind::Warning, &[], || {
                format!("graph needs at least {MIN_CYCLE_NODES} nodes for a hamiltonian cycle")
            });
            return Ok(Vec::new());
        }
        let start_pos = self
            .graph
            .index_of(start)
            .ok_or(Error::UnknownNode(start))?;

        log::info!("enumerator: start node={start} n={n}");
        self.record(StepKind::Info, &[start], || {
            format!("searching hamiltonian cycles from node {start} over {n} nodes")
        });

        let matrix = self.graph.compute_matrix();
        let ids: Vec<usize> = self.graph.nodes().iter().map(|node| node.id()).collect();
        let mut visited = vec![false; n];
        let mut path = Vec::with_capacity(n + 1);
        visited[start_pos] = true;
        path.push(start_pos);

        self.backtrack(&matrix, &ids, &mut path, &mut visited, start_pos);

        self.stats.cycles_found = self.cycles.len();
        log::info!(
            "enumerator: done cycles={} visits={} explorations={} backtracks={}",
            self.stats.cycles_found,
            self.stats.nodes_visited,
            self.stats.explorations,
            self.stats.backtracks
        );
        let found = self.cycles.len();
        self.record(StepKind::Info, &[], || {
            format!("search finished, {found} hamiltonian cycles found")
        });

        Ok(std::mem::take(&mut self.cycles))
    }

    fn backtrack(
        &mut self,
        matrix: &AdjacencyMatrix,
        ids: &[usize],
        path: &mut Vec<usize>,
        visited: &mut [bool],
        start: usize,
    ) {
        self.stats.nodes_visited += 1;
        let n = ids.len();
        let Some(&current) = path.last() else {
            return;
        };

        if path.len() == n {
            if matrix.is_adjacent(current, start) {
                let mut cycle_ids: Vec<usize> = path.iter().map(|&p| ids[p]).collect();
                cycle_ids.push(ids[start]);
                let cycle = Cycle::new(cycle_ids);
                self.stats.total_steps += 1;
                log::trace!("enumerator: cycle #{} {cycle}", self.cycles.len() + 1);
                let number = self.cycles.len() + 1;
                self.record(StepKind::CycleFound, cycle.ids(), || {
                    format!("cycle #{number} found: {cycle}")
                });
                self.cycles.push(cycle);
            } else {
                self.stats.dead_ends += 1;
                self.stats.total_steps += 1;
                if self.record_steps {
                    let trail = id_path(path, ids);
                    self.record(StepKind::DeadEnd, &trail, || {
                        format!("complete path without return edge: {}", join(&trail))
                    });
                }
            }
            return;
        }

        for next in 0..n {
            if visited[next] || !matrix.is_adjacent(current, next) {
                continue;
            }

            self.stats.explorations += 1;
            self.stats.total_steps += 1;
            if self.record_steps {
                let mut trail = id_path(path, ids);
                trail.push(ids[next]);
                self.record(StepKind::Exploring, &trail, || {
                    format!("exploring: {}", join(&trail))
                });
            }

            visited[next] = true;
            path.push(next);

            self.backtrack(matrix, ids, path, visited, start);

            visited[next] = false;
            path.pop();

            self.stats.backtracks += 1;
            self.stats.total_steps += 1;
            if self.record_steps {
                let trail = id_path(path, ids);
                self.record(StepKind::Backtrack, &trail, || {
                    format!("backtracking from {}, path: {}", ids[next], join(&trail))
                });
            }
        }
    }

    fn record(&mut self, kind: StepKind, path: &[usize], message: impl FnOnce() -> String) {
        if !self.record_steps {
            return;
        }
        self.steps.push(SearchStep {
            kind,
            path: path.to_vec(),
            visit_count: self.stats.nodes_visited,
            message: message(),
        });
    }

    /// Number of cycles found by the last run.
    pub fn cycles_count(&self) -> usize {
        self.stats.cycles_found
    }

    /// Steps recorded by the last run; empty unless tracing is enabled.
    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }

    pub fn statistics(&self) -> SearchStatistics {
        self.stats
    }

    /// Returns `true` if `cycle` is a Hamiltonian cycle of the graph.
    pub fn is_valid_cycle(&self, cycle: &Cycle) -> bool {
        is_hamiltonian(self.graph, cycle)
    }

    /// Packs the cycles returned by the last run with its counters.
    pub fn export_cycles(&self, cycles: Vec<Cycle>) -> CycleExport {
        CycleExport {
            count: cycles.len(),
            unique_count: unique_cycles(&cycles).len(),
            cycles,
            statistics: self.stats,
        }
    }
}

/// Returns `true` if `cycle` visits every node of `graph` exactly once,
/// returns to its start, and only follows existing edges.
pub fn is_hamiltonian(graph: &Graph, cycle: &Cycle) -> bool {
    let n = graph.node_count();
    let ids = cycle.ids();
    if ids.len() != n + 1 || !cycle.is_closed() {
        return false;
    }

    let stops: HashSet<usize> = ids[..n].iter().copied().collect();
    if stops.len() != n || stops.iter().any(|&id| graph.node(id).is_none()) {
        return false;
    }

    cycle.legs().all(|(a, b)| graph.has_edge(a, b))
}

/// Keeps the first cycle of each rotation class, in input order.
///
/// Mirror images are different rotation classes and are both kept.
pub fn unique_cycles(cycles: &[Cycle]) -> Vec<Cycle> {
    let mut seen = HashSet::new();
    cycles
        .iter()
        .filter(|c| seen.insert(c.rotation_key()))
        .cloned()
        .collect()
}

fn id_path(path: &[usize], ids: &[usize]) -> Vec<usize> {
    path.iter().map(|&p| ids[p]).collect()
}

fn join(ids: &[usize]) -> String {
    ids.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphLimits;
    use crate::models::Node;
    use proptest::prelude::*;

    fn limits() -> GraphLimits {
        GraphLimits::new(1, 16).expect("valid")
    }

    fn empty_graph(n: usize) -> Graph {
        let mut g = Graph::with_limits(n, limits()).expect("valid");
        for id in 0..n {
            let angle = id as f64;
            g.add_node(Node::new(id).at(angle.cos() * 50.0, angle.sin() * 50.0))
                .expect("add");
        }
        g
    }

    fn complete_graph(n: usize) -> Graph {
        let mut g = empty_graph(n);
        for a in 0..n {
            for b in (a + 1)..n {
                g.add_edge(a, b, None).expect("add");
            }
        }
        g
    }

    fn factorial(k: usize) -> usize {
        (1..=k).product()
    }

    /// Counts tours from node 0 by permuting the remaining ids directly.
    fn count_by_permutation(g: &Graph) -> usize {
        let n = g.node_count();
        let mut rest: Vec<usize> = (1..n).collect();
        let mut count = 0;
        loop {
            let mut ok = g.has_edge(0, rest[0]) && g.has_edge(rest[n - 2], 0);
            ok = ok && rest.windows(2).all(|w| g.has_edge(w[0], w[1]));
            if ok {
                count += 1;
            }
            // next lexicographic permutation
            let Some(i) = (0..rest.len() - 1).rev().find(|&i| rest[i] < rest[i + 1]) else {
                break;
            };
            let j = (i + 1..rest.len())
                .rev()
                .find(|&j| rest[j] > rest[i])
                .unwrap_or(i + 1);
            rest.swap(i, j);
            rest[i + 1..].reverse();
        }
        count
    }

    #[test]
    fn test_complete_four() {
        let g = complete_graph(4);
        let mut finder = CycleEnumerator::new(&g);
        let cycles = finder.find_all_cycles(0).expect("valid start");
        assert_eq!(cycles.len(), 6);
        for c in &cycles {
            assert_eq!(c.ids().len(), 5);
            assert!(finder.is_valid_cycle(c));
        }
    }

    #[test]
    fn test_discovery_order() {
        let g = complete_graph(4);
        let cycles = CycleEnumerator::new(&g).find_all_cycles(0).expect("valid");
        let ids: Vec<&[usize]> = cycles.iter().map(Cycle::ids).collect();
        assert_eq!(
            ids,
            vec![
                &[0, 1, 2, 3, 0][..],
                &[0, 1, 3, 2, 0][..],
                &[0, 2, 1, 3, 0][..],
                &[0, 2, 3, 1, 0][..],
                &[0, 3, 1, 2, 0][..],
                &[0, 3, 2, 1, 0][..],
            ]
        );
    }

    #[test]
    fn test_mirror_images_counted_separately() {
        // Both traversal directions of a tour are distinct discoveries.
        let g = complete_graph(4);
        let cycles = CycleEnumerator::new(&g).find_all_cycles(0).expect("valid");
        for c in &cycles {
            assert!(cycles.contains(&c.reversed()));
        }
        assert_eq!(unique_cycles(&cycles).len(), cycles.len());
    }

    #[test]
    fn test_start_other_than_first_node() {
        let g = complete_graph(5);
        let cycles = CycleEnumerator::new(&g).find_all_cycles(3).expect("valid");
        assert_eq!(cycles.len(), 24);
        assert!(cycles.iter().all(|c| c.start() == Some(3)));
        assert_eq!(cycles[0].ids(), &[3, 0, 1, 2, 4, 3]);
    }

    #[test]
    fn test_unknown_start() {
        let g = complete_graph(4);
        assert_eq!(
            CycleEnumerator::new(&g).find_all_cycles(42),
            Err(Error::UnknownNode(42))
        );
    }

    #[test]
    fn test_fewer_than_three_nodes() {
        let mut g = empty_graph(2);
        g.add_edge(0, 1, None).expect("add");
        let mut finder = CycleEnumerator::new(&g).with_trace(true);
        assert!(finder.find_all_cycles(0).expect("not an error").is_empty());
        assert_eq!(finder.steps().len(), 1);
        assert_eq!(finder.steps()[0].kind, StepKind::Warning);
    }

    #[test]
    fn test_ring_has_two_directions() {
        let mut g = empty_graph(5);
        for i in 0..5 {
            g.add_edge(i, (i + 1) % 5, None).expect("add");
        }
        let cycles = CycleEnumerator::new(&g).find_all_cycles(0).expect("valid");
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].ids(), &[0, 1, 2, 3, 4, 0]);
        assert_eq!(cycles[1], cycles[0].reversed());
    }

    #[test]
    fn test_path_graph_has_no_cycle() {
        let mut g = empty_graph(4);
        for i in 0..3 {
            g.add_edge(i, i + 1, None).expect("add");
        }
        let mut finder = CycleEnumerator::new(&g);
        assert!(finder.find_all_cycles(0).expect("valid").is_empty());
        assert_eq!(finder.statistics().dead_ends, 1);
    }

    #[test]
    fn test_statistics_on_triangle() {
        let g = complete_graph(3);
        let mut finder = CycleEnumerator::new(&g);
        finder.find_all_cycles(0).expect("valid");
        let s = finder.statistics();
        assert_eq!(s.cycles_found, 2);
        // root, {1}, {1,2}, {2}, {2,1}
        assert_eq!(s.nodes_visited, 5);
        assert_eq!(s.explorations, 4);
        assert_eq!(s.backtracks, 4);
        assert_eq!(s.dead_ends, 0);
        assert_eq!(s.total_steps, 10);
    }

    #[test]
    fn test_trace_matches_counters() {
        let g = complete_graph(4);
        let mut finder = CycleEnumerator::new(&g).with_trace(true);
        finder.find_all_cycles(0).expect("valid");
        let s = finder.statistics();
        let count = |k| finder.steps().iter().filter(|st| st.kind == k).count();
        assert_eq!(count(StepKind::Exploring), s.explorations);
        assert_eq!(count(StepKind::Backtrack), s.backtracks);
        assert_eq!(count(StepKind::CycleFound), s.cycles_found);
        assert_eq!(count(StepKind::Info), 2);
        assert_eq!(finder.steps()[1].path, vec![0, 1]);
    }

    #[test]
    fn test_no_trace_by_default() {
        let g = complete_graph(4);
        let mut finder = CycleEnumerator::new(&g);
        finder.find_all_cycles(0).expect("valid");
        assert!(finder.steps().is_empty());
    }

    #[test]
    fn test_cycles_handed_out_not_retained() {
        let g = complete_graph(5);
        let mut finder = CycleEnumerator::new(&g);
        let cycles = finder.find_all_cycles(0).expect("valid");
        assert_eq!(cycles.len(), 24);
        assert!(finder.cycles.is_empty());
        assert_eq!(finder.cycles.capacity(), 0);
        assert_eq!(finder.cycles_count(), 24);
    }

    #[test]
    fn test_idempotent() {
        let g = complete_graph(5);
        let mut finder = CycleEnumerator::new(&g);
        let first = finder.find_all_cycles(0).expect("valid");
        let stats = finder.statistics();
        let second = finder.find_all_cycles(0).expect("valid");
        assert_eq!(first, second);
        assert_eq!(stats, finder.statistics());
    }

    #[test]
    fn test_non_contiguous_ids() {
        let mut g = Graph::with_limits(3, limits()).expect("valid");
        g.add_node(Node::new(7)).expect("add");
        g.add_node(Node::new(3).at(0.0, 10.0)).expect("add");
        g.add_node(Node::new(11).at(10.0, 0.0)).expect("add");
        g.add_edge(7, 3, None).expect("add");
        g.add_edge(3, 11, None).expect("add");
        g.add_edge(11, 7, None).expect("add");
        let cycles = CycleEnumerator::new(&g).find_all_cycles(3).expect("valid");
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].ids(), &[3, 7, 11, 3]);
    }

    #[test]
    fn test_is_hamiltonian_rejects() {
        let mut g = empty_graph(4);
        for i in 0..4 {
            g.add_edge(i, (i + 1) % 4, None).expect("add");
        }
        assert!(is_hamiltonian(&g, &Cycle::new(vec![0, 1, 2, 3, 0])));
        assert!(!is_hamiltonian(&g, &Cycle::new(vec![0, 1, 2, 3])));
        assert!(!is_hamiltonian(&g, &Cycle::new(vec![0, 1, 2, 3, 1])));
        assert!(!is_hamiltonian(&g, &Cycle::new(vec![0, 1, 1, 3, 0])));
        assert!(!is_hamiltonian(&g, &Cycle::new(vec![0, 2, 1, 3, 0])));
        assert!(!is_hamiltonian(&g, &Cycle::new(vec![0, 1, 2, 9, 0])));
    }

    #[test]
    fn test_unique_cycles_only_removes_rotations() {
        let cycles = vec![
            Cycle::new(vec![0, 1, 2, 3, 0]),
            Cycle::new(vec![2, 3, 0, 1, 2]),
            Cycle::new(vec![0, 3, 2, 1, 0]),
        ];
        let unique = unique_cycles(&cycles);
        assert_eq!(unique, vec![cycles[0].clone(), cycles[2].clone()]);
    }

    #[test]
    fn test_export() {
        let g = complete_graph(4);
        let mut finder = CycleEnumerator::new(&g);
        let cycles = finder.find_all_cycles(0).expect("valid");
        let export = finder.export_cycles(cycles);
        assert_eq!(export.count, 6);
        assert_eq!(export.cycles.len(), 6);
        // every cycle starts at the same node, so no two are rotations
        assert_eq!(export.unique_count, 6);
        assert_eq!(export.statistics.cycles_found, 6);
        assert_eq!(finder.cycles_count(), 6);
    }

    proptest! {
        #[test]
        fn prop_complete_graph_count(n in 3usize..=7) {
            let g = complete_graph(n);
            let cycles = CycleEnumerator::new(&g).find_all_cycles(0).expect("valid");
            prop_assert_eq!(cycles.len(), factorial(n - 1));
        }

        #[test]
        fn prop_partial_graph_cycles_valid(
            n in 4usize..=7,
            mask in proptest::collection::vec(any::<bool>(), 21),
        ) {
            let mut g = empty_graph(n);
            let mut k = 0;
            for a in 0..n {
                for b in (a + 1)..n {
                    if mask[k] {
                        g.add_edge(a, b, None).expect("add");
                    }
                    k += 1;
                }
            }
            let cycles = CycleEnumerator::new(&g).find_all_cycles(0).expect("valid");
            for c in &cycles {
                prop_assert!(is_hamiltonian(&g, c));
                prop_assert_eq!(c.start(), Some(0));
            }
            let distinct: HashSet<&Cycle> = cycles.iter().collect();
            prop_assert_eq!(distinct.len(), cycles.len());
            prop_assert_eq!(cycles.len(), count_by_permutation(&g));
        }
    }
}
