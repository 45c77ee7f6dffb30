//! Plain-text optimization report.

use std::fmt;

use crate::models::RouteResult;

use super::Solution;

const RULE: &str = "===========================================================";

fn write_route(f: &mut fmt::Formatter<'_>, title: &str, r: &RouteResult) -> fmt::Result {
    writeln!(f, "{title}:")?;
    writeln!(f, "   Cycle:    {}", r.cycle)?;
    writeln!(f, "   Distance: {:.2} km", r.distance)?;
    writeln!(f, "   Time:     {:.2} min", r.time)?;
    writeln!(f, "   CO2:      {:.2} kg", r.co2)?;
    writeln!(f)
}

/// The optimal and worst routes, savings and summary as text.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.savings;
        writeln!(f, "{RULE}")?;
        writeln!(f, "  ROUTE OPTIMIZATION REPORT")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "Cycles evaluated: {}", self.summary.total_evaluated)?;
        writeln!(f)?;

        write_route(f, "Optimal route", &self.optimal)?;
        write_route(f, "Worst route", &self.worst)?;

        writeln!(f, "Savings:")?;
        writeln!(
            f,
            "   Distance: -{:.2} km ({:.1}%)",
            s.distance_saved, s.distance_percent
        )?;
        writeln!(f, "   Time:     -{:.2} min ({:.1}%)", s.time_saved, s.time_percent)?;
        writeln!(f, "   CO2:      -{:.2} kg ({:.1}%)", s.co2_saved, s.co2_percent)?;
        writeln!(f)?;

        writeln!(f, "Statistics:")?;
        writeln!(
            f,
            "   Average distance: {:.2} km",
            self.summary.average_distance
        )?;
        writeln!(
            f,
            "   Range: {:.2} - {:.2} km",
            self.summary.best_distance, self.summary.worst_distance
        )?;
        writeln!(f)?;
        writeln!(f, "{RULE}")
    }
}

impl Solution {
    /// Renders the report shown by [`Display`](fmt::Display).
    pub fn generate_report(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GraphLimits;
    use crate::enumeration::CycleEnumerator;
    use crate::evaluation::RouteEvaluator;
    use crate::graph::Graph;
    use crate::models::Node;

    #[test]
    fn test_report_contents() {
        let mut g = Graph::with_limits(4, GraphLimits::new(3, 16).expect("valid")).expect("valid");
        g.add_node(Node::new(0).at(0.0, 0.0)).expect("add");
        g.add_node(Node::new(1).at(0.0, 10.0)).expect("add");
        g.add_node(Node::new(2).at(10.0, 10.0)).expect("add");
        g.add_node(Node::new(3).at(10.0, 0.0)).expect("add");
        for a in 0..4 {
            for b in (a + 1)..4 {
                g.add_edge(a, b, None).expect("add");
            }
        }
        let cycles = CycleEnumerator::new(&g).find_all_cycles(0).expect("valid");
        let solution = RouteEvaluator::new(&g).solve(&cycles).expect("non-empty");
        let report = solution.generate_report();
        assert_eq!(report, solution.to_string());
        assert!(report.ends_with("=\n"));

        assert!(report.contains("Cycles evaluated: 6"));
        assert!(report.contains("Cycle:    0 → 1 → 2 → 3 → 0"));
        assert!(report.contains("Distance: 4.00 km"));
        assert!(report.contains("Distance: -0.82 km (17.0%)"));
        assert!(report.contains("Average distance: 4.55 km"));
        assert!(report.contains("Range: 4.00 - 4.82 km"));
    }
}
