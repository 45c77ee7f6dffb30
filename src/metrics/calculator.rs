//! Distance-derived figures: time, emissions, fuel and cost.

use crate::config::MetricsConfig;
use crate::models::{Node, RouteResult};

use super::impact::{
    AnnualImpact, DailyComparison, DailySavings, EnvironmentalSummary, RouteMetrics,
    RouteProfile, Savings, WasteInfo,
};

/// Decimal places for every derived figure.
pub const PRECISION: i32 = 2;

/// Decimal places for cost-per-kg figures.
pub const COST_PER_KG_PRECISION: i32 = 4;

/// Rounds `value` to `decimals` places, half away from zero.
///
/// ```
/// use u_circuit::metrics::round_to;
///
/// assert_eq!(round_to(1.23456, 2), 1.23);
/// assert_eq!(round_to(2.0000000000000004, 2), 2.0);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn round2(value: f64) -> f64 {
    round_to(value, PRECISION)
}

/// Share of `part` in `whole`, in percent. Zero when `whole` is zero.
fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Pure numeric derivations over a fixed constant table.
///
/// Stateless apart from its configuration; every method is a deterministic
/// function of its arguments.
///
/// # Examples
///
/// ```
/// use u_circuit::metrics::MetricsEngine;
///
/// let engine = MetricsEngine::default();
/// assert_eq!(engine.co2(10.0), 2.0);
/// assert_eq!(engine.time(25.0), 60.0);
/// assert_eq!(engine.fuel(10.0), 3.5);
/// assert_eq!(engine.fuel_cost(10.0), 5.25);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsEngine {
    config: MetricsConfig,
}

impl MetricsEngine {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Travel time in minutes at the average speed.
    pub fn time(&self, distance: f64) -> f64 {
        round2(distance / self.config.average_speed_kmh * 60.0)
    }

    /// Emissions in kg CO₂.
    pub fn co2(&self, distance: f64) -> f64 {
        round2(distance * self.config.co2_per_km)
    }

    /// Fuel burned, in litres.
    pub fn fuel(&self, distance: f64) -> f64 {
        round2(distance * self.config.fuel_per_km)
    }

    /// Fuel cost, priced on the rounded fuel volume.
    pub fn fuel_cost(&self, distance: f64) -> f64 {
        round2(self.fuel(distance) * self.config.fuel_cost_per_liter)
    }

    /// All per-route figures for a distance.
    pub fn metrics(&self, distance: f64) -> RouteMetrics {
        RouteMetrics {
            distance: round2(distance),
            time: self.time(distance),
            co2: self.co2(distance),
            fuel: self.fuel(distance),
            cost: self.fuel_cost(distance),
        }
    }

    /// Total waste across the given nodes, in kg.
    pub fn total_waste(&self, nodes: &[Node]) -> f64 {
        nodes.iter().map(Node::waste_amount).sum()
    }

    /// Waste collected per km driven. Zero for a zero distance.
    pub fn efficiency(&self, total_waste: f64, distance: f64) -> f64 {
        if distance == 0.0 {
            return 0.0;
        }
        round2(total_waste / distance)
    }

    /// Cost per kg of waste collected. Zero when there is no waste.
    pub fn cost_per_kg(&self, total_cost: f64, total_waste: f64) -> f64 {
        if total_waste == 0.0 {
            return 0.0;
        }
        round_to(total_cost / total_waste, COST_PER_KG_PRECISION)
    }

    /// Number of trees absorbing `co2_kg` in one year.
    pub fn co2_to_trees(&self, co2_kg: f64) -> f64 {
        round2(co2_kg / self.config.co2_per_tree_per_year)
    }

    /// Reduction from driving the optimal route instead of the worst one.
    pub fn savings(&self, optimal: &RouteResult, worst: &RouteResult) -> Savings {
        let distance_saved = worst.distance - optimal.distance;
        let time_saved = worst.time - optimal.time;
        let co2_saved = worst.co2 - optimal.co2;

        Savings {
            distance_saved: round2(distance_saved),
            time_saved: round2(time_saved),
            co2_saved: round2(co2_saved),
            fuel_saved: self.fuel(distance_saved),
            cost_saved: self.fuel_cost(distance_saved),
            distance_percent: round2(percent(distance_saved, worst.distance)),
            time_percent: round2(percent(time_saved, worst.time)),
            co2_percent: round2(percent(co2_saved, worst.co2)),
        }
    }

    /// Scales daily savings over `days_per_year` operating days.
    pub fn annual_impact(&self, savings: &Savings, days_per_year: u32) -> AnnualImpact {
        let days = f64::from(days_per_year);
        let co2_saved = savings.co2_saved * days;
        AnnualImpact {
            days: days_per_year,
            distance_saved: round2(savings.distance_saved * days),
            time_saved: round2(savings.time_saved * days),
            time_in_hours: round2(savings.time_saved * days / 60.0),
            co2_saved: round2(co2_saved),
            fuel_saved: round2(savings.fuel_saved * days),
            cost_saved: round2(savings.cost_saved * days),
            trees_equivalent: self.co2_to_trees(co2_saved),
        }
    }

    /// Daily, annual and waste figures for an optimal/worst pair.
    pub fn environmental_summary(
        &self,
        optimal: &RouteResult,
        worst: &RouteResult,
        nodes: &[Node],
    ) -> EnvironmentalSummary {
        let savings = self.savings(optimal, worst);
        let annual = self.annual_impact(&savings, self.config.days_per_year);
        let total_waste = self.total_waste(nodes);

        EnvironmentalSummary {
            daily: DailyComparison {
                optimal: self.profile(optimal, total_waste),
                worst: self.profile(worst, total_waste),
                savings: DailySavings {
                    trees_equivalent: self.co2_to_trees(savings.co2_saved),
                    savings,
                },
            },
            annual,
            waste_info: WasteInfo {
                total: total_waste,
                cost_per_kg_optimal: self
                    .cost_per_kg(self.fuel_cost(optimal.distance), total_waste),
                cost_per_kg_worst: self.cost_per_kg(self.fuel_cost(worst.distance), total_waste),
            },
        }
    }

    fn profile(&self, route: &RouteResult, total_waste: f64) -> RouteProfile {
        RouteProfile {
            index: route.index,
            distance: route.distance,
            time: route.time,
            co2: route.co2,
            fuel: self.fuel(route.distance),
            cost: self.fuel_cost(route.distance),
            efficiency: self.efficiency(total_waste, route.distance),
        }
    }
}
