//! Report records produced by [`MetricsEngine`](super::MetricsEngine).

use serde::{Deserialize, Serialize};

/// Per-route figures derived from a single distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub distance: f64,
    pub time: f64,
    pub co2: f64,
    pub fuel: f64,
    pub cost: f64,
}

/// Worst-minus-optimal deltas, absolute and as a percentage of the worst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub distance_saved: f64,
    pub time_saved: f64,
    pub co2_saved: f64,
    pub fuel_saved: f64,
    pub cost_saved: f64,
    pub distance_percent: f64,
    pub time_percent: f64,
    pub co2_percent: f64,
}

/// Daily savings scaled over a year of operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualImpact {
    pub days: u32,
    pub distance_saved: f64,
    /// Minutes.
    pub time_saved: f64,
    pub time_in_hours: f64,
    pub co2_saved: f64,
    pub fuel_saved: f64,
    pub cost_saved: f64,
    pub trees_equivalent: f64,
}

/// One route's daily figures, including waste collected per km.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteProfile {
    pub index: usize,
    pub distance: f64,
    pub time: f64,
    pub co2: f64,
    pub fuel: f64,
    pub cost: f64,
    /// kg of waste per km.
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySavings {
    #[serde(flatten)]
    pub savings: Savings,
    pub trees_equivalent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyComparison {
    pub optimal: RouteProfile,
    pub worst: RouteProfile,
    pub savings: DailySavings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteInfo {
    /// kg.
    pub total: f64,
    pub cost_per_kg_optimal: f64,
    pub cost_per_kg_worst: f64,
}

/// Complete environmental comparison of the optimal and worst routes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalSummary {
    pub daily: DailyComparison,
    pub annual: AnnualImpact,
    pub waste_info: WasteInfo,
}
