//! Environmental and cost metrics.
//!
//! - [`MetricsEngine`] — time, CO₂, fuel and cost from a distance; savings,
//!   annual impact and environmental summaries from an optimal/worst pair
//! - [`impact_report`] — text rendering of an [`EnvironmentalSummary`]

mod calculator;
mod impact;
mod report;

pub use calculator::{round_to, MetricsEngine, COST_PER_KG_PRECISION, PRECISION};
pub use impact::{
    AnnualImpact, DailyComparison, DailySavings, EnvironmentalSummary, RouteMetrics,
    RouteProfile, Savings, WasteInfo,
};
pub use report::{format_number, impact_report};
