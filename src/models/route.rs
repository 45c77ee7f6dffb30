//! Scored candidate route.

use serde::{Deserialize, Serialize};

use super::Cycle;

/// One enumerated cycle together with its derived cost figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub cycle: Cycle,
    /// Total length in km.
    pub distance: f64,
    /// Total travel time in minutes.
    pub time: f64,
    /// Total emissions in kg CO₂.
    pub co2: f64,
    /// Position of the cycle in enumeration order.
    pub index: usize,
}
