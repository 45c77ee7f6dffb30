//! Configuration: the single table of constants used by every component.
//!
//! Every field has a default, so a partial JSON document only overrides what
//! it names.
//!
//! # Examples
//!
//! ```
//! use u_circuit::config::Config;
//!
//! let config = Config::from_json_str(r#"{ "metrics": { "average_speed_kmh": 30.0 } }"#).unwrap();
//! assert_eq!(config.metrics.average_speed_kmh, 30.0);
//! assert_eq!(config.metrics.co2_per_km, 0.2);
//! assert_eq!(config.graph.max_nodes, 16);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphLimits,
    pub metrics: MetricsConfig,
    pub generator: GeneratorOptions,
}

impl Config {
    /// Parses a configuration from JSON, filling omitted fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.graph.validate()?;
        config.metrics.validate()?;
        Ok(config)
    }
}

/// Allowed range for the number of nodes in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphLimits {
    pub min_nodes: usize,
    pub max_nodes: usize,
}

impl GraphLimits {
    pub const DEFAULT_MIN_NODES: usize = 8;
    pub const DEFAULT_MAX_NODES: usize = 16;

    /// Creates a validated range. Fails unless `1 <= min <= max`.
    pub fn new(min_nodes: usize, max_nodes: usize) -> Result<Self> {
        let limits = Self {
            min_nodes,
            max_nodes,
        };
        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_nodes == 0 || self.min_nodes > self.max_nodes {
            return Err(Error::InvalidLimits {
                min: self.min_nodes,
                max: self.max_nodes,
            });
        }
        Ok(())
    }

    /// Returns `true` if `n` falls within the range.
    pub fn contains(&self, n: usize) -> bool {
        n >= self.min_nodes && n <= self.max_nodes
    }
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            min_nodes: Self::DEFAULT_MIN_NODES,
            max_nodes: Self::DEFAULT_MAX_NODES,
        }
    }
}

/// Physical constants for distance, time, emissions and cost derivations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Kilometres per coordinate unit.
    pub distance_scale_km: f64,
    /// Average collection truck speed in km/h.
    pub average_speed_kmh: f64,
    /// kg CO₂ emitted per km.
    pub co2_per_km: f64,
    /// Litres of fuel per km.
    pub fuel_per_km: f64,
    pub fuel_cost_per_liter: f64,
    /// kg CO₂ absorbed by one tree in a year.
    pub co2_per_tree_per_year: f64,
    /// Operating days used to annualize daily savings.
    pub days_per_year: u32,
}

impl MetricsConfig {
    /// Rejects constants the formulas cannot use.
    ///
    /// Every rate must be finite and non-negative. The scale, the speed and
    /// the per-tree absorption divide or multiply every distance, so they
    /// must be positive, and so must `days_per_year`.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("distance_scale_km", self.distance_scale_km),
            ("average_speed_kmh", self.average_speed_kmh),
            ("co2_per_km", self.co2_per_km),
            ("fuel_per_km", self.fuel_per_km),
            ("fuel_cost_per_liter", self.fuel_cost_per_liter),
            ("co2_per_tree_per_year", self.co2_per_tree_per_year),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "metrics.{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("distance_scale_km", self.distance_scale_km),
            ("average_speed_kmh", self.average_speed_kmh),
            ("co2_per_tree_per_year", self.co2_per_tree_per_year),
        ] {
            if value == 0.0 {
                return Err(Error::Config(format!("metrics.{name} must be positive")));
            }
        }
        if self.days_per_year == 0 {
            return Err(Error::Config(
                "metrics.days_per_year must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            distance_scale_km: 0.1,
            average_speed_kmh: 25.0,
            co2_per_km: 0.2,
            fuel_per_km: 0.35,
            fuel_cost_per_liter: 1.5,
            co2_per_tree_per_year: 21.0,
            days_per_year: 365,
        }
    }
}

/// Parameters for random graph generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub width: f64,
    pub height: f64,
    /// Keep-out border on each side of the layout area.
    pub margin: f64,
    /// Placement retries per node before accepting a point that is too close.
    pub max_placement_attempts: u32,
    /// Probability of each extra edge in a partial graph, in `[0, 1]`.
    pub connectivity: f64,
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 50.0,
            max_placement_attempts: 50,
            connectivity: 0.7,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.graph.min_nodes, 8);
        assert_eq!(c.graph.max_nodes, 16);
        assert_eq!(c.metrics.distance_scale_km, 0.1);
        assert_eq!(c.metrics.days_per_year, 365);
        assert_eq!(c.generator.seed, None);
    }

    #[test]
    fn test_partial_json() {
        let c = Config::from_json_str(r#"{ "graph": { "min_nodes": 3 } }"#).expect("valid");
        assert_eq!(c.graph.min_nodes, 3);
        assert_eq!(c.graph.max_nodes, 16);
        assert_eq!(c.metrics, MetricsConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Config::from_json_str("{ graph"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_invalid_limits_rejected() {
        assert!(matches!(
            Config::from_json_str(r#"{ "graph": { "min_nodes": 20 } }"#),
            Err(Error::InvalidLimits { min: 20, max: 16 })
        ));
        assert!(GraphLimits::new(0, 4).is_err());
        assert!(GraphLimits::new(3, 3).is_ok());
    }

    #[test]
    fn test_metrics_validation() {
        assert_eq!(MetricsConfig::default().validate(), Ok(()));

        let zero_speed = MetricsConfig {
            average_speed_kmh: 0.0,
            ..MetricsConfig::default()
        };
        assert!(matches!(zero_speed.validate(), Err(Error::Config(_))));

        let negative_co2 = MetricsConfig {
            co2_per_km: -0.2,
            ..MetricsConfig::default()
        };
        assert!(matches!(negative_co2.validate(), Err(Error::Config(_))));

        let nan_cost = MetricsConfig {
            fuel_cost_per_liter: f64::NAN,
            ..MetricsConfig::default()
        };
        assert!(matches!(nan_cost.validate(), Err(Error::Config(_))));

        let no_days = MetricsConfig {
            days_per_year: 0,
            ..MetricsConfig::default()
        };
        assert!(matches!(no_days.validate(), Err(Error::Config(_))));

        // free fuel is a valid scenario
        let free_fuel = MetricsConfig {
            fuel_cost_per_liter: 0.0,
            ..MetricsConfig::default()
        };
        assert_eq!(free_fuel.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_metrics_json_rejected() {
        assert!(matches!(
            Config::from_json_str(r#"{ "metrics": { "average_speed_kmh": 0 } }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{ "metrics": { "distance_scale_km": -1.0 } }"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_limits_contains() {
        let l = GraphLimits::default();
        assert!(!l.contains(7));
        assert!(l.contains(8));
        assert!(l.contains(16));
        assert!(!l.contains(17));
    }
}
