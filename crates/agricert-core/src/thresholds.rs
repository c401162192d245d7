//! Acceptable ranges for soil readings and range checking.
//!
//! The default table carries the fixed certification thresholds; evaluation
//! is a pure membership check per metric.
//!
//! # Example
//!
//! ```
//! use agricert_core::Thresholds;
//! use agricert_types::{Metric, SoilReading};
//!
//! let thresholds = Thresholds::default();
//!
//! let reading = SoilReading {
//!     soil_moisture: 50.0,
//!     soil_temperature: 20.0,
//!     ph: 5.0, // below the 6.5 minimum
//!     ec: 1.5,
//!     nitrogen: 25.0,
//!     phosphorus: 20.0,
//!     potassium: 150.0,
//!     water_tds: 300.0,
//! };
//!
//! assert_eq!(thresholds.violations(&reading), vec![Metric::Ph]);
//! ```

use serde::{Deserialize, Serialize};

use agricert_types::{Metric, SoilReading};

/// Inclusive acceptable range for a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
}

impl Range {
    /// Check whether a value falls within the range. Both bounds are
    /// inclusive.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Per-metric acceptable ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub soil_moisture: Range,
    pub soil_temperature: Range,
    pub ph: Range,
    pub ec: Range,
    pub nitrogen: Range,
    pub phosphorus: Range,
    pub potassium: Range,
    pub water_tds: Range,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            soil_moisture: Range { min: 30.0, max: 70.0 },
            soil_temperature: Range { min: 15.0, max: 30.0 },
            ph: Range { min: 6.5, max: 7.5 },
            ec: Range { min: 1.2, max: 2.0 },
            nitrogen: Range { min: 20.0, max: 40.0 },
            phosphorus: Range { min: 10.0, max: 30.0 },
            potassium: Range { min: 100.0, max: 250.0 },
            water_tds: Range { min: 100.0, max: 500.0 },
        }
    }
}

impl ThresholdConfig {
    /// The range for a single metric.
    #[must_use]
    pub fn range(&self, metric: Metric) -> Range {
        match metric {
            Metric::SoilMoisture => self.soil_moisture,
            Metric::SoilTemperature => self.soil_temperature,
            Metric::Ph => self.ph,
            Metric::Ec => self.ec,
            Metric::Nitrogen => self.nitrogen,
            Metric::Phosphorus => self.phosphorus,
            Metric::Potassium => self.potassium,
            Metric::WaterTds => self.water_tds,
        }
    }
}

/// Threshold evaluator for soil readings.
#[derive(Debug, Clone, Default)]
pub struct Thresholds {
    config: ThresholdConfig,
}

impl Thresholds {
    /// Create a new threshold evaluator with the given configuration.
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Metrics whose values fall outside their acceptable range, in
    /// canonical order ([`Metric::ALL`]).
    ///
    /// Total over all inputs; an empty result means the reading passed
    /// every check.
    #[must_use]
    pub fn violations(&self, reading: &SoilReading) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|&m| !self.config.range(m).contains(reading.value(m)))
            .collect()
    }

    /// Check whether every metric is within its acceptable range.
    #[must_use]
    pub fn is_valid(&self, reading: &SoilReading) -> bool {
        Metric::ALL
            .into_iter()
            .all(|m| self.config.range(m).contains(reading.value(m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_reading() -> SoilReading {
        SoilReading {
            soil_moisture: 50.0,
            soil_temperature: 20.0,
            ph: 7.0,
            ec: 1.5,
            nitrogen: 25.0,
            phosphorus: 20.0,
            potassium: 150.0,
            water_tds: 300.0,
        }
    }

    #[test]
    fn test_valid_reading_has_no_violations() {
        let t = Thresholds::default();
        assert!(t.violations(&valid_reading()).is_empty());
        assert!(t.is_valid(&valid_reading()));
    }

    #[test]
    fn test_single_violation() {
        let t = Thresholds::default();
        let mut reading = valid_reading();
        reading.ph = 5.0;

        assert_eq!(t.violations(&reading), vec![Metric::Ph]);
        assert!(!t.is_valid(&reading));
    }

    #[test]
    fn test_multiple_violations_in_canonical_order() {
        let t = Thresholds::default();
        let mut reading = valid_reading();
        reading.water_tds = 600.0;
        reading.soil_moisture = 10.0;
        reading.nitrogen = 50.0;

        assert_eq!(
            t.violations(&reading),
            vec![Metric::SoilMoisture, Metric::Nitrogen, Metric::WaterTds]
        );
    }

    #[test]
    fn test_boundary_values_are_inclusive() {
        let t = Thresholds::default();
        let mut reading = valid_reading();

        reading.soil_moisture = 30.0;
        assert!(t.is_valid(&reading));
        reading.soil_moisture = 70.0;
        assert!(t.is_valid(&reading));

        reading.soil_moisture = 29.99;
        assert_eq!(t.violations(&reading), vec![Metric::SoilMoisture]);
        reading.soil_moisture = 70.01;
        assert_eq!(t.violations(&reading), vec![Metric::SoilMoisture]);
    }

    #[test]
    fn test_default_table_values() {
        let config = ThresholdConfig::default();
        assert_eq!(config.range(Metric::Ph), Range { min: 6.5, max: 7.5 });
        assert_eq!(
            config.range(Metric::Potassium),
            Range { min: 100.0, max: 250.0 }
        );
        assert_eq!(
            config.range(Metric::WaterTds),
            Range { min: 100.0, max: 500.0 }
        );
    }

    #[test]
    fn test_all_metrics_out_of_range() {
        let t = Thresholds::default();
        let reading = SoilReading {
            soil_moisture: 0.0,
            soil_temperature: 0.0,
            ph: 0.0,
            ec: 0.0,
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            water_tds: 0.0,
        };

        assert_eq!(t.violations(&reading), Metric::ALL.to_vec());
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = ThresholdConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ThresholdConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
