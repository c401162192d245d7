//! Core types for agricert soil sensor data.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One of the eight monitored soil/water metrics.
///
/// The declaration order of [`Metric::ALL`] is the canonical ordering used
/// for violation lists and suggestion output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Metric {
    /// Volumetric soil moisture, percent.
    SoilMoisture,
    /// Soil temperature, degrees Celsius.
    SoilTemperature,
    /// Soil pH.
    Ph,
    /// Electrical conductivity, mS/cm.
    Ec,
    /// Nitrogen, ppm.
    Nitrogen,
    /// Phosphorus, ppm.
    Phosphorus,
    /// Potassium, ppm.
    Potassium,
    /// Total dissolved solids of irrigation water, ppm.
    WaterTds,
}

impl Metric {
    /// All metrics in canonical order.
    pub const ALL: [Metric; 8] = [
        Metric::SoilMoisture,
        Metric::SoilTemperature,
        Metric::Ph,
        Metric::Ec,
        Metric::Nitrogen,
        Metric::Phosphorus,
        Metric::Potassium,
        Metric::WaterTds,
    ];

    /// Wire-format key for this metric, matching the JSON field names of
    /// [`SoilReading`].
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Metric::SoilMoisture => "soil_moisture",
            Metric::SoilTemperature => "soil_temperature",
            Metric::Ph => "pH",
            Metric::Ec => "ec",
            Metric::Nitrogen => "nitrogen",
            Metric::Phosphorus => "phosphorus",
            Metric::Potassium => "potassium",
            Metric::WaterTds => "water_tds",
        }
    }

    /// Human-readable label used in certification reasons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::SoilMoisture => "Soil Moisture",
            Metric::SoilTemperature => "Soil Temperature",
            Metric::Ph => "pH",
            Metric::Ec => "EC",
            Metric::Nitrogen => "Nitrogen",
            Metric::Phosphorus => "Phosphorus",
            Metric::Potassium => "Potassium",
            Metric::WaterTds => "Water TDS",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = ParseError;

    /// Parse a wire-format key (see [`Metric::key`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| ParseError::UnknownMetric(s.to_string()))
    }
}

/// One snapshot of the eight soil/water metrics.
///
/// Immutable once produced. JSON field names follow the wire format consumed
/// by the dashboard frontend, including the `pH` capitalization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SoilReading {
    /// Volumetric soil moisture, percent.
    pub soil_moisture: f64,
    /// Soil temperature, degrees Celsius.
    pub soil_temperature: f64,
    /// Soil pH.
    #[cfg_attr(feature = "serde", serde(rename = "pH"))]
    pub ph: f64,
    /// Electrical conductivity, mS/cm.
    pub ec: f64,
    /// Nitrogen, ppm.
    pub nitrogen: f64,
    /// Phosphorus, ppm.
    pub phosphorus: f64,
    /// Potassium, ppm.
    pub potassium: f64,
    /// Total dissolved solids of irrigation water, ppm.
    pub water_tds: f64,
}

impl SoilReading {
    /// The value of a single metric.
    #[must_use]
    pub fn value(&self, metric: Metric) -> f64 {
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

/// Certification level derived from the consecutive-valid-reading streak.
///
/// Bands are fixed: a streak of 15 or more readings earns Full, 10 earns
/// Intermediate, 5 earns Basic. The streak itself is unbounded; the level
/// saturates at Full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CertificationLevel {
    /// Fewer than 5 consecutive valid readings.
    NotCertified,
    /// At least 5 consecutive valid readings.
    Basic,
    /// At least 10 consecutive valid readings.
    Intermediate,
    /// At least 15 consecutive valid readings.
    Full,
}

impl CertificationLevel {
    /// Derive the level from a consecutive-valid-reading count.
    #[must_use]
    pub fn from_streak(streak: u32) -> Self {
        if streak >= 15 {
            CertificationLevel::Full
        } else if streak >= 10 {
            CertificationLevel::Intermediate
        } else if streak >= 5 {
            CertificationLevel::Basic
        } else {
            CertificationLevel::NotCertified
        }
    }

    /// Status label used in API responses.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CertificationLevel::NotCertified => "Not Certified",
            CertificationLevel::Basic => "Level 1 - Basic Certification",
            CertificationLevel::Intermediate => "Level 2 - Intermediate Certification",
            CertificationLevel::Full => "Level 3 - Full Certification",
        }
    }
}

impl fmt::Display for CertificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current certification state.
///
/// Only the current state is kept; past states are not recorded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Certification {
    /// Consecutive readings that passed every threshold check.
    pub valid_streak: u32,
    /// Level derived from the streak.
    pub level: CertificationLevel,
    /// Human-readable explanation of the current state.
    pub reason: String,
}

impl Default for Certification {
    fn default() -> Self {
        Self {
            valid_streak: 0,
            level: CertificationLevel::NotCertified,
            reason: "Insufficient data.".to_string(),
        }
    }
}
