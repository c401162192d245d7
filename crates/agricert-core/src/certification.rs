//! Certification state machine driven by consecutive valid readings.
//!
//! A Moore machine over one counter: a reading that passes every threshold
//! check increments the consecutive-valid streak, any violation resets it
//! to zero, and the certification level is derived from the post-update
//! streak. The counter is unbounded; the level saturates at Full.
//!
//! # Example
//!
//! ```
//! use agricert_core::Certifier;
//! use agricert_types::{CertificationLevel, SoilReading};
//!
//! let mut certifier = Certifier::default();
//!
//! let reading = SoilReading {
//!     soil_moisture: 50.0,
//!     soil_temperature: 20.0,
//!     ph: 7.0,
//!     ec: 1.5,
//!     nitrogen: 25.0,
//!     phosphorus: 20.0,
//!     potassium: 150.0,
//!     water_tds: 300.0,
//! };
//!
//! let assessment = certifier.observe(&reading);
//! assert!(assessment.is_valid());
//! assert_eq!(assessment.certification.valid_streak, 1);
//! assert_eq!(
//!     assessment.certification.level,
//!     CertificationLevel::NotCertified
//! );
//! ```

use serde::Serialize;
use tracing::debug;

use agricert_types::{Certification, CertificationLevel, Metric, SoilReading};

use crate::thresholds::Thresholds;

/// Reason recorded when a reading passes every check.
pub const SUCCESS_REASON: &str = "All conditions met.";

/// Outcome of folding one reading into the certification state.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Metrics that fell outside their acceptable range, in canonical order.
    pub violations: Vec<Metric>,
    /// Certification state after this observation.
    pub certification: Certification,
}

impl Assessment {
    /// Whether the observed reading passed every threshold check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Tracks the consecutive-valid streak and the derived certification.
///
/// Single-writer by design: the background loop owns the only mutation
/// path ([`observe`](Certifier::observe)). Readers use
/// [`certification`](Certifier::certification) and
/// [`check`](Certifier::check), which never touch the streak.
#[derive(Debug, Clone)]
pub struct Certifier {
    thresholds: Thresholds,
    current: Certification,
}

impl Certifier {
    /// Create a certifier with the given thresholds.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            current: Certification::default(),
        }
    }

    /// The current certification state.
    pub fn certification(&self) -> &Certification {
        &self.current
    }

    /// The threshold table in use.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Range-check a reading without updating the streak.
    #[must_use]
    pub fn check(&self, reading: &SoilReading) -> Vec<Metric> {
        self.thresholds.violations(reading)
    }

    /// Fold one reading into the certification state.
    ///
    /// Zero violations increment the streak; any violation resets it. The
    /// level is recomputed from the post-update streak.
    pub fn observe(&mut self, reading: &SoilReading) -> Assessment {
        let violations = self.thresholds.violations(reading);

        if violations.is_empty() {
            self.current.valid_streak += 1;
            self.current.reason = SUCCESS_REASON.to_string();
        } else {
            self.current.valid_streak = 0;
            let issues: Vec<String> = violations
                .iter()
                .map(|m| format!("{} out of range", m.label()))
                .collect();
            self.current.reason = format!("Issues detected: {}.", issues.join(", "));
        }

        let level = CertificationLevel::from_streak(self.current.valid_streak);
        if level != self.current.level {
            debug!(
                streak = self.current.valid_streak,
                from = %self.current.level,
                to = %level,
                "certification level changed"
            );
        }
        self.current.level = level;

        Assessment {
            violations,
            certification: self.current.clone(),
        }
    }
}

impl Default for Certifier {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
