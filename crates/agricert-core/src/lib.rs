//! Domain logic for agricert soil certification.
//!
//! This crate provides everything between the raw reading and the API
//! payload:
//!
//! - **Simulated sensing**: the [`SoilSensor`] trait and the
//!   [`SimulatedProbe`] that samples each metric from its documented range
//! - **Threshold evaluation**: the static acceptable-range table and the
//!   pure [`Thresholds::violations`] check
//! - **Certification**: the [`Certifier`] state machine over the
//!   consecutive-valid-reading streak
//! - **Suggestions**: fixed advisories for out-of-range metrics
//! - **History**: the 30-entry [`ReadingHistory`] ring buffer
//!
//! # Quick start
//!
//! ```
//! use agricert_core::{Certifier, ReadingHistory, SimulatedProbe, suggestions};
//!
//! let probe = SimulatedProbe::new("demo");
//! let mut certifier = Certifier::default();
//! let mut history = ReadingHistory::new();
//!
//! let reading = probe.read();
//! let assessment = certifier.observe(&reading);
//! history.push(reading);
//!
//! let advisories = suggestions::for_violations(&assessment.violations);
//! assert!(!advisories.is_empty());
//! ```

pub mod certification;
pub mod error;
pub mod history;
pub mod probe;
pub mod suggestions;
pub mod thresholds;
pub mod traits;

// Re-export the shared types for downstream convenience
pub use agricert_types::{Certification, CertificationLevel, Metric, SoilReading};

// Core exports
pub use certification::{Assessment, Certifier, SUCCESS_REASON};
pub use error::{Error, Result};
pub use history::{HISTORY_CAPACITY, ReadingHistory};
pub use probe::SimulatedProbe;
pub use thresholds::{Range, ThresholdConfig, Thresholds};
pub use traits::SoilSensor;
