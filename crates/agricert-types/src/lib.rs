//! Platform-agnostic types for agricert soil sensor data.
//!
//! This crate provides the shared types used by the domain logic
//! (agricert-core) and the HTTP service (agricert-service).
//!
//! # Features
//!
//! - [`SoilReading`]: one snapshot of the eight monitored metrics
//! - [`Metric`]: metric identifiers with wire keys and display labels
//! - [`CertificationLevel`] and [`Certification`]: the certification state
//! - Error types for metric key parsing
//!
//! # Example
//!
//! ```
//! use agricert_types::{CertificationLevel, Metric, SoilReading};
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
//! assert_eq!(reading.value(Metric::Ph), 7.0);
//! assert_eq!(CertificationLevel::from_streak(15), CertificationLevel::Full);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{Certification, CertificationLevel, Metric, SoilReading};
