//! Error types for sensor sampling.

use thiserror::Error;

/// Errors that can occur when taking a reading from a sensor backend.
///
/// The simulated probe never fails; the variants exist for the
/// [`SoilSensor`](crate::traits::SoilSensor) seam so hardware-backed
/// implementations can report faults.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The sensor could not produce a reading.
    #[error("Sensor unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias using agricert-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
