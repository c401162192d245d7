//! Trait abstraction over soil sensing backends.
//!
//! This module provides the [`SoilSensor`] trait that abstracts over the
//! simulated probe and any future hardware-backed implementation.

use async_trait::async_trait;

use agricert_types::SoilReading;

use crate::error::Result;

/// A source of soil readings.
///
/// The sampling loop only depends on this trait, so a hardware probe can
/// replace the simulation without touching the loop.
///
/// # Example
///
/// ```ignore
/// use agricert_core::{Result, SoilSensor};
///
/// async fn print_reading<S: SoilSensor>(sensor: &S) -> Result<()> {
///     let reading = sensor.sample().await?;
///     println!("pH: {}", reading.ph);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait SoilSensor: Send + Sync {
    /// Take one reading.
    async fn sample(&self) -> Result<SoilReading>;

    /// Identifier used in logs.
    fn id(&self) -> &str;
}
