//! Simulated soil probe.
//!
//! Samples each metric uniformly from its documented generation range,
//! rounded to two decimal places. Sampling has no state and always
//! succeeds.
//!
//! The generation ranges are deliberately wider than the certification
//! thresholds, so a stream of simulated readings produces both passing and
//! failing cycles.

use async_trait::async_trait;
use rand::Rng;

use agricert_types::SoilReading;

use crate::error::Result;
use crate::traits::SoilSensor;

const SOIL_MOISTURE_RANGE: (f64, f64) = (20.0, 75.0);
const SOIL_TEMPERATURE_RANGE: (f64, f64) = (10.0, 25.0);
const PH_RANGE: (f64, f64) = (6.0, 8.0);
const EC_RANGE: (f64, f64) = (1.0, 2.2);
const NITROGEN_RANGE: (f64, f64) = (15.0, 35.0);
const PHOSPHORUS_RANGE: (f64, f64) = (8.0, 32.0);
const POTASSIUM_RANGE: (f64, f64) = (90.0, 260.0);
const WATER_TDS_RANGE: (f64, f64) = (90.0, 510.0);

/// Simulated probe producing uniform random readings.
#[derive(Debug, Clone)]
pub struct SimulatedProbe {
    id: String,
}

impl SimulatedProbe {
    /// Create a probe with the given log identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Produce one reading.
    #[must_use]
    pub fn read(&self) -> SoilReading {
        let mut rng = rand::rng();
        SoilReading {
            soil_moisture: sample(&mut rng, SOIL_MOISTURE_RANGE),
            soil_temperature: sample(&mut rng, SOIL_TEMPERATURE_RANGE),
            ph: sample(&mut rng, PH_RANGE),
            ec: sample(&mut rng, EC_RANGE),
            nitrogen: sample(&mut rng, NITROGEN_RANGE),
            phosphorus: sample(&mut rng, PHOSPHORUS_RANGE),
            potassium: sample(&mut rng, POTASSIUM_RANGE),
            water_tds: sample(&mut rng, WATER_TDS_RANGE),
        }
    }
}

fn sample<R: Rng>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    round2(rng.random_range(min..=max))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[async_trait]
impl SoilSensor for SimulatedProbe {
    async fn sample(&self) -> Result<SoilReading> {
        Ok(self.read())
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use agricert_types::Metric;

    fn generation_range(metric: Metric) -> (f64, f64) {
        match metric {
            Metric::SoilMoisture => SOIL_MOISTURE_RANGE,
            Metric::SoilTemperature => SOIL_TEMPERATURE_RANGE,
            Metric::Ph => PH_RANGE,
            Metric::Ec => EC_RANGE,
            Metric::Nitrogen => NITROGEN_RANGE,
            Metric::Phosphorus => PHOSPHORUS_RANGE,
            Metric::Potassium => POTASSIUM_RANGE,
            Metric::WaterTds => WATER_TDS_RANGE,
        }
    }

    #[test]
    fn test_readings_within_generation_ranges() {
        let probe = SimulatedProbe::new("test-probe");

        for _ in 0..200 {
            let reading = probe.read();
            for metric in Metric::ALL {
                let (min, max) = generation_range(metric);
                let value = reading.value(metric);
                assert!(
                    value >= min && value <= max,
                    "{metric} = {value} outside [{min}, {max}]"
                );
            }
        }
    }

    #[test]
    fn test_readings_rounded_to_two_decimals() {
        let probe = SimulatedProbe::new("test-probe");

        for _ in 0..50 {
            let reading = probe.read();
            for metric in Metric::ALL {
                let value = reading.value(metric);
                let scaled = value * 100.0;
                assert!(
                    (scaled - scaled.round()).abs() < 1e-9,
                    "{metric} = {value} has more than two decimals"
                );
            }
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005), 1.0); // 1.005 * 100 is 100.49999... in f64
        assert_eq!(round2(6.666_666), 6.67);
        assert_eq!(round2(50.0), 50.0);
    }

    #[tokio::test]
    async fn test_sample_via_trait() {
        let probe = SimulatedProbe::new("trait-probe");
        let sensor: &dyn SoilSensor = &probe;

        let reading = sensor.sample().await.unwrap();
        assert!(reading.ph >= 6.0 && reading.ph <= 8.0);
        assert_eq!(sensor.id(), "trait-probe");
    }
}
