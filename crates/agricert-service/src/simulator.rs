//! Background reading simulator.
//!
//! One periodic task: sample the sensor, fold the reading into the
//! certification state machine, append it to the history, and log the
//! cycle. The task selects on the shared stop channel and exits cleanly
//! at shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, error, info, warn};

use agricert_core::{SoilSensor, suggestions};
use agricert_types::SoilReading;

use crate::state::AppState;

/// Background simulator that samples a sensor on a fixed interval.
pub struct Simulator {
    state: Arc<AppState>,
    sensor: Arc<dyn SoilSensor>,
}

impl Simulator {
    /// Create a new simulator.
    pub fn new(state: Arc<AppState>, sensor: Arc<dyn SoilSensor>) -> Self {
        Self { state, sensor }
    }

    /// Spawn the sampling loop.
    ///
    /// Returns immediately; sampling happens in the background until the
    /// stop signal fires.
    pub async fn start(&self) {
        let sample_interval = {
            let config = self.state.config.read().await;
            config.simulator.sample_interval
        };

        self.state.simulator.reset_stop();
        self.state.simulator.set_running(true);

        info!(
            "Starting simulator for {} (interval: {}s)",
            self.sensor.id(),
            sample_interval
        );

        let state = Arc::clone(&self.state);
        let sensor = Arc::clone(&self.sensor);
        tokio::spawn(async move {
            run(state, sensor, Duration::from_secs(sample_interval)).await;
        });
    }
}

/// The sampling loop body.
async fn run(state: Arc<AppState>, sensor: Arc<dyn SoilSensor>, period: Duration) {
    let mut ticker = interval(period);
    let mut stop_rx = state.simulator.subscribe_stop();
    let mut consecutive_failures = 0u32;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            changed = stop_rx.changed() => {
                // A closed channel means the state is gone; stop either way.
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
                continue;
            }
        }

        match sensor.sample().await {
            Ok(reading) => {
                consecutive_failures = 0;
                step(&state, reading).await;
            }
            Err(e) => {
                consecutive_failures += 1;
                if consecutive_failures <= 3 {
                    warn!(
                        "Failed to sample {}: {} (attempt {})",
                        sensor.id(),
                        e,
                        consecutive_failures
                    );
                } else if consecutive_failures == 4 {
                    error!(
                        "Failed to sample {} after {} attempts, will continue trying silently",
                        sensor.id(),
                        consecutive_failures
                    );
                }
            }
        }
    }

    state.simulator.set_running(false);
    info!("Simulator stopped");
}

/// Fold one reading into the shared state and log the cycle.
pub(crate) async fn step(state: &AppState, reading: SoilReading) {
    let assessment = {
        let mut certifier = state.certifier.write().await;
        certifier.observe(&reading)
    };

    {
        let mut history = state.history.write().await;
        history.push(reading);
    }

    state.simulator.record_sample();

    debug!(?reading, "sensor data update");
    info!(
        status = %assessment.certification.level,
        reason = %assessment.certification.reason,
        suggestions = ?suggestions::for_violations(&assessment.violations),
        "certification update"
    );
}
