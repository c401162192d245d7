//! Application state shared across handlers.
//!
//! The shared mutable pieces are exactly the reading history and the
//! certification state machine. The simulator loop is the only writer;
//! request handlers take read locks, so a reader never observes a history
//! buffer mid-eviction or a half-updated certification record.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use agricert_core::{Certifier, ReadingHistory};
use time::OffsetDateTime;
use tokio::sync::{RwLock, watch};

use crate::config::Config;

/// Shared application state.
pub struct AppState {
    /// Rolling buffer of recent readings.
    pub history: RwLock<ReadingHistory>,
    /// Certification state machine.
    pub certifier: RwLock<Certifier>,
    /// Configuration.
    pub config: RwLock<Config>,
    /// Simulator control state.
    pub simulator: SimulatorState,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            history: RwLock::new(ReadingHistory::new()),
            certifier: RwLock::new(Certifier::default()),
            config: RwLock::new(config),
            simulator: SimulatorState::new(),
        })
    }
}

/// State for tracking and controlling the simulator.
pub struct SimulatorState {
    /// Whether the simulator is currently running.
    running: AtomicBool,
    /// When the simulator was started (Unix timestamp).
    started_at: AtomicU64,
    /// Total samples taken.
    samples: AtomicU64,
    /// Channel to signal the simulator task to stop.
    stop_tx: watch::Sender<bool>,
    /// Receiver for stop signal (cloned by the simulator task).
    stop_rx: watch::Receiver<bool>,
}

impl SimulatorState {
    /// Create a new simulator state.
    pub fn new() -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        Self {
            running: AtomicBool::new(false),
            started_at: AtomicU64::new(0),
            samples: AtomicU64::new(0),
            stop_tx,
            stop_rx,
        }
    }

    /// Check if the simulator is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Mark the simulator as started or stopped.
    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::SeqCst);
        if running {
            let now = OffsetDateTime::now_utc().unix_timestamp() as u64;
            self.started_at.store(now, Ordering::SeqCst);
        }
    }

    /// Get the simulator start time.
    pub fn started_at(&self) -> Option<OffsetDateTime> {
        let ts = self.started_at.load(Ordering::SeqCst);
        if ts == 0 {
            None
        } else {
            OffsetDateTime::from_unix_timestamp(ts as i64).ok()
        }
    }

    /// Record one completed sample cycle.
    pub fn record_sample(&self) {
        self.samples.fetch_add(1, Ordering::SeqCst);
    }

    /// Total samples taken since startup.
    pub fn samples(&self) -> u64 {
        self.samples.load(Ordering::SeqCst)
    }

    /// Get a receiver for the stop signal.
    pub fn subscribe_stop(&self) -> watch::Receiver<bool> {
        self.stop_rx.clone()
    }

    /// Signal the simulator task to stop.
    pub fn signal_stop(&self) {
        let _ = self.stop_tx.send(true);
        self.running.store(false, Ordering::SeqCst);
    }

    /// Reset the stop signal (for restarting).
    pub fn reset_stop(&self) {
        let _ = self.stop_tx.send(false);
    }
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self::new()
    }
}
