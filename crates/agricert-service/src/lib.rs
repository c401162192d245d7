//! Background simulator and HTTP REST API for agricert.
//!
//! This crate provides a service that:
//! - Samples a simulated soil probe on a schedule
//! - Scores each reading against the certification thresholds
//! - Keeps a 30-sample rolling history in memory
//! - Exposes a REST API for the dashboard frontend
//!
//! # REST API Endpoints
//!
//! - `GET /api/health` - Service health check
//! - `GET /api/status` - Simulator status and sample counters
//! - `GET /api/sensor_data` - Latest reading, rolling history,
//!   certification state, and advisories
//!
//! All endpoints are unauthenticated and CORS-open; the service is a demo
//! backend with no persistence.
//!
//! # Configuration
//!
//! The service reads configuration from `~/.config/agricert/server.toml`:
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:5000"
//!
//! [simulator]
//! sample_interval = 10
//! ```

pub mod api;
pub mod config;
pub mod simulator;
pub mod state;

pub use config::{Config, ConfigError, ServerConfig, SimulatorConfig};
pub use simulator::Simulator;
pub use state::AppState;
