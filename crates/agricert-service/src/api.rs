//! REST API endpoints for the agricert service.
//!
//! # Concurrency and Lock Acquisition
//!
//! Handlers take read locks only, in a consistent order when more than one
//! is needed:
//!
//! 1. `state.history` (RwLock)
//! 2. `state.certifier` (RwLock)
//!
//! The simulator loop is the only writer. Handlers never mutate shared
//! state; the dashboard endpoint re-derives the failure set for the latest
//! reading through the pure range check instead of re-running the state
//! machine.
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use agricert_service::api;
//!
//! let app = api::router().with_state(state);
//! ```

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use agricert_core::suggestions;
use agricert_types::SoilReading;

use crate::state::AppState;

/// Create the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        // Health and status
        .route("/api/health", get(health))
        .route("/api/status", get(get_status))
        // Dashboard data
        .route("/api/sensor_data", get(get_sensor_data))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: OffsetDateTime::now_utc(),
    })
}

/// Service status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service version.
    pub version: &'static str,
    /// Current timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Simulator status.
    pub simulator: SimulatorStatus,
}

/// Simulator status.
#[derive(Debug, Serialize)]
pub struct SimulatorStatus {
    /// Whether the simulator is running.
    pub running: bool,
    /// When the simulator was started (if running).
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    /// How long the simulator has been running (in seconds).
    pub uptime_seconds: Option<u64>,
    /// Total samples taken since startup.
    pub samples: u64,
    /// Readings currently retained in the history buffer.
    pub history_len: usize,
}

/// Get service status including simulator state.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let running = state.simulator.is_running();
    let started_at = state.simulator.started_at();
    let uptime_seconds = started_at.map(|s| {
        let now = OffsetDateTime::now_utc();
        (now - s).whole_seconds().max(0) as u64
    });

    let history_len = state.history.read().await.len();

    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION"),
        timestamp: OffsetDateTime::now_utc(),
        simulator: SimulatorStatus {
            running,
            started_at,
            uptime_seconds,
            samples: state.simulator.samples(),
            history_len,
        },
    })
}

/// Combined dashboard payload: latest reading, rolling history,
/// certification state, and advisories.
#[derive(Debug, Serialize)]
pub struct SensorDataResponse {
    /// Latest reading, or an empty object before the first sample.
    #[serde(serialize_with = "reading_or_empty")]
    pub sensor_data: Option<SoilReading>,
    /// Retained readings, oldest first.
    pub sensor_history: Vec<SoilReading>,
    /// Current certification status label.
    pub certification_status: String,
    /// Human-readable explanation of the current certification state.
    pub certification_reason: String,
    /// Advisories for the latest reading; empty before the first sample.
    pub suggestions: Vec<String>,
}

/// The dashboard wire format sends `{}` rather than `null` when no reading
/// exists yet.
fn reading_or_empty<S>(reading: &Option<SoilReading>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;

    match reading {
        Some(r) => r.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Dashboard data endpoint. Always returns 200.
///
/// Suggestions are re-derived from the latest reading with the pure range
/// check; the certification record itself is read as-is, not re-run.
async fn get_sensor_data(State(state): State<Arc<AppState>>) -> Json<SensorDataResponse> {
    let (latest, sensor_history) = {
        let history = state.history.read().await;
        (history.latest().copied(), history.snapshot())
    };

    let (certification, violations) = {
        let certifier = state.certifier.read().await;
        let violations = latest.as_ref().map(|r| certifier.check(r));
        (certifier.certification().clone(), violations)
    };

    let suggestions = match violations {
        Some(v) => suggestions::for_violations(&v),
        None => Vec::new(),
    };

    Json(SensorDataResponse {
        sensor_data: latest,
        sensor_history,
        certification_status: certification.level.label().to_string(),
        certification_reason: certification.reason,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::simulator;

    fn create_test_state() -> Arc<AppState> {
        AppState::new(Config::default())
    }

    fn valid_reading() -> SoilReading {
        SoilReading {
            soil_moisture: 50.0,
            soil_temperature: 20.0,
            ph: 7.0,
            ec: 1.5,
            nitrogen: 25.0,
            phosphorus: 20.0,
            potassium: 150.0,
            water_tds: 300.0,
        }
    }

    async fn get_json(
        state: Arc<AppState>,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let app = router().with_state(state);
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, json) = get_json(create_test_state(), "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert!(json["version"].is_string());
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let state = create_test_state();
        let (status, json) = get_json(state, "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["version"].is_string());
        assert_eq!(json["simulator"]["running"], false);
        assert_eq!(json["simulator"]["samples"], 0);
        assert_eq!(json["simulator"]["history_len"], 0);
        assert!(json["simulator"]["started_at"].is_null());
    }

    #[tokio::test]
    async fn test_sensor_data_before_first_sample() {
        let (status, json) = get_json(create_test_state(), "/api/sensor_data").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["sensor_data"], serde_json::json!({}));
        assert_eq!(json["sensor_history"], serde_json::json!([]));
        assert_eq!(json["certification_status"], "Not Certified");
        assert_eq!(json["certification_reason"], "Insufficient data.");
        assert_eq!(json["suggestions"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_sensor_data_after_valid_sample() {
        let state = create_test_state();
        simulator::step(&state, valid_reading()).await;

        let (status, json) = get_json(state, "/api/sensor_data").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["sensor_data"]["pH"], 7.0);
        assert_eq!(json["sensor_data"]["soil_moisture"], 50.0);
        assert_eq!(json["sensor_history"].as_array().unwrap().len(), 1);
        assert_eq!(json["certification_status"], "Not Certified");
        assert_eq!(json["certification_reason"], "All conditions met.");
        assert_eq!(
            json["suggestions"],
            serde_json::json!([suggestions::ALL_CLEAR])
        );
    }

    #[tokio::test]
    async fn test_sensor_data_reports_violation_suggestions() {
        let state = create_test_state();
        let mut bad = valid_reading();
        bad.ph = 5.0;
        simulator::step(&state, bad).await;

        let (_, json) = get_json(state, "/api/sensor_data").await;

        assert_eq!(
            json["certification_reason"],
            "Issues detected: pH out of range."
        );
        let suggestions = json["suggestions"].as_array().unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].as_str().unwrap().contains("lime"));
    }

    #[tokio::test]
    async fn test_sensor_data_certification_progression() {
        let state = create_test_state();
        for _ in 0..5 {
            simulator::step(&state, valid_reading()).await;
        }

        let (_, json) = get_json(state, "/api/sensor_data").await;
        assert_eq!(
            json["certification_status"],
            "Level 1 - Basic Certification"
        );
    }

    #[tokio::test]
    async fn test_sensor_data_history_is_bounded_and_ordered() {
        let state = create_test_state();
        for i in 0..31 {
            let mut reading = valid_reading();
            reading.nitrogen = 20.0 + f64::from(i) * 0.25;
            simulator::step(&state, reading).await;
        }

        let (_, json) = get_json(state, "/api/sensor_data").await;
        let history = json["sensor_history"].as_array().unwrap();

        assert_eq!(history.len(), 30);
        // Oldest retained entry is the second appended; the 31st is last.
        assert_eq!(history[0]["nitrogen"], 20.25);
        assert_eq!(history[29]["nitrogen"], 27.5);
        assert_eq!(json["sensor_data"]["nitrogen"], 27.5);
    }

    #[tokio::test]
    async fn test_sensor_data_get_does_not_mutate_streak() {
        let state = create_test_state();
        simulator::step(&state, valid_reading()).await;

        for _ in 0..3 {
            let _ = get_json(Arc::clone(&state), "/api/sensor_data").await;
        }

        let certifier = state.certifier.read().await;
        assert_eq!(certifier.certification().valid_streak, 1);
    }

    #[test]
    fn test_sensor_data_response_empty_serialization() {
        let response = SensorDataResponse {
            sensor_data: None,
            sensor_history: Vec::new(),
            certification_status: "Not Certified".to_string(),
            certification_reason: "Insufficient data.".to_string(),
            suggestions: Vec::new(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sensor_data"], serde_json::json!({}));
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok",
            version: "0.1.0",
            timestamp: OffsetDateTime::now_utc(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
        assert!(json.contains("0.1.0"));
    }
}
