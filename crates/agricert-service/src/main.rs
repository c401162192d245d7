//! Agricert service - background simulator and HTTP API.
//!
//! Run with: `cargo run -p agricert-service`

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use agricert_core::SimulatedProbe;
use agricert_service::{AppState, Config, Simulator, api};

/// Agricert service - simulated soil sensing and HTTP REST API.
#[derive(Parser, Debug)]
#[command(name = "agricert-service")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address (overrides config).
    #[arg(short, long)]
    bind: Option<String>,

    /// Sample interval in seconds (overrides config).
    #[arg(short, long)]
    interval: Option<u64>,

    /// Disable the background simulator (API only mode).
    #[arg(long)]
    no_simulator: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agricert_service=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default().unwrap_or_default(),
    };

    // Override config with CLI args
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(interval) = args.interval {
        config.simulator.sample_interval = interval;
    }
    config.validate()?;

    // Create application state
    let state = AppState::new(config.clone());

    // Start the background simulator
    if args.no_simulator {
        info!("Background simulator disabled");
    } else {
        let probe = Arc::new(SimulatedProbe::new("field-probe"));
        let simulator = Simulator::new(Arc::clone(&state), probe);
        simulator.start().await;
    }

    // Build the router
    let app = Router::new()
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(Arc::clone(&state));

    // Parse bind address
    let addr: SocketAddr = config.server.bind.parse()?;

    info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await?;

    Ok(())
}

/// Wait for ctrl-c, then stop the simulator before the server drains.
async fn shutdown_signal(state: Arc<AppState>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received, stopping simulator");
    state.simulator.signal_stop();
}
