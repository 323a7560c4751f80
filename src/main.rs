//! Demo server launcher.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 funky-router                 │
//!                     │                                              │
//!   :8080 /api/v1 ────┼─▶ ┌────────┐   ┌────────────┐   ┌─────────┐  │
//!   :8081 /api/v2 ────┼─▶ │  axum  │──▶│ dispatcher │──▶│ catalog │  │
//!   :8082 /api/v3 ────┼─▶ │adapter │   │            │   │  table  │  │
//!   :8083 /api/v4 ────┼─▶ │ (x5)   │◀──│  404/405   │◀──│ (Reply) │  │
//!   :8084 /api/v5 ────┼─▶ └────────┘   └────────────┘   └─────────┘  │
//!                     │                                              │
//!                     │   config · lifecycle · observability         │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use funky_router::config::{load_config, validate_config, AppConfig, ConfigError};
use funky_router::lifecycle::{launch, signals, Shutdown};
use funky_router::observability::{logging, metrics};
use funky_router::Flavor;

#[derive(Parser)]
#[command(name = "funky-router")]
#[command(about = "Five demo HTTP servers with standard and non-standard methods", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults start all five servers.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only start servers of these flavors (repeatable).
    #[arg(long = "only", value_enum)]
    only: Vec<Flavor>,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    config.restrict_to(&args.only);
    if let Some(level) = args.log_level {
        config.observability.log_level = level;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        servers = config.enabled_servers().count(),
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "funky-router starting"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let shutdown = Shutdown::new();
    let running = launch(&config, &shutdown).await?;
    tracing::info!("All servers started, press Ctrl+C to stop");

    let signal = signals::wait_for_signal().await?;
    tracing::info!(signal, "Shutdown signal received");

    running.shutdown(&shutdown).await?;
    tracing::info!("Shutdown complete");
    Ok(())
}
