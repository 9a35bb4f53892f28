//! Journal Engine Binary
//!
//! Serves the journal and calculator API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin journal-engine
//! ```
//!
//! # Environment Variables
//!
//! - `JOURNAL_CONFIG`: path to the YAML config (default: config.yaml; built-in
//!   defaults are used when the file does not exist)
//! - `RUST_LOG`: log filter (overrides `observability.logging.level`)

use std::sync::Arc;

use anyhow::Context;
use journal_engine::application::services::{CalculatorService, JournalService};
use journal_engine::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use journal_engine::infrastructure::http::{AppState, create_router};
use journal_engine::infrastructure::persistence::InMemoryTradeRepository;
use journal_engine::telemetry::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path =
        std::env::var("JOURNAL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let (config, from_file) = match load_config(Some(&config_path)) {
        Ok(config) => (config, true),
        Err(e) if e.is_not_found() => (Config::default(), false),
        Err(e) => return Err(e).context("loading configuration"),
    };

    init_tracing(&config.observability.logging);
    if from_file {
        tracing::info!(path = %config_path, "Configuration loaded");
    } else {
        tracing::warn!(path = %config_path, "Config file not found, using defaults");
    }

    let config = Arc::new(config);
    let state = AppState {
        journal: JournalService::new(Arc::new(InMemoryTradeRepository::new())),
        calculators: CalculatorService::new(Arc::clone(&config)),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, "Journal engine listening");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/trades");
    tracing::info!("  GET  /api/v1/users/{{user_id}}/trades|stats|export");
    tracing::info!("  GET  /api/v1/users/{{user_id}}/calendar/{{year}}/{{month}}");
    tracing::info!("  POST /api/v1/calculators/expectancy|monte-carlo|risk|consistency");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Journal engine stopped");
    Ok(())
}

/// Load .env from the current directory or the nearest ancestor that has one.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for Ctrl+C or SIGTERM.
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Ctrl+C handler must install");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler must install")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
