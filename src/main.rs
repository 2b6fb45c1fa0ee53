//! Presence card server.
//!
//! Main entry point that wires the crates together and starts the server.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use pcard_api::state::AppState;
use pcard_core::config::AppConfig;
use pcard_core::error::AppError;
use pcard_service::CardService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PCARD_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting presence card server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Build the card service from config ───────────────
    let card_service = Arc::new(CardService::from_config(&config.upstream)?);
    tracing::info!(
        custom_endpoint = %config.upstream.custom_endpoint,
        aggregate_enabled = config.upstream.aggregate_enabled,
        direct_lookup = config.upstream.bot_token.is_some(),
        "Presence source chain configured"
    );

    // ── Step 2: Build the HTTP app ───────────────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        card_service,
    };
    let app = pcard_api::build_router(app_state);

    // ── Step 3: Bind and serve with graceful shutdown ────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Presence card server listening on {}", addr);

    // Draining after the shutdown signal is bounded by the configured
    // grace period; connections still open after it are dropped.
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = drain_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {}", e)))?;
            tracing::info!("Presence card server shut down gracefully");
        }
        _ = async {
            let _ = drain_rx.await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_seconds = config.server.shutdown_grace_seconds,
                "Shutdown grace period expired, closing remaining connections"
            );
        }
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
