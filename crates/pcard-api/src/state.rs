//! Application state shared across all handlers.

use std::sync::Arc;

use pcard_core::config::AppConfig;
use pcard_service::CardService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Card building service
    pub card_service: Arc<CardService>,
}
