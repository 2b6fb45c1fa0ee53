//! # pcard-api
//!
//! HTTP API layer for the presence card service, built on Axum.
//!
//! Provides the card and health endpoints, middleware (trace, compression,
//! CORS), response DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
