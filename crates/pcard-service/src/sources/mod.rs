//! Upstream presence sources and the priority-chain resolver.
//!
//! Each source knows how to query one upstream and normalize its response
//! shape into a [`ResolvedPresence`]. The resolver tries sources strictly
//! in order and stops at the first success; responses are never merged
//! across sources.

pub mod aggregate;
pub mod custom;
pub mod direct;
mod raw;

use std::sync::Arc;

use async_trait::async_trait;

use pcard_core::error::{AppError, ErrorKind};
use pcard_core::result::AppResult;
use pcard_entity::ResolvedPresence;

pub use aggregate::AggregateSource;
pub use custom::CustomEndpointSource;
pub use direct::DirectLookupSource;

/// Trait for one upstream presence source.
#[async_trait]
pub trait PresenceSource: Send + Sync + std::fmt::Debug + 'static {
    /// Short source name used in logs.
    fn name(&self) -> &str;

    /// Resolve the presence of a user. Any failure (unreachable upstream,
    /// non-success status, unparseable body, user not tracked) is an
    /// `Err`; partial results are not returned.
    async fn resolve(&self, user_id: &str) -> AppResult<ResolvedPresence>;
}

/// Tries an ordered list of presence sources until one succeeds.
#[derive(Debug, Clone)]
pub struct PresenceResolver {
    sources: Vec<Arc<dyn PresenceSource>>,
}

impl PresenceResolver {
    /// Create a resolver over the given sources, in priority order.
    pub fn new(sources: Vec<Arc<dyn PresenceSource>>) -> Self {
        Self { sources }
    }

    /// Resolve presence from the first source that succeeds. Later
    /// sources are only attempted after earlier ones have failed.
    ///
    /// When every source fails the result is a `ServiceUnavailable`
    /// error, except that a parse failure in the last source keeps its
    /// `Serialization` kind so the caller can report unreadable data
    /// rather than an unreachable endpoint.
    pub async fn resolve(&self, user_id: &str) -> AppResult<ResolvedPresence> {
        let mut last_error: Option<AppError> = None;

        for source in &self.sources {
            match source.resolve(user_id).await {
                Ok(presence) => {
                    tracing::debug!(source = source.name(), user_id, "Presence resolved");
                    return Ok(presence);
                }
                Err(e) => {
                    tracing::debug!(source = source.name(), user_id, error = %e, "Presence source failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if e.kind == ErrorKind::Serialization => Err(e),
            _ => Err(AppError::service_unavailable(
                "No presence source could resolve the user",
            )),
        }
    }
}
