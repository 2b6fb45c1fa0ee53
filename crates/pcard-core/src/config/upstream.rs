//! Upstream presence source configuration.
//!
//! The resolver chain is built from this section alone; resolution logic
//! never reads the process environment directly, so tests can construct
//! any combination of sources without env mutation.

use serde::{Deserialize, Serialize};

/// Configuration for the upstream presence sources, tried in priority
/// order: custom endpoint, aggregation service, direct provider lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// URL of the custom presence endpoint. This endpoint serves one
    /// global presence record regardless of the requested user id.
    #[serde(default = "default_custom_endpoint")]
    pub custom_endpoint: String,
    /// Whether the aggregation service fallback is enabled.
    #[serde(default = "default_true")]
    pub aggregate_enabled: bool,
    /// Base URL of the aggregation service (user id is appended).
    #[serde(default = "default_aggregate_base")]
    pub aggregate_base: String,
    /// Base URL of the provider's REST API for the direct lookup fallback.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Privileged bot token for the direct lookup fallback. The direct
    /// source is only constructed when this is set.
    #[serde(default)]
    pub bot_token: Option<String>,
    /// Base URL of the avatar CDN.
    #[serde(default = "default_cdn_base")]
    pub cdn_base: String,
    /// Timeout for each upstream request, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            custom_endpoint: default_custom_endpoint(),
            aggregate_enabled: default_true(),
            aggregate_base: default_aggregate_base(),
            api_base: default_api_base(),
            bot_token: None,
            cdn_base: default_cdn_base(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_custom_endpoint() -> String {
    "http://localhost:4566/presence".to_string()
}

fn default_aggregate_base() -> String {
    "https://api.lanyard.rest".to_string()
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_cdn_base() -> String {
    "https://cdn.discordapp.com".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}
