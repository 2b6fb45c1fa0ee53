//! Response cache-header configuration.

use serde::{Deserialize, Serialize};

/// Cache-header policy for rendered cards.
///
/// Live-presence deployments want `no-store` so the card is always fresh;
/// deployments fronted by a CDN can switch to `s-maxage` instead. This is
/// a deployment decision, not part of the card pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheHeaderConfig {
    /// `"no-store"` or `"s-maxage"`.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Shared-cache lifetime in seconds, used in `s-maxage` mode.
    #[serde(default = "default_s_maxage")]
    pub s_maxage_seconds: u64,
}

impl Default for CacheHeaderConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            s_maxage_seconds: default_s_maxage(),
        }
    }
}

impl CacheHeaderConfig {
    /// Build the `Cache-Control` header value for this policy.
    pub fn cache_control(&self) -> String {
        match self.mode.as_str() {
            "s-maxage" => format!("public, s-maxage={}", self.s_maxage_seconds),
            _ => "no-store, no-cache, must-revalidate".to_string(),
        }
    }
}

fn default_mode() -> String {
    "no-store".to_string()
}

fn default_s_maxage() -> u64 {
    30
}
