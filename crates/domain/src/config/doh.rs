use serde::{Deserialize, Serialize};

/// DNS-over-HTTPS resolver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DohConfig {
    /// JSON resolver endpoint (default: Google public DNS)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DohConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://dns.google/resolve".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
