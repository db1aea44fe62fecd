use serde::{Deserialize, Serialize};

/// Authentication configuration: session signing plus OAuth providers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret the session cookie signing key is derived from.
    /// Must be at least 32 bytes.
    #[serde(default = "default_session_secret")]
    pub session_secret: String,

    #[serde(default = "AuthConfig::default_github")]
    pub github: OAuthProviderConfig,

    #[serde(default = "AuthConfig::default_google")]
    pub google: OAuthProviderConfig,
}

/// Credentials and callback for one OAuth provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OAuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

impl OAuthProviderConfig {
    /// A provider is enabled only when real credentials were supplied.
    pub fn is_enabled(&self) -> bool {
        !self.client_id.is_empty() && !self.client_id.starts_with("placeholder_")
    }
}

impl AuthConfig {
    fn default_github() -> OAuthProviderConfig {
        OAuthProviderConfig {
            client_id: "placeholder_github_client_id".to_string(),
            client_secret: String::new(),
            callback_url: "http://localhost:3001/api/auth/github/callback".to_string(),
        }
    }

    fn default_google() -> OAuthProviderConfig {
        OAuthProviderConfig {
            client_id: "placeholder_google_client_id".to_string(),
            client_secret: String::new(),
            callback_url: "http://localhost:3001/api/auth/google/callback".to_string(),
        }
    }
}

fn default_session_secret() -> String {
    // Placeholder long enough to derive a signing key; replaced via
    // SESSION_SECRET in any real deployment.
    "change-me-before-deploying-domainboard".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: default_session_secret(),
            github: Self::default_github(),
            google: Self::default_google(),
        }
    }
}
