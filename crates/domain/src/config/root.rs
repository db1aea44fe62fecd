use serde::{Deserialize, Serialize};
use std::path::Path;

use super::auth::AuthConfig;
use super::database::DatabaseConfig;
use super::doh::DohConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const DEFAULT_CONFIG_PATH: &str = "./domainboard.toml";

/// Minimum length of the session secret; the cookie signing key is derived
/// from it and shorter material is rejected.
const MIN_SESSION_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub doh: DohConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line, overriding file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_url: Option<String>,
}

impl Config {
    /// Load configuration with the usual precedence: defaults, then the
    /// TOML file, then environment variables, then CLI overrides.
    ///
    /// An explicitly given path must exist; the default path is optional.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };

        config.apply_env();
        config.apply_overrides(overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    fn apply_env(&mut self) {
        if let Some(port) = env_var("API_PORT").and_then(|v| v.parse().ok()) {
            self.server.api_port = port;
        }
        if let Some(origin) = env_var("FRONTEND_URL") {
            self.server.frontend_origin = origin;
        }
        if let Some(url) = env_var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(endpoint) = env_var("DOH_ENDPOINT") {
            self.doh.endpoint = endpoint;
        }
        if let Some(secret) = env_var("SESSION_SECRET") {
            self.auth.session_secret = secret;
        }
        if let Some(id) = env_var("GITHUB_CLIENT_ID") {
            self.auth.github.client_id = id;
        }
        if let Some(secret) = env_var("GITHUB_CLIENT_SECRET") {
            self.auth.github.client_secret = secret;
        }
        if let Some(url) = env_var("GITHUB_CALLBACK_URL") {
            self.auth.github.callback_url = url;
        }
        if let Some(id) = env_var("GOOGLE_CLIENT_ID") {
            self.auth.google.client_id = id;
        }
        if let Some(secret) = env_var("GOOGLE_CLIENT_SECRET") {
            self.auth.google.client_secret = secret;
        }
        if let Some(url) = env_var("GOOGLE_CALLBACK_URL") {
            self.auth.google.callback_url = url;
        }
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.api_port {
            self.server.api_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "auth.session_secret must be at least {} bytes",
                MIN_SESSION_SECRET_LEN
            )));
        }
        if !self.doh.endpoint.starts_with("http://") && !self.doh.endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "doh.endpoint must be an HTTP(S) URL, got '{}'",
                self.doh.endpoint
            )));
        }
        if self.server.frontend_origin.is_empty() {
            return Err(ConfigError::Invalid(
                "server.frontend_origin must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
