//! Configuration for domainboard
//!
//! Structures organized by concern:
//! - `root`: main configuration, loading, and CLI overrides
//! - `server`: API port, binding, and frontend origin
//! - `database`: SQLite connection
//! - `doh`: DNS-over-HTTPS resolver endpoint
//! - `auth`: session secret and OAuth providers
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod auth;
pub mod database;
pub mod doh;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use auth::{AuthConfig, OAuthProviderConfig};
pub use database::DatabaseConfig;
pub use doh::DohConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
