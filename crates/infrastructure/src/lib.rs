//! Domainboard Infrastructure Layer
//!
//! Concrete adapters behind the application ports: SQLite persistence,
//! the DNS-over-HTTPS client, password hashing, and OAuth exchanges.
pub mod auth;
pub mod database;
pub mod dns;
pub mod repositories;

pub use auth::{Argon2CredentialHasher, OAuthClient};
pub use dns::DohClient;
