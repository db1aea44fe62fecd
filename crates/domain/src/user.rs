use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Authentication strategy a user account is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Github,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Github => "github",
            AuthProvider::Google => "google",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(AuthProvider::Local),
            "github" => Ok(AuthProvider::Github),
            "google" => Ok(AuthProvider::Google),
            other => Err(DomainError::Validation(format!(
                "Unknown auth provider: {}",
                other
            ))),
        }
    }
}

/// A user account row.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Option<i64>,
    pub email: String,
    pub name: String,
    pub password_hash: Option<String>,
    pub provider: AuthProvider,
    pub provider_id: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Profile returned by an OAuth provider after a successful code exchange.
#[derive(Debug, Clone)]
pub struct OAuthProfile {
    pub provider: AuthProvider,
    pub provider_id: String,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Credentials submitted for authentication, one variant per strategy.
///
/// Each variant resolves to a user row or a failure; the caller never
/// learns which step of the resolution rejected.
#[derive(Debug, Clone)]
pub enum Credentials {
    Local { email: String, password: String },
    OAuth(OAuthProfile),
}
