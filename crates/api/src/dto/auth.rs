use domainboard_domain::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user row; the password hash never leaves the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub provider: String,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub created_at: Option<String>,
}

impl UserResponse {
    pub fn from_user(user: User) -> Self {
        Self {
            id: user.id.unwrap_or(0),
            email: user.email,
            name: user.name,
            provider: user.provider.as_str().to_string(),
            avatar_url: user.avatar_url,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}
