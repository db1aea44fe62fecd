use async_trait::async_trait;
use domainboard_domain::{AuthProvider, DomainError, User};

/// Field set for creating a user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: Option<String>,
    pub provider: AuthProvider,
    pub provider_id: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
}

/// Repository interface for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Lookup restricted to password-based accounts.
    async fn find_local_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    async fn find_by_provider(
        &self,
        provider: AuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Attach an OAuth identity to an existing account.
    async fn link_provider(
        &self,
        id: i64,
        provider: AuthProvider,
        provider_id: &str,
        avatar_url: Option<&str>,
    ) -> Result<User, DomainError>;
}
