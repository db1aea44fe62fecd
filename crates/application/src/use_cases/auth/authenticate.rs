use domainboard_domain::{Credentials, DomainError, OAuthProfile, User};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{CredentialHasher, NewUser, UserRepository};

/// Resolves submitted credentials to a user row.
///
/// Local verification never reveals which check failed: unknown email,
/// missing hash, and wrong password all yield the same error. OAuth
/// profiles resolve by provider identity, fall back to linking an existing
/// account by email, and finally create a fresh account.
pub struct AuthenticateUseCase {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AuthenticateUseCase {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    #[instrument(skip(self, credentials))]
    pub async fn execute(&self, credentials: Credentials) -> Result<User, DomainError> {
        match credentials {
            Credentials::Local { email, password } => self.resolve_local(&email, &password).await,
            Credentials::OAuth(profile) => self.resolve_oauth(profile).await,
        }
    }

    async fn resolve_local(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .users
            .find_local_by_email(email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or(DomainError::InvalidCredentials)?;

        if !self.hasher.verify(password, hash) {
            warn!(email, "Password verification failed");
            return Err(DomainError::InvalidCredentials);
        }

        info!(user_id = ?user.id, "Local login succeeded");
        Ok(user)
    }

    async fn resolve_oauth(&self, profile: OAuthProfile) -> Result<User, DomainError> {
        if let Some(user) = self
            .users
            .find_by_provider(profile.provider, &profile.provider_id)
            .await?
        {
            info!(user_id = ?user.id, provider = %profile.provider, "OAuth login succeeded");
            return Ok(user);
        }

        // Same email registered through another strategy: link rather than
        // duplicate the account.
        if let Some(existing) = self.users.find_by_email(&profile.email).await? {
            let id = existing
                .id
                .ok_or_else(|| DomainError::DatabaseError("User row has no id".into()))?;
            let linked = self
                .users
                .link_provider(
                    id,
                    profile.provider,
                    &profile.provider_id,
                    profile.avatar_url.as_deref(),
                )
                .await?;
            info!(user_id = id, provider = %profile.provider, "Linked existing account");
            return Ok(linked);
        }

        let created = self
            .users
            .create(NewUser {
                email: profile.email,
                name: profile.name,
                password_hash: None,
                provider: profile.provider,
                provider_id: Some(profile.provider_id),
                avatar_url: profile.avatar_url,
                is_verified: true,
            })
            .await?;

        info!(user_id = ?created.id, provider = %created.provider, "Created user from OAuth profile");
        Ok(created)
    }
}
