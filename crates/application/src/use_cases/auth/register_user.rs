use domainboard_domain::{AuthProvider, DomainError, User};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{CredentialHasher, NewUser, UserRepository};

pub struct RegisterUserUseCase {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl RegisterUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    #[instrument(skip(self, password))]
    pub async fn execute(
        &self,
        email: String,
        password: String,
        name: String,
    ) -> Result<User, DomainError> {
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(DomainError::Validation(
                "Email, password, and name are required".to_string(),
            ));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailAlreadyRegistered);
        }

        let password_hash = self.hasher.hash(&password)?;

        let user = self
            .users
            .create(NewUser {
                email,
                name,
                password_hash: Some(password_hash),
                provider: AuthProvider::Local,
                provider_id: None,
                avatar_url: None,
                is_verified: false,
            })
            .await?;

        info!(user_id = ?user.id, "User registered");
        Ok(user)
    }
}
