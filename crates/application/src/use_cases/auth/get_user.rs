use domainboard_domain::{DomainError, User};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::UserRepository;

/// Re-fetches the full user row for a session's user id.
pub struct GetUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("User".to_string()))
    }
}
