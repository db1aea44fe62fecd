use domainboard_domain::{DomainError, Repository};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RepositoryStore;

pub struct UpdateRepositoryUseCase {
    store: Arc<dyn RepositoryStore>,
}

impl UpdateRepositoryUseCase {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, repository))]
    pub async fn execute(&self, id: i64, repository: Repository) -> Result<Repository, DomainError> {
        let updated = self
            .store
            .update(id, repository)
            .await?
            .ok_or_else(|| DomainError::NotFound("Repository".to_string()))?;

        info!(repository_id = id, "Repository updated");
        Ok(updated)
    }
}
