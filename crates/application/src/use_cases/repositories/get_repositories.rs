use domainboard_domain::{DomainError, Repository};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RepositoryStore;

pub struct GetRepositoriesUseCase {
    store: Arc<dyn RepositoryStore>,
}

impl GetRepositoriesUseCase {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    /// All repositories, most-starred first.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Repository>, DomainError> {
        self.store.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Repository, DomainError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Repository".to_string()))
    }
}
