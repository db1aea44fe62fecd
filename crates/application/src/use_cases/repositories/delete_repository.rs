use domainboard_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RepositoryStore;

pub struct DeleteRepositoryUseCase {
    store: Arc<dyn RepositoryStore>,
}

impl DeleteRepositoryUseCase {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if !self.store.delete(id).await? {
            return Err(DomainError::NotFound("Repository".to_string()));
        }
        info!(repository_id = id, "Repository deleted");
        Ok(())
    }
}
