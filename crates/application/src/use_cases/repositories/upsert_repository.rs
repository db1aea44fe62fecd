use domainboard_domain::{DomainError, Repository};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RepositoryStore;

/// Create-or-update keyed on `full_name`: an existing row with the same
/// full name is replaced, otherwise a new row is inserted.
pub struct UpsertRepositoryUseCase {
    store: Arc<dyn RepositoryStore>,
}

impl UpsertRepositoryUseCase {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, repository), fields(full_name = %repository.full_name))]
    pub async fn execute(&self, repository: Repository) -> Result<Repository, DomainError> {
        if repository.full_name.is_empty() {
            return Err(DomainError::Validation(
                "fullName is required".to_string(),
            ));
        }

        let existing = self.store.find_by_full_name(&repository.full_name).await?;

        match existing.and_then(|r| r.id) {
            Some(id) => {
                let updated = self
                    .store
                    .update(id, repository)
                    .await?
                    .ok_or_else(|| DomainError::NotFound("Repository".to_string()))?;
                info!(repository_id = id, "Repository updated");
                Ok(updated)
            }
            None => {
                let created = self.store.create(repository).await?;
                info!(repository_id = ?created.id, "Repository created");
                Ok(created)
            }
        }
    }
}
