use async_trait::async_trait;
use domainboard_domain::{DomainError, Repository};

/// Repository interface for the showcased GitHub repository rows.
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// All rows, most-starred first.
    async fn get_all(&self) -> Result<Vec<Repository>, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Repository>, DomainError>;

    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<Repository>, DomainError>;

    async fn create(&self, repository: Repository) -> Result<Repository, DomainError>;

    async fn update(
        &self,
        id: i64,
        repository: Repository,
    ) -> Result<Option<Repository>, DomainError>;

    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
