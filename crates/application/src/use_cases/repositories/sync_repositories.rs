use domainboard_domain::DomainError;
use tracing::{info, instrument};

/// Placeholder for GitHub API synchronization.
///
/// TODO: fetch the owner's repositories from the GitHub REST API and
/// upsert them; for now the endpoint only reports readiness.
pub struct SyncRepositoriesUseCase;

impl SyncRepositoriesUseCase {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<&'static str, DomainError> {
        info!("Repository sync requested (no-op)");
        Ok("Repository sync endpoint ready for GitHub API integration")
    }
}

impl Default for SyncRepositoriesUseCase {
    fn default() -> Self {
        Self::new()
    }
}
