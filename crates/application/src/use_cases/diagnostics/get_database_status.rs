use domainboard_domain::DomainError;
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DiagnosticsRepository;

pub struct GetDatabaseStatusUseCase {
    diagnostics: Arc<dyn DiagnosticsRepository>,
}

impl GetDatabaseStatusUseCase {
    pub fn new(diagnostics: Arc<dyn DiagnosticsRepository>) -> Self {
        Self { diagnostics }
    }

    /// Proves connectivity and returns the database's clock reading.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<String, DomainError> {
        self.diagnostics.current_timestamp().await
    }
}
