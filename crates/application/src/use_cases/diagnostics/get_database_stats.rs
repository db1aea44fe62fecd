use domainboard_domain::DomainError;
use std::sync::Arc;
use tracing::instrument;

use crate::ports::{DatabaseStats, DiagnosticsRepository};

pub struct GetDatabaseStatsUseCase {
    diagnostics: Arc<dyn DiagnosticsRepository>,
}

impl GetDatabaseStatsUseCase {
    pub fn new(diagnostics: Arc<dyn DiagnosticsRepository>) -> Self {
        Self { diagnostics }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<DatabaseStats, DomainError> {
        self.diagnostics.stats().await
    }
}
