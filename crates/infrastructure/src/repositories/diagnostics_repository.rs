use async_trait::async_trait;
use domainboard_application::ports::{DatabaseStats, DiagnosticsRepository};
use domainboard_domain::DomainError;
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteDiagnosticsRepository {
    pool: SqlitePool,
}

impl SqliteDiagnosticsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn count(&self, table: &str) -> Result<i64, DomainError> {
        let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(table, error = %e, "Failed to count rows");
                DomainError::DatabaseError(e.to_string())
            })?;
        Ok(row.0)
    }
}

#[async_trait]
impl DiagnosticsRepository for SqliteDiagnosticsRepository {
    #[instrument(skip(self))]
    async fn current_timestamp(&self) -> Result<String, DomainError> {
        let row: (String,) = sqlx::query_as("SELECT datetime('now') AS current_time")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Database connectivity check failed");
                DomainError::DatabaseError(e.to_string())
            })?;
        Ok(row.0)
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> Result<DatabaseStats, DomainError> {
        Ok(DatabaseStats {
            users: self.count("users").await?,
            dns_records: self.count("dns_records").await?,
            monitoring_entries: self.count("monitoring_history").await?,
            alerts: self.count("alerts").await?,
        })
    }
}
