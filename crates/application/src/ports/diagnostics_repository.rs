use async_trait::async_trait;
use domainboard_domain::DomainError;

/// Row counts surfaced by the stats diagnostics endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseStats {
    pub users: i64,
    pub dns_records: i64,
    pub monitoring_entries: i64,
    pub alerts: i64,
}

/// Connectivity and aggregate-count diagnostics.
#[async_trait]
pub trait DiagnosticsRepository: Send + Sync {
    /// Round-trips a trivial query and returns the database's current
    /// timestamp, proving the connection works.
    async fn current_timestamp(&self) -> Result<String, DomainError>;

    async fn stats(&self) -> Result<DatabaseStats, DomainError>;
}
