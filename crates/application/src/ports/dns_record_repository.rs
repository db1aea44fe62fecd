use async_trait::async_trait;
use domainboard_domain::{DnsRecordEntry, DomainError};

/// Field set accepted when creating or replacing a managed DNS record row.
#[derive(Debug, Clone)]
pub struct NewDnsRecordEntry {
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: Option<i64>,
    pub priority: Option<i64>,
}

/// Repository interface for managed DNS record rows.
#[async_trait]
pub trait DnsRecordRepository: Send + Sync {
    async fn create(&self, entry: NewDnsRecordEntry) -> Result<DnsRecordEntry, DomainError>;

    /// All rows, newest first.
    async fn get_all(&self) -> Result<Vec<DnsRecordEntry>, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<DnsRecordEntry>, DomainError>;

    /// Full replacement of an existing row; `None` when the id is absent.
    async fn update(
        &self,
        id: i64,
        entry: NewDnsRecordEntry,
    ) -> Result<Option<DnsRecordEntry>, DomainError>;

    /// Returns `false` when the id was absent.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
