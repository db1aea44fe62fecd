use async_trait::async_trait;
use domainboard_application::ports::{DnsRecordRepository, NewDnsRecordEntry};
use domainboard_domain::{DnsRecordEntry, DomainError};
use sqlx::SqlitePool;
use tracing::{error, instrument};

use crate::database::now_utc;

type DnsRecordRow = (
    i64,
    String,
    String,
    String,
    i64,
    Option<i64>,
    String,
    String,
);

pub struct SqliteDnsRecordRepository {
    pool: SqlitePool,
}

impl SqliteDnsRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: DnsRecordRow) -> DnsRecordEntry {
        let (id, record_type, name, value, ttl, priority, created_at, updated_at) = row;

        DnsRecordEntry {
            id: Some(id),
            record_type,
            name,
            value,
            ttl,
            priority,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }
}

#[async_trait]
impl DnsRecordRepository for SqliteDnsRecordRepository {
    #[instrument(skip(self))]
    async fn create(&self, entry: NewDnsRecordEntry) -> Result<DnsRecordEntry, DomainError> {
        let now = now_utc();
        let ttl = entry.ttl.unwrap_or(DnsRecordEntry::DEFAULT_TTL);

        let result = sqlx::query(
            "INSERT INTO dns_records (type, name, value, ttl, priority, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&entry.record_type)
        .bind(&entry.name)
        .bind(&entry.value)
        .bind(ttl)
        .bind(entry.priority)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create DNS record");
            DomainError::DatabaseError(e.to_string())
        })?;

        let id = result.last_insert_rowid();

        self.get_by_id(id).await?.ok_or_else(|| {
            DomainError::DatabaseError("Failed to fetch created DNS record".to_string())
        })
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<DnsRecordEntry>, DomainError> {
        let rows = sqlx::query_as::<_, DnsRecordRow>(
            "SELECT id, type, name, value, ttl, priority, created_at, updated_at
             FROM dns_records
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query DNS records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_entry).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<DnsRecordEntry>, DomainError> {
        let row = sqlx::query_as::<_, DnsRecordRow>(
            "SELECT id, type, name, value, ttl, priority, created_at, updated_at
             FROM dns_records WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query DNS record by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_entry))
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i64,
        entry: NewDnsRecordEntry,
    ) -> Result<Option<DnsRecordEntry>, DomainError> {
        let ttl = entry.ttl.unwrap_or(DnsRecordEntry::DEFAULT_TTL);

        let result = sqlx::query(
            "UPDATE dns_records
             SET type = ?, name = ?, value = ?, ttl = ?, priority = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&entry.record_type)
        .bind(&entry.name)
        .bind(&entry.value)
        .bind(ttl)
        .bind(entry.priority)
        .bind(now_utc())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update DNS record");
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM dns_records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete DNS record");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
