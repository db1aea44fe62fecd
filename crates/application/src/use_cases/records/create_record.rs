use domainboard_domain::{DnsRecordEntry, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{DnsRecordRepository, NewDnsRecordEntry};

pub struct CreateDnsRecordUseCase {
    records: Arc<dyn DnsRecordRepository>,
}

impl CreateDnsRecordUseCase {
    pub fn new(records: Arc<dyn DnsRecordRepository>) -> Self {
        Self { records }
    }

    /// Creates a record row. Type, name, and value are required; a missing
    /// TTL falls back to the default.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        record_type: Option<String>,
        name: Option<String>,
        value: Option<String>,
        ttl: Option<i64>,
        priority: Option<i64>,
    ) -> Result<DnsRecordEntry, DomainError> {
        let (record_type, name, value) = match (record_type, name, value) {
            (Some(t), Some(n), Some(v)) if !t.is_empty() && !n.is_empty() && !v.is_empty() => {
                (t, n, v)
            }
            _ => {
                return Err(DomainError::Validation(
                    "Type, name, and value are required".to_string(),
                ))
            }
        };

        let entry = self
            .records
            .create(NewDnsRecordEntry {
                record_type,
                name,
                value,
                ttl,
                priority,
            })
            .await?;

        info!(record_id = ?entry.id, record_type = %entry.record_type, "DNS record created");
        Ok(entry)
    }
}
