use domainboard_domain::{DnsRecordEntry, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{DnsRecordRepository, NewDnsRecordEntry};

pub struct UpdateDnsRecordUseCase {
    records: Arc<dyn DnsRecordRepository>,
}

impl UpdateDnsRecordUseCase {
    pub fn new(records: Arc<dyn DnsRecordRepository>) -> Self {
        Self { records }
    }

    /// Full replacement of a row; a missing TTL falls back to the default.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: i64,
        entry: NewDnsRecordEntry,
    ) -> Result<DnsRecordEntry, DomainError> {
        let updated = self
            .records
            .update(id, entry)
            .await?
            .ok_or_else(|| DomainError::NotFound("DNS record".to_string()))?;

        info!(record_id = id, "DNS record updated");
        Ok(updated)
    }
}
