use domainboard_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::DnsRecordRepository;

pub struct DeleteDnsRecordUseCase {
    records: Arc<dyn DnsRecordRepository>,
}

impl DeleteDnsRecordUseCase {
    pub fn new(records: Arc<dyn DnsRecordRepository>) -> Self {
        Self { records }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if !self.records.delete(id).await? {
            return Err(DomainError::NotFound("DNS record".to_string()));
        }
        info!(record_id = id, "DNS record deleted");
        Ok(())
    }
}
