use domainboard_domain::{DnsRecordEntry, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DnsRecordRepository;

pub struct GetDnsRecordsUseCase {
    records: Arc<dyn DnsRecordRepository>,
}

impl GetDnsRecordsUseCase {
    pub fn new(records: Arc<dyn DnsRecordRepository>) -> Self {
        Self { records }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<DnsRecordEntry>, DomainError> {
        self.records.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<DnsRecordEntry, DomainError> {
        self.records
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("DNS record".to_string()))
    }
}
