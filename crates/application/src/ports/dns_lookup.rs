use async_trait::async_trait;
use domainboard_domain::{DnsRecord, DomainError, RecordType};

/// Upstream DNS resolution for one (domain, type) pair.
///
/// Implementations return the normalized answer list; an empty vec is a
/// definitive "no records of this type" answer, while `Err` means the
/// lookup itself failed (network, non-2xx, malformed body).
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError>;
}
