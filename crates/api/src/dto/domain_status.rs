use chrono::{DateTime, Utc};
use domainboard_domain::{DnsRecord, DomainStatus};
use serde::{Deserialize, Serialize};

/// Query options for the status endpoint: `live=true` triggers a real
/// aggregation instead of the sample snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainStatusQuery {
    pub owner: Option<String>,
    #[serde(default)]
    pub live: bool,
}

/// Response DTO for one status snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainStatusResponse {
    pub domain: String,
    pub owner: String,
    pub records: Vec<DnsRecord>,
    pub last_checked: DateTime<Utc>,
    pub is_reachable: bool,
    #[serde(rename = "responseTime", skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

impl DomainStatusResponse {
    pub fn from_status(status: DomainStatus) -> Self {
        Self {
            domain: status.domain,
            owner: status.owner,
            records: status.records,
            last_checked: status.last_checked,
            is_reachable: status.is_reachable,
            response_time_ms: status.response_time_ms,
        }
    }
}
