use domainboard_application::ports::NewDnsRecordEntry;
use domainboard_domain::DnsRecordEntry;
use serde::{Deserialize, Serialize};

/// Body for record creation and replacement. Type, name, and value must
/// all be present and non-empty; TTL falls back to the default.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecordRequest {
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub ttl: Option<i64>,
    pub priority: Option<i64>,
}

impl DnsRecordRequest {
    pub fn into_entry(self) -> Option<NewDnsRecordEntry> {
        match (self.record_type, self.name, self.value) {
            (Some(record_type), Some(name), Some(value))
                if !record_type.is_empty() && !name.is_empty() && !value.is_empty() =>
            {
                Some(NewDnsRecordEntry {
                    record_type,
                    name,
                    value,
                    ttl: self.ttl,
                    priority: self.priority,
                })
            }
            _ => None,
        }
    }
}

/// Response DTO for a managed record row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecordResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl DnsRecordResponse {
    pub fn from_entry(entry: DnsRecordEntry) -> Self {
        Self {
            id: entry.id.unwrap_or(0),
            record_type: entry.record_type,
            name: entry.name,
            value: entry.value,
            ttl: entry.ttl,
            priority: entry.priority,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
