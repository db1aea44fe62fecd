use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dns_record::{DnsRecord, RecordType};

/// One aggregated snapshot of a domain's DNS state.
///
/// A refresh produces a brand-new snapshot; instances are never mutated in
/// place. Record order is the concatenation order of the per-type lookups
/// and carries no semantic meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainStatus {
    pub domain: String,
    pub owner: String,
    pub records: Vec<DnsRecord>,
    pub last_checked: DateTime<Utc>,
    pub is_reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

impl DomainStatus {
    /// Fixed sample snapshot for demos, initial renders, and tests.
    ///
    /// Callers are expected to overwrite `domain`, `owner`, and
    /// `last_checked` before display.
    pub fn sample() -> Self {
        Self {
            domain: "dev0-1.com".to_string(),
            owner: "anshulyadav32".to_string(),
            records: vec![
                DnsRecord::new(
                    RecordType::A,
                    "dev0-1.com".to_string(),
                    "192.168.1.100".to_string(),
                    Some(300),
                ),
                DnsRecord::new(
                    RecordType::A,
                    "www.dev0-1.com".to_string(),
                    "192.168.1.100".to_string(),
                    Some(300),
                ),
                DnsRecord::new(
                    RecordType::AAAA,
                    "dev0-1.com".to_string(),
                    "2001:db8::1".to_string(),
                    Some(300),
                ),
                DnsRecord::new(
                    RecordType::MX,
                    "dev0-1.com".to_string(),
                    "mail.dev0-1.com".to_string(),
                    Some(3600),
                )
                .with_priority(10),
                DnsRecord::new(
                    RecordType::NS,
                    "dev0-1.com".to_string(),
                    "ns1.example.com".to_string(),
                    Some(86400),
                ),
                DnsRecord::new(
                    RecordType::NS,
                    "dev0-1.com".to_string(),
                    "ns2.example.com".to_string(),
                    Some(86400),
                ),
                DnsRecord::new(
                    RecordType::TXT,
                    "dev0-1.com".to_string(),
                    "v=spf1 include:_spf.google.com ~all".to_string(),
                    Some(3600),
                ),
                DnsRecord::new(
                    RecordType::CNAME,
                    "www.dev0-1.com".to_string(),
                    "dev0-1.com".to_string(),
                    Some(300),
                ),
            ],
            last_checked: Utc::now(),
            is_reachable: true,
            response_time_ms: Some(150),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_reachable_with_fixed_timing() {
        let status = DomainStatus::sample();
        assert!(status.is_reachable);
        assert_eq!(status.response_time_ms, Some(150));
        assert_eq!(status.records.len(), 8);
    }

    #[test]
    fn test_sample_mx_carries_priority() {
        let status = DomainStatus::sample();
        let mx = status
            .records
            .iter()
            .find(|r| r.record_type == RecordType::MX)
            .unwrap();
        assert_eq!(mx.priority, Some(10));
    }

    #[test]
    fn test_sample_can_be_rebranded() {
        let mut status = DomainStatus::sample();
        status.domain = "example.org".to_string();
        status.owner = "someone-else".to_string();
        assert_eq!(status.domain, "example.org");
        assert_eq!(status.records.len(), DomainStatus::sample().records.len());
    }
}
