use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// DNS record types surfaced by the dashboard.
///
/// The set is closed: upstream answers carrying any other wire code map to
/// `Unknown` instead of failing the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    AAAA,
    MX,
    NS,
    CNAME,
    TXT,
    SOA,
    Unknown,
}

impl RecordType {
    /// The queryable types, in lookup iteration order.
    pub const QUERYABLE: [RecordType; 7] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::MX,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::TXT,
        RecordType::SOA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::SOA => "SOA",
            RecordType::Unknown => "UNKNOWN",
        }
    }

    /// Convert from wire format number (RFC 1035).
    ///
    /// Unrecognized codes map to `Unknown` rather than erroring, so a
    /// response mixing exotic types still normalizes.
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            _ => RecordType::Unknown,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "SOA" => Ok(RecordType::SOA),
            "UNKNOWN" => Ok(RecordType::Unknown),
            other => Err(DomainError::Validation(format!(
                "Unsupported record type: {}",
                other
            ))),
        }
    }
}

/// A single normalized DNS answer.
///
/// Constructed fresh from every lookup response and never mutated; the
/// `value` payload is carried verbatim from upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl DnsRecord {
    pub fn new(record_type: RecordType, name: String, value: String, ttl: Option<u32>) -> Self {
        Self {
            record_type,
            name,
            value,
            ttl,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A DNS record row managed through the CRUD API.
///
/// Unlike [`DnsRecord`], the stored type is a free-form string: the admin
/// panel only requires type/name/value to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecordEntry {
    pub id: Option<i64>,
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: i64,
    pub priority: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl DnsRecordEntry {
    /// Default TTL applied when a create/update request omits one.
    pub const DEFAULT_TTL: i64 = 3600;
}
