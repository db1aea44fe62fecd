use async_trait::async_trait;
use domainboard_application::ports::DnsLookup;
use domainboard_domain::config::DohConfig;
use domainboard_domain::{DnsRecord, DomainError, RecordType};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Media type advertised for JSON resolver responses.
const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// One entry of the DoH JSON `Answer` array.
#[derive(Debug, Clone, Deserialize)]
pub struct DohAnswer {
    pub name: String,
    /// Numeric record type (RFC 1035 wire code).
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL")]
    pub ttl: Option<u32>,
    pub data: String,
}

/// DoH JSON envelope. Negative results carry no `Answer` section.
#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Answer")]
    answer: Option<Vec<DohAnswer>>,
}

/// Maps a raw answer list into typed records.
///
/// Pure and total: unrecognized wire codes become `RecordType::Unknown`
/// and payloads pass through verbatim.
pub fn normalize_answers(answers: Vec<DohAnswer>) -> Vec<DnsRecord> {
    answers
        .into_iter()
        .map(|answer| {
            DnsRecord::new(
                RecordType::from_u16(answer.record_type),
                answer.name,
                answer.data,
                answer.ttl,
            )
        })
        .collect()
}

/// DNS-over-HTTPS JSON client (Google/Cloudflare resolver style).
pub struct DohClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DohClient {
    pub fn new(config: &DohConfig) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            endpoint: config.endpoint.clone(),
        }
    }
}

#[async_trait]
impl DnsLookup for DohClient {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        debug!(
            endpoint = %self.endpoint,
            domain,
            record_type = %record_type,
            "Sending DoH query"
        );

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("name", domain), ("type", record_type.as_str())])
            .header("Accept", DNS_JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| {
                DomainError::LookupFailed(format!(
                    "DoH request to {} failed: {}",
                    self.endpoint, e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::LookupFailed(format!(
                "DoH server {} returned HTTP {}",
                self.endpoint,
                status.as_u16()
            )));
        }

        let body: DohResponse = response.json().await.map_err(|e| {
            DomainError::LookupFailed(format!(
                "Malformed DoH response from {}: {}",
                self.endpoint, e
            ))
        })?;

        let records = normalize_answers(body.answer.unwrap_or_default());
        debug!(domain, count = records.len(), "DoH answers normalized");
        Ok(records)
    }
}
