use chrono::Utc;
use domainboard_domain::{DnsRecord, DomainStatus, RecordType};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};

use crate::ports::DnsLookup;

/// Aggregates per-type lookups and a reachability probe into one
/// [`DomainStatus`] snapshot.
///
/// All eight upstream calls run concurrently and failures stay isolated:
/// a failed type contributes zero records, a failed probe marks the domain
/// unreachable. The aggregator itself never fails.
pub struct GetDomainStatusUseCase {
    lookup: Arc<dyn DnsLookup>,
}

impl GetDomainStatusUseCase {
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self { lookup }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str, owner: &str) -> DomainStatus {
        let (records, (is_reachable, response_time_ms)) =
            tokio::join!(self.collect_records(domain), self.probe(domain));

        debug!(
            domain,
            record_count = records.len(),
            is_reachable,
            ?response_time_ms,
            "Domain status assembled"
        );

        DomainStatus {
            domain: domain.to_string(),
            owner: owner.to_string(),
            records,
            // Stamped at assembly, after both sides settled.
            last_checked: Utc::now(),
            is_reachable,
            response_time_ms,
        }
    }

    /// One lookup per queryable type, all in flight at once. Results are
    /// concatenated in type iteration order; a failed type is skipped.
    async fn collect_records(&self, domain: &str) -> Vec<DnsRecord> {
        let lookups = RecordType::QUERYABLE
            .iter()
            .map(|record_type| self.lookup.lookup(domain, *record_type));

        join_all(lookups)
            .await
            .into_iter()
            .zip(RecordType::QUERYABLE)
            .flat_map(|(result, record_type)| match result {
                Ok(records) => records,
                Err(e) => {
                    warn!(domain, %record_type, error = %e, "Record lookup failed");
                    Vec::new()
                }
            })
            .collect()
    }

    /// Timed A-record query. A completed query (answers or a definitive
    /// empty result) reports its elapsed time; a failed one reports
    /// neither reachability nor timing.
    async fn probe(&self, domain: &str) -> (bool, Option<u64>) {
        let started = Instant::now();
        match self.lookup.lookup(domain, RecordType::A).await {
            Ok(answers) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                (!answers.is_empty(), Some(elapsed_ms))
            }
            Err(e) => {
                warn!(domain, error = %e, "Reachability probe failed");
                (false, None)
            }
        }
    }
}
