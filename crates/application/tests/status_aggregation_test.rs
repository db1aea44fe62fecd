mod helpers;

use domainboard_application::use_cases::GetDomainStatusUseCase;
use domainboard_domain::{DnsRecord, RecordType};
use helpers::mock_ports::ScriptedDnsLookup;
use std::sync::Arc;

fn record(record_type: RecordType, name: &str, value: &str) -> DnsRecord {
    DnsRecord::new(record_type, name.to_string(), value.to_string(), Some(300))
}

#[tokio::test]
async fn total_lookup_failure_still_yields_snapshot() {
    let mut lookup = ScriptedDnsLookup::new();
    for record_type in RecordType::QUERYABLE {
        lookup = lookup.with_failure(record_type);
    }
    let use_case = GetDomainStatusUseCase::new(Arc::new(lookup));

    let status = use_case.execute("dev0-1.com", "anshulyadav32").await;

    assert_eq!(status.domain, "dev0-1.com");
    assert_eq!(status.owner, "anshulyadav32");
    assert!(status.records.is_empty());
    assert!(!status.is_reachable);
    assert_eq!(status.response_time_ms, None);
}

#[tokio::test]
async fn probe_failure_is_isolated_from_other_types() {
    // A fails at the network level; TXT and NS still resolve.
    let lookup = ScriptedDnsLookup::new()
        .with_failure(RecordType::A)
        .with_answers(
            RecordType::NS,
            vec![record(RecordType::NS, "dev0-1.com", "ns1.example.com")],
        )
        .with_answers(
            RecordType::TXT,
            vec![record(RecordType::TXT, "dev0-1.com", "v=spf1 ~all")],
        );
    let use_case = GetDomainStatusUseCase::new(Arc::new(lookup));

    let status = use_case.execute("dev0-1.com", "anshulyadav32").await;

    assert_eq!(status.records.len(), 2);
    assert!(!status.is_reachable);
    assert_eq!(status.response_time_ms, None);
}

#[tokio::test]
async fn empty_probe_answer_reports_timing_but_unreachable() {
    // The A query completes with a definitive empty answer (NXDOMAIN-like).
    let lookup = ScriptedDnsLookup::new().with_answers(RecordType::A, vec![]);
    let use_case = GetDomainStatusUseCase::new(Arc::new(lookup));

    let status = use_case.execute("nonexistent.invalid", "nobody").await;

    assert!(!status.is_reachable);
    assert!(status.response_time_ms.is_some());
    assert!(status.records.is_empty());
}

#[tokio::test]
async fn records_concatenate_in_type_iteration_order() {
    let lookup = ScriptedDnsLookup::new()
        .with_answers(
            RecordType::TXT,
            vec![record(RecordType::TXT, "dev0-1.com", "v=spf1 ~all")],
        )
        .with_answers(
            RecordType::A,
            vec![record(RecordType::A, "dev0-1.com", "104.198.14.52")],
        )
        .with_answers(
            RecordType::MX,
            vec![record(RecordType::MX, "dev0-1.com", "10 mail.dev0-1.com")],
        );
    let use_case = GetDomainStatusUseCase::new(Arc::new(lookup));

    let status = use_case.execute("dev0-1.com", "anshulyadav32").await;

    let types: Vec<RecordType> = status.records.iter().map(|r| r.record_type).collect();
    assert_eq!(types, [RecordType::A, RecordType::MX, RecordType::TXT]);
    assert!(status.is_reachable);
    assert!(status.response_time_ms.is_some());
}

#[tokio::test]
async fn reachable_when_probe_returns_answers() {
    let lookup = ScriptedDnsLookup::new().with_answers(
        RecordType::A,
        vec![record(RecordType::A, "dev0-1.com", "104.198.14.52")],
    );
    let use_case = GetDomainStatusUseCase::new(Arc::new(lookup));

    let before = chrono::Utc::now();
    let status = use_case.execute("dev0-1.com", "anshulyadav32").await;

    assert!(status.is_reachable);
    assert!(status.last_checked >= before);
}
