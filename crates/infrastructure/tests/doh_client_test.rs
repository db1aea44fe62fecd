use domainboard_application::ports::DnsLookup;
use domainboard_domain::config::DohConfig;
use domainboard_domain::RecordType;
use domainboard_infrastructure::dns::DohClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DohClient {
    DohClient::new(&DohConfig {
        endpoint: format!("{}/resolve", server.uri()),
        timeout_secs: 5,
    })
}

#[tokio::test]
async fn lookup_normalizes_answers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("name", "dev0-1.com"))
        .and(query_param("type", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": 0,
            "Answer": [
                {"name": "dev0-1.com", "type": 1, "TTL": 3600, "data": "104.198.14.52"}
            ]
        })))
        .mount(&server)
        .await;

    let records = client_for(&server)
        .lookup("dev0-1.com", RecordType::A)
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type, RecordType::A);
    assert_eq!(records[0].value, "104.198.14.52");
    assert_eq!(records[0].ttl, Some(3600));
}

#[tokio::test]
async fn missing_answer_section_yields_empty_not_error() {
    let server = MockServer::start().await;

    // NXDOMAIN-style negative result: status only, no Answer array.
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Status": 3})))
        .mount(&server)
        .await;

    let records = client_for(&server)
        .lookup("nonexistent.invalid", RecordType::A)
        .await
        .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn server_error_surfaces_as_lookup_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("dev0-1.com", RecordType::A).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn malformed_body_surfaces_as_lookup_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("dev0-1.com", RecordType::A).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn exotic_types_map_to_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": 0,
            "Answer": [
                {"name": "dev0-1.com", "type": 257, "TTL": 300, "data": "0 issue \"pki.goog\""},
                {"name": "dev0-1.com", "type": 16, "TTL": 300, "data": "\"v=spf1 ~all\""}
            ]
        })))
        .mount(&server)
        .await;

    let records = client_for(&server)
        .lookup("dev0-1.com", RecordType::TXT)
        .await
        .unwrap();

    assert_eq!(records[0].record_type, RecordType::Unknown);
    assert_eq!(records[1].record_type, RecordType::TXT);
}
