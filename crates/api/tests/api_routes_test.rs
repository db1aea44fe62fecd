use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_extra::extract::cookie::Key;
use domainboard_api::{create_api_routes, AppState, SessionStore};
use domainboard_application::ports::DnsLookup;
use domainboard_application::use_cases::{
    AuthenticateUseCase, CreateDnsRecordUseCase, DeleteDnsRecordUseCase,
    DeletePersonalInfoUseCase, DeleteRepositoryUseCase, GetDatabaseStatsUseCase,
    GetDatabaseStatusUseCase, GetDnsRecordsUseCase, GetDomainStatusUseCase,
    GetPersonalInfoUseCase, GetRepositoriesUseCase, GetUserUseCase, RegisterUserUseCase,
    SyncRepositoriesUseCase, UpdateDnsRecordUseCase, UpdatePersonalInfoUseCase,
    UpdateRepositoryUseCase, UpsertPersonalInfoUseCase, UpsertRepositoryUseCase,
};
use domainboard_domain::config::AuthConfig;
use domainboard_domain::{DnsRecord, DomainError, RecordType};
use domainboard_infrastructure::repositories::{
    SqliteDiagnosticsRepository, SqliteDnsRecordRepository, SqlitePersonalInfoRepository,
    SqliteRepositoryStore, SqliteUserRepository,
};
use domainboard_infrastructure::{Argon2CredentialHasher, OAuthClient};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

/// Stub lookup so the live aggregation path has a port to talk to.
struct EmptyLookup;

#[async_trait]
impl DnsLookup for EmptyLookup {
    async fn lookup(
        &self,
        _domain: &str,
        _record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        Ok(Vec::new())
    }
}

async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    Migrator::new(Path::new("../../migrations"))
        .await
        .unwrap()
        .run(&pool)
        .await
        .unwrap();

    let records = Arc::new(SqliteDnsRecordRepository::new(pool.clone()));
    let store = Arc::new(SqliteRepositoryStore::new(pool.clone()));
    let personal = Arc::new(SqlitePersonalInfoRepository::new(pool.clone()));
    let users = Arc::new(SqliteUserRepository::new(pool.clone()));
    let diagnostics = Arc::new(SqliteDiagnosticsRepository::new(pool));
    let hasher = Arc::new(Argon2CredentialHasher);
    let lookup = Arc::new(EmptyLookup);

    let state = AppState {
        get_domain_status: Arc::new(GetDomainStatusUseCase::new(lookup)),
        get_records: Arc::new(GetDnsRecordsUseCase::new(records.clone())),
        create_record: Arc::new(CreateDnsRecordUseCase::new(records.clone())),
        update_record: Arc::new(UpdateDnsRecordUseCase::new(records.clone())),
        delete_record: Arc::new(DeleteDnsRecordUseCase::new(records)),
        get_repositories: Arc::new(GetRepositoriesUseCase::new(store.clone())),
        upsert_repository: Arc::new(UpsertRepositoryUseCase::new(store.clone())),
        update_repository: Arc::new(UpdateRepositoryUseCase::new(store.clone())),
        delete_repository: Arc::new(DeleteRepositoryUseCase::new(store)),
        sync_repositories: Arc::new(SyncRepositoriesUseCase::new()),
        get_personal_info: Arc::new(GetPersonalInfoUseCase::new(personal.clone())),
        upsert_personal_info: Arc::new(UpsertPersonalInfoUseCase::new(personal.clone())),
        update_personal_info: Arc::new(UpdatePersonalInfoUseCase::new(personal.clone())),
        delete_personal_info: Arc::new(DeletePersonalInfoUseCase::new(personal)),
        authenticate: Arc::new(AuthenticateUseCase::new(users.clone(), hasher.clone())),
        register_user: Arc::new(RegisterUserUseCase::new(users.clone(), hasher)),
        get_user: Arc::new(GetUserUseCase::new(users)),
        db_status: Arc::new(GetDatabaseStatusUseCase::new(diagnostics.clone())),
        db_stats: Arc::new(GetDatabaseStatsUseCase::new(diagnostics)),
        oauth: Arc::new(OAuthClient::new(AuthConfig::default())),
        sessions: Arc::new(SessionStore::new()),
        cookie_key: Key::from(
            b"integration-test-signing-key-material-0123456789abcdef0123456789",
        ),
        frontend_origin: "http://localhost:3000".to_string(),
    };

    create_api_routes(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "API server is running");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn create_record_requires_type_name_value() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/dns/records",
            json!({"type": "A", "name": "example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Type, name, and value are required");
}

#[tokio::test]
async fn create_record_defaults_ttl() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/dns/records",
            json!({"type": "A", "name": "example.com", "value": "1.2.3.4"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["ttl"], 3600);
    assert_eq!(created["type"], "A");

    let list = body_json(app.oneshot(get("/api/dns/records")).await.unwrap()).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_record_is_404_with_message() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/dns/records/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["message"], "DNS record not found");
}

#[tokio::test]
async fn update_and_delete_record_lifecycle() {
    let app = test_app().await;

    let created = body_json(
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/dns/records",
                json!({"type": "A", "name": "example.com", "value": "1.2.3.4"}),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let updated = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/dns/records/{}", id),
            json!({"type": "CNAME", "name": "www.example.com", "value": "example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(body_json(updated).await["type"], "CNAME");

    let deleted = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/dns/records/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
    let body = body_json(deleted).await;
    assert_eq!(body["id"], id);

    let gone = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/dns/records/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repository_upsert_is_keyed_on_full_name() {
    let app = test_app().await;

    for stars in [5, 25] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/repositories",
                json!({"name": "domainboard", "fullName": "anshulyadav32/domainboard", "stars": stars}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let list = body_json(app.oneshot(get("/api/repositories")).await.unwrap()).await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["stars"], 25);
}

#[tokio::test]
async fn sync_endpoint_reports_readiness() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/repositories/sync")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("sync endpoint ready"));
}

#[tokio::test]
async fn personal_info_upsert_and_fetch() {
    let app = test_app().await;

    let missing = app.clone().oneshot(get("/api/personal")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/personal",
            json!({"name": "Anshul Yadav", "skills": ["Rust", "React"]}),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);

    let active = body_json(app.oneshot(get("/api/personal")).await.unwrap()).await;
    assert_eq!(active["name"], "Anshul Yadav");
    assert_eq!(active["skills"], json!(["Rust", "React"]));
    assert_eq!(active["isActive"], true);
}

#[tokio::test]
async fn register_login_me_logout_flow() {
    let app = test_app().await;

    let registered = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({"email": "a@dev0-1.com", "password": "hunter22", "name": "Anshul"}),
        ))
        .await
        .unwrap();
    assert_eq!(registered.status(), StatusCode::CREATED);
    let cookie = registered
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let registered_body = body_json(registered).await;
    assert_eq!(registered_body["email"], "a@dev0-1.com");
    assert!(registered_body.get("passwordHash").is_none());

    let me = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(body_json(me).await["name"], "Anshul");

    let anonymous = app.clone().oneshot(get("/api/auth/me")).await.unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let login = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "a@dev0-1.com", "password": "hunter22"}),
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);

    let logout = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(logout.status(), StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_get_same_message() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({"email": "a@dev0-1.com", "password": "hunter22", "name": "Anshul"}),
        ))
        .await
        .unwrap();

    let wrong_password = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "a@dev0-1.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let first = body_json(wrong_password).await;

    let unknown_email = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "nobody@dev0-1.com", "password": "hunter22"}),
        ))
        .await
        .unwrap();
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let second = body_json(unknown_email).await;

    assert_eq!(first["message"], "Invalid credentials");
    assert_eq!(first, second);
}

#[tokio::test]
async fn oauth_login_without_credentials_is_unavailable() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/auth/github")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn db_diagnostics_report_connectivity_and_counts() {
    let app = test_app().await;

    let status = body_json(app.clone().oneshot(get("/api/db/status")).await.unwrap()).await;
    assert_eq!(status["connected"], true);
    assert!(status["timestamp"].is_string());

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/dns/records",
            json!({"type": "A", "name": "example.com", "value": "1.2.3.4"}),
        ))
        .await
        .unwrap();

    let stats = body_json(app.oneshot(get("/api/db/stats")).await.unwrap()).await;
    assert_eq!(stats["dnsRecords"], 1);
    assert_eq!(stats["users"], 0);
    assert_eq!(stats["monitoringEntries"], 0);
    assert_eq!(stats["alerts"], 0);
}

#[tokio::test]
async fn domain_status_serves_sample_by_default() {
    let app = test_app().await;

    let body = body_json(
        app.oneshot(get("/api/dns/status/example.org?owner=someone"))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(body["domain"], "example.org");
    assert_eq!(body["owner"], "someone");
    assert_eq!(body["isReachable"], true);
    assert_eq!(body["responseTime"], 150);
    assert!(!body["records"].as_array().unwrap().is_empty());
    assert_eq!(body["records"][0]["type"], "A");
}

#[tokio::test]
async fn live_domain_status_degrades_to_empty_snapshot() {
    let app = test_app().await;

    let body = body_json(
        app.oneshot(get("/api/dns/status/example.org?live=true"))
            .await
            .unwrap(),
    )
    .await;

    // EmptyLookup answers every query with zero records: unreachable but
    // still a valid snapshot with probe timing.
    assert_eq!(body["domain"], "example.org");
    assert_eq!(body["isReachable"], false);
    assert!(body["records"].as_array().unwrap().is_empty());
}
