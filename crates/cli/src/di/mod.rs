//! Dependency wiring: repositories, adapters, and use cases are built
//! once at startup and handed to the API as one state value.
use axum_extra::extract::cookie::Key;
use domainboard_api::{AppState, SessionStore};
use domainboard_application::ports::{CredentialHasher, DnsLookup};
use domainboard_application::use_cases::{
    AuthenticateUseCase, CreateDnsRecordUseCase, DeleteDnsRecordUseCase,
    DeletePersonalInfoUseCase, DeleteRepositoryUseCase, GetDatabaseStatsUseCase,
    GetDatabaseStatusUseCase, GetDnsRecordsUseCase, GetDomainStatusUseCase,
    GetPersonalInfoUseCase, GetRepositoriesUseCase, GetUserUseCase, RegisterUserUseCase,
    SyncRepositoriesUseCase, UpdateDnsRecordUseCase, UpdatePersonalInfoUseCase,
    UpdateRepositoryUseCase, UpsertPersonalInfoUseCase, UpsertRepositoryUseCase,
};
use domainboard_domain::Config;
use domainboard_infrastructure::repositories::{
    SqliteDiagnosticsRepository, SqliteDnsRecordRepository, SqlitePersonalInfoRepository,
    SqliteRepositoryStore, SqliteUserRepository,
};
use domainboard_infrastructure::{Argon2CredentialHasher, DohClient, OAuthClient};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub dns_records: Arc<SqliteDnsRecordRepository>,
    pub repositories: Arc<SqliteRepositoryStore>,
    pub personal: Arc<SqlitePersonalInfoRepository>,
    pub users: Arc<SqliteUserRepository>,
    pub diagnostics: Arc<SqliteDiagnosticsRepository>,
}

impl Repositories {
    pub fn new(pool: &SqlitePool) -> Self {
        Self {
            dns_records: Arc::new(SqliteDnsRecordRepository::new(pool.clone())),
            repositories: Arc::new(SqliteRepositoryStore::new(pool.clone())),
            personal: Arc::new(SqlitePersonalInfoRepository::new(pool.clone())),
            users: Arc::new(SqliteUserRepository::new(pool.clone())),
            diagnostics: Arc::new(SqliteDiagnosticsRepository::new(pool.clone())),
        }
    }
}

pub fn build_state(config: &Config, pool: SqlitePool) -> AppState {
    let repos = Repositories::new(&pool);

    let lookup: Arc<dyn DnsLookup> = Arc::new(DohClient::new(&config.doh));
    let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2CredentialHasher);

    AppState {
        get_domain_status: Arc::new(GetDomainStatusUseCase::new(lookup)),

        get_records: Arc::new(GetDnsRecordsUseCase::new(repos.dns_records.clone())),
        create_record: Arc::new(CreateDnsRecordUseCase::new(repos.dns_records.clone())),
        update_record: Arc::new(UpdateDnsRecordUseCase::new(repos.dns_records.clone())),
        delete_record: Arc::new(DeleteDnsRecordUseCase::new(repos.dns_records)),

        get_repositories: Arc::new(GetRepositoriesUseCase::new(repos.repositories.clone())),
        upsert_repository: Arc::new(UpsertRepositoryUseCase::new(repos.repositories.clone())),
        update_repository: Arc::new(UpdateRepositoryUseCase::new(repos.repositories.clone())),
        delete_repository: Arc::new(DeleteRepositoryUseCase::new(repos.repositories)),
        sync_repositories: Arc::new(SyncRepositoriesUseCase::new()),

        get_personal_info: Arc::new(GetPersonalInfoUseCase::new(repos.personal.clone())),
        upsert_personal_info: Arc::new(UpsertPersonalInfoUseCase::new(repos.personal.clone())),
        update_personal_info: Arc::new(UpdatePersonalInfoUseCase::new(repos.personal.clone())),
        delete_personal_info: Arc::new(DeletePersonalInfoUseCase::new(repos.personal)),

        authenticate: Arc::new(AuthenticateUseCase::new(repos.users.clone(), hasher.clone())),
        register_user: Arc::new(RegisterUserUseCase::new(repos.users.clone(), hasher)),
        get_user: Arc::new(GetUserUseCase::new(repos.users)),

        db_status: Arc::new(GetDatabaseStatusUseCase::new(repos.diagnostics.clone())),
        db_stats: Arc::new(GetDatabaseStatsUseCase::new(repos.diagnostics)),

        oauth: Arc::new(OAuthClient::new(config.auth.clone())),
        sessions: Arc::new(SessionStore::new()),
        // Length is enforced by Config::validate before we get here.
        cookie_key: Key::from(config.auth.session_secret.as_bytes()),
        frontend_origin: config.server.frontend_origin.clone(),
    }
}
