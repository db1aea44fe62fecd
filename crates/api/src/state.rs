use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use domainboard_application::use_cases::{
    AuthenticateUseCase, CreateDnsRecordUseCase, DeleteDnsRecordUseCase,
    DeletePersonalInfoUseCase, DeleteRepositoryUseCase, GetDatabaseStatsUseCase,
    GetDatabaseStatusUseCase, GetDnsRecordsUseCase, GetDomainStatusUseCase,
    GetPersonalInfoUseCase, GetRepositoriesUseCase, GetUserUseCase, RegisterUserUseCase,
    SyncRepositoriesUseCase, UpdateDnsRecordUseCase, UpdatePersonalInfoUseCase,
    UpdateRepositoryUseCase, UpsertPersonalInfoUseCase, UpsertRepositoryUseCase,
};
use domainboard_infrastructure::OAuthClient;
use std::sync::Arc;

use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub get_domain_status: Arc<GetDomainStatusUseCase>,

    pub get_records: Arc<GetDnsRecordsUseCase>,
    pub create_record: Arc<CreateDnsRecordUseCase>,
    pub update_record: Arc<UpdateDnsRecordUseCase>,
    pub delete_record: Arc<DeleteDnsRecordUseCase>,

    pub get_repositories: Arc<GetRepositoriesUseCase>,
    pub upsert_repository: Arc<UpsertRepositoryUseCase>,
    pub update_repository: Arc<UpdateRepositoryUseCase>,
    pub delete_repository: Arc<DeleteRepositoryUseCase>,
    pub sync_repositories: Arc<SyncRepositoriesUseCase>,

    pub get_personal_info: Arc<GetPersonalInfoUseCase>,
    pub upsert_personal_info: Arc<UpsertPersonalInfoUseCase>,
    pub update_personal_info: Arc<UpdatePersonalInfoUseCase>,
    pub delete_personal_info: Arc<DeletePersonalInfoUseCase>,

    pub authenticate: Arc<AuthenticateUseCase>,
    pub register_user: Arc<RegisterUserUseCase>,
    pub get_user: Arc<GetUserUseCase>,

    pub db_status: Arc<GetDatabaseStatusUseCase>,
    pub db_stats: Arc<GetDatabaseStatsUseCase>,

    pub oauth: Arc<OAuthClient>,
    pub sessions: Arc<SessionStore>,
    pub cookie_key: Key,
    pub frontend_origin: String,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}
