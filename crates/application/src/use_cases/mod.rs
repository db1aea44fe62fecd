pub mod auth;
pub mod diagnostics;
pub mod personal;
pub mod records;
pub mod repositories;
pub mod status;

pub use auth::{AuthenticateUseCase, GetUserUseCase, RegisterUserUseCase};
pub use diagnostics::{GetDatabaseStatsUseCase, GetDatabaseStatusUseCase};
pub use personal::{
    DeletePersonalInfoUseCase, GetPersonalInfoUseCase, PersonalInfoPatch,
    UpdatePersonalInfoUseCase, UpsertPersonalInfoUseCase,
};
pub use records::{
    CreateDnsRecordUseCase, DeleteDnsRecordUseCase, GetDnsRecordsUseCase, UpdateDnsRecordUseCase,
};
pub use repositories::{
    DeleteRepositoryUseCase, GetRepositoriesUseCase, SyncRepositoriesUseCase,
    UpdateRepositoryUseCase, UpsertRepositoryUseCase,
};
pub use status::GetDomainStatusUseCase;
