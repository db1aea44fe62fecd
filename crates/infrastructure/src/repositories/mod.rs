pub mod diagnostics_repository;
pub mod dns_record_repository;
pub mod personal_info_repository;
pub mod repository_store;
pub mod user_repository;

pub use diagnostics_repository::SqliteDiagnosticsRepository;
pub use dns_record_repository::SqliteDnsRecordRepository;
pub use personal_info_repository::SqlitePersonalInfoRepository;
pub use repository_store::SqliteRepositoryStore;
pub use user_repository::SqliteUserRepository;
