pub mod credential_hasher;
pub mod diagnostics_repository;
pub mod dns_lookup;
pub mod dns_record_repository;
pub mod personal_info_repository;
pub mod repository_store;
pub mod user_repository;

pub use credential_hasher::CredentialHasher;
pub use diagnostics_repository::{DatabaseStats, DiagnosticsRepository};
pub use dns_lookup::DnsLookup;
pub use dns_record_repository::{DnsRecordRepository, NewDnsRecordEntry};
pub use personal_info_repository::PersonalInfoRepository;
pub use repository_store::RepositoryStore;
pub use user_repository::{NewUser, UserRepository};
