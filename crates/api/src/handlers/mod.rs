pub mod auth;
pub mod diagnostics;
pub mod dns_records;
pub mod docs;
pub mod domain_status;
pub mod health;
pub mod personal;
pub mod repositories;

pub use auth::{
    get_current_user, github_callback, github_login, google_callback, google_login, login, logout,
    register,
};
pub use diagnostics::{db_stats, db_status};
pub use dns_records::{create_record, delete_record, get_record_by_id, get_records, update_record};
pub use docs::api_docs;
pub use domain_status::get_domain_status;
pub use health::health_check;
pub use personal::{
    delete_personal_info, get_personal_info, get_personal_info_by_id, update_personal_info,
    upsert_personal_info,
};
pub use repositories::{
    delete_repository, get_repositories, get_repository_by_id, sync_repositories,
    update_repository, upsert_repository,
};
