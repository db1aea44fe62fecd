pub mod get_database_stats;
pub mod get_database_status;

pub use get_database_stats::GetDatabaseStatsUseCase;
pub use get_database_status::GetDatabaseStatusUseCase;
