pub mod delete_repository;
pub mod get_repositories;
pub mod sync_repositories;
pub mod update_repository;
pub mod upsert_repository;

pub use delete_repository::DeleteRepositoryUseCase;
pub use get_repositories::GetRepositoriesUseCase;
pub use sync_repositories::SyncRepositoriesUseCase;
pub use update_repository::UpdateRepositoryUseCase;
pub use upsert_repository::UpsertRepositoryUseCase;
