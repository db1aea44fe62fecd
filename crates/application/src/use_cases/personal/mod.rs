pub mod delete_personal_info;
pub mod get_personal_info;
pub mod patch;
pub mod update_personal_info;
pub mod upsert_personal_info;

pub use delete_personal_info::DeletePersonalInfoUseCase;
pub use get_personal_info::GetPersonalInfoUseCase;
pub use patch::PersonalInfoPatch;
pub use update_personal_info::UpdatePersonalInfoUseCase;
pub use upsert_personal_info::UpsertPersonalInfoUseCase;
