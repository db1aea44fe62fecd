use async_trait::async_trait;
use domainboard_domain::{DomainError, PersonalInfo};

/// Repository interface for the site owner's profile.
#[async_trait]
pub trait PersonalInfoRepository: Send + Sync {
    /// The single active profile, if any.
    async fn get_active(&self) -> Result<Option<PersonalInfo>, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<PersonalInfo>, DomainError>;

    async fn create(&self, info: PersonalInfo) -> Result<PersonalInfo, DomainError>;

    async fn update(&self, id: i64, info: PersonalInfo)
        -> Result<Option<PersonalInfo>, DomainError>;

    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
