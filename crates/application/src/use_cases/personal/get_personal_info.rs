use domainboard_domain::{DomainError, PersonalInfo};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::PersonalInfoRepository;

pub struct GetPersonalInfoUseCase {
    personal: Arc<dyn PersonalInfoRepository>,
}

impl GetPersonalInfoUseCase {
    pub fn new(personal: Arc<dyn PersonalInfoRepository>) -> Self {
        Self { personal }
    }

    /// The active profile shown on the public site.
    #[instrument(skip(self))]
    pub async fn get_active(&self) -> Result<PersonalInfo, DomainError> {
        self.personal
            .get_active()
            .await?
            .ok_or_else(|| DomainError::NotFound("Personal information".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<PersonalInfo, DomainError> {
        self.personal
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Personal information".to_string()))
    }
}
