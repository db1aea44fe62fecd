use domainboard_domain::{DomainError, PersonalInfo};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::PersonalInfoRepository;

use super::patch::PersonalInfoPatch;

pub struct UpdatePersonalInfoUseCase {
    personal: Arc<dyn PersonalInfoRepository>,
}

impl UpdatePersonalInfoUseCase {
    pub fn new(personal: Arc<dyn PersonalInfoRepository>) -> Self {
        Self { personal }
    }

    /// Patches the row addressed by id; only supplied fields change.
    #[instrument(skip(self, patch))]
    pub async fn execute(
        &self,
        id: i64,
        patch: PersonalInfoPatch,
    ) -> Result<PersonalInfo, DomainError> {
        let existing = self
            .personal
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Personal information".to_string()))?;

        let merged = patch.apply_to(existing);
        let updated = self
            .personal
            .update(id, merged)
            .await?
            .ok_or_else(|| DomainError::NotFound("Personal information".to_string()))?;

        info!(profile_id = id, "Personal info updated");
        Ok(updated)
    }
}
