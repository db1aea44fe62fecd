use domainboard_domain::{DomainError, PersonalInfo};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::PersonalInfoRepository;

use super::patch::PersonalInfoPatch;

/// Create-or-update of the single active profile: if one exists it is
/// patched in place, otherwise a new active row is created.
pub struct UpsertPersonalInfoUseCase {
    personal: Arc<dyn PersonalInfoRepository>,
}

impl UpsertPersonalInfoUseCase {
    pub fn new(personal: Arc<dyn PersonalInfoRepository>) -> Self {
        Self { personal }
    }

    #[instrument(skip(self, patch))]
    pub async fn execute(&self, patch: PersonalInfoPatch) -> Result<PersonalInfo, DomainError> {
        match self.personal.get_active().await? {
            Some(existing) => {
                let id = existing
                    .id
                    .ok_or_else(|| DomainError::DatabaseError("Active profile has no id".into()))?;
                let merged = patch.apply_to(existing);
                let updated = self
                    .personal
                    .update(id, merged)
                    .await?
                    .ok_or_else(|| DomainError::NotFound("Personal information".to_string()))?;
                info!(profile_id = id, "Personal info updated");
                Ok(updated)
            }
            None => {
                let info = patch.apply_to(PersonalInfo {
                    is_active: true,
                    ..Default::default()
                });
                let created = self.personal.create(info).await?;
                info!(profile_id = ?created.id, "Personal info created");
                Ok(created)
            }
        }
    }
}
