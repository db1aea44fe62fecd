use domainboard_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::PersonalInfoRepository;

pub struct DeletePersonalInfoUseCase {
    personal: Arc<dyn PersonalInfoRepository>,
}

impl DeletePersonalInfoUseCase {
    pub fn new(personal: Arc<dyn PersonalInfoRepository>) -> Self {
        Self { personal }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if !self.personal.delete(id).await? {
            return Err(DomainError::NotFound("Personal information".to_string()));
        }
        info!(profile_id = id, "Personal info deleted");
        Ok(())
    }
}
