use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use domainboard_domain::DomainStatus;
use tracing::debug;

use crate::dto::{DomainStatusQuery, DomainStatusResponse};
use crate::state::AppState;

/// One status snapshot per call.
///
/// The sample snapshot is served by default (rebranded to the requested
/// domain); `live=true` runs the full aggregation. Neither path can fail.
pub async fn get_domain_status(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(query): Query<DomainStatusQuery>,
) -> Json<DomainStatusResponse> {
    let status = if query.live {
        let owner = query.owner.as_deref().unwrap_or("");
        state.get_domain_status.execute(&domain, owner).await
    } else {
        debug!(%domain, "Serving sample domain status");
        let mut sample = DomainStatus::sample();
        sample.domain = domain;
        if let Some(owner) = query.owner {
            sample.owner = owner;
        }
        sample.last_checked = Utc::now();
        sample
    };

    Json(DomainStatusResponse::from_status(status))
}
