use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, error};

use crate::dto::{DbStatsResponse, DbStatusResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn db_status(
    State(state): State<AppState>,
) -> Result<Json<DbStatusResponse>, (StatusCode, Json<DbStatusResponse>)> {
    match state.db_status.execute().await {
        Ok(timestamp) => {
            debug!(%timestamp, "Database connectivity verified");
            Ok(Json(DbStatusResponse::connected(timestamp)))
        }
        Err(e) => {
            error!(error = %e, "Database connectivity check failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbStatusResponse::failed(e.to_string())),
            ))
        }
    }
}

pub async fn db_stats(State(state): State<AppState>) -> Result<Json<DbStatsResponse>, ApiError> {
    let stats = state
        .db_stats
        .execute()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to get database stats"))?;

    debug!(
        users = stats.users,
        dns_records = stats.dns_records,
        "Database stats retrieved"
    );
    Ok(Json(DbStatsResponse::from_stats(stats)))
}
