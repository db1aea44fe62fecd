use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;

use crate::dto::{RepositoryRequest, RepositoryResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_repositories(
    State(state): State<AppState>,
) -> Result<Json<Vec<RepositoryResponse>>, ApiError> {
    let repositories = state
        .get_repositories
        .get_all()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch repositories"))?;

    debug!(count = repositories.len(), "Repositories retrieved");
    Ok(Json(
        repositories
            .into_iter()
            .map(RepositoryResponse::from_repository)
            .collect(),
    ))
}

pub async fn get_repository_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RepositoryResponse>, ApiError> {
    let repository = state
        .get_repositories
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch repository"))?;

    Ok(Json(RepositoryResponse::from_repository(repository)))
}

pub async fn upsert_repository(
    State(state): State<AppState>,
    Json(req): Json<RepositoryRequest>,
) -> Result<Json<RepositoryResponse>, ApiError> {
    let repository = state
        .upsert_repository
        .execute(req.into_repository())
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to create/update repository"))?;

    Ok(Json(RepositoryResponse::from_repository(repository)))
}

pub async fn update_repository(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<RepositoryRequest>,
) -> Result<Json<RepositoryResponse>, ApiError> {
    let repository = state
        .update_repository
        .execute(id, req.into_repository())
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to update repository"))?;

    Ok(Json(RepositoryResponse::from_repository(repository)))
}

pub async fn sync_repositories(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let message = state
        .sync_repositories
        .execute()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to sync repositories"))?;

    Ok(Json(json!({ "message": message })))
}

pub async fn delete_repository(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state
        .delete_repository
        .execute(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to delete repository"))?;

    Ok(Json(json!({ "message": "Repository deleted successfully" })))
}
