use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::dto::{PersonalInfoRequest, PersonalInfoResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_personal_info(
    State(state): State<AppState>,
) -> Result<Json<PersonalInfoResponse>, ApiError> {
    let info = state
        .get_personal_info
        .get_active()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch personal information"))?;

    Ok(Json(PersonalInfoResponse::from_info(info)))
}

pub async fn get_personal_info_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PersonalInfoResponse>, ApiError> {
    let info = state
        .get_personal_info
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch personal information"))?;

    Ok(Json(PersonalInfoResponse::from_info(info)))
}

pub async fn upsert_personal_info(
    State(state): State<AppState>,
    Json(req): Json<PersonalInfoRequest>,
) -> Result<Json<PersonalInfoResponse>, ApiError> {
    let info = state
        .upsert_personal_info
        .execute(req.into_patch())
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to create/update personal information"))?;

    Ok(Json(PersonalInfoResponse::from_info(info)))
}

pub async fn update_personal_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PersonalInfoRequest>,
) -> Result<Json<PersonalInfoResponse>, ApiError> {
    let info = state
        .update_personal_info
        .execute(id, req.into_patch())
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to update personal information"))?;

    Ok(Json(PersonalInfoResponse::from_info(info)))
}

pub async fn delete_personal_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state
        .delete_personal_info
        .execute(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to delete personal information"))?;

    Ok(Json(json!({
        "message": "Personal information deleted successfully"
    })))
}
