use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::dto::{DnsRecordRequest, DnsRecordResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<DnsRecordResponse>>, ApiError> {
    let entries = state
        .get_records
        .get_all()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch DNS records"))?;

    debug!(count = entries.len(), "DNS records retrieved");
    Ok(Json(
        entries.into_iter().map(DnsRecordResponse::from_entry).collect(),
    ))
}

pub async fn get_record_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DnsRecordResponse>, ApiError> {
    let entry = state
        .get_records
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch DNS record"))?;

    Ok(Json(DnsRecordResponse::from_entry(entry)))
}

pub async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<DnsRecordRequest>,
) -> Result<(StatusCode, Json<DnsRecordResponse>), ApiError> {
    let entry = state
        .create_record
        .execute(req.record_type, req.name, req.value, req.ttl, req.priority)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to create DNS record"))?;

    Ok((StatusCode::CREATED, Json(DnsRecordResponse::from_entry(entry))))
}

pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<DnsRecordRequest>,
) -> Result<Json<DnsRecordResponse>, ApiError> {
    let entry = req.into_entry().ok_or_else(|| {
        ApiError::message(
            StatusCode::BAD_REQUEST,
            "Type, name, and value are required",
        )
    })?;

    let updated = state
        .update_record
        .execute(id, entry)
        .await
        .map_err(|e| {
            error!(record_id = id, error = %e, "Failed to update DNS record");
            ApiError::from_domain(e, "Failed to update DNS record")
        })?;

    Ok(Json(DnsRecordResponse::from_entry(updated)))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state
        .delete_record
        .execute(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to delete DNS record"))?;

    Ok(Json(json!({
        "message": "DNS record deleted successfully",
        "id": id
    })))
}
