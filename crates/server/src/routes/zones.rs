//! Store zone route handlers: listing, upsert, sequence swap, deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use kitchenhub_core::{DepartmentId, StoreSelector};

use super::{MessageResponse, not_found_as};
use crate::db::{RepositoryError, ZoneRepository};
use crate::error::{AppError, Result};
use crate::models::{ZoneAssignment, ZoneListRow};
use crate::state::AppState;

/// Request body for the zone upsert.
///
/// `zone_sequence` and `department_id` accept JSON numbers or numeric
/// strings; both must coerce to positive integers before anything touches
/// the database.
#[derive(Debug, Deserialize)]
pub struct UpsertZoneRequest {
    #[serde(default)]
    pub zone_sequence: Option<JsonValue>,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<JsonValue>,
}

/// Request body for swapping two zone sequences.
#[derive(Debug, Deserialize)]
pub struct SwapZonesRequest {
    #[serde(rename = "seqA")]
    pub seq_a: Option<i32>,
    #[serde(rename = "seqB")]
    pub seq_b: Option<i32>,
}

/// List zone assignments for a store. The virtual store gets a synthetic
/// listing: every department under one "General" zone at sequence 1.
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ZoneListRow>>> {
    let repo = ZoneRepository::new(state.pool());
    let rows = match StoreSelector::from_id(id) {
        StoreSelector::All => repo.list_virtual().await?,
        StoreSelector::Store(store_id) => repo.list_for_store(store_id).await?,
    };
    Ok(Json(rows))
}

/// Create or update a (store, sequence, department) zone assignment.
pub async fn upsert(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpsertZoneRequest>,
) -> Result<(StatusCode, Json<ZoneAssignment>)> {
    let Some(store_id) = StoreSelector::from_id(id).store_id() else {
        return Err(forbidden());
    };
    let sequence = coerce_positive_i32("zone_sequence", body.zone_sequence.as_ref())?;
    let department_id = coerce_positive_i32("department_id", body.department_id.as_ref())?;
    let zone_name = normalize_zone_name(body.zone_name.as_deref());

    let row = ZoneRepository::new(state.pool())
        .upsert(
            store_id,
            sequence,
            &zone_name,
            DepartmentId::new(department_id),
        )
        .await
        .map_err(|err| match err {
            RepositoryError::Conflict(detail) => AppError::Conflict {
                message: "Department already assigned to this zone".to_owned(),
                detail: Some(detail),
            },
            other => AppError::Repository(other),
        })?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// Swap the ordering of two zone sequences for a store, atomically.
pub async fn swap(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<SwapZonesRequest>,
) -> Result<Json<MessageResponse>> {
    let Some(store_id) = StoreSelector::from_id(id).store_id() else {
        return Err(forbidden());
    };
    let (Some(seq_a), Some(seq_b)) = (body.seq_a, body.seq_b) else {
        return Err(AppError::InvalidArgument(
            "seqA and seqB are required".to_owned(),
        ));
    };

    ZoneRepository::new(state.pool())
        .swap(store_id, seq_a, seq_b)
        .await?;

    Ok(Json(MessageResponse {
        message: "Store zones reordered successfully",
    }))
}

/// Delete one zone assignment.
pub async fn remove(
    State(state): State<AppState>,
    Path((id, sequence, department_id)): Path<(i32, i32, i32)>,
) -> Result<Json<MessageResponse>> {
    let Some(store_id) = StoreSelector::from_id(id).store_id() else {
        return Err(forbidden());
    };

    ZoneRepository::new(state.pool())
        .delete(store_id, sequence, DepartmentId::new(department_id))
        .await
        .map_err(not_found_as("Store zone not found"))?;

    Ok(Json(MessageResponse {
        message: "Store zone deleted successfully",
    }))
}

fn forbidden() -> AppError {
    AppError::Forbidden("The All store cannot be modified".to_owned())
}

/// Coerce a JSON number or numeric string into a positive `i32`.
fn coerce_positive_i32(field: &str, value: Option<&JsonValue>) -> Result<i32> {
    let coerced = value.and_then(|v| match v {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    });
    match coerced {
        Some(n) if n >= 1 => {
            i32::try_from(n).map_err(|_| AppError::InvalidArgument(format!("Invalid {field}")))
        }
        _ => Err(AppError::InvalidArgument(format!("Invalid {field}"))),
    }
}

/// Normalize a zone name: blank or missing collapses to "General".
fn normalize_zone_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_owned(),
        _ => "General".to_owned(),
    }
}
