//! Store route handlers.
//!
//! The virtual "All" store (id -1) is resolved before any repository call:
//! reads return the constant, writes fail with 403.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use kitchenhub_core::StoreSelector;

use super::{MessageResponse, not_found_as, require_name};
use crate::db::StoreRepository;
use crate::error::{AppError, Result};
use crate::models::Store;
use crate::state::AppState;

/// Request body carrying a store name.
#[derive(Debug, Deserialize)]
pub struct StoreNameRequest {
    pub name: String,
}

/// List all stores: the virtual "All" store first, then persisted rows
/// ordered by name.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Store>>> {
    let mut stores = vec![Store::virtual_all()];
    stores.extend(StoreRepository::new(state.pool()).list().await?);
    Ok(Json(stores))
}

/// Get a single store.
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Store>> {
    match StoreSelector::from_id(id) {
        StoreSelector::All => Ok(Json(Store::virtual_all())),
        StoreSelector::Store(store_id) => {
            let store = StoreRepository::new(state.pool())
                .get(store_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Store not found".to_owned()))?;
            Ok(Json(store))
        }
    }
}

/// Create a store.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<StoreNameRequest>,
) -> Result<(StatusCode, Json<Store>)> {
    let name = require_name(&body.name)?;
    let store = StoreRepository::new(state.pool()).create(name).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

/// Rename a store.
pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<StoreNameRequest>,
) -> Result<Json<Store>> {
    let Some(store_id) = StoreSelector::from_id(id).store_id() else {
        return Err(AppError::Forbidden(
            "The All store cannot be modified".to_owned(),
        ));
    };
    let name = require_name(&body.name)?;
    let store = StoreRepository::new(state.pool())
        .rename(store_id, name)
        .await
        .map_err(not_found_as("Store not found"))?;
    Ok(Json(store))
}

/// Delete a store.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>> {
    let Some(store_id) = StoreSelector::from_id(id).store_id() else {
        return Err(AppError::Forbidden(
            "The All store cannot be deleted".to_owned(),
        ));
    };
    StoreRepository::new(state.pool())
        .delete(store_id)
        .await
        .map_err(not_found_as("Store not found"))?;
    Ok(Json(MessageResponse {
        message: "Store deleted successfully",
    }))
}
