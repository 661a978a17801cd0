//! Item catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use kitchenhub_core::{DepartmentId, ItemId};

use super::{MessageResponse, not_found_as, require_name};
use crate::db::ItemRepository;
use crate::error::{AppError, Result};
use crate::models::{Item, ItemWithDepartment};
use crate::state::AppState;

/// Request body for creating or updating an item.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub qty: Option<i32>,
}

/// List all items with department names, ordered by department then name.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ItemWithDepartment>>> {
    let items = ItemRepository::new(state.pool()).list().await?;
    Ok(Json(items))
}

/// Get a single item.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ItemWithDepartment>> {
    let item = ItemRepository::new(state.pool())
        .get(ItemId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".to_owned()))?;
    Ok(Json(item))
}

/// Create an item.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ItemRequest>,
) -> Result<(StatusCode, Json<Item>)> {
    let name = require_name(&body.name)?;
    let item = ItemRepository::new(state.pool())
        .create(
            name,
            body.department_id.map(DepartmentId::new),
            body.qty.unwrap_or(0),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ItemRequest>,
) -> Result<Json<Item>> {
    let name = require_name(&body.name)?;
    let item = ItemRepository::new(state.pool())
        .update(
            ItemId::new(id),
            name,
            body.department_id.map(DepartmentId::new),
            body.qty.unwrap_or(0),
        )
        .await
        .map_err(not_found_as("Item not found"))?;
    Ok(Json(item))
}

/// Delete an item.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>> {
    ItemRepository::new(state.pool())
        .delete(ItemId::new(id))
        .await
        .map_err(not_found_as("Item not found"))?;
    Ok(Json(MessageResponse {
        message: "Item deleted successfully",
    }))
}
