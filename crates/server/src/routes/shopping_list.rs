//! Shopping list route handlers.
//!
//! Every read endpoint runs the purchased-item janitor first, so purged rows
//! never go stale by more than the cleanup interval plus one read.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use kitchenhub_core::{DepartmentId, ItemId, StoreSelector};

use super::{MessageResponse, not_found_as, require_name};
use crate::db::ShoppingListRepository;
use crate::error::{AppError, Result};
use crate::models::{ShoppingListEntry, ShoppingListEntryDetails, ShoppingListRow};
use crate::state::AppState;

/// Request body for adding an entry. Adding an existing name updates it.
#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub item_id: Option<i32>,
}

/// Request body for a partial entry update.
#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub purchased: Option<bool>,
}

/// Request body for flipping the purchased flag.
#[derive(Debug, Deserialize)]
pub struct SetPurchasedRequest {
    #[serde(default)]
    pub purchased: bool,
}

/// Query string for the projection endpoint.
#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    #[serde(default, rename = "showPurchased")]
    pub show_purchased: Option<bool>,
}

/// Project the shopping list for a store, zone-grouped and ordered.
pub async fn project(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<ProjectionQuery>,
) -> Result<Json<Vec<ShoppingListRow>>> {
    let selector: StoreSelector = key
        .parse()
        .map_err(|_| AppError::InvalidArgument(format!("Invalid store id: {key}")))?;

    let repo = ShoppingListRepository::new(state.pool());
    repo.run_cleanup_if_due().await?;
    let rows = repo
        .project(selector, query.show_purchased.unwrap_or(false))
        .await?;
    Ok(Json(rows))
}

/// List every entry for the management page.
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShoppingListEntryDetails>>> {
    let repo = ShoppingListRepository::new(state.pool());
    repo.run_cleanup_if_due().await?;
    let rows = repo.list_all().await?;
    Ok(Json(rows))
}

/// Add an entry to the list (or update the one with the same name).
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddEntryRequest>,
) -> Result<(StatusCode, Json<ShoppingListEntry>)> {
    let name = require_name(&body.name)?;
    let entry = ShoppingListRepository::new(state.pool())
        .upsert(
            name,
            body.description.as_deref(),
            body.quantity.as_deref().unwrap_or("1"),
            body.department_id.map(DepartmentId::new),
            body.item_id.map(ItemId::new),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Partially update an entry.
pub async fn update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateEntryRequest>,
) -> Result<Json<ShoppingListEntry>> {
    if body.quantity.is_none() && body.purchased.is_none() {
        return Err(AppError::InvalidArgument("No fields to update".to_owned()));
    }
    let entry = ShoppingListRepository::new(state.pool())
        .update(
            &name,
            body.quantity.as_deref(),
            body.purchased.map(i16::from),
        )
        .await
        .map_err(not_found_as("Shopping list item not found"))?;
    Ok(Json(entry))
}

/// Mark an entry purchased or unpurchased.
pub async fn set_purchased(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<SetPurchasedRequest>,
) -> Result<Json<ShoppingListEntry>> {
    let entry = ShoppingListRepository::new(state.pool())
        .set_purchased(&name, body.purchased)
        .await
        .map_err(not_found_as("Shopping list item not found"))?;
    Ok(Json(entry))
}

/// Remove an entry from the list.
pub async fn remove(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>> {
    ShoppingListRepository::new(state.pool())
        .remove(&name)
        .await
        .map_err(not_found_as("Shopping list item not found"))?;
    Ok(Json(MessageResponse {
        message: "Item removed from shopping list",
    }))
}
