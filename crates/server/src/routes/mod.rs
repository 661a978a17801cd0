//! HTTP route handlers for the KitchenHub API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                   - Readiness probe (no DB access)
//!
//! # Stores
//! GET    /stores                                 - List stores (virtual "All" first)
//! POST   /stores                                 - Create store
//! GET    /stores/:id                             - Get store
//! PUT    /stores/:id                             - Rename store (403 for virtual)
//! DELETE /stores/:id                             - Delete store (403 for virtual)
//!
//! # Store zones
//! GET    /stores/:id/zones                       - List zones (synthetic for virtual)
//! POST   /stores/:id/zones                       - Upsert zone assignment
//! POST   /stores/:id/zones/swap                  - Swap two zone sequences
//! DELETE /stores/:id/zones/:sequence/:department - Delete zone assignment
//!
//! # Departments
//! GET    /departments                            - List departments
//! POST   /departments                            - Create department
//! DELETE /departments/:id                        - Delete department
//!
//! # Items
//! GET    /items                                  - List items
//! POST   /items                                  - Create item
//! GET    /items/:id                              - Get item
//! PUT    /items/:id                              - Update item
//! DELETE /items/:id                              - Delete item
//!
//! # Shopping list
//! GET    /shopping-list                          - List all entries (management)
//! POST   /shopping-list                          - Add entry (name-keyed upsert)
//! GET    /shopping-list/:storeId?showPurchased=  - Project the list for a store
//! PUT    /shopping-list/:name                    - Partial entry update
//! PATCH  /shopping-list/:name/purchased          - Flip purchased flag
//! DELETE /shopping-list/:name                    - Remove entry
//! ```

pub mod departments;
pub mod items;
pub mod shopping_list;
pub mod stores;
pub mod zones;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use serde::Serialize;

use crate::db::RepositoryError;
use crate::error::AppError;
use crate::state::AppState;

/// Build the full API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(store_routes())
        .merge(department_routes())
        .merge(item_routes())
        .merge(shopping_list_routes())
}

/// Create the store and zone routes router.
fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/stores", get(stores::list).post(stores::create))
        .route(
            "/stores/{id}",
            get(stores::show).put(stores::rename).delete(stores::remove),
        )
        .route(
            "/stores/{id}/zones",
            get(zones::list).post(zones::upsert),
        )
        .route("/stores/{id}/zones/swap", post(zones::swap))
        .route(
            "/stores/{id}/zones/{sequence}/{department_id}",
            delete(zones::remove),
        )
}

/// Create the department routes router.
fn department_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/departments",
            get(departments::list).post(departments::create),
        )
        .route("/departments/{id}", delete(departments::remove))
}

/// Create the item routes router.
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(items::list).post(items::create))
        .route(
            "/items/{id}",
            get(items::show).put(items::update).delete(items::remove),
        )
}

/// Create the shopping list routes router.
fn shopping_list_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shopping-list",
            get(shopping_list::list_all).post(shopping_list::add),
        )
        .route(
            "/shopping-list/{key}",
            get(shopping_list::project)
                .put(shopping_list::update)
                .delete(shopping_list::remove),
        )
        .route(
            "/shopping-list/{key}/purchased",
            patch(shopping_list::set_purchased),
        )
}

/// Simple confirmation body for deletions and other verb-like operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Validate that a client-supplied name is non-blank, returning it trimmed.
pub(crate) fn require_name(name: &str) -> Result<&str, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidArgument("Name must not be empty".to_owned()));
    }
    Ok(trimmed)
}

/// Map a repository `NotFound` to a resource-specific 404 message, passing
/// every other error through.
pub(crate) fn not_found_as(message: &'static str) -> impl Fn(RepositoryError) -> AppError {
    move |err| match err {
        RepositoryError::NotFound => AppError::NotFound(message.to_owned()),
        other => AppError::Repository(other),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name_trims() {
        assert_eq!(require_name("  Dairy  ").unwrap(), "Dairy");
    }

    #[test]
    fn test_require_name_rejects_blank() {
        assert!(require_name("").is_err());
        assert!(require_name("   ").is_err());
    }

    #[test]
    fn test_not_found_as_maps_only_not_found() {
        let map = not_found_as("Store not found");
        assert!(matches!(
            map(RepositoryError::NotFound),
            AppError::NotFound(message) if message == "Store not found"
        ));
        assert!(matches!(
            map(RepositoryError::Conflict("dup".to_owned())),
            AppError::Repository(RepositoryError::Conflict(_))
        ));
    }
}
