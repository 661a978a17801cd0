//! Item catalog domain models.

use serde::Serialize;

use kitchenhub_core::{DepartmentId, ItemId};

/// A purchasable item from the catalog.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub department_id: Option<DepartmentId>,
    pub qty: i32,
}

/// An item with its department name resolved, as listed.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ItemWithDepartment {
    pub id: ItemId,
    pub name: String,
    pub department_id: Option<DepartmentId>,
    pub qty: i32,
    pub department_name: Option<String>,
}
