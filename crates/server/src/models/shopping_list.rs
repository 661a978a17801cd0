//! Shopping list domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use kitchenhub_core::{DepartmentId, ItemId};

/// A persisted shopping list entry, keyed by name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ShoppingListEntry {
    pub name: String,
    pub description: Option<String>,
    pub quantity: String,
    pub department_id: Option<DepartmentId>,
    pub item_id: Option<ItemId>,
    /// 0 = on the list, 1 = bought.
    pub purchased: i16,
    pub modified: Option<DateTime<Utc>>,
}

/// An entry with department and item names resolved, for the management list.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ShoppingListEntryDetails {
    pub name: String,
    pub description: Option<String>,
    pub quantity: String,
    pub department_id: Option<DepartmentId>,
    pub item_id: Option<ItemId>,
    pub purchased: i16,
    pub modified: Option<DateTime<Utc>>,
    pub department_name: Option<String>,
    pub item_name: Option<String>,
}

/// A projected shopping list row: an entry annotated with the zone it falls
/// into for a particular store. Derived, never persisted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ShoppingListRow {
    pub name: String,
    pub description: Option<String>,
    pub quantity: String,
    pub purchased: i16,
    pub department_id: Option<DepartmentId>,
    pub item_id: Option<ItemId>,
    /// Resolved zone name: "General" for the virtual store, the assigned zone
    /// for a real store, "Uncategorized" when no assignment exists.
    pub zone: String,
    /// Resolved ordering key: 0 for the virtual store, 999 for unassigned.
    pub zone_seq: i32,
    pub department_name: Option<String>,
}
