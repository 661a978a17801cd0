//! Store domain model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use kitchenhub_core::{ALL_STORE_ID, ALL_STORE_NAME, StoreId};

/// A store, real or virtual.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Store {
    /// Store ID. -1 for the virtual "All" store.
    pub id: StoreId,
    /// Display name.
    pub name: String,
    /// Last modification time. Always `null` for the virtual store.
    pub modified: Option<DateTime<Utc>>,
}

impl Store {
    /// The virtual "All" store constant: `{id: -1, name: "All", modified: null}`.
    #[must_use]
    pub fn virtual_all() -> Self {
        Self {
            id: StoreId::new(ALL_STORE_ID),
            name: ALL_STORE_NAME.to_owned(),
            modified: None,
        }
    }
}
