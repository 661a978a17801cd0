//! Department domain model.

use serde::Serialize;

use kitchenhub_core::DepartmentId;

/// A department from the global catalog.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}
