//! Store zone domain models.
//!
//! A zone is a named, ordered grouping of departments within one store's
//! layout, used to sort a shopping list to match walking order through the
//! store. The persisted unit is one (store, sequence, department) row.

use chrono::{DateTime, Utc};
use serde::Serialize;

use kitchenhub_core::{ALL_STORE_ID, DepartmentId, StoreId};

use super::Department;

/// One persisted (store, sequence, department) zone assignment.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ZoneAssignment {
    pub store_id: StoreId,
    pub zone_sequence: i32,
    pub zone_name: String,
    pub department_id: DepartmentId,
    pub modified: Option<DateTime<Utc>>,
}

/// A zone assignment with its department name resolved, as listed.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ZoneListRow {
    pub store_id: StoreId,
    pub zone_sequence: i32,
    pub zone_name: String,
    pub department_id: DepartmentId,
    pub department_name: String,
    pub modified: Option<DateTime<Utc>>,
}

impl ZoneListRow {
    /// Synthesize the virtual store's single "General" zone row for a
    /// department. The virtual store has no persisted zone assignments.
    #[must_use]
    pub fn synthetic_general(department: &Department) -> Self {
        Self {
            store_id: StoreId::new(ALL_STORE_ID),
            zone_sequence: 1,
            zone_name: "General".to_owned(),
            department_id: department.id,
            department_name: department.name.clone(),
            modified: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_general_zone() {
        let department = Department {
            id: DepartmentId::new(4),
            name: "Dairy".to_owned(),
        };
        let row = ZoneListRow::synthetic_general(&department);
        assert_eq!(row.store_id.as_i32(), ALL_STORE_ID);
        assert_eq!(row.zone_sequence, 1);
        assert_eq!(row.zone_name, "General");
        assert_eq!(row.department_name, "Dairy");
        assert!(row.modified.is_none());
    }
}
