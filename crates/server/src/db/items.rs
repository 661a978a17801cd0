//! Item catalog repository for database operations.

use sqlx::PgPool;

use kitchenhub_core::{DepartmentId, ItemId};

use super::{RepositoryError, translate_constraint};
use crate::models::{Item, ItemWithDepartment};

/// Repository for item database operations.
pub struct ItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepository<'a> {
    /// Create a new item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all items with department names, ordered by department then name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ItemWithDepartment>, RepositoryError> {
        let items = sqlx::query_as::<_, ItemWithDepartment>(
            r"
            SELECT i.id, i.name, i.department_id, i.qty, d.name AS department_name
            FROM item i
            LEFT JOIN department d ON i.department_id = d.id
            ORDER BY d.name, i.name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Get an item by id, with its department name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ItemId) -> Result<Option<ItemWithDepartment>, RepositoryError> {
        let item = sqlx::query_as::<_, ItemWithDepartment>(
            r"
            SELECT i.id, i.name, i.department_id, i.qty, d.name AS department_name
            FROM item i
            LEFT JOIN department d ON i.department_id = d.id
            WHERE i.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }

    /// Create a new item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the department doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        department_id: Option<DepartmentId>,
        qty: i32,
    ) -> Result<Item, RepositoryError> {
        let item = sqlx::query_as::<_, Item>(
            r"
            INSERT INTO item (name, department_id, qty)
            VALUES ($1, $2, $3)
            RETURNING id, name, department_id, qty
            ",
        )
        .bind(name)
        .bind(department_id)
        .bind(qty)
        .fetch_one(self.pool)
        .await
        .map_err(translate_constraint)?;

        Ok(item)
    }

    /// Update an item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist,
    /// `RepositoryError::ForeignKey` if the department doesn't exist, and
    /// `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ItemId,
        name: &str,
        department_id: Option<DepartmentId>,
        qty: i32,
    ) -> Result<Item, RepositoryError> {
        sqlx::query_as::<_, Item>(
            r"
            UPDATE item
            SET name = $2, department_id = $3, qty = $4
            WHERE id = $1
            RETURNING id, name, department_id, qty
            ",
        )
        .bind(id)
        .bind(name)
        .bind(department_id)
        .bind(qty)
        .fetch_optional(self.pool)
        .await
        .map_err(translate_constraint)?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete an item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM item WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
