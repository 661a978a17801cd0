//! Department repository for database operations.

use sqlx::PgPool;

use kitchenhub_core::DepartmentId;

use super::{RepositoryError, translate_constraint};
use crate::models::Department;

/// Repository for department database operations.
pub struct DepartmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DepartmentRepository<'a> {
    /// Create a new department repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all departments, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Department>, RepositoryError> {
        let departments = sqlx::query_as::<_, Department>(
            r"
            SELECT id, name
            FROM department
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(departments)
    }

    /// Create a new department.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, name: &str) -> Result<Department, RepositoryError> {
        let department = sqlx::query_as::<_, Department>(
            r"
            INSERT INTO department (name)
            VALUES ($1)
            RETURNING id, name
            ",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(translate_constraint)?;

        Ok(department)
    }

    /// Delete a department.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the department doesn't exist,
    /// `RepositoryError::ForeignKey` if zones or items still reference it, and
    /// `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: DepartmentId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM department WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(translate_constraint)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
