//! Store repository for database operations.
//!
//! Only real stores live here. The virtual "All" store is resolved before any
//! repository call; see `kitchenhub_core::StoreSelector`.

use sqlx::PgPool;

use kitchenhub_core::{ALL_STORE_NAME, StoreId};

use super::RepositoryError;
use crate::models::Store;

/// Repository for store database operations.
pub struct StoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all persisted stores, ordered by name.
    ///
    /// A persisted row literally named "All" is filtered out so the virtual
    /// store sentinel stays unique in listings.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Store>, RepositoryError> {
        let stores = sqlx::query_as::<_, Store>(
            r"
            SELECT id, name, modified
            FROM store
            WHERE name <> $1
            ORDER BY name
            ",
        )
        .bind(ALL_STORE_NAME)
        .fetch_all(self.pool)
        .await?;

        Ok(stores)
    }

    /// Get a store by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: StoreId) -> Result<Option<Store>, RepositoryError> {
        let store = sqlx::query_as::<_, Store>(
            r"
            SELECT id, name, modified
            FROM store
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(store)
    }

    /// Create a new store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, name: &str) -> Result<Store, RepositoryError> {
        let store = sqlx::query_as::<_, Store>(
            r"
            INSERT INTO store (name)
            VALUES ($1)
            RETURNING id, name, modified
            ",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(store)
    }

    /// Rename a store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the store doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn rename(&self, id: StoreId, name: &str) -> Result<Store, RepositoryError> {
        sqlx::query_as::<_, Store>(
            r"
            UPDATE store
            SET name = $2, modified = NOW()
            WHERE id = $1
            RETURNING id, name, modified
            ",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete a store. Its zone assignments are removed with it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the store doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: StoreId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM store WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
