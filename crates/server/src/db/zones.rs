//! Store zone repository: assignment upsert, listing, deletion, and the
//! sequence swap transaction.

use sqlx::PgPool;

use kitchenhub_core::{DepartmentId, StoreId};

use super::{RepositoryError, translate_constraint};
use crate::models::{Department, ZoneAssignment, ZoneListRow};

/// Temporary parking value used while swapping two zone sequences.
///
/// Scoped to the zone_sequence column only; it happens to equal the virtual
/// store id, but the two never meet. Sequences are validated to be >= 1 at the
/// boundary, so -1 can never collide with a real sequence.
const TEMP_SWAP_SEQUENCE: i32 = -1;

/// Repository for store zone database operations.
pub struct ZoneRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ZoneRepository<'a> {
    /// Create a new zone repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List zone assignments for a real store, ordered by sequence then
    /// department name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<ZoneListRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, ZoneListRow>(
            r"
            SELECT sz.store_id, sz.zone_sequence, sz.zone_name,
                   sz.department_id, d.name AS department_name, sz.modified
            FROM store_zone sz
            JOIN department d ON sz.department_id = d.id
            WHERE sz.store_id = $1
            ORDER BY sz.zone_sequence, d.name
            ",
        )
        .bind(store_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Synthesize the virtual store's zone listing: every department under a
    /// single "General" zone at sequence 1. Never reads `store_zone`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the department query fails.
    pub async fn list_virtual(&self) -> Result<Vec<ZoneListRow>, RepositoryError> {
        let departments = sqlx::query_as::<_, Department>(
            r"
            SELECT id, name
            FROM department
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(departments
            .iter()
            .map(ZoneListRow::synthetic_general)
            .collect())
    }

    /// Insert a (store, sequence, department) assignment, or update only the
    /// zone name if the composite key already exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the store or department does
    /// not exist, `RepositoryError::Conflict` on a collision the upsert does
    /// not absorb, and `RepositoryError::Database` for other failures.
    pub async fn upsert(
        &self,
        store_id: StoreId,
        zone_sequence: i32,
        zone_name: &str,
        department_id: DepartmentId,
    ) -> Result<ZoneAssignment, RepositoryError> {
        let row = sqlx::query_as::<_, ZoneAssignment>(
            r"
            INSERT INTO store_zone (store_id, zone_sequence, zone_name, department_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (store_id, zone_sequence, department_id)
            DO UPDATE SET zone_name = $3, modified = NOW()
            RETURNING store_id, zone_sequence, zone_name, department_id, modified
            ",
        )
        .bind(store_id)
        .bind(zone_sequence)
        .bind(zone_name)
        .bind(department_id)
        .fetch_one(self.pool)
        .await
        .map_err(translate_constraint)?;

        Ok(row)
    }

    /// Exchange the sequence values of all rows at `seq_a` with all rows at
    /// `seq_b`, atomically.
    ///
    /// The composite primary key includes the sequence, so a direct pair of
    /// updates can collide mid-flight. Rows at `seq_a` are parked at the
    /// temporary sentinel, rows at `seq_b` move to `seq_a`, then the parked
    /// rows move to `seq_b`. All three steps share one transaction: either
    /// both sequences move or neither does.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any step fails; the transaction
    /// is rolled back.
    pub async fn swap(
        &self,
        store_id: StoreId,
        seq_a: i32,
        seq_b: i32,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r"
            UPDATE store_zone
            SET zone_sequence = $3, modified = NOW()
            WHERE store_id = $1 AND zone_sequence = $2
            ",
        )
        .bind(store_id)
        .bind(seq_a)
        .bind(TEMP_SWAP_SEQUENCE)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
            UPDATE store_zone
            SET zone_sequence = $2, modified = NOW()
            WHERE store_id = $1 AND zone_sequence = $3
            ",
        )
        .bind(store_id)
        .bind(seq_a)
        .bind(seq_b)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
            UPDATE store_zone
            SET zone_sequence = $2, modified = NOW()
            WHERE store_id = $1 AND zone_sequence = $3
            ",
        )
        .bind(store_id)
        .bind(seq_b)
        .bind(TEMP_SWAP_SEQUENCE)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete one (store, sequence, department) assignment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(
        &self,
        store_id: StoreId,
        zone_sequence: i32,
        department_id: DepartmentId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM store_zone
            WHERE store_id = $1 AND zone_sequence = $2 AND department_id = $3
            ",
        )
        .bind(store_id)
        .bind(zone_sequence)
        .bind(department_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
