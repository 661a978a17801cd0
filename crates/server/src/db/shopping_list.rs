//! Shopping list repository: the projection read path, entry CRUD, and the
//! purchased-item janitor.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use kitchenhub_core::{DepartmentId, ItemId, StoreSelector};

use super::{RepositoryError, settings, translate_constraint};
use crate::models::{ShoppingListEntry, ShoppingListEntryDetails, ShoppingListRow};

/// Settings key holding the janitor's last-run timestamp (RFC 3339 string).
const SETTING_LAST_CLEANUP: &str = "shopping_list.last_cleanup_at";

/// Purchased rows older than this are purged on the next list read.
const CLEANUP_INTERVAL_HOURS: i64 = 24;

const ENTRY_COLUMNS: &str =
    "name, description, quantity, department_id, item_id, purchased, modified";

/// Repository for shopping list database operations.
pub struct ShoppingListRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShoppingListRepository<'a> {
    /// Create a new shopping list repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Project the shopping list for a store.
    ///
    /// The virtual store never touches `store_zone`: every entry lands in the
    /// implicit "General" zone at sequence 0, ordered by entry name. A real
    /// store LEFT-joins its zone assignments and falls back to
    /// "Uncategorized" / 999 for departments without one, ordered by zone
    /// sequence then entry name. Unless `show_purchased` is set, rows already
    /// bought are filtered out.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn project(
        &self,
        selector: StoreSelector,
        show_purchased: bool,
    ) -> Result<Vec<ShoppingListRow>, RepositoryError> {
        let rows = match selector.store_id() {
            None => {
                let sql = projection_sql_virtual(show_purchased);
                sqlx::query_as::<_, ShoppingListRow>(&sql)
                    .fetch_all(self.pool)
                    .await?
            }
            Some(store_id) => {
                let sql = projection_sql_real(show_purchased);
                sqlx::query_as::<_, ShoppingListRow>(&sql)
                    .bind(store_id)
                    .fetch_all(self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    /// List every entry with department and item names, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<ShoppingListEntryDetails>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShoppingListEntryDetails>(
            r"
            SELECT sl.name, sl.description, sl.quantity, sl.department_id,
                   sl.item_id, sl.purchased, sl.modified,
                   d.name AS department_name, i.name AS item_name
            FROM shopping_list sl
            LEFT JOIN department d ON sl.department_id = d.id
            LEFT JOIN item i ON sl.item_id = i.id
            ORDER BY sl.name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Add an entry, or update the existing one with the same name.
    ///
    /// A fresh insert starts unpurchased; upserting an existing entry leaves
    /// its purchased flag alone.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the department or item doesn't
    /// exist. Returns `RepositoryError::Database` for other database errors.
    pub async fn upsert(
        &self,
        name: &str,
        description: Option<&str>,
        quantity: &str,
        department_id: Option<DepartmentId>,
        item_id: Option<ItemId>,
    ) -> Result<ShoppingListEntry, RepositoryError> {
        let entry = sqlx::query_as::<_, ShoppingListEntry>(&format!(
            r"
            INSERT INTO shopping_list (name, description, quantity, department_id, item_id, purchased)
            VALUES ($1, $2, $3, $4, $5, 0)
            ON CONFLICT (name)
            DO UPDATE SET description = $2, quantity = $3, department_id = $4,
                          item_id = $5, modified = NOW()
            RETURNING {ENTRY_COLUMNS}
            "
        ))
        .bind(name)
        .bind(description)
        .bind(quantity)
        .bind(department_id)
        .bind(item_id)
        .fetch_one(self.pool)
        .await
        .map_err(translate_constraint)?;

        Ok(entry)
    }

    /// Partially update an entry: only the fields given change.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        name: &str,
        quantity: Option<&str>,
        purchased: Option<i16>,
    ) -> Result<ShoppingListEntry, RepositoryError> {
        sqlx::query_as::<_, ShoppingListEntry>(&format!(
            r"
            UPDATE shopping_list
            SET quantity = COALESCE($2, quantity),
                purchased = COALESCE($3, purchased),
                modified = NOW()
            WHERE name = $1
            RETURNING {ENTRY_COLUMNS}
            "
        ))
        .bind(name)
        .bind(quantity)
        .bind(purchased)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Flip an entry's purchased flag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_purchased(
        &self,
        name: &str,
        purchased: bool,
    ) -> Result<ShoppingListEntry, RepositoryError> {
        sqlx::query_as::<_, ShoppingListEntry>(&format!(
            r"
            UPDATE shopping_list
            SET purchased = $2, modified = NOW()
            WHERE name = $1
            RETURNING {ENTRY_COLUMNS}
            "
        ))
        .bind(name)
        .bind(i16::from(purchased))
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Remove an entry from the list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn remove(&self, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shopping_list WHERE name = $1")
            .bind(name)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Purge purchased entries if the last purge is due.
    ///
    /// Runs one transaction: lock the timestamp row, check whether a purge is
    /// due (absent, unparseable, or 24+ hours old), delete `purchased = 1`
    /// rows, rewrite the timestamp. Two concurrent callers serialize on the
    /// row lock; the loser re-reads a fresh timestamp and no-ops. Invoked
    /// before every shopping-list read.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any step fails; the transaction
    /// is rolled back.
    pub async fn run_cleanup_if_due(&self) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let stored = settings::get_setting_for_update(&mut *tx, SETTING_LAST_CLEANUP).await?;
        if !cleanup_due(stored.as_ref(), Utc::now()) {
            return Ok(());
        }

        sqlx::query("DELETE FROM shopping_list WHERE purchased = 1")
            .execute(&mut *tx)
            .await?;

        let stamp = JsonValue::String(Utc::now().to_rfc3339());
        settings::set_setting(&mut *tx, SETTING_LAST_CLEANUP, &stamp).await?;

        tx.commit().await?;
        Ok(())
    }
}

/// Whether a purge is due, given the stored timestamp value.
///
/// Absent or unparseable timestamps count as due, so a corrupted setting
/// heals itself on the next read.
fn cleanup_due(stored: Option<&JsonValue>, now: DateTime<Utc>) -> bool {
    let Some(value) = stored.and_then(JsonValue::as_str) else {
        return true;
    };
    match DateTime::parse_from_rfc3339(value) {
        Ok(last) => {
            now.signed_duration_since(last.with_timezone(&Utc))
                >= Duration::hours(CLEANUP_INTERVAL_HOURS)
        }
        Err(_) => true,
    }
}

fn projection_sql_virtual(show_purchased: bool) -> String {
    let mut sql = String::from(
        r"
        SELECT sl.name, sl.description, sl.quantity, sl.purchased,
               sl.department_id, sl.item_id,
               'General' AS zone, 0 AS zone_seq,
               d.name AS department_name
        FROM shopping_list sl
        LEFT JOIN department d ON sl.department_id = d.id
        ",
    );
    if !show_purchased {
        sql.push_str(" WHERE sl.purchased = 0");
    }
    sql.push_str(" ORDER BY sl.name");
    sql
}

fn projection_sql_real(show_purchased: bool) -> String {
    let mut sql = String::from(
        r"
        SELECT sl.name, sl.description, sl.quantity, sl.purchased,
               sl.department_id, sl.item_id,
               COALESCE(sz.zone_name, 'Uncategorized') AS zone,
               COALESCE(sz.zone_sequence, 999) AS zone_seq,
               d.name AS department_name
        FROM shopping_list sl
        LEFT JOIN store_zone sz ON sz.department_id = sl.department_id AND sz.store_id = $1
        LEFT JOIN department d ON sl.department_id = d.id
        ",
    );
    if !show_purchased {
        sql.push_str(" WHERE sl.purchased = 0");
    }
    sql.push_str(" ORDER BY COALESCE(sz.zone_sequence, 999), sl.name");
    sql
}
