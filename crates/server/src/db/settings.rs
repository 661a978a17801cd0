//! Application settings storage (JSONB key/value).
//!
//! Free functions over `PgExecutor` so callers can run them standalone or
//! inside an existing transaction (the janitor does the latter).

use serde_json::Value as JsonValue;
use sqlx::PgExecutor;

use super::RepositoryError;

/// Get a setting value, locking the row until the caller's transaction ends.
///
/// Absent keys return `None` (and nothing is locked).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get_setting_for_update(
    executor: impl PgExecutor<'_>,
    key: &str,
) -> Result<Option<JsonValue>, RepositoryError> {
    let value = sqlx::query_scalar::<_, JsonValue>(
        r"
        SELECT value FROM app_settings
        WHERE key = $1
        FOR UPDATE
        ",
    )
    .bind(key)
    .fetch_optional(executor)
    .await?;

    Ok(value)
}

/// Set a setting value, inserting or overwriting.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn set_setting(
    executor: impl PgExecutor<'_>,
    key: &str,
    value: &JsonValue,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT INTO app_settings (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
        ",
    )
    .bind(key)
    .bind(value)
    .execute(executor)
    .await?;

    Ok(())
}
