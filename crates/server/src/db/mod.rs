//! Database operations for KitchenHub `PostgreSQL`.
//!
//! ## Tables
//!
//! - `department` - Global department catalog
//! - `store` - Real stores (the virtual "All" store is never persisted)
//! - `store_zone` - Per-store (sequence, department) zone assignments
//! - `item` - Purchasable item catalog
//! - `shopping_list` - Name-keyed list entries, purged lazily once purchased
//! - `app_settings` - JSONB key/value settings (janitor timestamp)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p kitchenhub-cli -- migrate
//! ```

pub mod departments;
pub mod items;
pub mod settings;
pub mod shopping_list;
pub mod stores;
pub mod zones;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use departments::DepartmentRepository;
pub use items::ItemRepository;
pub use shopping_list::ShoppingListRepository;
pub use stores::StoreRepository;
pub use zones::ZoneRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Unique-constraint violation.
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Foreign-key violation: a referenced row does not exist, or a row is
    /// still referenced.
    #[error("referential integrity violation: {0}")]
    ForeignKey(String),
}

/// Translate sqlx constraint violations into repository errors.
///
/// Unique violations become `Conflict`, foreign-key violations become
/// `ForeignKey`; everything else stays a `Database` error.
pub(crate) fn translate_constraint(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(db_err.message().to_owned());
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::ForeignKey(db_err.message().to_owned());
        }
    }
    RepositoryError::Database(e)
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
