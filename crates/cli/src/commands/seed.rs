//! Seed command: starter department catalog and a demo store layout.
//!
//! Safe to run repeatedly - every insert is conflict-tolerant.

use sqlx::PgPool;

use super::migrate::{MigrationError, database_url};

/// Departments every household starts with.
const STARTER_DEPARTMENTS: &[&str] = &[
    "Bakery", "Dairy", "Frozen", "Meat", "Pantry", "Produce",
];

/// Insert the starter catalog and a demo store.
///
/// # Errors
///
/// Returns `MigrationError` if the database URL is missing or a query fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let pool = PgPool::connect(&database_url()?).await?;

    for name in STARTER_DEPARTMENTS {
        sqlx::query("INSERT INTO department (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(&pool)
            .await?;
    }
    tracing::info!("Seeded {} departments", STARTER_DEPARTMENTS.len());

    let existing: Option<i32> =
        sqlx::query_scalar("SELECT id FROM store WHERE name = $1")
            .bind("Demo Market")
            .fetch_optional(&pool)
            .await?;

    if existing.is_none() {
        let store_id: i32 =
            sqlx::query_scalar("INSERT INTO store (name) VALUES ($1) RETURNING id")
                .bind("Demo Market")
                .fetch_one(&pool)
                .await?;

        // Walking order for the demo layout: produce first, frozen last
        let layout: &[(i32, &str, &str)] = &[
            (1, "Entrance", "Produce"),
            (2, "Middle aisles", "Pantry"),
            (3, "Back wall", "Dairy"),
            (4, "Checkout side", "Frozen"),
        ];

        for &(sequence, zone, department) in layout {
            sqlx::query(
                r"
                INSERT INTO store_zone (store_id, zone_sequence, zone_name, department_id)
                SELECT $1, $2, $3, d.id FROM department d WHERE d.name = $4
                ON CONFLICT (store_id, zone_sequence, department_id) DO NOTHING
                ",
            )
            .bind(store_id)
            .bind(sequence)
            .bind(zone)
            .bind(department)
            .execute(&pool)
            .await?;
        }
        tracing::info!("Seeded demo store with {} zones", layout.len());
    } else {
        tracing::info!("Demo store already present, skipping");
    }

    Ok(())
}
