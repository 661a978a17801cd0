//! Integration tests for KitchenHub.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and prepare the schema
//! cargo run -p kitchenhub-cli -- migrate
//!
//! # Start the server
//! cargo run -p kitchenhub-server
//!
//! # Run integration tests
//! cargo test -p kitchenhub-integration-tests -- --ignored
//! ```
//!
//! Tests create their own fixtures with UUID-suffixed names and clean up
//! after themselves, so they can run against a shared development database.

use reqwest::Client;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("KITCHENHUB_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Plain HTTP client; the API has no authentication.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

/// A name that won't collide with other test runs.
#[must_use]
pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}
