//! Integration tests for stores and zone layout management.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p kitchenhub-server)
//!
//! Run with: cargo test -p kitchenhub-integration-tests -- --ignored

use kitchenhub_core::ALL_STORE_ID;
use kitchenhub_integration_tests::{base_url, client, unique};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Test helper: create a store via API, returning its id.
async fn create_store(client: &Client, name: &str) -> i64 {
    let resp = client
        .post(format!("{}/stores", base_url()))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create store");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse store");
    body["id"].as_i64().expect("store id")
}

/// Test helper: create a department via API, returning its id.
async fn create_department(client: &Client, name: &str) -> i64 {
    let resp = client
        .post(format!("{}/departments", base_url()))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create department");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse department");
    body["id"].as_i64().expect("department id")
}

/// Test helper: delete a store and department created by a test.
async fn cleanup(client: &Client, store_id: Option<i64>, department_ids: &[i64]) {
    if let Some(id) = store_id {
        let _ = client
            .delete(format!("{}/stores/{id}", base_url()))
            .send()
            .await;
    }
    for id in department_ids {
        let _ = client
            .delete(format!("{}/departments/{id}", base_url()))
            .send()
            .await;
    }
}

// ============================================================================
// Virtual Store Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_store_list_leads_with_single_all_store() {
    let resp = client()
        .get(format!("{}/stores", base_url()))
        .send()
        .await
        .expect("Failed to list stores");
    assert_eq!(resp.status(), StatusCode::OK);

    let stores: Vec<Value> = resp.json().await.expect("Failed to parse stores");
    let first = stores.first().expect("store list must not be empty");
    assert_eq!(first["id"], ALL_STORE_ID);
    assert_eq!(first["name"], "All");
    assert!(first["modified"].is_null());

    let all_count = stores.iter().filter(|s| s["name"] == "All").count();
    assert_eq!(all_count, 1, "exactly one store named All");
}

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_virtual_store_lookup() {
    let resp = client()
        .get(format!("{}/stores/{ALL_STORE_ID}", base_url()))
        .send()
        .await
        .expect("Failed to get virtual store");
    assert_eq!(resp.status(), StatusCode::OK);

    let store: Value = resp.json().await.expect("Failed to parse store");
    assert_eq!(store["id"], ALL_STORE_ID);
    assert_eq!(store["name"], "All");
    assert!(store["modified"].is_null());
}

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_virtual_store_mutations_forbidden() {
    let client = client();
    let base = base_url();

    let resp = client
        .put(format!("{base}/stores/{ALL_STORE_ID}"))
        .json(&json!({ "name": "Renamed" }))
        .send()
        .await
        .expect("Failed to send rename");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client
        .delete(format!("{base}/stores/{ALL_STORE_ID}"))
        .send()
        .await
        .expect("Failed to send delete");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client
        .post(format!("{base}/stores/{ALL_STORE_ID}/zones"))
        .json(&json!({ "zone_sequence": 1, "zone_name": "Dairy", "department_id": 1 }))
        .send()
        .await
        .expect("Failed to send zone upsert");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client
        .post(format!("{base}/stores/{ALL_STORE_ID}/zones/swap"))
        .json(&json!({ "seqA": 1, "seqB": 2 }))
        .send()
        .await
        .expect("Failed to send swap");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client
        .delete(format!("{base}/stores/{ALL_STORE_ID}/zones/1/1"))
        .send()
        .await
        .expect("Failed to send zone delete");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_virtual_zone_listing_is_synthetic() {
    let client = client();
    let department_name = unique("integration-dept");
    let department_id = create_department(&client, &department_name).await;

    let resp = client
        .get(format!("{}/stores/{ALL_STORE_ID}/zones", base_url()))
        .send()
        .await
        .expect("Failed to list virtual zones");
    assert_eq!(resp.status(), StatusCode::OK);

    let zones: Vec<Value> = resp.json().await.expect("Failed to parse zones");
    assert!(!zones.is_empty());
    for zone in &zones {
        assert_eq!(zone["store_id"], ALL_STORE_ID);
        assert_eq!(zone["zone_sequence"], 1);
        assert_eq!(zone["zone_name"], "General");
    }
    assert!(
        zones.iter().any(|z| z["department_name"] == department_name.as_str()),
        "every department appears in the synthetic listing"
    );

    cleanup(&client, None, &[department_id]).await;
}

// ============================================================================
// Store CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_store_crud_roundtrip() {
    let client = client();
    let base = base_url();
    let name = unique("integration-store");

    let store_id = create_store(&client, &name).await;

    let resp = client
        .get(format!("{base}/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to get store");
    assert_eq!(resp.status(), StatusCode::OK);
    let store: Value = resp.json().await.expect("Failed to parse store");
    assert_eq!(store["name"], name.as_str());

    let renamed = unique("integration-store-renamed");
    let resp = client
        .put(format!("{base}/stores/{store_id}"))
        .json(&json!({ "name": renamed }))
        .send()
        .await
        .expect("Failed to rename store");
    assert_eq!(resp.status(), StatusCode::OK);
    let store: Value = resp.json().await.expect("Failed to parse store");
    assert_eq!(store["name"], renamed.as_str());
    assert!(!store["modified"].is_null(), "rename stamps modified");

    let resp = client
        .delete(format!("{base}/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to delete store");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base}/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to get deleted store");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse error");
    assert!(body["error"].is_string(), "errors carry an error field");
}

// ============================================================================
// Zone Upsert Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_zone_upsert_validates_before_persisting() {
    let client = client();
    let base = base_url();
    let store_id = create_store(&client, &unique("integration-store")).await;
    let department_id = create_department(&client, &unique("integration-dept")).await;

    // Non-positive sequence rejected
    let resp = client
        .post(format!("{base}/stores/{store_id}/zones"))
        .json(&json!({ "zone_sequence": 0, "zone_name": "Dairy", "department_id": department_id }))
        .send()
        .await
        .expect("Failed to send upsert");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Non-positive department rejected
    let resp = client
        .post(format!("{base}/stores/{store_id}/zones"))
        .json(&json!({ "zone_sequence": 1, "zone_name": "Dairy", "department_id": 0 }))
        .send()
        .await
        .expect("Failed to send upsert");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing was persisted by the rejected calls
    let resp = client
        .get(format!("{base}/stores/{store_id}/zones"))
        .send()
        .await
        .expect("Failed to list zones");
    let zones: Vec<Value> = resp.json().await.expect("Failed to parse zones");
    assert!(zones.is_empty());

    cleanup(&client, Some(store_id), &[department_id]).await;
}

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_zone_upsert_blank_name_becomes_general() {
    let client = client();
    let base = base_url();
    let store_id = create_store(&client, &unique("integration-store")).await;
    let department_id = create_department(&client, &unique("integration-dept")).await;

    let resp = client
        .post(format!("{base}/stores/{store_id}/zones"))
        .json(&json!({ "zone_sequence": 1, "zone_name": "   ", "department_id": department_id }))
        .send()
        .await
        .expect("Failed to send upsert");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let zone: Value = resp.json().await.expect("Failed to parse zone");
    assert_eq!(zone["zone_name"], "General");

    // Same composite key again: only the name updates
    let resp = client
        .post(format!("{base}/stores/{store_id}/zones"))
        .json(&json!({ "zone_sequence": 1, "zone_name": "Dairy", "department_id": department_id }))
        .send()
        .await
        .expect("Failed to send upsert");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let zone: Value = resp.json().await.expect("Failed to parse zone");
    assert_eq!(zone["zone_name"], "Dairy");

    // Numeric strings coerce
    let resp = client
        .post(format!("{base}/stores/{store_id}/zones"))
        .json(&json!({ "zone_sequence": "2", "zone_name": "Frozen", "department_id": department_id.to_string() }))
        .send()
        .await
        .expect("Failed to send upsert");
    assert_eq!(resp.status(), StatusCode::CREATED);

    cleanup(&client, Some(store_id), &[department_id]).await;
}

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_zone_upsert_unknown_department_is_rejected() {
    let client = client();
    let base = base_url();
    let store_id = create_store(&client, &unique("integration-store")).await;

    let resp = client
        .post(format!("{base}/stores/{store_id}/zones"))
        .json(&json!({ "zone_sequence": 1, "zone_name": "Dairy", "department_id": 999_999_999 }))
        .send()
        .await
        .expect("Failed to send upsert");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error");
    assert!(body["error"].is_string());
    assert!(body["detail"].is_string(), "FK failures carry detail");

    cleanup(&client, Some(store_id), &[]).await;
}

// ============================================================================
// Zone Swap Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_zone_swap_exchanges_sequences_atomically() {
    let client = client();
    let base = base_url();
    let store_id = create_store(&client, &unique("integration-store")).await;
    let dept_a = create_department(&client, &unique("integration-dept-a")).await;
    let dept_b = create_department(&client, &unique("integration-dept-b")).await;

    for (sequence, name, department_id) in
        [(1, "Produce", dept_a), (2, "Dairy", dept_b)]
    {
        let resp = client
            .post(format!("{base}/stores/{store_id}/zones"))
            .json(&json!({
                "zone_sequence": sequence,
                "zone_name": name,
                "department_id": department_id,
            }))
            .send()
            .await
            .expect("Failed to create zone");
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = client
        .post(format!("{base}/stores/{store_id}/zones/swap"))
        .json(&json!({ "seqA": 1, "seqB": 2 }))
        .send()
        .await
        .expect("Failed to swap zones");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base}/stores/{store_id}/zones"))
        .send()
        .await
        .expect("Failed to list zones");
    let zones: Vec<Value> = resp.json().await.expect("Failed to parse zones");
    assert_eq!(zones.len(), 2);

    for zone in &zones {
        let sequence = zone["zone_sequence"].as_i64().expect("sequence");
        assert!(
            sequence == 1 || sequence == 2,
            "no row may be left at the swap sentinel, got {sequence}"
        );
        match zone["zone_name"].as_str() {
            Some("Produce") => assert_eq!(sequence, 2),
            Some("Dairy") => assert_eq!(sequence, 1),
            other => panic!("unexpected zone {other:?}"),
        }
    }

    cleanup(&client, Some(store_id), &[dept_a, dept_b]).await;
}

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_zone_swap_requires_both_sequences() {
    let client = client();
    let base = base_url();
    let store_id = create_store(&client, &unique("integration-store")).await;
    let department_id = create_department(&client, &unique("integration-dept")).await;

    let resp = client
        .post(format!("{base}/stores/{store_id}/zones"))
        .json(&json!({ "zone_sequence": 1, "zone_name": "Produce", "department_id": department_id }))
        .send()
        .await
        .expect("Failed to create zone");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{base}/stores/{store_id}/zones/swap"))
        .json(&json!({ "seqA": 1 }))
        .send()
        .await
        .expect("Failed to send swap");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Rows untouched by the rejected swap
    let resp = client
        .get(format!("{base}/stores/{store_id}/zones"))
        .send()
        .await
        .expect("Failed to list zones");
    let zones: Vec<Value> = resp.json().await.expect("Failed to parse zones");
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0]["zone_sequence"], 1);

    cleanup(&client, Some(store_id), &[department_id]).await;
}

// ============================================================================
// Zone Delete Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running kitchenhub-server and PostgreSQL"]
async fn test_zone_delete_roundtrip() {
    let client = client();
    let base = base_url();
    let store_id = create_store(&client, &unique("integration-store")).await;
    let department_id = create_department(&client, &unique("integration-dept")).await;

    let resp = client
        .post(format!("{base}/stores/{store_id}/zones"))
        .json(&json!({ "zone_sequence": 1, "zone_name": "Produce", "department_id": department_id }))
        .send()
        .await
        .expect("Failed to create zone");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .delete(format!("{base}/stores/{store_id}/zones/1/{department_id}"))
        .send()
        .await
        .expect("Failed to delete zone");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .delete(format!("{base}/stores/{store_id}/zones/1/{department_id}"))
        .send()
        .await
        .expect("Failed to re-delete zone");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    cleanup(&client, Some(store_id), &[department_id]).await;
}
