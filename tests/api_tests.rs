//! API integration tests
//!
//! These run against a live server with a reachable database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

async fn create_holiday(client: &Client, body: Value) -> (reqwest::StatusCode, Value) {
    let response = client
        .post(format!("{}/holidays", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_list_holidays_returns_json_array() {
    let client = Client::new();

    let response = client
        .get(format!("{}/holidays", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_holiday_lifecycle() {
    let client = Client::new();

    // Create
    let (status, created) = create_holiday(
        &client,
        json!({"title": "New Year", "date": "2025-01-01"}),
    )
    .await;
    assert_eq!(status, 201);
    let id = created["id"].as_str().expect("No id in response").to_string();
    assert!(!id.is_empty());
    assert_eq!(created["title"], "New Year");
    assert_eq!(created["date"], "2025-01-01");

    // Listing includes it
    let listed: Value = client
        .get(format!("{}/holidays", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list response");
    assert!(listed
        .as_array()
        .unwrap()
        .iter()
        .any(|h| h["id"] == created["id"]));

    // Update replaces all mutable fields
    let response = client
        .put(format!("{}/holidays/{}", BASE_URL, id))
        .json(&json!({
            "title": "New Year's Day",
            "date": "2025-01-01",
            "description": "Public holiday"
        }))
        .send()
        .await
        .expect("Failed to send update request");
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.expect("Failed to parse update response");
    assert_eq!(updated["title"], "New Year's Day");
    assert_eq!(updated["description"], "Public holiday");

    // Fetch by id matches
    let fetched: Value = client
        .get(format!("{}/holidays/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send get request")
        .json()
        .await
        .expect("Failed to parse get response");
    assert_eq!(fetched["title"], "New Year's Day");
    assert_eq!(fetched["date"], "2025-01-01");

    // Delete
    let response = client
        .delete(format!("{}/holidays/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse delete response");
    assert!(body["message"].is_string());

    // Gone from the listing
    let listed: Value = client
        .get(format!("{}/holidays", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list response");
    assert!(!listed
        .as_array()
        .unwrap()
        .iter()
        .any(|h| h["id"] == created["id"]));

    // Second delete on the same id is a 404
    let response = client
        .delete(format!("{}/holidays/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_with_malformed_date() {
    let client = Client::new();

    let before: Value = client
        .get(format!("{}/holidays", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list response");

    let (status, body) = create_holiday(
        &client,
        json!({"title": "Impossible", "date": "2024-13-40"}),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("2024-13-40"));

    // Nothing was persisted
    let after: Value = client
        .get(format!("{}/holidays", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list response");
    assert_eq!(before.as_array().unwrap().len(), after.as_array().unwrap().len());
}

#[tokio::test]
#[ignore]
async fn test_create_with_malformed_json() {
    let client = Client::new();

    let response = client
        .post(format!("{}/holidays", BASE_URL))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_update_nonexistent_holiday() {
    let client = Client::new();

    let response = client
        .put(format!(
            "{}/holidays/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .json(&json!({"title": "Ghost", "date": "2025-06-01"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    // And it did not create a record under that id
    let response = client
        .get(format!(
            "{}/holidays/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_repeated_creates_get_distinct_ids() {
    let client = Client::new();

    let (_, first) = create_holiday(
        &client,
        json!({"title": "Midsummer", "date": "2025-06-21"}),
    )
    .await;
    let (_, second) = create_holiday(
        &client,
        json!({"title": "Midsummer", "date": "2025-06-21"}),
    )
    .await;

    assert_ne!(first["id"], second["id"]);

    for holiday in [&first, &second] {
        client
            .delete(format!("{}/holidays/{}", BASE_URL, holiday["id"].as_str().unwrap()))
            .send()
            .await
            .expect("Failed to clean up");
    }
}

#[tokio::test]
#[ignore]
async fn test_create_with_duplicate_id_conflicts() {
    let client = Client::new();

    let (status, created) = create_holiday(
        &client,
        json!({"title": "Boxing Day", "date": "2025-12-26"}),
    )
    .await;
    assert_eq!(status, 201);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = create_holiday(
        &client,
        json!({"id": id, "title": "Boxing Day again", "date": "2025-12-26"}),
    )
    .await;
    assert_eq!(status, 409);

    client
        .delete(format!("{}/holidays/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to clean up");
}
