//! Integration tests for the account endpoints.

use serde_json::{json, Value};
use todo_service::config::ServiceConfig;

mod common;

#[tokio::test]
async fn create_fetch_and_upgrade_user() {
    let service = common::spawn_service(ServiceConfig::default()).await;
    let client = common::client();

    let res = client
        .post(format!("{}/users", service.base_url))
        .json(&json!({ "name": "Alice", "username": "alice" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let user: Value = res.json().await.unwrap();
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["username"], "alice");
    assert_eq!(user["pro"], false);
    assert_eq!(user["todos"], json!([]));

    let id = user["id"].as_str().unwrap();

    let res = client
        .get(format!("{}/users/{}", service.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched["id"], user["id"]);

    let res = client
        .patch(format!("{}/users/{}/pro", service.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let upgraded: Value = res.json().await.unwrap();
    assert_eq!(upgraded["pro"], true);

    // A second upgrade is rejected and the flag stays set.
    let res = client
        .patch(format!("{}/users/{}/pro", service.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = client
        .get(format!("{}/users/{}", service.base_url, id))
        .send()
        .await
        .unwrap();
    let user: Value = res.json().await.unwrap();
    assert_eq!(user["pro"], true);

    service.stop();
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let service = common::spawn_service(ServiceConfig::default()).await;
    let client = common::client();

    let res = client
        .post(format!("{}/users", service.base_url))
        .json(&json!({ "name": "Bob", "username": "bob" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let res = client
        .post(format!("{}/users", service.base_url))
        .json(&json!({ "name": "Bobby", "username": "bob" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Username already exists");

    service.stop();
}

#[tokio::test]
async fn unknown_user_id_is_not_found() {
    let service = common::spawn_service(ServiceConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("{}/users/{}", service.base_url, uuid::Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    // A malformed id never matches an account either.
    let res = client
        .get(format!("{}/users/not-a-uuid", service.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let res = client
        .patch(format!(
            "{}/users/{}/pro",
            service.base_url,
            uuid::Uuid::new_v4()
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    service.stop();
}
