//! HTTP round trips.
//!
//! Starts the full app (routes, CORS, tracing layer) on an ephemeral port and
//! exercises it with reqwest.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use shopping_lists::{handlers, routes, InMemoryListStore, ServerConfig};

/// Bind to port 0 and return the base URL.
async fn start_server() -> String {
    let service = Arc::new(handlers::service(InMemoryListStore::new()));
    let app = routes::app(service, &ServerConfig::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn create_list(client: &Client, base: &str, name: &str) -> String {
    let resp = client
        .post(format!("{base}/list"))
        .json(&json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    body["list"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_check() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    let commands = body["commands"].as_array().unwrap();
    assert_eq!(commands.len(), 10);
    assert!(commands.iter().any(|c| c == "item.toggle"));
}

#[tokio::test]
async fn list_lifecycle() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/lists"))
        .json(&json!({ "name": "Groceries" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "List created successfully");
    let list_id = body["list"]["id"].as_str().unwrap().to_string();

    let resp = client.get(format!("{base}/lists")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["lists"], json!([{ "id": list_id, "name": "Groceries" }]));

    let resp = client
        .get(format!("{base}/lists/{list_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": list_id, "name": "Groceries", "items": [] }));

    let resp = client
        .delete(format!("{base}/lists/{list_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base}/lists/{list_id}/items"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": format!("list not found: {list_id}") }));
}

#[tokio::test]
async fn item_lifecycle() {
    let base = start_server().await;
    let client = Client::new();
    let list_id = create_list(&client, &base, "Weekly").await;

    let resp = client
        .post(format!("{base}/lists/{list_id}/items"))
        .json(&json!({ "name": "Bread", "section": "bakery", "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    let item_id = body["item"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["item"]["bought"], false);

    let resp = client
        .patch(format!("{base}/lists/{list_id}/items/{item_id}/toggle"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["item"],
        json!({
            "id": item_id,
            "name": "Bread",
            "section": "bakery",
            "quantity": 1,
            "bought": true,
        })
    );

    let resp = client
        .put(format!("{base}/lists/{list_id}/items/{item_id}"))
        .json(&json!({ "quantity": 3, "section": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["item"]["quantity"], 3);
    assert_eq!(body["item"]["section"], "bakery");
    assert_eq!(body["item"]["bought"], true);

    let resp = client
        .delete(format!("{base}/lists/{list_id}/bought"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["removed"][0]["id"], item_id.as_str());

    let resp = client
        .delete(format!("{base}/lists/{list_id}/items/{item_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .get(format!("{base}/lists/{list_id}/items"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn path_list_id_overrides_body() {
    let base = start_server().await;
    let client = Client::new();
    let list_id = create_list(&client, &base, "Weekly").await;

    let resp = client
        .post(format!("{base}/lists/{list_id}/items"))
        .json(&json!({ "list_id": "999", "name": "Milk" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn bad_requests() {
    let base = start_server().await;
    let client = Client::new();

    // Empty name.
    let resp = client
        .post(format!("{base}/list"))
        .json(&json!({ "name": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Malformed body.
    let resp = client
        .post(format!("{base}/list"))
        .header("content-type", "application/json")
        .body("{\"name\":")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("decode failed"));

    // Missing body.
    let resp = client.post(format!("{base}/list")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Blank item name.
    let list_id = create_list(&client, &base, "Weekly").await;
    let resp = client
        .post(format!("{base}/lists/{list_id}/items"))
        .json(&json!({ "name": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn not_found_and_conflicts() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client.get(format!("{base}/lists/42")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .post(format!("{base}/lists/42/items"))
        .json(&json!({ "name": "Milk" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let list_id = create_list(&client, &base, "Groceries").await;

    let resp = client
        .patch(format!("{base}/lists/{list_id}/items/42/toggle"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .post(format!("{base}/list"))
        .json(&json!({ "name": " groceries " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = client
        .post(format!("{base}/lists/{list_id}/items"))
        .json(&json!({ "name": "Milk", "quantity": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{base}/lists/{list_id}/items"))
        .json(&json!({ "name": "milk" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn cors_preflight_for_frontend_origin() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{base}/lists"))
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");

    let resp = client
        .get(format!("{base}/lists"))
        .header("origin", "http://evil.test")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}
