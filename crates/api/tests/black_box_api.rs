use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use stockroom_inventory::InventoryStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn the real router (seeded store) on an ephemeral port.
    async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InventoryStore::with_sample_items())).await
    }

    async fn spawn_with_store(store: Arc<InventoryStore>) -> Self {
        let app = stockroom_api::app::build_app_with_store(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_seeded_item_by_id() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/inventory/items/item1", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["item_id"], "item1");
    assert_eq!(body["details"]["name"], "Laptop");
    assert_eq!(body["details"]["quantity"], 5);
}

#[tokio::test]
async fn get_missing_item_is_404() {
    let srv = TestServer::spawn_with_store(Arc::new(InventoryStore::new())).await;

    let res = reqwest::get(format!("{}/inventory/items/missing", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let srv = TestServer::spawn_with_store(Arc::new(InventoryStore::new())).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/inventory/items/item9", srv.base_url))
        .json(&json!({"name": "Monitor", "price": 300.5, "quantity": 4}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["item_id"], "item9");
    assert_eq!(body["details"]["price"], 300.5);

    let res = client
        .get(format!("{}/inventory/items/item9", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn duplicate_create_is_409() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/inventory/items/item1", srv.base_url))
        .json(&json!({"name": "Laptop", "price": 1200.0, "quantity": 5}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "already_exists");
}

#[tokio::test]
async fn invalid_item_is_400() {
    let srv = TestServer::spawn_with_store(Arc::new(InventoryStore::new())).await;
    let client = reqwest::Client::new();

    for payload in [
        json!({"name": "Monitor", "price": 0.0, "quantity": 4}),
        json!({"name": "Monitor", "price": 300.0, "quantity": -1}),
        json!({"name": "   ", "price": 300.0, "quantity": 4}),
    ] {
        let res = client
            .post(format!("{}/inventory/items/bad", srv.base_url))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invalid_item");
    }
}

#[tokio::test]
async fn get_by_name_is_case_insensitive() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for name in ["laptop", "LAPTOP"] {
        let res = client
            .get(format!("{}/inventory/items/by-name", srv.base_url))
            .query(&[("name", name)])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["item_id"], "item1");
    }
}

#[tokio::test]
async fn get_by_name_requires_the_name_parameter() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/inventory/items/by-name", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_argument");
}

#[tokio::test]
async fn combined_lookup_distinguishes_its_404s() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Unknown id.
    let res = client
        .get(format!("{}/inventory/items/missing/combined", srv.base_url))
        .query(&[("name", "Laptop")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    // Known id, wrong name filter.
    let res = client
        .get(format!("{}/inventory/items/item1/combined", srv.base_url))
        .query(&[("name", "Tablet")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "name_mismatch");

    // Matching filter.
    let res = client
        .get(format!("{}/inventory/items/item1/combined", srv.base_url))
        .query(&[("name", "laptop")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn partial_update_touches_only_supplied_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/inventory/items/item1", srv.base_url))
        .json(&json!({"quantity": 3}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["item_id"], "item1");
    assert_eq!(body["updated"]["name"], "Laptop");
    assert_eq!(body["updated"]["price"], 1200.0);
    assert_eq!(body["updated"]["quantity"], 3);

    // The stored value agrees with the update response.
    let res = client
        .get(format!("{}/inventory/items/item1", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["details"]["quantity"], 3);
}

#[tokio::test]
async fn invalid_update_is_400_and_leaves_item_unchanged() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/inventory/items/item1", srv.base_url))
        .json(&json!({"price": -10.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .get(format!("{}/inventory/items/item1", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["details"]["price"], 1200.0);
}

#[tokio::test]
async fn update_missing_item_is_404() {
    let srv = TestServer::spawn_with_store(Arc::new(InventoryStore::new())).await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/inventory/items/missing", srv.base_url))
        .json(&json!({"quantity": 3}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/inventory/items/item2", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["item_id"], "item2");

    let res = client
        .get(format!("{}/inventory/items/item2", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_item_is_404() {
    let srv = TestServer::spawn_with_store(Arc::new(InventoryStore::new())).await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/inventory/items/missing", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_seeded_items_in_insertion_order() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/inventory/items", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 3);
    let ids: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["item_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["item1", "item2", "item3"]);
}
