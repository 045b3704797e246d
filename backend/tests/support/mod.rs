// Not every helper is used in every test, so we allow dead code
#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use catalog::CatalogService;
use catalog_backend::{server, types::Environment};
use http_body_util::BodyExt;
use item_storage::InMemoryItemStore;
use tower::ServiceExt;

/// Router wired to an in-memory item store
pub struct TestSetup {
    pub router: Router,
    pub store: Arc<InMemoryItemStore>,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with_environment(Environment::Development)
    }

    pub fn with_environment(environment: Environment) -> Self {
        let store = Arc::new(InMemoryItemStore::new());
        let catalog = Arc::new(CatalogService::new(store.clone()));

        Self {
            router: server::app(environment, catalog),
            store,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<String>) -> Response {
        let request = Request::builder()
            .uri(uri)
            .method(method)
            .header("Content-Type", "application/json")
            .body(body.map_or_else(Body::empty, Body::from))
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn send_json(&self, method: &str, uri: &str, payload: &serde_json::Value) -> Response {
        self.send(method, uri, Some(payload.to_string())).await
    }
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Complete item payload
pub fn item_json(id: &str, name: &str, category: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "item_id": id,
        "item_name": name,
        "item_category": category,
        "item_price": price,
    })
}
