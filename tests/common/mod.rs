// Shared fake of the remote product service.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use inventory_tracker::dtos::product::CreateProductRequest;
use inventory_tracker::models::{Category, Product, ProductId, Totals};
use serde_json::{json, Value};

#[derive(Default)]
pub struct FakeStore {
    pub products: Mutex<Vec<Product>>,
    pub next_id: Mutex<ProductId>,
    pub fail_next: Mutex<Option<(StatusCode, String)>>,
    pub received: Mutex<Vec<CreateProductRequest>>,
}

impl FakeStore {
    pub fn seed(&self, products: Vec<Product>) {
        *self.next_id.lock().unwrap() = products.iter().map(|p| p.id).max().unwrap_or(0);
        *self.products.lock().unwrap() = products;
    }

    pub fn fail_next(&self, status: StatusCode, body: &str) {
        self.respond_next(status, body);
    }

    /// Serves `body` verbatim for the next request, whatever the route.
    pub fn respond_next(&self, status: StatusCode, body: &str) {
        *self.fail_next.lock().unwrap() = Some((status, body.to_string()));
    }

    fn take_failure(&self) -> Option<Response> {
        self.fail_next
            .lock()
            .unwrap()
            .take()
            .map(|(status, body)| (status, [("content-type", "application/json")], body).into_response())
    }
}

type Shared = Arc<FakeStore>;

async fn list_products(State(store): State<Shared>) -> Response {
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    Json(store.products.lock().unwrap().clone()).into_response()
}

async fn create_product(State(store): State<Shared>, Json(req): Json<CreateProductRequest>) -> Response {
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    if req.name.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{"loc": ["body", "name"], "msg": "field required"}]})),
        )
            .into_response();
    }

    let id = {
        let mut next = store.next_id.lock().unwrap();
        *next += 1;
        *next
    };
    let product = Product {
        id,
        name: req.name.clone(),
        category: req.category,
        quantity: req.quantity,
        price: req.price,
        created_at: Some("2024-01-01".to_string()),
    };
    store.received.lock().unwrap().push(req);
    store.products.lock().unwrap().push(product.clone());
    (StatusCode::CREATED, Json(product)).into_response()
}

async fn delete_product(State(store): State<Shared>, Path(id): Path<ProductId>) -> Response {
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let mut products = store.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p.id != id);
    if products.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Product not found"}))).into_response();
    }
    Json(json!({"message": "Product deleted"})).into_response()
}

async fn stats(State(store): State<Shared>) -> Response {
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let totals = Totals::derive(&store.products.lock().unwrap());
    Json(json!({
        "total_products": totals.count,
        "total_quantity": totals.quantity,
        "total_inventory_value": totals.value,
        "database_type": "SQLite",
    }))
    .into_response()
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "database": "sqlite",
        "timestamp": "2024-01-01T00:00:00.000000",
    }))
}

/// Starts the fake on an ephemeral port and returns its `/api` base URL.
pub async fn spawn_service() -> (String, Shared) {
    let store: Shared = Arc::new(FakeStore::default());
    let app = Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", delete(delete_product))
        .route("/api/stats", get(stats))
        .route("/api/health", get(health))
        .with_state(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api"), store)
}

pub fn product(id: ProductId, name: &str, quantity: u64, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: Category::Other,
        quantity,
        price,
        created_at: Some("2024-01-01T09:00:00.000000".to_string()),
    }
}
