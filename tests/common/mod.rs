//! In-process mock of the OtoPOS gateway for integration tests.
//!
//! Spins an axum server on an ephemeral port that speaks the backend's
//! envelope dialect: `{"data": ...}` on success, `{"message": ...}` on
//! failure, and message-only acknowledgements for deletes. Captured
//! `Authorization` headers let tests assert bearer attachment.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// The only token the mock backend accepts.
pub const VALID_TOKEN: &str = "test-token-abc";
/// Credentials accepted by `POST /auth/login`.
pub const VALID_USERNAME: &str = "admin";
pub const VALID_PASSWORD: &str = "secret";

#[derive(Default)]
pub struct MockState {
    /// `Authorization` header values seen on authenticated endpoints,
    /// empty string when the header was absent.
    pub auth_headers: Mutex<Vec<String>>,
}

impl MockState {
    pub fn record_auth(&self, headers: &HeaderMap) {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        self.auth_headers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(value);
    }

    pub fn last_auth_header(&self) -> Option<String> {
        self.auth_headers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }

    fn bearer_ok(&self, headers: &HeaderMap) -> bool {
        self.record_auth(headers);
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == format!("Bearer {}", VALID_TOKEN))
            .unwrap_or(false)
    }
}

pub struct TestServer {
    pub base_url: String,
    pub health_url: String,
    pub state: Arc<MockState>,
}

fn admin_user() -> Value {
    json!({
        "id": 1,
        "username": VALID_USERNAME,
        "role": "admin",
        "name": "Administrator",
        "email": "admin@otopos.test",
        "isActive": true,
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

fn unauthorized() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Unauthorized" })),
    )
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    let username = body.get("username").and_then(Value::as_str).unwrap_or("");
    let password = body.get("password").and_then(Value::as_str).unwrap_or("");
    if username == VALID_USERNAME && password == VALID_PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": { "token": VALID_TOKEN, "user": admin_user() }
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "invalid credentials" })),
        )
    }
}

async fn profile(State(state): State<Arc<MockState>>, headers: HeaderMap) -> impl IntoResponse {
    if !state.bearer_ok(&headers) {
        return unauthorized().into_response();
    }
    Json(json!({ "data": admin_user() })).into_response()
}

async fn list_customers(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if !state.bearer_ok(&headers) {
        return unauthorized().into_response();
    }
    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: u32 = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);
    let data: Vec<Value> = (0..limit)
        .map(|i| {
            let id = i64::from((page - 1) * limit + i + 1);
            json!({ "id": id, "name": format!("Customer {}", id) })
        })
        .collect();
    // Paginated payloads ride inside the envelope's `data` like any
    // other payload: { "data": { "data": [...], "pagination": {...} } }.
    Json(json!({
        "data": {
            "data": data,
            "pagination": { "page": page, "limit": limit, "total": 50, "totalPages": 5 }
        }
    }))
    .into_response()
}

async fn delete_customer(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(_id): Path<i64>,
) -> impl IntoResponse {
    if !state.bearer_ok(&headers) {
        return unauthorized().into_response();
    }
    // The real backend acknowledges deletes with a message-only body.
    Json(json!({ "message": "Customer deleted successfully" })).into_response()
}

async fn list_vehicles(State(state): State<Arc<MockState>>, headers: HeaderMap) -> impl IntoResponse {
    if !state.bearer_ok(&headers) {
        return unauthorized().into_response();
    }
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "boom" })),
    )
        .into_response()
}

async fn upload_photo(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    _body: axum::body::Bytes,
) -> impl IntoResponse {
    if !state.bearer_ok(&headers) {
        return unauthorized().into_response();
    }
    Json(json!({ "data": { "url": format!("/uploads/vehicles/{}.jpg", id) } })).into_response()
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Start the mock gateway on an ephemeral port.
pub async fn spawn() -> TestServer {
    let state = Arc::new(MockState::default());
    let app = Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/profile", get(profile))
        .route("/api/v1/customers", get(list_customers))
        .route("/api/v1/customers/{id}", delete(delete_customer))
        .route("/api/v1/vehicles", get(list_vehicles))
        .route("/api/v1/files/vehicles/{id}/photo", post(upload_photo))
        .route("/health", get(health))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });

    TestServer {
        base_url: format!("http://{}/api/v1", addr),
        health_url: format!("http://{}/health", addr),
        state,
    }
}
