#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr, sync::Arc};
use storefront::{
    config::{ConnectionPool, init_schema},
    handler::AppRouter,
    state::AppState,
};
use tower::ServiceExt;

/// In-memory sqlite with foreign keys on. A single connection, because each
/// `:memory:` connection is its own database.
pub async fn memory_pool() -> ConnectionPool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect in-memory sqlite");

    init_schema(&pool).await.expect("schema init");
    pool
}

pub async fn test_app() -> (Router, Arc<AppState>) {
    let pool = memory_pool().await;
    let state = Arc::new(AppState::from_pool(pool));
    let app = AppRouter::build(state.clone());
    (app, state)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .expect("request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

pub async fn create_product(app: &Router, name: &str, price: f64) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/product/",
        Some(json!({
            "product_name": name,
            "description": "fresh",
            "price": price,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create product: {body}");
    body["id"].as_i64().expect("product id")
}

pub async fn create_user(app: &Router, email: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/user/",
        Some(json!({
            "firstname": "Alice",
            "lastname": "Doe",
            "email": email,
            "passw": "secret",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create user: {body}");
    body["id"].as_i64().expect("user id")
}

pub async fn create_order(app: &Router, user_id: i64, product_id: i64, status_str: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/order/",
        Some(json!({
            "id_user": user_id,
            "id_product": product_id,
            "date_order": "2025-01-15",
            "status": status_str,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create order: {body}");
    body["id"].as_i64().expect("order id")
}
