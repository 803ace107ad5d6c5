mod common;

use axum::http::StatusCode;
use common::{create_order, create_product, create_user, send, test_app};
use serde_json::json;

#[tokio::test]
async fn product_post_then_get_returns_identical_fields() {
    let (app, _state) = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/product/",
        Some(json!({
            "product_name": "apples",
            "description": "fresh",
            "price": 10.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("assigned id");

    let (status, fetched) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["product_name"], "apples");
    assert_eq!(fetched["description"], "fresh");
    assert_eq!(fetched["price"], 10.0);
    assert_eq!(fetched["id"], id);
    assert_eq!(created, fetched);
}

#[tokio::test]
async fn user_post_then_get_round_trips_with_hashed_password() {
    let (app, _state) = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/user/",
        Some(json!({
            "firstname": "Alice",
            "lastname": "Doe",
            "email": "alice@example.com",
            "passw": "secret",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("assigned id");

    let (status, fetched) = send(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["firstname"], "Alice");
    assert_eq!(fetched["lastname"], "Doe");
    assert_eq!(fetched["email"], "alice@example.com");

    // Stored as a bcrypt hash: never the submitted plaintext, but verifiable
    // against it.
    let stored = fetched["passw"].as_str().expect("passw");
    assert_ne!(stored, "secret");
    assert!(bcrypt::verify("secret", stored).expect("verify"));
}

#[tokio::test]
async fn order_post_then_get_returns_identical_fields() {
    let (app, _state) = test_app().await;
    let user_id = create_user(&app, "buyer@example.com").await;
    let product_id = create_product(&app, "apples", 10.0).await;

    let order_id = create_order(&app, user_id, product_id, "paid").await;

    let (status, fetched) = send(&app, "GET", &format!("/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id_user"], user_id);
    assert_eq!(fetched["id_product"], product_id);
    assert_eq!(fetched["date_order"], "2025-01-15");
    assert_eq!(fetched["status"], "paid");
}

#[tokio::test]
async fn list_endpoints_return_every_row() {
    let (app, _state) = test_app().await;
    create_product(&app, "apples", 10.0).await;
    create_product(&app, "pears", 12.5).await;

    let (status, body) = send(&app, "GET", "/products/", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["product_name"], "apples");
    assert_eq!(items[1]["product_name"], "pears");
}

#[tokio::test]
async fn put_replaces_every_field() {
    let (app, _state) = test_app().await;
    let id = create_product(&app, "apples", 10.0).await;

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/product/{id}"),
        Some(json!({
            "product_name": "pears",
            "description": "ripe",
            "price": 12.5,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["product_name"], "pears");

    let (_, fetched) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(fetched["product_name"], "pears");
    assert_eq!(fetched["description"], "ripe");
    assert_eq!(fetched["price"], 12.5);
}

#[tokio::test]
async fn get_and_put_of_absent_ids_return_not_found() {
    let (app, _state) = test_app().await;

    for uri in ["/products/99", "/users/99", "/orders/99"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        assert_eq!(body["status"], "error");
    }

    let (status, _) = send(
        &app,
        "PUT",
        "/product/99",
        Some(json!({
            "product_name": "ghost",
            "description": "",
            "price": 1.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let (app, _state) = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
