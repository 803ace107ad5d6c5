mod common;

use axum::http::StatusCode;
use common::{create_order, create_product, create_user, send, test_app};
use serde_json::json;
use storefront::integrity::{DeleteVerdict, DenyDeleteReason};

#[tokio::test]
async fn product_delete_denied_until_order_is_delivered() {
    let (app, _state) = test_app().await;
    let user_id = create_user(&app, "buyer@example.com").await;
    let product_id = create_product(&app, "apples", 10.0).await;
    let order_id = create_order(&app, user_id, product_id, "paid").await;

    let (status, body) = send(&app, "DELETE", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "undelivered order exists");

    // The denial must not have mutated the store.
    let (status, _) = send(&app, "GET", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    // Mark the order delivered, then the delete goes through.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/orders/{order_id}"),
        Some(json!({
            "id_user": user_id,
            "id_product": product_id,
            "date_order": "2025-01-15",
            "status": "delivered",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Product deleted");

    let (status, _) = send(&app, "GET", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The delivered order went with its product, so no order is left
    // pointing at a missing row.
    let (status, _) = send(&app, "GET", &format!("/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_delete_denied_even_for_delivered_orders() {
    let (app, _state) = test_app().await;
    let user_id = create_user(&app, "buyer@example.com").await;
    let product_id = create_product(&app, "apples", 10.0).await;
    create_order(&app, user_id, product_id, "delivered").await;

    let (status, body) = send(&app, "DELETE", &format!("/users/{user_id}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "existing orders reference this user");

    let (status, _) = send(&app, "GET", &format!("/users/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn user_without_orders_is_deleted() {
    let (app, _state) = test_app().await;
    let user_id = create_user(&app, "loner@example.com").await;

    let (status, body) = send(&app, "DELETE", &format!("/users/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");

    let (status, _) = send(&app, "GET", &format!("/users/{user_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_delete_removes_only_the_order_row() {
    let (app, _state) = test_app().await;
    let user_id = create_user(&app, "buyer@example.com").await;
    let product_id = create_product(&app, "apples", 10.0).await;
    let order_id = create_order(&app, user_id, product_id, "paid").await;

    let (status, body) = send(&app, "DELETE", &format!("/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order deleted");

    // Neither the user nor the product was touched.
    let (status, _) = send(&app, "GET", &format!("/users/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    // With the order gone, the user is deletable again.
    let (status, _) = send(&app, "DELETE", &format!("/users/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deleting_absent_ids_is_not_found_not_denied() {
    let (app, _state) = test_app().await;

    for uri in ["/products/99", "/users/99", "/orders/99"] {
        let (status, body) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}: {body}");
    }
}

#[tokio::test]
async fn advisory_checks_match_the_guard() {
    let (app, state) = test_app().await;
    let user_id = create_user(&app, "buyer@example.com").await;
    let product_id = create_product(&app, "apples", 10.0).await;

    let di = &state.di_container;

    assert_eq!(
        di.product_command
            .can_delete_product(product_id)
            .await
            .expect("verdict"),
        DeleteVerdict::Permit
    );
    assert_eq!(
        di.user_command.can_delete_user(user_id).await.expect("verdict"),
        DeleteVerdict::Permit
    );

    let order_id = create_order(&app, user_id, product_id, "for assembly").await;

    assert_eq!(
        di.product_command
            .can_delete_product(product_id)
            .await
            .expect("verdict"),
        DeleteVerdict::Deny(DenyDeleteReason::UndeliveredOrder)
    );
    assert_eq!(
        di.user_command.can_delete_user(user_id).await.expect("verdict"),
        DeleteVerdict::Deny(DenyDeleteReason::ExistingOrders)
    );

    // Delivered releases the product but still pins the user.
    send(
        &app,
        "PUT",
        &format!("/orders/{order_id}"),
        Some(json!({
            "id_user": user_id,
            "id_product": product_id,
            "date_order": "2025-01-15",
            "status": "delivered",
        })),
    )
    .await;

    assert_eq!(
        di.product_command
            .can_delete_product(product_id)
            .await
            .expect("verdict"),
        DeleteVerdict::Permit
    );
    assert_eq!(
        di.user_command.can_delete_user(user_id).await.expect("verdict"),
        DeleteVerdict::Deny(DenyDeleteReason::ExistingOrders)
    );
}
