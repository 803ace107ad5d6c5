mod common;

use axum::{Router, http::StatusCode};
use common::{create_product, create_user, send};
use serde_json::json;
use std::{path::PathBuf, sync::Arc};
use storefront::{handler::AppRouter, state::AppState};

/// File-backed database so the pool really hands out parallel connections;
/// a `:memory:` pool is capped at one connection and cannot interleave.
async fn file_backed_app(tag: &str) -> (Router, Arc<AppState>, PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "storefront_test_{}_{tag}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let url = format!("sqlite://{}", path.display());
    let state = Arc::new(AppState::new(&url).await.expect("app state"));
    let app = AppRouter::build(state.clone());
    (app, state, path)
}

fn cleanup(path: &PathBuf) {
    for suffix in ["", "-wal", "-shm"] {
        let mut p = path.clone().into_os_string();
        p.push(suffix);
        let _ = std::fs::remove_file(PathBuf::from(p));
    }
}

#[tokio::test]
async fn concurrent_delete_and_order_creation_never_orphans_an_order() {
    let (app, state, path) = file_backed_app("race").await;
    let user_id = create_user(&app, "buyer@example.com").await;

    for round in 0..20 {
        let product_id = create_product(&app, "apples", 10.0).await;

        let delete_app = app.clone();
        let order_app = app.clone();

        let delete_task = tokio::spawn(async move {
            let (status, _) = send(
                &delete_app,
                "DELETE",
                &format!("/products/{product_id}"),
                None,
            )
            .await;
            status
        });
        let order_task = tokio::spawn(async move {
            let (status, _) = send(
                &order_app,
                "POST",
                "/order/",
                Some(json!({
                    "id_user": user_id,
                    "id_product": product_id,
                    "date_order": "2025-01-15",
                    "status": "paid",
                })),
            )
            .await;
            status
        });

        let delete_status = delete_task.await.expect("delete task");
        let order_status = order_task.await.expect("order task");

        // Either the order landed first and the delete was denied, or the
        // delete won and the insert failed its foreign key. Never both.
        assert!(
            !(delete_status == StatusCode::OK && order_status == StatusCode::CREATED),
            "round {round}: delete={delete_status}, order={order_status}"
        );

        // No order may reference a missing product, ever.
        let orphans: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM orders o
            LEFT JOIN products p ON o.id_product = p.id
            WHERE p.id IS NULL
            "#,
        )
        .fetch_one(&state.pool)
        .await
        .expect("orphan count");
        assert_eq!(orphans, 0, "round {round} produced an orphaned order");
    }

    state.shutdown().await;
    cleanup(&path);
}
