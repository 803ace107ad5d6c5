mod order;
mod product;
mod user;

use crate::{state::AppState, utils::shutdown_signal};
use anyhow::Result;
use axum::{Json, Router, extract::DefaultBodyLimit, routing::get};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,

        order::get_orders,
        order::get_order,
        order::create_order,
        order::update_order,
        order::delete_order,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
        (name = "User", description = "User endpoints"),
        (name = "Order", description = "Order endpoints, delete is unguarded"),
    )
)]
struct ApiDoc;

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub struct AppRouter;

impl AppRouter {
    /// Assembles the full application router. Tests drive this router
    /// directly, without binding a socket.
    pub fn build(app_state: Arc<AppState>) -> Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/health", get(health_handler))
            .merge(product_routes(app_state.clone()))
            .merge(user_routes(app_state.clone()))
            .merge(order_routes(app_state));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);
        let app = Self::build(shared_state.clone());

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📚 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        shared_state.shutdown().await;

        Ok(())
    }
}
