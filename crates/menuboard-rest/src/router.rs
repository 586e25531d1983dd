//! Main application router.

use crate::{
    controllers::{health_controller, menu_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use menuboard_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let router = Router::new()
        // Health endpoints
        .merge(health_controller::router())
        // Menu catalog
        .nest("/menu", menu_controller::router())
        .with_state(state)
        // Swagger UI and OpenAPI spec
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Root endpoint
        .route("/", get(root))
        // Add middleware layers
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Menuboard API v1"
}
