//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    middleware::logging_middleware,
    state::AppState,
};
use axum::{middleware, Router};
use roster_config::ServerConfig;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        .nest("/user", user_controller::router())
        .with_state(state)
        .merge(health_controller::router())
        .layer(create_cors_layer(server_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with user CRUD endpoints");
    router
}

fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}
