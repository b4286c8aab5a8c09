//! Router configuration for the demo server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::extension::{Bootstrap, HostApp};

use super::handlers;
use super::AppState;

/// Build the full application: the Bootstrap extension plus the demo pages.
pub fn create_app(config: AppConfig) -> Router {
    let mut app = HostApp::new(config);
    let bootstrap = Bootstrap::init_app(&mut app);

    app.merge(create_router(AppState { bootstrap }));
    app.into_router().layer(CorsLayer::permissive())
}

/// Create the router for the demo pages.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .with_state(state)
}
