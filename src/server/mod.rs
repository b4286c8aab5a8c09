//! Demo web server.
//!
//! Mounts the Bootstrap extension on an axum app and renders a sign-up page
//! whose stylesheet and script tags come from the helpers.

mod handlers;
mod routes;
mod template_structs;

pub use routes::{create_app, create_router};

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::extension::Bootstrap;

/// Shared state for the demo pages.
#[derive(Clone)]
pub struct AppState {
    pub bootstrap: Arc<Bootstrap>,
}

/// Start the web server.
pub async fn serve(config: AppConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_app(config);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
