//! Axum web server for the activities API.

use std::path::Path;

use axum::{
    http::{header, Method},
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes::api::api_routes;
use super::state::AppState;
use crate::config::Config;

/// Path the root endpoint redirects to.
const LANDING_PAGE: &str = "/static/index.html";

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Health check endpoint handler.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Redirect the root to the static landing page (307).
async fn root_redirect() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState, cors_permissive: bool, static_dir: &Path) -> Router {
    let cors = if cors_permissive {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health))
        .merge(api_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
///
/// This starts the Axum server and blocks until shutdown.
pub async fn run_server(state: AppState, config: Config) -> anyhow::Result<()> {
    let app = build_router(state, config.cors_permissive, &config.static_dir);

    tracing::info!("Starting activities API at http://{}", config.bind_addr());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
