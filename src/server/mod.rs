// src/server/mod.rs
//! HTTP surface.
//!
//! `GET /api/species/{code}`, `GET /api/health`, CORS preflight on both.
//! Every API response carries `Access-Control-Allow-Origin: *` and
//! `Content-Type: application/json`, error responses included.

pub mod handlers;

use crate::error::AppError;
use crate::pipeline::SpeciesSource;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SpeciesSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn SpeciesSource>) -> Self {
        Self { source }
    }
}

/// The API routes with their CORS and content-type headers.
pub fn router(state: AppState) -> Router {
    with_api_headers(api_routes().fallback(handlers::not_found).with_state(state))
}

/// The API routes plus static files from `static_dir` for every other path.
///
/// Static responses keep the content type `ServeDir` picks.
pub fn router_with_static(state: AppState, static_dir: &Path) -> Router {
    with_api_headers(api_routes().with_state(state)).fallback_service(ServeDir::new(static_dir))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/health",
            get(handlers::health)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/species",
            get(handlers::missing_code)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/species/",
            get(handlers::missing_code)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        // Catch-all so `US/` or `U/S` reach validation instead of the 404 fallback.
        .route(
            "/api/species/{*code}",
            get(handlers::species)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
}

/// Applies to the routes (and fallback) already on `router`.
fn with_api_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(|e| AppError::Internal {
        message: format!("Listener has no local address: {}", e),
    })?;
    log::info!("WildAtlas listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Internal {
            message: format!("Server error: {}", e),
        })?;

    log::info!("Server stopped");
    Ok(())
}
