pub mod fallback;
pub mod health;
pub mod mood;
pub mod recommendations;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the complete API router with all routes.
///
/// The CORS layer wraps the fallback too, so every response carries the
/// permissive cross-origin headers.
pub fn create_router() -> Router {
    Router::new()
        .merge(health::router())
        .merge(mood::router())
        .merge(recommendations::router())
        .fallback(fallback::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
