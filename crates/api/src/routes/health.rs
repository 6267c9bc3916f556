//! Health check endpoints.

use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/health", get(health_check))
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Whether a live music catalogue is wired in; playlists are mock otherwise
    pub spotify_available: bool,
    pub timestamp: DateTime<Utc>,
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service: "mood-api",
        version: env!("CARGO_PKG_VERSION"),
        spotify_available: false,
        timestamp: Utc::now(),
    })
}
