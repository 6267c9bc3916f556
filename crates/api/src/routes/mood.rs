//! Mood detection route.

use axum::routing::post;
use axum::{Json, Router};

use mood_common::types::MoodResult;

pub fn router() -> Router {
    Router::new().route("/detectMood", post(detect_mood))
}

/// POST /detectMood — Return the mood result.
///
/// Takes no extractors, so the request body is never read and cannot be
/// rejected.
async fn detect_mood() -> Json<MoodResult> {
    let result = MoodResult::mock();
    tracing::debug!(mood = %result.mood, source = %result.source, "mood detected");
    Json(result)
}
