//! Track recommendation route.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mood_common::error::AppError;
use mood_common::playlist::{Playlist, mock_playlist};
use mood_common::profile::{DEFAULT_CONFIDENCE, MoodProfile, profile_for};

pub fn router() -> Router {
    Router::new().route("/api/recommendations", post(recommend))
}

/// Request body for recommendations.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    /// Mood label, e.g. "happy"
    pub mood: Option<String>,
    /// Confidence in the mood label (default: 0.8)
    pub confidence: Option<f64>,
}

/// Response for a successful recommendation.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub mood: String,
    pub confidence: f64,
    pub profile: MoodProfile,
    pub playlist: Playlist,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/recommendations — Audio profile and playlist for a mood.
///
/// A request without a JSON content type is treated as an empty body.
async fn recommend(
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => RecommendationRequest::default(),
        Err(rejection) => return Err(AppError::Validation(rejection.body_text())),
    };

    let mood = req
        .mood
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation("Mood is required".to_string()))?;
    let confidence = req.confidence.unwrap_or(DEFAULT_CONFIDENCE);

    tracing::info!(%mood, confidence, "Getting recommendations");

    Ok(Json(RecommendationResponse {
        success: true,
        profile: profile_for(&mood, confidence),
        playlist: mock_playlist(&mood),
        mood,
        confidence,
        timestamp: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_mood_is_validation_error() {
        let err = recommend(Ok(Json(RecommendationRequest::default())))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Mood is required"));
    }

    #[tokio::test]
    async fn confidence_threshold_reaches_profile() {
        let request = |confidence| RecommendationRequest {
            mood: Some("angry".to_string()),
            confidence: Some(confidence),
        };

        let Json(blended) = recommend(Ok(Json(request(0.59)))).await.unwrap();
        assert!((blended.profile.energy - 0.7).abs() < 1e-9);

        let Json(exact) = recommend(Ok(Json(request(0.6)))).await.unwrap();
        assert_eq!(exact.profile.energy, 0.9);
    }
}
