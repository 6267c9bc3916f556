use axum::http::Uri;

use mood_common::error::AppError;

/// Catch-all for unmatched paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
