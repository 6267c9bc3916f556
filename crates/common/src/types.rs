use serde::{Deserialize, Serialize};

/// Result of a mood detection.
///
/// Serialized in field order: `mood`, `confidence`, `source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    /// Detected mood label
    pub mood: String,

    /// Confidence score in `[0, 1]`
    pub confidence: f64,

    /// Where the result came from
    pub source: String,
}

impl MoodResult {
    /// The fixed result returned while no detector is wired in.
    pub fn mock() -> Self {
        Self {
            mood: "happy".to_string(),
            confidence: 0.99,
            source: "mock".to_string(),
        }
    }
}
