//! Mood → audio feature profiles used to shape track recommendations.

use serde::Serialize;

/// Confidence below which valence and energy are pulled toward neutral.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Confidence assumed when a caller does not send one.
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Inclusive tempo range in BPM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempoRange {
    pub min: u32,
    pub max: u32,
}

/// Target audio features for a mood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodProfile {
    pub mood: &'static str,
    pub valence: f64,
    pub energy: f64,
    pub danceability: f64,
    pub tempo: TempoRange,
    pub genres: &'static [&'static str],
    pub market: &'static str,
    pub limit: u32,
}

const fn profile(
    mood: &'static str,
    valence: f64,
    energy: f64,
    danceability: f64,
    tempo: (u32, u32),
    genres: &'static [&'static str],
) -> MoodProfile {
    MoodProfile {
        mood,
        valence,
        energy,
        danceability,
        tempo: TempoRange {
            min: tempo.0,
            max: tempo.1,
        },
        genres,
        market: "US",
        limit: 20,
    }
}

pub const NEUTRAL: MoodProfile = profile(
    "neutral",
    0.5,
    0.5,
    0.5,
    (90, 120),
    &["indie", "alternative", "folk"],
);

/// Every mood with a known profile.
pub const MOOD_PROFILES: [MoodProfile; 7] = [
    profile(
        "happy",
        0.8,
        0.7,
        0.6,
        (110, 140),
        &["pop", "indie-pop", "funk", "disco"],
    ),
    profile(
        "sad",
        0.2,
        0.3,
        0.2,
        (60, 90),
        &["acoustic", "indie-folk", "singer-songwriter", "ambient"],
    ),
    profile(
        "angry",
        0.3,
        0.9,
        0.4,
        (120, 180),
        &["rock", "metal", "punk", "hardcore"],
    ),
    profile(
        "calm",
        0.5,
        0.2,
        0.3,
        (50, 80),
        &["ambient", "chill", "lo-fi", "classical"],
    ),
    profile(
        "excited",
        0.9,
        0.9,
        0.8,
        (120, 160),
        &["dance", "electronic", "party", "house"],
    ),
    // Soothing rather than matching: positive but low energy.
    profile(
        "stressed",
        0.6,
        0.3,
        0.2,
        (60, 100),
        &["chill", "lo-fi", "ambient", "meditation"],
    ),
    NEUTRAL,
];

/// Look up the profile for `mood` (case-insensitive) and adjust it for
/// `confidence`.
///
/// Unknown moods get the neutral profile as-is. Below
/// [`LOW_CONFIDENCE_THRESHOLD`], valence and energy are averaged with 0.5.
pub fn profile_for(mood: &str, confidence: f64) -> MoodProfile {
    let Some(base) = MOOD_PROFILES
        .iter()
        .find(|p| p.mood.eq_ignore_ascii_case(mood))
    else {
        tracing::warn!(mood, "Unknown mood, using neutral profile");
        return NEUTRAL;
    };

    let mut adjusted = *base;
    if confidence < LOW_CONFIDENCE_THRESHOLD {
        adjusted.valence = (base.valence + 0.5) / 2.0;
        adjusted.energy = (base.energy + 0.5) / 2.0;
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn confident_happy_is_unchanged() {
        let p = profile_for("happy", 0.6);
        assert_close(p.valence, 0.8);
        assert_close(p.energy, 0.7);
        assert_close(p.danceability, 0.6);
        assert_eq!(p.tempo, TempoRange { min: 110, max: 140 });
    }

    #[test]
    fn low_confidence_blends_toward_neutral() {
        let p = profile_for("happy", 0.59);
        assert_close(p.valence, 0.65);
        assert_close(p.energy, 0.6);
        // Danceability and tempo are not blended
        assert_close(p.danceability, 0.6);
        assert_eq!(p.tempo, TempoRange { min: 110, max: 140 });
    }

    #[test]
    fn unknown_mood_falls_back_to_neutral() {
        assert_eq!(profile_for("bored", 0.9), NEUTRAL);
        assert_eq!(profile_for("bored", 0.1), NEUTRAL);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(profile_for("ANGRY", 0.9).mood, "angry");
    }

    #[test]
    fn every_profile_is_in_range() {
        for p in MOOD_PROFILES {
            for feature in [p.valence, p.energy, p.danceability] {
                assert!((0.0..=1.0).contains(&feature), "{}: {feature}", p.mood);
            }
            assert!(p.tempo.min < p.tempo.max, "{}", p.mood);
            assert!(p.genres.len() <= 5, "{}", p.mood);
        }
    }
}
