//! Playlist records and the offline mock catalogue.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<Artist>,
    pub album: Album,
    pub preview_url: Option<String>,
}

/// A list of tracks picked for a mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub mood: String,
    pub tracks: Vec<Track>,
    pub total: usize,
    /// True when the tracks come from the built-in catalogue
    pub mock: bool,
}

fn track(id: &str, name: &str, artist: &str, cover: &str, preview_url: Option<&str>) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![Artist {
            name: artist.to_string(),
        }],
        album: Album {
            images: vec![Image {
                url: format!("https://via.placeholder.com/300x300/{cover}"),
            }],
        },
        preview_url: preview_url.map(str::to_string),
    }
}

fn mock_tracks(mood: &str) -> Option<Vec<Track>> {
    let tracks = match mood {
        "happy" => vec![
            track(
                "1",
                "Happy",
                "Pharrell Williams",
                "FFD700/000000?text=😊",
                Some("https://www.soundjay.com/misc/sounds/bell-ringing-05.wav"),
            ),
            track("2", "Good as Hell", "Lizzo", "FF69B4/000000?text=🎉", None),
        ],
        "sad" => vec![track(
            "3",
            "Someone Like You",
            "Adele",
            "4169E1/FFFFFF?text=😢",
            None,
        )],
        "stressed" => vec![track(
            "4",
            "Weightless",
            "Marconi Union",
            "98FB98/000000?text=🧘",
            None,
        )],
        "calm" => vec![track(
            "5",
            "Claire de Lune",
            "Claude Debussy",
            "E6E6FA/000000?text=🌙",
            None,
        )],
        _ => return None,
    };
    Some(tracks)
}

/// Build a playlist for `mood` from the built-in catalogue.
///
/// Moods without catalogue entries get the happy tracks. The playlist keeps
/// the requested mood label.
pub fn mock_playlist(mood: &str) -> Playlist {
    let tracks = mock_tracks(&mood.to_ascii_lowercase())
        .or_else(|| mock_tracks("happy"))
        .unwrap_or_default();

    Playlist {
        mood: mood.to_string(),
        total: tracks.len(),
        tracks,
        mock: true,
    }
}
