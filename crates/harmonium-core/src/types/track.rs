//! Track type representing a single playable song.

use serde::{Deserialize, Serialize};

use super::{Duration, Thumbnails};

/// A single track. The `id` is the external video identifier used to
/// resolve an audio stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Track {
    /// External video ID.
    pub id: String,
    /// Track title.
    pub title: String,
    /// Artist name(s).
    pub artists: Vec<TrackArtist>,
    /// Album information (if available).
    pub album: Option<TrackAlbum>,
    /// Track duration.
    pub duration: Duration,
    /// Thumbnail images.
    pub thumbnails: Thumbnails,
}

impl Track {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artists: Vec::new(),
            album: None,
            duration: Duration::default(),
            thumbnails: Thumbnails::default(),
        }
    }

    /// Get the primary artist name.
    pub fn artist_name(&self) -> &str {
        self.artists.first().map_or("", |a| a.name.as_str())
    }

    /// Get all artist names joined.
    pub fn artists_display(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Get album name if available.
    pub fn album_name(&self) -> Option<&str> {
        self.album.as_ref().map(|a| a.name.as_str())
    }
}

/// Artist reference within a track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackArtist {
    /// Artist channel ID (if available).
    pub id: Option<String>,
    /// Artist name.
    pub name: String,
}

impl TrackArtist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Album reference within a track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackAlbum {
    /// Album ID.
    pub id: Option<String>,
    /// Album name.
    pub name: String,
}

impl TrackAlbum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_creation() {
        let track = Track::new("abc123", "Test Song");
        assert_eq!(track.id, "abc123");
        assert_eq!(track.title, "Test Song");
        assert!(track.album.is_none());
    }

    #[test]
    fn test_track_artists_display() {
        let mut track = Track::new("id", "Title");
        track.artists = vec![TrackArtist::new("Artist 1"), TrackArtist::new("Artist 2")];
        assert_eq!(track.artists_display(), "Artist 1, Artist 2");
        assert_eq!(track.artist_name(), "Artist 1");
    }
}
