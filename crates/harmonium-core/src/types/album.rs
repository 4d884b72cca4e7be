//! Album search result type.

use serde::{Deserialize, Serialize};

use super::{Thumbnails, TrackArtist};

/// An album as returned by a category search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumSummary {
    /// Album browse ID.
    pub id: String,
    /// Album title.
    pub title: String,
    /// Credited artists.
    pub artists: Vec<TrackArtist>,
    /// Release year label, if the backend provides one.
    pub year: Option<String>,
    /// Thumbnail images.
    pub thumbnails: Thumbnails,
}

impl AlbumSummary {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artists: Vec::new(),
            year: None,
            thumbnails: Thumbnails::default(),
        }
    }

    /// Get all artist names joined.
    pub fn artists_display(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
