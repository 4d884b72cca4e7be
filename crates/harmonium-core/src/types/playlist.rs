//! Playlist search result type.

use serde::{Deserialize, Serialize};

use super::Thumbnails;

/// A playlist as returned by a category search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistSummary {
    /// Playlist browse ID.
    pub id: String,
    /// Playlist title.
    pub title: String,
    /// Playlist author, if shown.
    pub author: Option<String>,
    /// Track count label, as the backend renders it (e.g. "50 songs").
    pub track_count: Option<String>,
    /// Thumbnail images.
    pub thumbnails: Thumbnails,
}

impl PlaylistSummary {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: None,
            track_count: None,
            thumbnails: Thumbnails::default(),
        }
    }
}
