//! Artist search result type.

use serde::{Deserialize, Serialize};

use super::Thumbnails;

/// An artist as returned by a category search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistPreview {
    /// Artist channel ID.
    pub id: String,
    /// Artist name.
    pub name: String,
    /// Subscriber count label, as the backend renders it (e.g. "1.2M subscribers").
    pub subscribers: Option<String>,
    /// Thumbnail images.
    pub thumbnails: Thumbnails,
}

impl ArtistPreview {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subscribers: None,
            thumbnails: Thumbnails::default(),
        }
    }
}
