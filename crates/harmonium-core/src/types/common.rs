//! Common types shared across the application.

use serde::{Deserialize, Serialize};

/// Thumbnail image with URL and dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Thumbnail {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }
}

/// Collection of thumbnails at different resolutions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thumbnails(pub Vec<Thumbnail>);

impl Thumbnails {
    pub const fn new(thumbnails: Vec<Thumbnail>) -> Self {
        Self(thumbnails)
    }

    /// Get the best quality thumbnail (largest).
    pub fn best(&self) -> Option<&Thumbnail> {
        self.0.iter().max_by_key(|t| t.width * t.height)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Duration in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Duration(pub u64);

impl Duration {
    pub const fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    pub const fn as_seconds(&self) -> u64 {
        self.0
    }

    /// Format as MM:SS or HH:MM:SS.
    pub fn format(&self) -> String {
        let total_secs = self.0;
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        }
    }

    /// Parse a "M:SS" or "H:MM:SS" label into a duration.
    pub fn parse_label(label: &str) -> Option<Self> {
        let mut seconds = 0u64;
        for part in label.split(':') {
            seconds = seconds * 60 + part.trim().parse::<u64>().ok()?;
        }
        Some(Self(seconds))
    }
}

impl From<u64> for Duration {
    fn from(seconds: u64) -> Self {
        Self(seconds)
    }
}

impl From<Duration> for u64 {
    fn from(d: Duration) -> Self {
        d.0
    }
}
