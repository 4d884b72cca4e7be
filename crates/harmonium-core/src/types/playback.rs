//! Playback state types.

use serde::{Deserialize, Serialize};

/// Playback state owned by the controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Nothing playing.
    #[default]
    Idle,
    /// Actively playing.
    Playing,
    /// Paused mid-track.
    Paused,
}

/// State reported by the native player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Playing,
    Paused,
    /// The loaded track played to the end.
    Ended,
}

/// A resolved audio stream for a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStream {
    /// Direct audio URL playable by the native player.
    pub url: String,
}

impl ResolvedStream {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
