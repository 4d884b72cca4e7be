//! Trait seams for the injectable collaborators: the search backend,
//! the stream resolver, and the native media player. Constructing these
//! explicitly (rather than holding ambient singletons) lets every
//! consumer substitute test doubles.

#![allow(async_fn_in_trait)] // consumed generically, never as dyn

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{
    AlbumSummary, ArtistPreview, PlayerState, PlaylistSummary, ResolvedStream, SearchPage, Track,
};

/// Category-scoped music search with opaque continuation pagination.
///
/// `search_*` issues a fresh query; `continue_*` fetches the next page
/// using a token returned by a previous call. Both return the page items
/// together with the token for the page after (or `None` when exhausted).
pub trait SearchBackend {
    async fn search_songs(&self, query: &str) -> Result<SearchPage<Track>>;
    async fn continue_songs(&self, continuation: &str) -> Result<SearchPage<Track>>;

    async fn search_artists(&self, query: &str) -> Result<SearchPage<ArtistPreview>>;
    async fn continue_artists(&self, continuation: &str) -> Result<SearchPage<ArtistPreview>>;

    async fn search_albums(&self, query: &str) -> Result<SearchPage<AlbumSummary>>;
    async fn continue_albums(&self, continuation: &str) -> Result<SearchPage<AlbumSummary>>;

    async fn search_playlists(&self, query: &str) -> Result<SearchPage<PlaylistSummary>>;
    async fn continue_playlists(&self, continuation: &str) -> Result<SearchPage<PlaylistSummary>>;
}

/// Resolves an external video id to a playable audio stream.
pub trait StreamResolver {
    /// Resolve a direct audio URL for the given video id. Fails with
    /// `Error::MediaResolution` on invalid ids, extraction failures, or
    /// network errors.
    async fn resolve(&self, video_id: &str) -> Result<ResolvedStream>;

    /// Download the audio for the given video id into `dest_dir`,
    /// returning the written path.
    async fn download(&self, video_id: &str, dest_dir: &Path) -> Result<PathBuf>;
}

/// Minimal surface of the native media player driven by the controller.
pub trait MediaPlayer {
    /// Hand the player a new source URL. Does not start playback.
    fn set_source(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback.
    fn play(&mut self) -> Result<()>;

    /// Pause playback.
    fn pause(&mut self) -> Result<()>;

    /// Stop playback and unload the current source.
    fn stop(&mut self) -> Result<()>;

    /// Current player-side state.
    fn state(&mut self) -> Result<PlayerState>;

    /// Normalized playback position, 0.0 to 1.0.
    fn position(&mut self) -> Result<f64>;
}
