//! Core domain types for Harmonium.

pub mod album;
pub mod artist;
pub mod category;
pub mod common;
pub mod playback;
pub mod playlist;
pub mod queue;
pub mod search;
pub mod track;

pub use album::AlbumSummary;
pub use artist::ArtistPreview;
pub use category::Category;
pub use common::*;
pub use playback::{PlaybackStatus, PlayerState, ResolvedStream};
pub use playlist::PlaylistSummary;
pub use queue::PlayQueue;
pub use search::SearchPage;
pub use track::{Track, TrackAlbum, TrackArtist};
