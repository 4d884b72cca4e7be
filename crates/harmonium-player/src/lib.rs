//! # harmonium-player
//!
//! Playback for Harmonium: a [`PlaybackController`] coordinating a queue
//! and playback state over injected [`harmonium_core::MediaPlayer`] and
//! [`harmonium_core::StreamResolver`] implementations, plus the mpv
//! JSON-IPC driver used as the native player in the CLI.

pub mod controller;
#[cfg(unix)]
pub mod mpv;

pub use controller::PlaybackController;
#[cfg(unix)]
pub use mpv::MpvPlayer;
