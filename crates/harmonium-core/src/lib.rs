//! # harmonium-core
//!
//! Core types, traits, and error handling for the Harmonium music player.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, HttpError, Result};
pub use traits::{MediaPlayer, SearchBackend, StreamResolver};
pub use types::*;
