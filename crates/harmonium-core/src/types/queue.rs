//! Playback queue.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::Track;

/// The playback queue: a plain FIFO of tracks. `next` pops the front,
/// `stop` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayQueue {
    items: VecDeque<Track>,
}

impl PlayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track to the end of the queue.
    pub fn push(&mut self, track: Track) {
        self.items.push_back(track);
    }

    /// Remove and return the front track.
    pub fn pop_front(&mut self) -> Option<Track> {
        self.items.pop_front()
    }

    /// Peek at the front track without removing it.
    pub fn front(&self) -> Option<&Track> {
        self.items.front()
    }

    /// Read-only snapshot of the queued tracks, front first.
    pub fn items(&self) -> impl Iterator<Item = &Track> {
        self.items.iter()
    }

    /// Clear the entire queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
