//! Playback controller: single-track playback plus a FIFO lookahead
//! queue, driving an injected native player.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use harmonium_core::{
    MediaPlayer, PlayQueue, PlaybackStatus, PlayerState, Result, StreamResolver, Track,
};

/// Coordinates the native player, the stream resolver, and the queue.
///
/// State machine: Idle --play--> Playing; Playing --pause--> Paused;
/// Paused --pause--> Playing; {Playing, Paused} --stop--> Idle;
/// Playing --track ends--> Idle, with auto-advance when queued tracks
/// remain. Pausing while Idle is a no-op.
pub struct PlaybackController<P: MediaPlayer, R: StreamResolver> {
    player: P,
    resolver: R,
    queue: PlayQueue,
    current: Option<Track>,
    status: PlaybackStatus,
}

impl<P: MediaPlayer, R: StreamResolver> PlaybackController<P, R> {
    pub fn new(player: P, resolver: R) -> Self {
        Self {
            player,
            resolver,
            queue: PlayQueue::new(),
            current: None,
            status: PlaybackStatus::Idle,
        }
    }

    /// Load a track as the current media, replacing playback and queue.
    ///
    /// The track id is resolved to an audio URL first; a resolution
    /// failure propagates and leaves playback state, current track, and
    /// queue exactly as they were. On success any current playback is
    /// stopped, the queue is cleared, and the player receives the new
    /// source without starting playback.
    pub async fn load_media(&mut self, track: Track) -> Result<()> {
        self.load_track(track).await?;
        self.queue.clear();
        Ok(())
    }

    /// Load a track without touching the queue. Used by `next` and the
    /// end-of-track auto-advance.
    async fn load_track(&mut self, track: Track) -> Result<()> {
        info!("Loading track: {} - {}", track.title, track.artist_name());
        let stream = self.resolver.resolve(&track.id).await?;

        self.halt_player()?;
        self.current = Some(track);
        self.player.set_source(&stream.url)
    }

    /// Start or resume playback of the loaded track.
    pub fn play(&mut self) -> Result<()> {
        self.player.play()?;
        self.status = PlaybackStatus::Playing;
        Ok(())
    }

    /// Toggle pause. The callback is invoked exactly once, synchronously,
    /// with the new state. Pausing while Idle does nothing and does not
    /// invoke the callback.
    pub fn pause(&mut self, on_toggle: impl FnOnce(PlaybackStatus)) -> Result<()> {
        match self.status {
            PlaybackStatus::Idle => return Ok(()),
            PlaybackStatus::Playing => {
                self.player.pause()?;
                self.status = PlaybackStatus::Paused;
            }
            PlaybackStatus::Paused => {
                self.player.play()?;
                self.status = PlaybackStatus::Playing;
            }
        }
        on_toggle(self.status);
        Ok(())
    }

    /// Stop playback and clear the queue. The current track's metadata
    /// is retained.
    pub fn stop(&mut self) -> Result<()> {
        self.halt_player()?;
        self.queue.clear();
        Ok(())
    }

    fn halt_player(&mut self) -> Result<()> {
        self.player.stop()?;
        self.status = PlaybackStatus::Idle;
        Ok(())
    }

    /// Skip to the next queued track (FIFO): stop playback and load the
    /// queue's front element, removing it from the queue. On an empty
    /// queue this just stops. Returns the loaded track, if any.
    pub async fn next(&mut self) -> Result<Option<Track>> {
        match self.queue.pop_front() {
            Some(track) => {
                self.load_track(track.clone()).await?;
                Ok(Some(track))
            }
            None => {
                self.stop()?;
                Ok(None)
            }
        }
    }

    /// One-shot end-of-track poll, meant to be called repeatedly by an
    /// external driver. When the player reports the track ended, the
    /// controller goes Idle and, if tracks are queued, advances to the
    /// next one and starts it. Always returns the player's normalized
    /// position (0.0 to 1.0).
    pub async fn check_ended(&mut self) -> Result<f64> {
        if self.player.state()? == PlayerState::Ended {
            debug!("Track ended");
            self.status = PlaybackStatus::Idle;
            if !self.queue.is_empty() && self.next().await?.is_some() {
                self.play()?;
            }
        }
        self.player.position()
    }

    /// Add a track to the end of the queue.
    pub fn queue_media(&mut self, track: Track) {
        self.queue.push(track);
    }

    /// Read-only snapshot of the queued tracks, front first.
    pub fn view_queue(&self) -> Vec<Track> {
        self.queue.items().cloned().collect()
    }

    /// Metadata of the current track, if one has been loaded.
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Download a track's audio into `dest_dir` via the resolver.
    pub async fn download_media(&self, track: &Track, dest_dir: &Path) -> Result<PathBuf> {
        self.resolver.download(&track.id, dest_dir).await
    }
}
