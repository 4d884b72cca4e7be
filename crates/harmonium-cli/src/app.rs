//! Command dispatch for the interactive menu.

use harmonium_core::{Error, PlaybackStatus, Result, Track};
use harmonium_innertube::InnerTubeClient;
use harmonium_player::{MpvPlayer, PlaybackController};
use harmonium_resolver::YtDlpResolver;
use harmonium_search::SearchService;
use tracing::{debug, warn};

use crate::display;

/// Default per-category result limit for fresh searches.
const DEFAULT_LIMIT: usize = 20;

type Player = PlaybackController<MpvPlayer, YtDlpResolver>;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    search: SearchService<InnerTubeClient>,
    playback: Option<Player>,
    /// Song results of the most recent search/more-songs call, indexed
    /// by the play/queue/download commands.
    last_songs: Vec<Track>,
}

impl App {
    pub fn new() -> Result<Self> {
        let search = SearchService::new(InnerTubeClient::new()?);

        // Playback is optional: without a working mpv the menu still
        // searches.
        let playback = match MpvPlayer::new() {
            Ok(player) => Some(PlaybackController::new(player, YtDlpResolver::new())),
            Err(e) => {
                warn!("mpv unavailable, running search-only: {e}");
                None
            }
        };

        Ok(Self {
            search,
            playback,
            last_songs: Vec::new(),
        })
    }

    /// Poll the player once per loop iteration; this is the external
    /// driver for end-of-track auto-advance.
    pub async fn tick(&mut self) {
        if let Some(playback) = &mut self.playback {
            if let Err(e) = playback.check_ended().await {
                debug!("Playback poll failed: {e}");
            }
        }
    }

    /// Dispatch one command line. Errors are returned to the caller for
    /// printing; they never abort the loop.
    pub async fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(Flow::Continue);
        };
        let rest = line[command.len()..].trim();

        match command {
            "search" => {
                if rest.is_empty() {
                    return Err(Error::InvalidArgument("usage: search <query>".into()));
                }
                let results = self.search.search(rest, Some(DEFAULT_LIMIT)).await?;
                self.last_songs = results.songs.clone();
                display::print_results(&results);
            }
            "more-songs" => {
                let songs = self.search.more_songs().await?;
                self.last_songs = songs.clone();
                display::print_tracks(&songs);
                if songs.is_empty() {
                    println!("No more songs.");
                }
            }
            "more-artists" => {
                let artists = self.search.more_artists().await?;
                display::print_artists(&artists);
                if artists.is_empty() {
                    println!("No more artists.");
                }
            }
            "more-albums" => {
                let albums = self.search.more_albums().await?;
                display::print_albums(&albums);
                if albums.is_empty() {
                    println!("No more albums.");
                }
            }
            "more-playlists" => {
                let playlists = self.search.more_playlists().await?;
                display::print_playlists(&playlists);
                if playlists.is_empty() {
                    println!("No more playlists.");
                }
            }
            "more-all" => {
                let results = self.search.more_all().await?;
                if !results.songs.is_empty() {
                    self.last_songs = results.songs.clone();
                }
                display::print_results(&results);
            }
            "play" => {
                let track = self.selected_track(rest)?;
                let playback = self.playback_mut()?;
                playback.load_media(track.clone()).await?;
                playback.play()?;
                println!("Playing: {} - {}", track.title, track.artists_display());
            }
            "queue" => {
                let track = self.selected_track(rest)?;
                self.playback_mut()?.queue_media(track.clone());
                println!("Queued: {}", track.title);
            }
            "pause" => {
                self.playback_mut()?.pause(|status| {
                    let label = match status {
                        PlaybackStatus::Paused => "Paused",
                        _ => "Playing",
                    };
                    println!("{label}");
                })?;
            }
            "resume" => {
                self.playback_mut()?.play()?;
            }
            "stop" => {
                self.playback_mut()?.stop()?;
            }
            "next" => match self.playback_mut()?.next().await? {
                Some(track) => {
                    let playback = self.playback_mut()?;
                    playback.play()?;
                    println!("Playing: {}", track.title);
                }
                None => println!("Queue is empty."),
            },
            "list-queue" => {
                let queue = self.playback_mut()?.view_queue();
                if queue.is_empty() {
                    println!("Queue is empty.");
                } else {
                    display::print_tracks(&queue);
                }
            }
            "download" => {
                let track = self.selected_track(rest)?;
                let playback = self.playback_mut()?;
                let dir = YtDlpResolver::new().download_dir().to_path_buf();
                let path = playback.download_media(&track, &dir).await?;
                println!("Downloaded to {}", path.display());
            }
            "help" => display::print_help(),
            "exit" | "quit" => return Ok(Flow::Quit),
            other => {
                return Err(Error::InvalidArgument(format!(
                    "unknown command: {other} (try help)"
                )));
            }
        }

        Ok(Flow::Continue)
    }

    fn playback_mut(&mut self) -> Result<&mut Player> {
        self.playback
            .as_mut()
            .ok_or_else(|| Error::Player("playback unavailable (mpv not running)".into()))
    }

    fn selected_track(&self, arg: &str) -> Result<Track> {
        let index: usize = arg
            .parse()
            .map_err(|_| Error::InvalidArgument("expected a song number".into()))?;
        self.last_songs
            .get(index.checked_sub(1).unwrap_or(usize::MAX))
            .cloned()
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "no song {index}; run a search first (1-{})",
                    self.last_songs.len()
                ))
            })
    }
}
