//! Result rendering for the interactive menu.

use harmonium_core::{AlbumSummary, ArtistPreview, PlaylistSummary, Track};
use harmonium_search::CategoryResults;

pub fn print_results(results: &CategoryResults) {
    if results.is_empty() {
        println!("No results.");
        return;
    }
    print_tracks(&results.songs);
    print_artists(&results.artists);
    print_albums(&results.albums);
    print_playlists(&results.playlists);
}

pub fn print_tracks(tracks: &[Track]) {
    if tracks.is_empty() {
        return;
    }
    println!("Songs:");
    for (i, track) in tracks.iter().enumerate() {
        println!(
            "  [{:>2}] {} - {} ({})",
            i + 1,
            track.title,
            track.artists_display(),
            track.duration.format()
        );
    }
}

pub fn print_artists(artists: &[ArtistPreview]) {
    if artists.is_empty() {
        return;
    }
    println!("Artists:");
    for artist in artists {
        match &artist.subscribers {
            Some(subs) => println!("  - {} ({subs})", artist.name),
            None => println!("  - {}", artist.name),
        }
    }
}

pub fn print_albums(albums: &[AlbumSummary]) {
    if albums.is_empty() {
        return;
    }
    println!("Albums:");
    for album in albums {
        let year = album.year.as_deref().unwrap_or("-");
        println!("  - {} - {} ({year})", album.title, album.artists_display());
    }
}

pub fn print_playlists(playlists: &[PlaylistSummary]) {
    if playlists.is_empty() {
        return;
    }
    println!("Playlists:");
    for playlist in playlists {
        let author = playlist.author.as_deref().unwrap_or("unknown");
        println!("  - {} (by {author})", playlist.title);
    }
}

pub fn print_help() {
    println!(
        "\
Commands:
  search <query>     search songs, artists, albums and playlists
  more-songs         next page of song results
  more-artists       next page of artist results
  more-albums        next page of album results
  more-playlists     next page of playlist results
  more-all           next page for every category
  play <n>           play song <n> from the last song results
  queue <n>          queue song <n> from the last song results
  pause              toggle pause
  resume             resume playback
  stop               stop playback and clear the queue
  next               skip to the next queued song
  list-queue         show the queue
  download <n>       download song <n> from the last song results
  help               show this help
  exit               quit"
    );
}
