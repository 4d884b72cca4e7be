//! Response parsers for `InnerTube` search responses.
//!
//! Searches are issued with a category filter, so every shelf in a
//! response holds items of a single kind; each `parse_*_page` function
//! walks the renderer tree for its category and carries the shelf
//! continuation token through untouched.

use harmonium_core::{
    AlbumSummary, ArtistPreview, Duration, PlaylistSummary, SearchPage, Thumbnail, Thumbnails,
    Track, TrackAlbum, TrackArtist,
};

use crate::types::{
    MusicResponsiveListItemRenderer, RawSearchResponse, ShelfItem, TextRuns, ThumbnailRenderer,
};

/// Parse a songs search or continuation response.
pub fn parse_song_page(response: &RawSearchResponse) -> SearchPage<Track> {
    parse_page(response, parse_track_from_renderer)
}

/// Parse an artists search or continuation response.
pub fn parse_artist_page(response: &RawSearchResponse) -> SearchPage<ArtistPreview> {
    parse_page(response, parse_artist_from_renderer)
}

/// Parse an albums search or continuation response.
pub fn parse_album_page(response: &RawSearchResponse) -> SearchPage<AlbumSummary> {
    parse_page(response, parse_album_from_renderer)
}

/// Parse a playlists search or continuation response.
pub fn parse_playlist_page(response: &RawSearchResponse) -> SearchPage<PlaylistSummary> {
    parse_page(response, parse_playlist_from_renderer)
}

fn parse_page<T>(
    response: &RawSearchResponse,
    parse_item: impl Fn(&MusicResponsiveListItemRenderer) -> Option<T>,
) -> SearchPage<T> {
    let mut page = SearchPage::empty();

    // Fresh search: shelves live under the tabbed search results renderer.
    if let Some(contents) = &response.contents {
        if let Some(tabbed) = &contents.tabbed_search_results_renderer {
            for tab in &tabbed.tabs {
                let section_list = tab
                    .tab_renderer
                    .as_ref()
                    .and_then(|t| t.content.as_ref())
                    .and_then(|c| c.section_list_renderer.as_ref());

                let Some(section_list) = section_list else {
                    continue;
                };

                for section in section_list.contents.as_deref().unwrap_or_default() {
                    if let Some(shelf) = &section.music_shelf_renderer {
                        collect_items(shelf.contents.as_deref(), &parse_item, &mut page.items);
                        if page.continuation.is_none() {
                            page.continuation = first_continuation(shelf.continuations.as_deref());
                        }
                    }
                }

                if page.continuation.is_none() {
                    page.continuation = first_continuation(section_list.continuations.as_deref());
                }
            }
        }
    }

    // Continuation request: a bare shelf continuation.
    if let Some(cont) = &response.continuation_contents {
        if let Some(shelf) = &cont.music_shelf_continuation {
            collect_items(shelf.contents.as_deref(), &parse_item, &mut page.items);
            page.continuation = first_continuation(shelf.continuations.as_deref());
        }
    }

    page
}

fn collect_items<T>(
    items: Option<&[ShelfItem]>,
    parse_item: impl Fn(&MusicResponsiveListItemRenderer) -> Option<T>,
    out: &mut Vec<T>,
) {
    for item in items.unwrap_or_default() {
        if let Some(renderer) = &item.music_responsive_list_item_renderer {
            if let Some(parsed) = parse_item(renderer) {
                out.push(parsed);
            }
        }
    }
}

fn first_continuation(continuations: Option<&[crate::types::Continuation]>) -> Option<String> {
    continuations?
        .first()?
        .next_continuation_data
        .as_ref()
        .map(|d| d.continuation.clone())
}

fn parse_track_from_renderer(renderer: &MusicResponsiveListItemRenderer) -> Option<Track> {
    let video_id = renderer
        .navigation_endpoint
        .as_ref()
        .and_then(|n| n.watch_endpoint.as_ref())
        .map(|w| w.video_id.clone())
        .or_else(|| {
            renderer
                .play_endpoint
                .as_ref()
                .and_then(|p| p.watch_endpoint.as_ref())
                .map(|w| w.video_id.clone())
        })
        .or_else(|| {
            // Songs often carry the watch endpoint on the title run instead.
            flex_column_runs(renderer, 0)?.iter().find_map(|run| {
                run.navigation_endpoint
                    .as_ref()?
                    .watch_endpoint
                    .as_ref()
                    .map(|w| w.video_id.clone())
            })
        })?;

    let title = flex_column_text(renderer, 0)?;

    let mut track = Track::new(video_id, title);

    // Second column: artist(s) and album.
    if let Some(runs) = flex_column_runs(renderer, 1) {
        for run in runs {
            if let Some(browse) = run
                .navigation_endpoint
                .as_ref()
                .and_then(|n| n.browse_endpoint.as_ref())
            {
                if browse.browse_id.starts_with("UC") {
                    track
                        .artists
                        .push(TrackArtist::new(&run.text).with_id(browse.browse_id.clone()));
                } else if browse.browse_id.starts_with("MPREb") {
                    track.album =
                        Some(TrackAlbum::new(&run.text).with_id(browse.browse_id.clone()));
                }
            } else if !is_separator(&run.text) && track.artists.is_empty() && track.album.is_none()
            {
                // Plain text artist name without navigation.
                track.artists.push(TrackArtist::new(&run.text));
            }
        }
    }

    // Duration from the fixed column label.
    let duration_label = renderer
        .fixed_columns
        .as_ref()
        .and_then(|cols| cols.first())
        .and_then(|c| c.music_responsive_list_item_fixed_column_renderer.as_ref())
        .and_then(|r| r.text.as_ref())
        .map(TextRuns::text);
    if let Some(label) = duration_label {
        track.duration = Duration::parse_label(&label).unwrap_or_default();
    }

    track.thumbnails = parse_thumbnails(renderer.thumbnail.as_ref());

    Some(track)
}

fn parse_artist_from_renderer(renderer: &MusicResponsiveListItemRenderer) -> Option<ArtistPreview> {
    let browse_id = item_browse_id(renderer)?;
    let name = flex_column_text(renderer, 0)?;

    let mut artist = ArtistPreview::new(browse_id, name);

    // Second column: "Artist • 1.2M subscribers".
    if let Some(runs) = flex_column_runs(renderer, 1) {
        artist.subscribers = runs
            .iter()
            .map(|r| r.text.as_str())
            .find(|t| t.contains("subscriber"))
            .map(str::to_string);
    }

    artist.thumbnails = parse_thumbnails(renderer.thumbnail.as_ref());

    Some(artist)
}

fn parse_album_from_renderer(renderer: &MusicResponsiveListItemRenderer) -> Option<AlbumSummary> {
    let browse_id = item_browse_id(renderer)?;
    let title = flex_column_text(renderer, 0)?;

    let mut album = AlbumSummary::new(browse_id, title);

    // Second column: "Album • Artist • 2021".
    if let Some(runs) = flex_column_runs(renderer, 1) {
        for run in runs {
            let text = run.text.trim();

            if let Some(browse) = run
                .navigation_endpoint
                .as_ref()
                .and_then(|n| n.browse_endpoint.as_ref())
            {
                if browse.browse_id.starts_with("UC") {
                    album
                        .artists
                        .push(TrackArtist::new(text).with_id(browse.browse_id.clone()));
                }
            } else if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
                album.year = Some(text.to_string());
            }
        }
    }

    album.thumbnails = parse_thumbnails(renderer.thumbnail.as_ref());

    Some(album)
}

fn parse_playlist_from_renderer(
    renderer: &MusicResponsiveListItemRenderer,
) -> Option<PlaylistSummary> {
    let browse_id = item_browse_id(renderer)?;
    let title = flex_column_text(renderer, 0)?;

    let mut playlist = PlaylistSummary::new(browse_id, title);

    // Second column: "Playlist • Author • 50 songs".
    if let Some(runs) = flex_column_runs(renderer, 1) {
        for run in runs {
            let text = run.text.trim();
            if is_separator(&run.text) || text.eq_ignore_ascii_case("playlist") {
                continue;
            }
            if text.contains("song") || text.contains("view") {
                playlist.track_count = Some(text.to_string());
            } else if playlist.author.is_none() {
                playlist.author = Some(text.to_string());
            }
        }
    }

    playlist.thumbnails = parse_thumbnails(renderer.thumbnail.as_ref());

    Some(playlist)
}

fn item_browse_id(renderer: &MusicResponsiveListItemRenderer) -> Option<String> {
    renderer
        .navigation_endpoint
        .as_ref()
        .and_then(|n| n.browse_endpoint.as_ref())
        .map(|b| b.browse_id.clone())
}

fn flex_column_text(renderer: &MusicResponsiveListItemRenderer, index: usize) -> Option<String> {
    let text = renderer
        .flex_columns
        .as_ref()?
        .get(index)?
        .music_responsive_list_item_flex_column_renderer
        .as_ref()?
        .text
        .as_ref()?
        .text();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn flex_column_runs(
    renderer: &MusicResponsiveListItemRenderer,
    index: usize,
) -> Option<&[crate::types::TextRun]> {
    renderer
        .flex_columns
        .as_ref()?
        .get(index)?
        .music_responsive_list_item_flex_column_renderer
        .as_ref()?
        .text
        .as_ref()?
        .runs
        .as_deref()
}

fn is_separator(text: &str) -> bool {
    matches!(text, " • " | " & " | ", ")
}

fn parse_thumbnails(renderer: Option<&ThumbnailRenderer>) -> Thumbnails {
    let items = renderer
        .and_then(|r| r.music_thumbnail_renderer.as_ref())
        .and_then(|r| r.thumbnail.as_ref())
        .and_then(|t| t.thumbnails.as_ref());

    Thumbnails::new(
        items
            .map(|items| {
                items
                    .iter()
                    .map(|t| {
                        Thumbnail::new(
                            t.url.clone(),
                            t.width.unwrap_or_default(),
                            t.height.unwrap_or_default(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn song_response(continuation: Option<&str>) -> RawSearchResponse {
        let continuations = continuation.map_or(serde_json::json!(null), |token| {
            serde_json::json!([{ "nextContinuationData": { "continuation": token } }])
        });

        serde_json::from_value(serde_json::json!({
            "contents": {
                "tabbedSearchResultsRenderer": {
                    "tabs": [{
                        "tabRenderer": {
                            "content": {
                                "sectionListRenderer": {
                                    "contents": [{
                                        "musicShelfRenderer": {
                                            "title": { "runs": [{ "text": "Songs" }] },
                                            "contents": [{
                                                "musicResponsiveListItemRenderer": {
                                                    "flexColumns": [
                                                        {
                                                            "musicResponsiveListItemFlexColumnRenderer": {
                                                                "text": {
                                                                    "runs": [{
                                                                        "text": "Midnight City",
                                                                        "navigationEndpoint": {
                                                                            "watchEndpoint": { "videoId": "dX3k_QDnzHE" }
                                                                        }
                                                                    }]
                                                                }
                                                            }
                                                        },
                                                        {
                                                            "musicResponsiveListItemFlexColumnRenderer": {
                                                                "text": {
                                                                    "runs": [
                                                                        {
                                                                            "text": "M83",
                                                                            "navigationEndpoint": {
                                                                                "browseEndpoint": { "browseId": "UC2Xd3kL" }
                                                                            }
                                                                        },
                                                                        { "text": " • " },
                                                                        {
                                                                            "text": "Hurry Up, We're Dreaming",
                                                                            "navigationEndpoint": {
                                                                                "browseEndpoint": { "browseId": "MPREb_abc" }
                                                                            }
                                                                        }
                                                                    ]
                                                                }
                                                            }
                                                        }
                                                    ],
                                                    "fixedColumns": [{
                                                        "musicResponsiveListItemFixedColumnRenderer": {
                                                            "text": { "runs": [{ "text": "4:03" }] }
                                                        }
                                                    }]
                                                }
                                            }],
                                            "continuations": continuations
                                        }
                                    }]
                                }
                            }
                        }
                    }]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_song_page() {
        let page = parse_song_page(&song_response(Some("token-1")));
        assert_eq!(page.items.len(), 1);

        let track = &page.items[0];
        assert_eq!(track.id, "dX3k_QDnzHE");
        assert_eq!(track.title, "Midnight City");
        assert_eq!(track.artist_name(), "M83");
        assert_eq!(track.album_name(), Some("Hurry Up, We're Dreaming"));
        assert_eq!(track.duration.as_seconds(), 243);
        assert_eq!(page.continuation.as_deref(), Some("token-1"));
    }

    #[test]
    fn test_parse_song_page_without_continuation() {
        let page = parse_song_page(&song_response(None));
        assert_eq!(page.items.len(), 1);
        assert!(page.continuation.is_none());
    }

    #[test]
    fn test_parse_continuation_response() {
        let response: RawSearchResponse = serde_json::from_value(serde_json::json!({
            "continuationContents": {
                "musicShelfContinuation": {
                    "contents": [{
                        "musicResponsiveListItemRenderer": {
                            "navigationEndpoint": {
                                "watchEndpoint": { "videoId": "v2" }
                            },
                            "flexColumns": [{
                                "musicResponsiveListItemFlexColumnRenderer": {
                                    "text": { "runs": [{ "text": "Second Page Song" }] }
                                }
                            }]
                        }
                    }],
                    "continuations": [{ "nextContinuationData": { "continuation": "token-2" } }]
                }
            }
        }))
        .unwrap();

        let page = parse_song_page(&response);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "v2");
        assert_eq!(page.continuation.as_deref(), Some("token-2"));
    }

    #[test]
    fn test_parse_artist_page() {
        let response: RawSearchResponse = serde_json::from_value(serde_json::json!({
            "continuationContents": {
                "musicShelfContinuation": {
                    "contents": [{
                        "musicResponsiveListItemRenderer": {
                            "navigationEndpoint": {
                                "browseEndpoint": { "browseId": "UCartist" }
                            },
                            "flexColumns": [
                                {
                                    "musicResponsiveListItemFlexColumnRenderer": {
                                        "text": { "runs": [{ "text": "M83" }] }
                                    }
                                },
                                {
                                    "musicResponsiveListItemFlexColumnRenderer": {
                                        "text": { "runs": [
                                            { "text": "Artist" },
                                            { "text": " • " },
                                            { "text": "2.5M subscribers" }
                                        ] }
                                    }
                                }
                            ]
                        }
                    }]
                }
            }
        }))
        .unwrap();

        let page = parse_artist_page(&response);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "UCartist");
        assert_eq!(page.items[0].name, "M83");
        assert_eq!(page.items[0].subscribers.as_deref(), Some("2.5M subscribers"));
        assert!(page.continuation.is_none());
    }

    #[test]
    fn test_item_without_id_is_skipped() {
        let response: RawSearchResponse = serde_json::from_value(serde_json::json!({
            "continuationContents": {
                "musicShelfContinuation": {
                    "contents": [{
                        "musicResponsiveListItemRenderer": {
                            "flexColumns": [{
                                "musicResponsiveListItemFlexColumnRenderer": {
                                    "text": { "runs": [{ "text": "No watch endpoint" }] }
                                }
                            }]
                        }
                    }]
                }
            }
        }))
        .unwrap();

        assert!(parse_song_page(&response).is_empty());
    }
}
