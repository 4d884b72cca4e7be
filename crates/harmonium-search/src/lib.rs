//! # harmonium-search
//!
//! Category-scoped paginated search over any [`SearchBackend`].
//!
//! [`SearchService`] issues the four category searches (songs, artists,
//! albums, playlists) and tracks one opaque continuation cursor per
//! category for "load more" pagination. The cursors are the only state
//! this service keeps; backend failures propagate to the caller
//! untouched, and an exhausted cursor yields an empty page instead of a
//! backend call.

use harmonium_core::{
    AlbumSummary, ArtistPreview, Category, PlaylistSummary, Result, SearchBackend, SearchPage,
    Track,
};
use tracing::debug;

/// First pages (or "more" pages) for all four categories of one query.
#[derive(Debug, Clone, Default)]
pub struct CategoryResults {
    pub songs: Vec<Track>,
    pub artists: Vec<ArtistPreview>,
    pub albums: Vec<AlbumSummary>,
    pub playlists: Vec<PlaylistSummary>,
}

impl CategoryResults {
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
            && self.artists.is_empty()
            && self.albums.is_empty()
            && self.playlists.is_empty()
    }
}

/// One continuation cursor per category. `None` means no further page.
#[derive(Debug, Clone, Default)]
struct Cursors {
    songs: Option<String>,
    artists: Option<String>,
    albums: Option<String>,
    playlists: Option<String>,
}

impl Cursors {
    fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Songs => self.songs.as_deref(),
            Category::Artists => self.artists.as_deref(),
            Category::Albums => self.albums.as_deref(),
            Category::Playlists => self.playlists.as_deref(),
        }
    }

    fn set(&mut self, category: Category, token: Option<String>) {
        match category {
            Category::Songs => self.songs = token,
            Category::Artists => self.artists = token,
            Category::Albums => self.albums = token,
            Category::Playlists => self.playlists = token,
        }
    }
}

/// Search service owning the per-category continuation state.
pub struct SearchService<B: SearchBackend> {
    backend: B,
    cursors: Cursors,
}

impl<B: SearchBackend> SearchService<B> {
    /// Create a new service with fresh (exhausted) cursors.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cursors: Cursors::default(),
        }
    }

    /// Search all four categories for the same query.
    ///
    /// Each category's continuation cursor is overwritten with the token
    /// from its response. When `limit` is given, every category's items
    /// are truncated to at most `limit` entries.
    pub async fn search(&mut self, query: &str, limit: Option<usize>) -> Result<CategoryResults> {
        debug!("Searching all categories for {query:?}");

        let songs = self.backend.search_songs(query).await?;
        let artists = self.backend.search_artists(query).await?;
        let albums = self.backend.search_albums(query).await?;
        let playlists = self.backend.search_playlists(query).await?;

        self.cursors.set(Category::Songs, songs.continuation);
        self.cursors.set(Category::Artists, artists.continuation);
        self.cursors.set(Category::Albums, albums.continuation);
        self.cursors.set(Category::Playlists, playlists.continuation);

        let mut results = CategoryResults {
            songs: songs.items,
            artists: artists.items,
            albums: albums.items,
            playlists: playlists.items,
        };

        apply_limit(&mut results.songs, limit);
        apply_limit(&mut results.artists, limit);
        apply_limit(&mut results.albums, limit);
        apply_limit(&mut results.playlists, limit);

        Ok(results)
    }

    /// More song results using the saved continuation cursor.
    /// Returns an empty list (without a backend call) when exhausted.
    pub async fn more_songs(&mut self) -> Result<Vec<Track>> {
        let Some(token) = self.cursors.get(Category::Songs).map(str::to_string) else {
            return Ok(Vec::new());
        };
        let page = self.backend.continue_songs(&token).await?;
        self.cursors.set(Category::Songs, page.continuation);
        Ok(page.items)
    }

    /// More artist results using the saved continuation cursor.
    pub async fn more_artists(&mut self) -> Result<Vec<ArtistPreview>> {
        let Some(token) = self.cursors.get(Category::Artists).map(str::to_string) else {
            return Ok(Vec::new());
        };
        let page = self.backend.continue_artists(&token).await?;
        self.cursors.set(Category::Artists, page.continuation);
        Ok(page.items)
    }

    /// More album results using the saved continuation cursor.
    pub async fn more_albums(&mut self) -> Result<Vec<AlbumSummary>> {
        let Some(token) = self.cursors.get(Category::Albums).map(str::to_string) else {
            return Ok(Vec::new());
        };
        let page = self.backend.continue_albums(&token).await?;
        self.cursors.set(Category::Albums, page.continuation);
        Ok(page.items)
    }

    /// More playlist results using the saved continuation cursor.
    pub async fn more_playlists(&mut self) -> Result<Vec<PlaylistSummary>> {
        let Some(token) = self.cursors.get(Category::Playlists).map(str::to_string) else {
            return Ok(Vec::new());
        };
        let page = self.backend.continue_playlists(&token).await?;
        self.cursors.set(Category::Playlists, page.continuation);
        Ok(page.items)
    }

    /// More results for all four categories. The first failing category
    /// fails the whole call; there is no partial-failure isolation.
    pub async fn more_all(&mut self) -> Result<CategoryResults> {
        Ok(CategoryResults {
            songs: self.more_songs().await?,
            artists: self.more_artists().await?,
            albums: self.more_albums().await?,
            playlists: self.more_playlists().await?,
        })
    }

    /// Current continuation cursor for a category.
    pub fn cursor(&self, category: Category) -> Option<&str> {
        self.cursors.get(category)
    }
}

/// Truncate `items` to at most `limit` entries.
fn apply_limit<T>(items: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use harmonium_core::Error;
    use proptest::prelude::*;

    use super::*;

    /// Scripted backend: pops prepared pages and records every call.
    #[derive(Default)]
    struct FakeBackend {
        song_pages: RefCell<VecDeque<SearchPage<Track>>>,
        artist_pages: RefCell<VecDeque<SearchPage<ArtistPreview>>>,
        album_pages: RefCell<VecDeque<SearchPage<AlbumSummary>>>,
        playlist_pages: RefCell<VecDeque<SearchPage<PlaylistSummary>>>,
        calls: RefCell<Vec<String>>,
        fail_albums: bool,
    }

    impl FakeBackend {
        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn push_songs(&self, ids: &[&str], continuation: Option<&str>) {
            self.song_pages.borrow_mut().push_back(SearchPage::new(
                ids.iter().map(|id| Track::new(*id, format!("Song {id}"))).collect(),
                continuation.map(str::to_string),
            ));
        }
    }

    impl SearchBackend for FakeBackend {
        async fn search_songs(&self, query: &str) -> Result<SearchPage<Track>> {
            self.record(format!("search_songs:{query}"));
            Ok(self.song_pages.borrow_mut().pop_front().unwrap_or_default())
        }

        async fn continue_songs(&self, continuation: &str) -> Result<SearchPage<Track>> {
            self.record(format!("continue_songs:{continuation}"));
            Ok(self.song_pages.borrow_mut().pop_front().unwrap_or_default())
        }

        async fn search_artists(&self, query: &str) -> Result<SearchPage<ArtistPreview>> {
            self.record(format!("search_artists:{query}"));
            Ok(self.artist_pages.borrow_mut().pop_front().unwrap_or_default())
        }

        async fn continue_artists(&self, continuation: &str) -> Result<SearchPage<ArtistPreview>> {
            self.record(format!("continue_artists:{continuation}"));
            Ok(self.artist_pages.borrow_mut().pop_front().unwrap_or_default())
        }

        async fn search_albums(&self, query: &str) -> Result<SearchPage<AlbumSummary>> {
            self.record(format!("search_albums:{query}"));
            if self.fail_albums {
                return Err(Error::BackendSearch("albums backend down".into()));
            }
            Ok(self.album_pages.borrow_mut().pop_front().unwrap_or_default())
        }

        async fn continue_albums(&self, continuation: &str) -> Result<SearchPage<AlbumSummary>> {
            self.record(format!("continue_albums:{continuation}"));
            if self.fail_albums {
                return Err(Error::BackendSearch("albums backend down".into()));
            }
            Ok(self.album_pages.borrow_mut().pop_front().unwrap_or_default())
        }

        async fn search_playlists(&self, query: &str) -> Result<SearchPage<PlaylistSummary>> {
            self.record(format!("search_playlists:{query}"));
            Ok(self.playlist_pages.borrow_mut().pop_front().unwrap_or_default())
        }

        async fn continue_playlists(
            &self,
            continuation: &str,
        ) -> Result<SearchPage<PlaylistSummary>> {
            self.record(format!("continue_playlists:{continuation}"));
            Ok(self.playlist_pages.borrow_mut().pop_front().unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_more_without_search_returns_empty() {
        let backend = FakeBackend::default();
        let mut service = SearchService::new(backend);

        let songs = service.more_songs().await.unwrap();
        assert!(songs.is_empty());
        // Exhausted cursor means no backend call at all.
        assert!(service.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_stores_cursor_per_category() {
        let backend = FakeBackend::default();
        backend.push_songs(&["a", "b"], Some("song-token"));
        let mut service = SearchService::new(backend);

        let results = service.search("lofi", None).await.unwrap();
        assert_eq!(results.songs.len(), 2);
        assert_eq!(service.cursor(Category::Songs), Some("song-token"));
        // Artists page was unscripted: empty with no continuation.
        assert_eq!(service.cursor(Category::Artists), None);

        let calls = service.backend.calls();
        assert_eq!(
            calls,
            vec![
                "search_songs:lofi",
                "search_artists:lofi",
                "search_albums:lofi",
                "search_playlists:lofi",
            ]
        );
    }

    #[tokio::test]
    async fn test_more_songs_uses_and_refreshes_cursor() {
        let backend = FakeBackend::default();
        backend.push_songs(&["a"], Some("token-1"));
        backend.push_songs(&["b"], Some("token-2"));
        let mut service = SearchService::new(backend);

        service.search("lofi", None).await.unwrap();
        let more = service.more_songs().await.unwrap();
        assert_eq!(more.len(), 1);
        assert_eq!(more[0].id, "b");
        assert_eq!(service.cursor(Category::Songs), Some("token-2"));
        assert!(service
            .backend
            .calls()
            .contains(&"continue_songs:token-1".to_string()));
    }

    #[tokio::test]
    async fn test_exhausted_cursor_stops_backend_calls() {
        let backend = FakeBackend::default();
        backend.push_songs(&["a"], Some("token-1"));
        backend.push_songs(&["b"], None); // backend reports exhaustion
        let mut service = SearchService::new(backend);

        service.search("lofi", None).await.unwrap();
        service.more_songs().await.unwrap();
        assert_eq!(service.cursor(Category::Songs), None);

        let calls_before = service.backend.calls().len();
        let more = service.more_songs().await.unwrap();
        assert!(more.is_empty());
        assert_eq!(service.backend.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_search_limit_is_a_slice_not_an_index() {
        let backend = FakeBackend::default();
        backend.push_songs(&["a", "b", "c", "d"], None);
        let mut service = SearchService::new(backend);

        let results = service.search("lofi", Some(2)).await.unwrap();
        assert_eq!(results.songs.len(), 2);
        assert_eq!(results.songs[0].id, "a");
        assert_eq!(results.songs[1].id, "b");
    }

    #[tokio::test]
    async fn test_search_propagates_backend_failure() {
        let backend = FakeBackend {
            fail_albums: true,
            ..FakeBackend::default()
        };
        backend.push_songs(&["a"], Some("s1"));
        let mut service = SearchService::new(backend);

        let err = service.search("lofi", None).await.unwrap_err();
        assert!(err.is_search_error());
    }

    #[tokio::test]
    async fn test_more_all_propagates_single_category_failure() {
        let backend = FakeBackend::default();
        backend.push_songs(&["a"], Some("s1"));
        backend.album_pages.borrow_mut().push_back(SearchPage::new(
            vec![AlbumSummary::new("al1", "Album")],
            Some("album-token".to_string()),
        ));
        let mut service = SearchService::new(backend);
        service.search("lofi", None).await.unwrap();

        // Albums backend starts failing; the aggregate call must fail too.
        service.backend.fail_albums = true;
        service.backend.push_songs(&["b"], None);
        let err = service.more_all().await.unwrap_err();
        assert!(err.is_search_error());
    }

    proptest! {
        #[test]
        fn limit_never_exceeded(len in 0usize..64, limit in 0usize..64) {
            let mut items: Vec<u32> = (0..len as u32).collect();
            apply_limit(&mut items, Some(limit));
            prop_assert!(items.len() <= limit);
            prop_assert!(items.len() <= len);
            // Truncation keeps the prefix.
            prop_assert!(items.iter().enumerate().all(|(i, v)| *v == i as u32));
        }
    }
}
