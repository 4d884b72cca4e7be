//! Search endpoint implementation.

use harmonium_core::{
    AlbumSummary, ArtistPreview, Error, PlaylistSummary, Result, SearchBackend, SearchPage, Track,
};
use tracing::debug;

use crate::{
    parser::{parse_album_page, parse_artist_page, parse_playlist_page, parse_song_page},
    types::{InnerTubeRequest, RawSearchResponse, SearchFilter, SearchPayload},
    InnerTubeClient,
};

impl InnerTubeClient {
    /// Issue a filtered search for `query`.
    async fn search_raw(&self, query: &str, filter: SearchFilter) -> Result<RawSearchResponse> {
        debug!("Searching {filter:?} for {query:?}");
        let payload = SearchPayload {
            query: query.to_string(),
            params: Some(filter.params().to_string()),
            continuation: None,
        };

        let request = InnerTubeRequest::new(self.context.clone(), payload);

        self.post("search", &request)
            .await
            .map_err(|e| Error::BackendSearch(format!("Search request failed: {e}")))
    }

    /// Fetch the next page for a previously returned continuation token.
    /// The token is passed through verbatim.
    async fn continue_raw(&self, continuation: &str) -> Result<RawSearchResponse> {
        let payload = SearchPayload {
            query: String::new(),
            params: None,
            continuation: Some(continuation.to_string()),
        };

        let request = InnerTubeRequest::new(self.context.clone(), payload);

        self.post("search", &request)
            .await
            .map_err(|e| Error::BackendSearch(format!("Search continuation failed: {e}")))
    }
}

impl SearchBackend for InnerTubeClient {
    async fn search_songs(&self, query: &str) -> Result<SearchPage<Track>> {
        Ok(parse_song_page(
            &self.search_raw(query, SearchFilter::Songs).await?,
        ))
    }

    async fn continue_songs(&self, continuation: &str) -> Result<SearchPage<Track>> {
        Ok(parse_song_page(&self.continue_raw(continuation).await?))
    }

    async fn search_artists(&self, query: &str) -> Result<SearchPage<ArtistPreview>> {
        Ok(parse_artist_page(
            &self.search_raw(query, SearchFilter::Artists).await?,
        ))
    }

    async fn continue_artists(&self, continuation: &str) -> Result<SearchPage<ArtistPreview>> {
        Ok(parse_artist_page(&self.continue_raw(continuation).await?))
    }

    async fn search_albums(&self, query: &str) -> Result<SearchPage<AlbumSummary>> {
        Ok(parse_album_page(
            &self.search_raw(query, SearchFilter::Albums).await?,
        ))
    }

    async fn continue_albums(&self, continuation: &str) -> Result<SearchPage<AlbumSummary>> {
        Ok(parse_album_page(&self.continue_raw(continuation).await?))
    }

    async fn search_playlists(&self, query: &str) -> Result<SearchPage<PlaylistSummary>> {
        Ok(parse_playlist_page(
            &self.search_raw(query, SearchFilter::Playlists).await?,
        ))
    }

    async fn continue_playlists(&self, continuation: &str) -> Result<SearchPage<PlaylistSummary>> {
        Ok(parse_playlist_page(&self.continue_raw(continuation).await?))
    }
}
