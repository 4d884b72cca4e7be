//! InnerTube-specific types and response structures.

use harmonium_core::Category;
use serde::{Deserialize, Serialize};

/// Search filter narrowing results to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFilter {
    Songs,
    Albums,
    Artists,
    Playlists,
}

impl SearchFilter {
    /// Get the params value for this filter.
    pub const fn params(&self) -> &'static str {
        match self {
            Self::Songs => "EgWKAQIIAWoKEAkQBRAKEAMQBA%3D%3D",
            Self::Albums => "EgWKAQIYAWoKEAkQChAFEAMQBA%3D%3D",
            Self::Artists => "EgWKAQIgAWoKEAkQChAFEAMQBA%3D%3D",
            Self::Playlists => "EgeKAQQoAEABagwQDhAKEAMQBRAJEAQ%3D",
        }
    }
}

impl From<Category> for SearchFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Songs => Self::Songs,
            Category::Artists => Self::Artists,
            Category::Albums => Self::Albums,
            Category::Playlists => Self::Playlists,
        }
    }
}

/// Request body for `InnerTube` endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct InnerTubeRequest<T> {
    pub context: crate::ClientContext,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> InnerTubeRequest<T> {
    pub const fn new(context: crate::ClientContext, payload: T) -> Self {
        Self { context, payload }
    }
}

/// Search request payload.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPayload {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
}

/// Raw `InnerTube` response for search. Covers both fresh searches
/// (`contents`) and continuation requests (`continuationContents`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResponse {
    pub contents: Option<SearchContents>,
    pub continuation_contents: Option<ContinuationContents>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContents {
    pub tabbed_search_results_renderer: Option<TabbedSearchResultsRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabbedSearchResultsRenderer {
    pub tabs: Vec<SearchTab>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTab {
    pub tab_renderer: Option<TabRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabRenderer {
    pub content: Option<TabContent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContent {
    pub section_list_renderer: Option<SectionListRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionListRenderer {
    pub contents: Option<Vec<SectionContent>>,
    pub continuations: Option<Vec<Continuation>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionContent {
    pub music_shelf_renderer: Option<MusicShelfRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicShelfRenderer {
    pub title: Option<TextRuns>,
    pub contents: Option<Vec<ShelfItem>>,
    pub continuations: Option<Vec<Continuation>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfItem {
    pub music_responsive_list_item_renderer: Option<MusicResponsiveListItemRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicResponsiveListItemRenderer {
    pub flex_columns: Option<Vec<FlexColumn>>,
    pub fixed_columns: Option<Vec<FixedColumn>>,
    pub thumbnail: Option<ThumbnailRenderer>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
    pub play_endpoint: Option<PlayEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexColumn {
    pub music_responsive_list_item_flex_column_renderer: Option<FlexColumnRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexColumnRenderer {
    pub text: Option<TextRuns>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedColumn {
    pub music_responsive_list_item_fixed_column_renderer: Option<FixedColumnRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedColumnRenderer {
    pub text: Option<TextRuns>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRuns {
    pub runs: Option<Vec<TextRun>>,
}

impl TextRuns {
    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs
            .as_ref()
            .map(|runs| runs.iter().map(|r| r.text.as_str()).collect::<String>())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    pub navigation_endpoint: Option<NavigationEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRenderer {
    pub music_thumbnail_renderer: Option<MusicThumbnailRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicThumbnailRenderer {
    pub thumbnail: Option<ThumbnailContainer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailContainer {
    pub thumbnails: Option<Vec<ThumbnailItem>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailItem {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEndpoint {
    pub browse_endpoint: Option<BrowseEndpoint>,
    pub watch_endpoint: Option<WatchEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseEndpoint {
    pub browse_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEndpoint {
    pub video_id: String,
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEndpoint {
    pub watch_endpoint: Option<WatchEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Continuation {
    pub next_continuation_data: Option<NextContinuationData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextContinuationData {
    pub continuation: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationContents {
    pub music_shelf_continuation: Option<MusicShelfContinuation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicShelfContinuation {
    pub contents: Option<Vec<ShelfItem>>,
    pub continuations: Option<Vec<Continuation>>,
}
