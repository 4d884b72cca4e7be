//! `InnerTube` API client implementation.

use std::time::Duration;

use harmonium_core::{Error, HttpError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::context::ClientContext;

const BASE_URL: &str = "https://music.youtube.com/youtubei/v1";
const ORIGIN: &str = "https://music.youtube.com";
const REFERER: &str = "https://music.youtube.com/";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `YouTube` Music `InnerTube` API client.
///
/// Each call issues exactly one request; errors propagate to the caller
/// without retries, and responses are not cached.
#[derive(Clone)]
pub struct InnerTubeClient {
    /// HTTP client for making requests.
    http: reqwest::Client,
    /// Client context for requests.
    pub(crate) context: ClientContext,
}

impl InnerTubeClient {
    /// Create a new `InnerTube` client with the web music context.
    pub fn new() -> Result<Self> {
        Self::with_context(ClientContext::music_web())
    }

    /// Create a new `InnerTube` client with a specific context.
    pub fn with_context(context: ClientContext) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "X-Goog-Api-Key",
            HeaderValue::from_static(context.client.api_key()),
        );
        headers.insert(
            "X-YouTube-Client-Name",
            HeaderValue::from_str(&context.client.client_id().to_string())
                .map_err(|e| Error::InvalidArgument(format!("Invalid client id header: {e}")))?,
        );
        headers.insert(
            "X-YouTube-Client-Version",
            HeaderValue::from_str(&context.client.client_version)
                .map_err(|e| Error::InvalidArgument(format!("Invalid client version: {e}")))?,
        );
        headers.insert("Origin", HeaderValue::from_static(ORIGIN));
        headers.insert("Referer", HeaderValue::from_static(REFERER));

        if let Some(ua) = &context.client.user_agent {
            headers.insert(
                USER_AGENT,
                HeaderValue::from_str(ua)
                    .map_err(|e| Error::InvalidArgument(format!("Invalid user agent: {e}")))?,
            );
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, context })
    }

    /// Make a POST request to an `InnerTube` endpoint.
    pub(crate) async fn post<T, R>(&self, endpoint: &str, body: &T) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{BASE_URL}/{endpoint}");
        debug!("POST {endpoint}");

        let response = self.http.post(&url).json(body).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(HttpError::Timeout)
            } else if e.is_connect() {
                Error::Http(HttpError::ConnectionFailed(e.to_string()))
            } else {
                Error::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Http(HttpError::StatusError {
                status: status.as_u16(),
                message,
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response body: {e}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Parse(format!("Failed to parse response: {e}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = InnerTubeClient::new().unwrap();
        assert_eq!(client.context.client.client_name, "WEB_REMIX");
    }
}
