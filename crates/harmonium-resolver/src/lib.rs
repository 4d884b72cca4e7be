//! # harmonium-resolver
//!
//! Audio stream resolution for Harmonium using yt-dlp.
//!
//! Resolution asks yt-dlp for a direct audio URL (`-g`); download fetches
//! the audio file into a destination directory. Both are single attempts:
//! any failure (missing binary, bad video id, extraction or network
//! error) surfaces as `Error::MediaResolution` without retries.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info, warn};

use harmonium_core::{Error, ResolvedStream, Result, StreamResolver};

/// Audio-only format selection, best quality first.
const AUDIO_FORMATS: &str = "141/140/bestaudio[ext=m4a]/bestaudio[ext=webm]/bestaudio";

/// Stream resolver shelling out to yt-dlp.
pub struct YtDlpResolver {
    binary: PathBuf,
    download_dir: PathBuf,
}

impl YtDlpResolver {
    /// Create a resolver using `yt-dlp` from `PATH` and the default
    /// download directory.
    pub fn new() -> Self {
        let download_dir = directories::ProjectDirs::from("", "", "harmonium")
            .map(|d| d.data_dir().join("downloads"))
            .unwrap_or_else(|| PathBuf::from("downloads"));

        Self {
            binary: PathBuf::from("yt-dlp"),
            download_dir,
        }
    }

    /// Use a specific yt-dlp binary.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Use a specific default download directory.
    #[must_use]
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// Default download directory.
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={video_id}")
    }

    fn resolve_args(video_id: &str) -> Vec<String> {
        vec![
            "--no-warnings".to_string(),
            "--no-progress".to_string(),
            "-f".to_string(),
            AUDIO_FORMATS.to_string(),
            "-g".to_string(),
            Self::watch_url(video_id),
        ]
    }

    fn download_args(video_id: &str, dest_dir: &Path) -> Vec<String> {
        let template = dest_dir.join("%(id)s.%(ext)s");
        vec![
            "--no-warnings".to_string(),
            "--no-progress".to_string(),
            "-f".to_string(),
            AUDIO_FORMATS.to_string(),
            "-o".to_string(),
            template.to_string_lossy().into_owned(),
            "--no-simulate".to_string(),
            "--print".to_string(),
            "after_move:filepath".to_string(),
            Self::watch_url(video_id),
        ]
    }

    async fn run(&self, args: &[String], video_id: &str) -> Result<String> {
        debug!("Running {:?} for {video_id}", self.binary);

        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|e| Error::MediaResolution(format!("Failed to run yt-dlp: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("yt-dlp stderr: {stderr}");
            return Err(Error::MediaResolution(format!(
                "yt-dlp failed for {video_id}: {}",
                stderr.lines().next().unwrap_or("unknown error")
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::MediaResolution(format!("yt-dlp returned no output for {video_id}"))
            })
    }
}

impl Default for YtDlpResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamResolver for YtDlpResolver {
    async fn resolve(&self, video_id: &str) -> Result<ResolvedStream> {
        let url = self.run(&Self::resolve_args(video_id), video_id).await?;

        if !url.starts_with("http") {
            return Err(Error::MediaResolution(format!(
                "yt-dlp returned an unexpected stream URL for {video_id}"
            )));
        }

        info!("Resolved audio stream for {video_id}");
        Ok(ResolvedStream::new(url))
    }

    async fn download(&self, video_id: &str, dest_dir: &Path) -> Result<PathBuf> {
        tokio::fs::create_dir_all(dest_dir).await?;

        let path = self
            .run(&Self::download_args(video_id, dest_dir), video_id)
            .await?;

        info!("Downloaded {video_id} to {path}");
        Ok(PathBuf::from(path))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_args() {
        let args = YtDlpResolver::resolve_args("abc123");
        assert!(args.contains(&"-g".to_string()));
        assert!(args
            .last()
            .unwrap()
            .ends_with("youtube.com/watch?v=abc123"));
    }

    #[test]
    fn test_download_args_template() {
        let args = YtDlpResolver::download_args("abc123", Path::new("/tmp/music"));
        let template_pos = args.iter().position(|a| a == "-o").unwrap() + 1;
        assert!(args[template_pos].starts_with("/tmp/music"));
    }

    #[tokio::test]
    async fn test_missing_binary_is_resolution_error() {
        let resolver = YtDlpResolver::new().with_binary("/nonexistent/yt-dlp");
        let err = resolver.resolve("abc123").await.unwrap_err();
        assert!(err.is_resolution_error());
    }
}
