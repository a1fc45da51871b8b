// yt-dlp backends - metadata, media and page listing through the native binary
//
// Every call is a one-shot subprocess with a hard timeout. Failures are
// diagnosed from stderr so the log says whether the video is gone or the
// address is being throttled.

use std::path::Path;

use async_trait::async_trait;

use super::diagnostics::diagnose_error;
use crate::crawler::errors::CrawlError;
use crate::crawler::frontier::FrontierItem;
use crate::crawler::models::RawVideo;
use crate::crawler::traits::{dedup_links, Discoverer, Downloader, Resolver};
use crate::crawler::utils::{run_output_with_timeout, YtDlpOptions};
use crate::crawler::youtube;

/// Listing entries fetched per scroll round
const ENTRIES_PER_ROUND: usize = 20;

/// Best video + best audio merged, falling back to the best single file
const MEDIA_FORMAT: &str = "bestvideo+bestaudio/best";

/// Run yt-dlp and return stdout, logging a diagnosis on failure
async fn run_ytdlp(
    options: &YtDlpOptions,
    args: Vec<String>,
    timeout_secs: u64,
    url: &str,
) -> Result<Vec<u8>, CrawlError> {
    tracing::debug!(binary = %options.binary, args = %args.join(" "), "Running yt-dlp");

    let output = run_output_with_timeout(&options.binary, args, timeout_secs).await?;
    if output.status.success() {
        return Ok(output.stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if let Some(reason) = diagnose_error(&stderr) {
        tracing::debug!(
            url,
            reason = %reason,
            hint = reason.hint().unwrap_or("-"),
            "yt-dlp failed"
        );
    }
    Err(CrawlError::from(stderr))
}

/// Metadata through `yt-dlp --dump-json`
pub struct YtDlpResolver {
    options: YtDlpOptions,
}

impl YtDlpResolver {
    pub fn new(options: YtDlpOptions) -> Self {
        Self { options }
    }

    fn build_args(&self, url: &str) -> Vec<String> {
        let mut args = vec![
            "--dump-json".to_string(),
            "--no-playlist".to_string(),
            "--skip-download".to_string(),
        ];
        args.extend(self.options.common_args());
        args.push(url.to_string());
        args
    }

    /// Parse the JSON yt-dlp prints for a single video
    pub fn parse_json(stdout: &[u8]) -> Result<RawVideo, CrawlError> {
        let json_str = String::from_utf8_lossy(stdout);
        let json: serde_json::Value = serde_json::from_str(json_str.trim())
            .map_err(|e| CrawlError::ParseError(format!("Invalid JSON: {}", e)))?;

        let id = json["id"]
            .as_str()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CrawlError::ParseError("No video id in JSON".to_string()))?;

        let text = |key: &str| json[key].as_str().map(|s| s.to_string());

        let tags = json["tags"]
            .as_array()
            .map(|tags| {
                tags.iter()
                    .filter_map(|t| t.as_str())
                    .map(|t| t.to_string())
                    .collect()
            })
            .unwrap_or_default();

        Ok(RawVideo {
            id: id.to_string(),
            title: text("title").unwrap_or_default(),
            description: text("description").unwrap_or_default(),
            uploader: text("uploader"),
            channel: text("channel"),
            upload_date: text("upload_date"),
            duration: json["duration"].as_f64(),
            view_count: json["view_count"].as_u64(),
            like_count: json["like_count"].as_u64(),
            comment_count: json["comment_count"].as_u64(),
            tags,
            is_live: json["is_live"].as_bool().unwrap_or(false),
            was_live: json["was_live"].as_bool().unwrap_or(false),
        })
    }
}

#[async_trait]
impl Resolver for YtDlpResolver {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn resolve(&self, url: &str) -> Result<RawVideo, CrawlError> {
        let stdout = run_ytdlp(
            &self.options,
            self.build_args(url),
            self.options.command_timeout,
            url,
        )
        .await?;
        Self::parse_json(&stdout)
    }
}

/// Media through yt-dlp, merged into a single mp4
pub struct YtDlpDownloader {
    options: YtDlpOptions,
}

impl YtDlpDownloader {
    pub fn new(options: YtDlpOptions) -> Self {
        Self { options }
    }

    fn build_args(&self, url: &str, dest: &Path) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            MEDIA_FORMAT.to_string(),
            "--merge-output-format".to_string(),
            "mp4".to_string(),
            "--no-playlist".to_string(),
            // partial data stays in `<dest>.part` until yt-dlp finishes
            "-o".to_string(),
            dest.to_string_lossy().to_string(),
        ];
        args.extend(self.options.common_args());
        args.push(url.to_string());
        args
    }
}

#[async_trait]
impl Downloader for YtDlpDownloader {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<(), CrawlError> {
        if dest.exists() {
            tracing::debug!(path = %dest.display(), "Media already present");
            return Ok(());
        }

        run_ytdlp(
            &self.options,
            self.build_args(url, dest),
            self.options.download_timeout,
            url,
        )
        .await?;

        // yt-dlp exits 0 on some soft failures without writing the file
        let size = tokio::fs::metadata(dest).await.map(|m| m.len()).map_err(|_| {
            CrawlError::ExecutionError(format!("yt-dlp produced no file at {}", dest.display()))
        })?;
        tracing::debug!(
            path = %dest.display(),
            size_mb = %format!("{:.2}", size as f64 / (1024.0 * 1024.0)),
            "Media written"
        );
        Ok(())
    }
}

/// Page listing through `yt-dlp --flat-playlist`.
///
/// Search and channel pages are both playlists to yt-dlp; `scroll_rounds`
/// bounds how deep the listing goes, like scrolling a rendered page would.
pub struct YtDlpDiscoverer {
    options: YtDlpOptions,
    scroll_rounds: usize,
}

impl YtDlpDiscoverer {
    pub fn new(options: YtDlpOptions, scroll_rounds: usize) -> Self {
        Self {
            options,
            scroll_rounds,
        }
    }

    fn playlist_end(&self) -> usize {
        self.scroll_rounds.max(1) * ENTRIES_PER_ROUND
    }

    fn build_args(&self, page_url: &str) -> Vec<String> {
        let mut args = vec![
            "--flat-playlist".to_string(),
            "--print".to_string(),
            "url".to_string(),
            "--playlist-end".to_string(),
            self.playlist_end().to_string(),
        ];
        args.extend(self.options.common_args());
        args.push(page_url.to_string());
        args
    }

    /// Keep video links only, in listing order, without repeats
    pub fn parse_listing(stdout: &[u8]) -> Vec<String> {
        let text = String::from_utf8_lossy(stdout);
        dedup_links(
            text.lines()
                .map(str::trim)
                .filter(|line| youtube::is_video_link(line))
                .map(str::to_string),
        )
    }
}

#[async_trait]
impl Discoverer for YtDlpDiscoverer {
    fn name(&self) -> &'static str {
        "yt-dlp flat playlist"
    }

    async fn discover(&self, page: &FrontierItem) -> Result<Vec<String>, CrawlError> {
        let stdout = run_ytdlp(
            &self.options,
            self.build_args(page.url()),
            self.options.command_timeout,
            page.url(),
        )
        .await?;
        Ok(Self::parse_listing(&stdout))
    }
}
