// Common data models for the crawl engine

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use super::youtube;

/// Classification label written into every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "NOT SCAM", alias = "LEGITIMATE")]
    Legitimate,
    #[serde(rename = "SCAM")]
    Scam,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legitimate => "NOT SCAM",
            Self::Scam => "SCAM",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Video metadata as reported by the resolver, before any screening
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVideo {
    /// Raw platform id (no prefix)
    pub id: String,
    pub title: String,
    pub description: String,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    /// `YYYYMMDD` as yt-dlp reports it
    pub upload_date: Option<String>,
    /// Seconds; fractional for some extractors
    pub duration: Option<f64>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub tags: Vec<String>,
    pub is_live: bool,
    pub was_live: bool,
}

impl RawVideo {
    /// Text the classifier sees: title, description and tags
    pub fn text_blob(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.tags.join(" "))
    }

    /// Duration rounded up to whole seconds
    pub fn duration_seconds(&self) -> u64 {
        self.duration.map(|d| d.max(0.0).ceil() as u64).unwrap_or(0)
    }

    pub fn views(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }

    pub fn content_id(&self) -> String {
        youtube::content_id(&self.id)
    }
}

/// Persisted outcome of a candidate that passed every screen.
///
/// Field names match the metadata files already on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "video_id")]
    pub content_id: String,
    pub platform: String,
    pub video_url: String,
    pub title: String,
    pub description: String,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    pub upload_date: Option<String>,
    pub duration: u64,
    pub view_count: u64,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub tags: Vec<String>,
    pub hashtags: Option<Vec<String>>,
    pub is_short: bool,
    pub label: Label,
    pub category: String,
    #[serde(rename = "scraped_at")]
    pub captured_at: String,
    #[serde(rename = "scraper_id")]
    pub origin_host: String,
}

impl VideoRecord {
    pub fn new(
        raw: RawVideo,
        label: Label,
        category: String,
        captured_at: String,
        origin_host: String,
    ) -> Self {
        let hashtags = extract_hashtags(&raw.description, &raw.tags);
        Self {
            content_id: raw.content_id(),
            platform: youtube::PLATFORM.to_string(),
            video_url: youtube::shorts_url(&raw.id),
            duration: raw.duration_seconds(),
            view_count: raw.views(),
            title: raw.title,
            description: raw.description,
            uploader: raw.uploader,
            channel: raw.channel,
            upload_date: raw.upload_date,
            like_count: raw.like_count,
            comment_count: raw.comment_count,
            tags: raw.tags,
            hashtags,
            is_short: true,
            label,
            category,
            captured_at,
            origin_host,
        }
    }

    /// Channel used to grow the frontier, if any
    pub fn channel_name(&self) -> Option<&str> {
        self.channel.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Duplicate index entry, keyed externally by normalized URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(rename = "video_id")]
    pub content_id: String,
    #[serde(rename = "scraped_at")]
    pub first_seen: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub uploader: String,
    #[serde(default)]
    pub channel: String,
}

impl IndexEntry {
    pub fn from_record(record: &VideoRecord) -> Self {
        Self {
            content_id: record.content_id.clone(),
            first_seen: record.captured_at.clone(),
            title: record.title.clone(),
            uploader: record.uploader.clone().unwrap_or_default(),
            channel: record.channel.clone().unwrap_or_default(),
        }
    }
}

/// Descriptive statistics over the duplicate index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub count: usize,
    pub oldest: Option<String>,
    pub newest: Option<String>,
}

/// Hashtags from description words plus `#tag` per non-empty tag.
///
/// Returns `None` when nothing was found.
pub fn extract_hashtags(description: &str, tags: &[String]) -> Option<Vec<String>> {
    let mut found: BTreeSet<String> = description
        .split_whitespace()
        .filter(|w| w.starts_with('#'))
        .map(str::to_string)
        .collect();

    found.extend(
        tags.iter()
            .filter(|t| !t.is_empty())
            .map(|t| format!("#{}", t)),
    );

    if found.is_empty() {
        None
    } else {
        Some(found.into_iter().collect())
    }
}

/// Local wall-clock timestamp in `YYYY-MM-DD HH:MM:SS`
pub fn timestamp_now() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    now.format(&format)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// Identifier of the machine doing the capture
pub fn origin_host() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .or_else(|| {
            std::fs::read_to_string("/etc/hostname")
                .ok()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
        })
        .unwrap_or_else(|| "unknown-host".to_string())
}
