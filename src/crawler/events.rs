// Crawl events - every decision the crawler makes is reported through here
//
// The crawler never formats output itself; a CrawlObserver decides what to do
// with each event (log it, collect it in a test, ...).

use std::path::PathBuf;
use std::sync::Mutex;

use super::models::IndexStats;
use super::screening::Rejection;

/// Why a candidate link was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Already seen earlier in this run
    Visited,
    /// Normalized URL already in the duplicate index
    DuplicateUrl,
    /// Metadata could not be resolved or did not pass screening
    NoMetadata(String),
    /// Media file for the content id is already on disk
    AlreadyDownloaded,
    /// Same content id already indexed under another URL
    DuplicateId,
}

impl SkipReason {
    /// Counted in the "duplicates skipped" statistic
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUrl | Self::AlreadyDownloaded | Self::DuplicateId
        )
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    TargetReached,
    FrontierExhausted,
    Interrupted,
    Failed(String),
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetReached => write!(f, "target reached"),
            Self::FrontierExhausted => write!(f, "frontier exhausted"),
            Self::Interrupted => write!(f, "interrupted"),
            Self::Failed(e) => write!(f, "failed: {}", e),
        }
    }
}

/// Counters accumulated during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub collected: usize,
    pub downloaded: usize,
    pub duplicates_skipped: usize,
    pub discarded: usize,
    pub pages_crawled: usize,
    pub pages_failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub stats: RunStats,
    pub target: usize,
    /// Entries in the duplicate index after the run
    pub indexed_total: usize,
    pub output_root: PathBuf,
    pub index_path: PathBuf,
    pub metadata_dir: PathBuf,
    pub media_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    RunStarted {
        profile: String,
        target: usize,
        min_views: u64,
        index: IndexStats,
    },
    PageStarted {
        url: String,
        queued: usize,
    },
    PageDiscovered {
        url: String,
        links: usize,
    },
    PageFailed {
        url: String,
        error: String,
    },
    CandidateSkipped {
        link: String,
        reason: SkipReason,
        duplicates: usize,
    },
    Accepted {
        link: String,
        content_id: String,
        views: u64,
        category: String,
        collected: usize,
        target: usize,
    },
    /// Metadata file already existed; nothing counted
    AlreadySaved {
        content_id: String,
    },
    Downloaded {
        content_id: String,
        path: PathBuf,
    },
    DownloadFailed {
        content_id: String,
        error: String,
    },
    ChannelQueued {
        channel: String,
        url: String,
    },
    RunFinished(RunSummary),
}

pub trait CrawlObserver: Send + Sync {
    fn on_event(&self, event: &CrawlEvent);
}

/// Default sink: structured log lines via `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn on_event(&self, event: &CrawlEvent) {
        match event {
            CrawlEvent::RunStarted {
                profile,
                target,
                min_views,
                index,
            } => {
                tracing::info!(
                    profile = %profile,
                    target,
                    min_views,
                    previously_collected = index.count,
                    first = index.oldest.as_deref().unwrap_or("-"),
                    last = index.newest.as_deref().unwrap_or("-"),
                    "Starting crawl"
                );
            }
            CrawlEvent::PageStarted { url, queued } => {
                tracing::info!(url = %url, queued, "Crawling page");
            }
            CrawlEvent::PageDiscovered { url, links } => {
                tracing::info!(url = %url, links, "Found unique videos");
            }
            CrawlEvent::PageFailed { url, error } => {
                tracing::warn!(url = %url, error = %error, "Error discovering links");
            }
            CrawlEvent::CandidateSkipped {
                link,
                reason,
                duplicates,
            } => match reason {
                SkipReason::Visited => {
                    tracing::trace!(link = %link, "Already visited this run");
                }
                SkipReason::NoMetadata(why) => {
                    tracing::info!(link = %link, reason = %why, "Skipped");
                }
                other => {
                    tracing::info!(
                        link = %link,
                        reason = ?other,
                        duplicates,
                        "Duplicate skipped"
                    );
                }
            },
            CrawlEvent::Accepted {
                content_id,
                views,
                category,
                collected,
                target,
                ..
            } => {
                tracing::info!(
                    content_id = %content_id,
                    views,
                    category = %category,
                    progress = %format!("{}/{}", collected, target),
                    "Saved"
                );
            }
            CrawlEvent::AlreadySaved { content_id } => {
                tracing::info!(content_id = %content_id, "Metadata already on disk");
            }
            CrawlEvent::Downloaded { content_id, path } => {
                tracing::info!(content_id = %content_id, path = %path.display(), "Downloaded");
            }
            CrawlEvent::DownloadFailed { content_id, error } => {
                tracing::warn!(content_id = %content_id, error = %error, "Download failed");
            }
            CrawlEvent::ChannelQueued { channel, url } => {
                tracing::info!(channel = %channel, url = %url, "Added channel Shorts to queue");
            }
            CrawlEvent::RunFinished(summary) => {
                tracing::info!(
                    outcome = %summary.outcome,
                    collected = summary.stats.collected,
                    downloaded = summary.stats.downloaded,
                    duplicates_skipped = summary.stats.duplicates_skipped,
                    discarded = summary.stats.discarded,
                    pages = summary.stats.pages_crawled,
                    indexed_total = summary.indexed_total,
                    output = %summary.output_root.display(),
                    "Crawl finished"
                );
            }
        }
    }
}

/// Keeps every event in memory; handy for tests and dry runs
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<CrawlEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CrawlEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl CrawlObserver for RecordingObserver {
    fn on_event(&self, event: &CrawlEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

impl From<Rejection> for SkipReason {
    fn from(rejection: Rejection) -> Self {
        Self::NoMetadata(rejection.to_string())
    }
}
