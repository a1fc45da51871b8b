// Crawl orchestrator - drives the frontier and runs every candidate through
// the duplicate index, the resolver, screening, persistence and download.
//
// Strictly sequential: one page, one candidate, one file at a time. The index
// and the frontier are owned here and mutated without synchronization.

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::config::CrawlConfig;
use super::dedup::DuplicateIndex;
use super::errors::{CrawlError, Result};
use super::events::{
    CrawlEvent, CrawlObserver, RunOutcome, RunStats, RunSummary, SkipReason, TracingObserver,
};
use super::frontier::Frontier;
use super::models::{self, IndexEntry, VideoRecord};
use super::screening::Screen;
use super::traits::{Discoverer, Downloader, Resolver};

/// What the page loop should do after a candidate
enum Flow {
    Continue,
    Interrupted,
}

pub struct Crawler {
    config: CrawlConfig,
    discoverer: Arc<dyn Discoverer>,
    resolver: Arc<dyn Resolver>,
    downloader: Arc<dyn Downloader>,
    observer: Arc<dyn CrawlObserver>,
    screen: Screen,
    index: DuplicateIndex,
    frontier: Frontier,
    stats: RunStats,
    host: String,
}

impl Crawler {
    /// Validate the configuration, load the duplicate index and seed the frontier
    pub fn new(
        config: CrawlConfig,
        discoverer: Arc<dyn Discoverer>,
        resolver: Arc<dyn Resolver>,
        downloader: Arc<dyn Downloader>,
    ) -> Result<Self> {
        config.validate()?;

        let index = DuplicateIndex::load(config.layout.index_path());
        let mut frontier = Frontier::new(config.target);
        frontier.seed(&config.profile.queries);

        Ok(Self {
            screen: Screen::from_config(&config),
            config,
            discoverer,
            resolver,
            downloader,
            observer: Arc::new(TracingObserver),
            index,
            frontier,
            stats: RunStats::default(),
            host: models::origin_host(),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn CrawlObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn index(&self) -> &DuplicateIndex {
        &self.index
    }

    /// Crawl until the target is met, the frontier empties or `cancel` fires.
    ///
    /// The discoverer is shut down and a summary is emitted on every path,
    /// including a fatal error inside the loop.
    pub async fn run(&mut self, cancel: &CancellationToken) -> RunSummary {
        tracing::info!(
            discoverer = self.discoverer.name(),
            resolver = self.resolver.name(),
            downloader = self.downloader.name(),
            scroll_rounds = self.config.scroll_rounds,
            "Collaborators ready"
        );

        self.emit(CrawlEvent::RunStarted {
            profile: self.config.profile.name.clone(),
            target: self.config.target,
            min_views: self.config.min_views,
            index: self.index.stats(),
        });

        let outcome = match self.crawl(cancel).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Fatal error, stopping crawl");
                RunOutcome::Failed(e.to_string())
            }
        };

        self.discoverer.shutdown().await;

        let summary = self.summary(outcome);
        self.emit(CrawlEvent::RunFinished(summary.clone()));
        summary
    }

    async fn crawl(&mut self, cancel: &CancellationToken) -> Result<RunOutcome> {
        while self.stats.collected < self.config.target {
            if cancel.is_cancelled() {
                return Ok(RunOutcome::Interrupted);
            }

            let Some(page) = self.frontier.pop_page() else {
                return Ok(RunOutcome::FrontierExhausted);
            };

            self.emit(CrawlEvent::PageStarted {
                url: page.url().to_string(),
                queued: self.frontier.len(),
            });

            let links = match cancellable(cancel, self.discoverer.discover(&page)).await {
                None => return Ok(RunOutcome::Interrupted),
                Some(Ok(links)) => links,
                Some(Err(e)) => {
                    self.stats.pages_failed += 1;
                    self.emit(CrawlEvent::PageFailed {
                        url: page.url().to_string(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            self.stats.pages_crawled += 1;
            self.emit(CrawlEvent::PageDiscovered {
                url: page.url().to_string(),
                links: links.len(),
            });

            for link in &links {
                if let Flow::Interrupted = self.process_candidate(link, cancel).await? {
                    return Ok(RunOutcome::Interrupted);
                }
            }
        }

        Ok(RunOutcome::TargetReached)
    }

    async fn process_candidate(&mut self, link: &str, cancel: &CancellationToken) -> Result<Flow> {
        if self.target_reached() {
            return Ok(Flow::Continue);
        }

        if !self.frontier.mark_visited(link) {
            self.skip(link, SkipReason::Visited);
            return Ok(Flow::Continue);
        }

        if self.index.contains(link, None) {
            self.skip(link, SkipReason::DuplicateUrl);
            return Ok(Flow::Continue);
        }

        let raw = match cancellable(cancel, self.resolver.resolve(link)).await {
            None => return Ok(Flow::Interrupted),
            Some(Ok(raw)) => raw,
            Some(Err(e)) => {
                self.skip(link, SkipReason::NoMetadata(format!("metadata error: {}", e)));
                return Ok(Flow::Continue);
            }
        };

        let record = match self
            .screen
            .screen(raw, models::timestamp_now(), self.host.clone())
        {
            Ok(record) => record,
            Err(rejection) => {
                self.skip(link, rejection.into());
                return Ok(Flow::Continue);
            }
        };

        // File on disk beats the index: it survives index loss
        if self.config.download && self.config.layout.has_media(&record.content_id) {
            self.skip(link, SkipReason::AlreadyDownloaded);
            return Ok(Flow::Continue);
        }

        if self.index.contains(link, Some(&record.content_id)) {
            self.skip(link, SkipReason::DuplicateId);
            return Ok(Flow::Continue);
        }

        self.persist(link, &record)?;

        if self.config.download {
            if let Flow::Interrupted = self.download(link, &record, cancel).await {
                return Ok(Flow::Interrupted);
            }
        }

        if let Some(channel) = record.channel_name() {
            if let Some(page) = self.frontier.push_channel(channel, self.stats.collected) {
                let url = page.url().to_string();
                self.emit(CrawlEvent::ChannelQueued {
                    channel: channel.to_string(),
                    url,
                });
            }
        }

        let pause = self.config.pacing.pick();
        if !pause.is_zero() && cancellable(cancel, tokio::time::sleep(pause)).await.is_none() {
            return Ok(Flow::Interrupted);
        }

        Ok(Flow::Continue)
    }

    /// Write metadata once and index it; an existing file is not an error
    fn persist(&mut self, link: &str, record: &VideoRecord) -> Result<()> {
        if !self.config.layout.save_metadata(record)? {
            self.emit(CrawlEvent::AlreadySaved {
                content_id: record.content_id.clone(),
            });
            return Ok(());
        }

        self.stats.collected += 1;
        self.index.add(link, IndexEntry::from_record(record));
        self.emit(CrawlEvent::Accepted {
            link: link.to_string(),
            content_id: record.content_id.clone(),
            views: record.view_count,
            category: record.category.clone(),
            collected: self.stats.collected,
            target: self.config.target,
        });
        Ok(())
    }

    /// Failure here never rolls back the metadata or the index entry
    async fn download(&mut self, link: &str, record: &VideoRecord, cancel: &CancellationToken) -> Flow {
        let dest = self.config.layout.media_path(&record.content_id);
        if let Err(e) = ensure_parent(&dest) {
            self.emit(CrawlEvent::DownloadFailed {
                content_id: record.content_id.clone(),
                error: e.to_string(),
            });
            return Flow::Continue;
        }

        match cancellable(cancel, self.downloader.download(link, &dest)).await {
            None => Flow::Interrupted,
            Some(Ok(())) => {
                self.stats.downloaded += 1;
                self.emit(CrawlEvent::Downloaded {
                    content_id: record.content_id.clone(),
                    path: dest,
                });
                Flow::Continue
            }
            Some(Err(e)) => {
                self.emit(CrawlEvent::DownloadFailed {
                    content_id: record.content_id.clone(),
                    error: e.to_string(),
                });
                Flow::Continue
            }
        }
    }

    fn skip(&mut self, link: &str, reason: SkipReason) {
        if reason.is_duplicate() {
            self.stats.duplicates_skipped += 1;
        } else if matches!(reason, SkipReason::NoMetadata(_)) {
            self.stats.discarded += 1;
        }
        self.emit(CrawlEvent::CandidateSkipped {
            link: link.to_string(),
            reason,
            duplicates: self.stats.duplicates_skipped,
        });
    }

    fn target_reached(&self) -> bool {
        self.stats.collected >= self.config.target
    }

    fn summary(&self, outcome: RunOutcome) -> RunSummary {
        let layout = &self.config.layout;
        RunSummary {
            outcome,
            stats: self.stats.clone(),
            target: self.config.target,
            indexed_total: self.index.len(),
            output_root: layout.root().to_path_buf(),
            index_path: layout.index_path(),
            metadata_dir: layout.metadata_dir(),
            media_dir: layout.media_dir(),
        }
    }

    fn emit(&self, event: CrawlEvent) {
        self.observer.on_event(&event);
    }
}

/// Race `fut` against cancellation; `None` means the run was cancelled
async fn cancellable<F: Future>(cancel: &CancellationToken, fut: F) -> Option<F::Output> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        out = fut => Some(out),
    }
}

fn ensure_parent(path: &std::path::Path) -> std::result::Result<(), CrawlError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
