// Collaborator traits - the crawler only talks to the outside world through these

use std::path::Path;

use async_trait::async_trait;

use super::errors::CrawlError;
use super::frontier::FrontierItem;
use super::models::RawVideo;

/// Turns a page into candidate video links
#[async_trait]
pub trait Discoverer: Send + Sync {
    /// Name of the discoverer (for logging)
    fn name(&self) -> &'static str;

    /// Candidate links in page order, without repeats
    async fn discover(&self, page: &FrontierItem) -> Result<Vec<String>, CrawlError>;

    /// Release whatever the discoverer holds (browser session, connections).
    /// Called exactly once when the run ends, however it ends.
    async fn shutdown(&self) {}
}

/// Resolves a candidate link into structured metadata
#[async_trait]
pub trait Resolver: Send + Sync {
    fn name(&self) -> &'static str;

    async fn resolve(&self, url: &str) -> Result<RawVideo, CrawlError>;
}

/// Materializes the media for a link at a destination path
#[async_trait]
pub trait Downloader: Send + Sync {
    fn name(&self) -> &'static str;

    /// Must succeed without work when `dest` already exists
    async fn download(&self, url: &str, dest: &Path) -> Result<(), CrawlError>;
}

/// Drop repeated links while keeping first-seen order
pub fn dedup_links<I>(links: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
