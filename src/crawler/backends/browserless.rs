// Rendered-page discovery through a Browserless instance
//
// The /content endpoint returns the page HTML after the browser has run its
// scripts; video links are pulled out of it with a regex.

use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::crawler::errors::CrawlError;
use crate::crawler::frontier::FrontierItem;
use crate::crawler::traits::{dedup_links, Discoverer};
use crate::crawler::youtube;

lazy_static! {
    static ref SHORTS_HREF_RE: Regex =
        Regex::new(r#"/shorts/([A-Za-z0-9_-]{6,})"#).expect("valid shorts href regex");
    static ref WATCH_HREF_RE: Regex =
        Regex::new(r#"/watch\?v=([A-Za-z0-9_-]{6,})"#).expect("valid watch href regex");
}

const LINKS_PER_ROUND: usize = 20;

pub struct RenderedPageDiscoverer {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    max_links: usize,
}

impl RenderedPageDiscoverer {
    pub fn new(
        base_url: &str,
        token: Option<&str>,
        scroll_rounds: usize,
        timeout_secs: u64,
    ) -> Result<Self, CrawlError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            max_links: scroll_rounds.max(1) * LINKS_PER_ROUND,
        })
    }

    /// Fetch fully-rendered HTML for a URL
    async fn content(&self, url: &str) -> Result<String, CrawlError> {
        let mut endpoint = format!("{}/content", self.base_url);
        if let Some(ref token) = self.token {
            endpoint.push_str(&format!("?token={token}"));
        }

        let body = serde_json::json!({
            "url": url,
            "gotoOptions": { "waitUntil": "networkidle2" },
        });

        let resp = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            if status.as_u16() == 429 {
                return Err(CrawlError::Blocked);
            }
            return Err(CrawlError::ExecutionError(format!(
                "Browserless returned {}: {}",
                status.as_u16(),
                message
            )));
        }

        Ok(resp.text().await?)
    }

    /// Absolute video links in document order, capped at `max_links`
    pub fn extract_links(html: &str, max_links: usize) -> Vec<String> {
        let mut found: Vec<(usize, String)> = SHORTS_HREF_RE
            .captures_iter(html)
            .filter_map(|c| c.get(1).map(|m| (m.start(), youtube::shorts_url(m.as_str()))))
            .chain(WATCH_HREF_RE.captures_iter(html).filter_map(|c| {
                c.get(1).map(|m| {
                    (
                        m.start(),
                        format!("https://www.youtube.com/watch?v={}", m.as_str()),
                    )
                })
            }))
            .collect();
        found.sort_by_key(|(pos, _)| *pos);

        let mut links = dedup_links(found.into_iter().map(|(_, link)| link));
        links.truncate(max_links);
        links
    }
}

#[async_trait]
impl Discoverer for RenderedPageDiscoverer {
    fn name(&self) -> &'static str {
        "browserless"
    }

    async fn discover(&self, page: &FrontierItem) -> Result<Vec<String>, CrawlError> {
        let html = self.content(page.url()).await?;
        let links = Self::extract_links(&html, self.max_links);
        tracing::debug!(url = page.url(), bytes = html.len(), links = links.len(), "Rendered page");
        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_shorts_and_watch_links_in_order() {
        let html = r#"
            <a href="/shorts/AAAAAAAAAAA">one</a>
            <a href="/watch?v=BBBBBBBBBBB&pp=xyz">two</a>
            <a href="https://www.youtube.com/shorts/AAAAAAAAAAA?feature=share">again</a>
            <a href="/@channel/shorts">channel tab</a>
            <a href="/shorts/CCCCCCCCCCC">three</a>
        "#;
        assert_eq!(
            RenderedPageDiscoverer::extract_links(html, 10),
            vec![
                "https://www.youtube.com/shorts/AAAAAAAAAAA",
                "https://www.youtube.com/watch?v=BBBBBBBBBBB",
                "https://www.youtube.com/shorts/CCCCCCCCCCC",
            ]
        );
    }

    #[test]
    fn respects_link_cap() {
        let html = "/shorts/AAAAAAAAAAA /shorts/BBBBBBBBBBB /shorts/CCCCCCCCCCC";
        assert_eq!(RenderedPageDiscoverer::extract_links(html, 2).len(), 2);
    }

    #[test]
    fn page_without_videos_yields_nothing() {
        assert!(RenderedPageDiscoverer::extract_links("<html></html>", 10).is_empty());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let discoverer = RenderedPageDiscoverer::new("http://localhost:3000/", None, 1, 5).unwrap();
        assert_eq!(discoverer.base_url, "http://localhost:3000");
        assert_eq!(discoverer.max_links, 20);
    }
}
