// Frontier - FIFO of pages still to be crawled during one run

use std::collections::{HashSet, VecDeque};

use super::youtube;

/// A page queued for discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontierItem {
    /// Shorts search results for a seed query
    Search { query: String, url: String },
    /// Shorts tab of a channel found while crawling
    Channel { name: String, url: String },
}

impl FrontierItem {
    pub fn search(query: &str) -> Self {
        Self::Search {
            query: query.to_string(),
            url: youtube::search_url(query),
        }
    }

    pub fn channel(name: &str) -> Option<Self> {
        youtube::channel_shorts_url(name).map(|url| Self::Channel {
            name: name.to_string(),
            url,
        })
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Search { url, .. } | Self::Channel { url, .. } => url,
        }
    }

    pub fn is_channel(&self) -> bool {
        matches!(self, Self::Channel { .. })
    }
}

/// Breadth-first page queue plus the set of candidate links seen this run.
///
/// The visited set is separate from the duplicate index: it also holds links
/// that were rejected and therefore never indexed.
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<FrontierItem>,
    visited: HashSet<String>,
    scheduled: HashSet<String>,
    target: usize,
}

impl Frontier {
    pub fn new(target: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            scheduled: HashSet::new(),
            target,
        }
    }

    /// Enqueue one search page per query, in order
    pub fn seed<S: AsRef<str>>(&mut self, queries: &[S]) {
        for query in queries {
            let item = FrontierItem::search(query.as_ref());
            if self.scheduled.insert(item.url().to_string()) {
                self.queue.push_back(item);
            }
        }
    }

    /// Next page in FIFO order; `None` once the frontier is exhausted
    pub fn pop_page(&mut self) -> Option<FrontierItem> {
        self.queue.pop_front()
    }

    /// Queue a channel's Shorts page behind everything already queued.
    ///
    /// Refused once `collected` has reached the target, or when the page was
    /// already visited or scheduled.
    pub fn push_channel(&mut self, channel: &str, collected: usize) -> Option<&FrontierItem> {
        if collected >= self.target {
            return None;
        }
        let item = FrontierItem::channel(channel)?;
        if self.visited.contains(item.url()) || !self.scheduled.insert(item.url().to_string()) {
            return None;
        }
        self.queue.push_back(item);
        self.queue.back()
    }

    /// Record a candidate link; false if it was already seen this run
    pub fn mark_visited(&mut self, link: &str) -> bool {
        self.visited.insert(link.to_string())
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_pop_in_input_order() {
        let mut frontier = Frontier::new(10);
        frontier.seed(&["first query", "second query"]);

        assert_eq!(frontier.len(), 2);
        match frontier.pop_page() {
            Some(FrontierItem::Search { query, url }) => {
                assert_eq!(query, "first query");
                assert!(url.contains("search_query=first+query"));
            }
            other => panic!("expected search page, got {other:?}"),
        }
        assert!(matches!(
            frontier.pop_page(),
            Some(FrontierItem::Search { query, .. }) if query == "second query"
        ));
        assert_eq!(frontier.pop_page(), None);
    }

    #[test]
    fn repeated_query_is_seeded_once() {
        let mut frontier = Frontier::new(10);
        frontier.seed(&["q1", "q2", "q1"]);
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn channels_are_appended_after_queued_pages() {
        let mut frontier = Frontier::new(10);
        frontier.seed(&["q1", "q2"]);
        assert!(frontier.push_channel("Some Channel", 0).is_some());

        let order: Vec<bool> = std::iter::from_fn(|| frontier.pop_page())
            .map(|p| p.is_channel())
            .collect();
        assert_eq!(order, vec![false, false, true]);
    }

    #[test]
    fn channel_pushed_once() {
        let mut frontier = Frontier::new(10);
        assert!(frontier.push_channel("Chan", 0).is_some());
        assert!(frontier.push_channel("Chan", 1).is_none());
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn no_growth_after_target() {
        let mut frontier = Frontier::new(2);
        assert!(frontier.push_channel("Chan", 2).is_none());
        assert!(frontier.push_channel("Other", 5).is_none());
        assert!(frontier.is_empty());
    }

    #[test]
    fn visited_channel_page_not_requeued() {
        let mut frontier = Frontier::new(5);
        frontier.mark_visited("https://www.youtube.com/@Chan/shorts");
        assert!(frontier.push_channel("Chan", 0).is_none());
    }

    #[test]
    fn mark_visited_reports_first_sight() {
        let mut frontier = Frontier::new(5);
        assert!(frontier.mark_visited("https://www.youtube.com/shorts/a"));
        assert!(!frontier.mark_visited("https://www.youtube.com/shorts/a"));
    }
}
