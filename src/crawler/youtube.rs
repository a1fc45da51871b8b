// YouTube URL helpers: canonical Shorts keys, search pages and channel pages

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

/// Platform tag stored in every record
pub const PLATFORM: &str = "youtube";

/// Prefix that turns a raw YouTube id into a content id
pub const CONTENT_ID_PREFIX: &str = "youtube_";

const ORIGIN: &str = "https://www.youtube.com";

/// `sp` filter that restricts search results to Shorts
const SHORTS_SEARCH_FILTER: &str = "EgIYAQ%3D%3D";

lazy_static! {
    static ref SHORTS_RE: Regex = Regex::new(r"/shorts/([a-zA-Z0-9_-]+)").unwrap();
    static ref WATCH_RE: Regex = Regex::new(r"[?&]v=([a-zA-Z0-9_-]+)").unwrap();
}

/// Extract the raw video id from a Shorts or watch URL
pub fn video_id_from_url(url: &str) -> Option<&str> {
    SHORTS_RE
        .captures(url)
        .or_else(|| WATCH_RE.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Canonicalize a video URL into the key used by the duplicate index.
///
/// Shorts paths win over `v=` parameters; both collapse to the Shorts form.
/// Anything else keeps its path and loses the query string.
pub fn normalize_url(url: &str) -> String {
    match video_id_from_url(url) {
        Some(id) => shorts_url(id),
        None => url
            .split(['?', '&'])
            .next()
            .unwrap_or(url)
            .to_string(),
    }
}

/// Canonical Shorts URL for a raw id
pub fn shorts_url(video_id: &str) -> String {
    format!("{}/shorts/{}", ORIGIN, video_id)
}

/// Platform-prefixed content id for a raw id
pub fn content_id(video_id: &str) -> String {
    format!("{}{}", CONTENT_ID_PREFIX, video_id)
}

/// Shorts-only search results page for a query
pub fn search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!(
        "{}/results?search_query={}&sp={}",
        ORIGIN, encoded, SHORTS_SEARCH_FILTER
    )
}

/// Shorts tab of a channel, derived from its display name.
///
/// Spaces are dropped (YouTube handles never contain them); every other
/// character is percent-encoded as a path segment.
pub fn channel_shorts_url(channel: &str) -> Option<String> {
    let handle: String = channel.chars().filter(|c| !c.is_whitespace()).collect();
    if handle.is_empty() {
        return None;
    }

    let mut url = Url::parse(ORIGIN).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(&format!("@{}", handle))
        .push("shorts");
    Some(url.to_string())
}

/// True when the link points at a single Shorts or watch page
pub fn is_video_link(url: &str) -> bool {
    url.contains("shorts/") || url.contains("watch?v=")
}
