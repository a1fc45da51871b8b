// Blocking diagnostics - tells apart "this video is gone" from "we are being throttled"

use serde::{Deserialize, Serialize};

/// Reasons why YouTube might refuse a metadata or media request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockingReason {
    /// Too many requests (429)
    RateLimited,
    /// CAPTCHA or "confirm you're not a bot"
    BotDetection,
    /// HTTP 403 Forbidden
    Http403Forbidden,
    /// Sign-in to confirm age
    AgeRestricted,
    /// Private video
    PrivateVideo,
    /// Removed or unavailable
    VideoUnavailable,
    /// Not available in this country
    GeoBlocked,
    /// Channel membership required
    MembersOnly,
    /// DRM-protected or paid content
    DrmProtected,
    /// Connection timed out
    NetworkTimeout,
    /// Anything else
    Unknown,
}

impl BlockingReason {
    pub fn description(&self) -> &'static str {
        match self {
            Self::RateLimited => "Rate limited (too many requests)",
            Self::BotDetection => "Bot detection triggered",
            Self::Http403Forbidden => "HTTP 403 Forbidden",
            Self::AgeRestricted => "Age-restricted content",
            Self::PrivateVideo => "Private video",
            Self::VideoUnavailable => "Video unavailable or removed",
            Self::GeoBlocked => "Geographic restriction",
            Self::MembersOnly => "Members-only content",
            Self::DrmProtected => "DRM-protected content",
            Self::NetworkTimeout => "Network timeout",
            Self::Unknown => "Unknown error",
        }
    }

    /// The video itself is out of reach; retrying or rotating IPs won't help
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::PrivateVideo | Self::VideoUnavailable | Self::MembersOnly | Self::DrmProtected
        )
    }

    pub fn cookies_might_help(&self) -> bool {
        matches!(
            self,
            Self::AgeRestricted | Self::BotDetection | Self::Http403Forbidden | Self::MembersOnly
        )
    }

    pub fn proxy_might_help(&self) -> bool {
        matches!(
            self,
            Self::GeoBlocked
                | Self::RateLimited
                | Self::BotDetection
                | Self::Http403Forbidden
                | Self::NetworkTimeout
        )
    }

    /// One-line hint for the log, if there is anything the operator can do
    pub fn hint(&self) -> Option<&'static str> {
        if self.is_permanent() {
            return None;
        }
        match (self.cookies_might_help(), self.proxy_might_help()) {
            (true, true) => Some("try --cookies or --proxy"),
            (true, false) => Some("try --cookies"),
            (false, true) => Some("try --proxy or a longer delay"),
            (false, false) => None,
        }
    }
}

impl std::fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Analyze yt-dlp stderr and return the blocking reason
pub fn diagnose_error(error: &str) -> Option<BlockingReason> {
    if error.trim().is_empty() {
        return None;
    }

    let lower = error.to_lowercase();

    // Check patterns in order of specificity

    if lower.contains("drm")
        || lower.contains("widevine")
        || lower.contains("encrypted media")
        || lower.contains("requires purchase")
        || lower.contains("this video requires payment")
    {
        return Some(BlockingReason::DrmProtected);
    }

    if lower.contains("members only")
        || lower.contains("members-only")
        || lower.contains("join this channel")
        || lower.contains("available to members")
    {
        return Some(BlockingReason::MembersOnly);
    }

    if lower.contains("age-restricted")
        || lower.contains("sign in to confirm your age")
        || lower.contains("age_verification")
    {
        return Some(BlockingReason::AgeRestricted);
    }

    if lower.contains("private video") || lower.contains("video is private") {
        return Some(BlockingReason::PrivateVideo);
    }

    if lower.contains("video unavailable")
        || lower.contains("video has been removed")
        || lower.contains("no longer available")
        || lower.contains("video is unavailable")
    {
        return Some(BlockingReason::VideoUnavailable);
    }

    if lower.contains("not available in your country") || lower.contains("blocked in your country")
    {
        return Some(BlockingReason::GeoBlocked);
    }

    if lower.contains("429") || lower.contains("rate limit") || lower.contains("too many requests") {
        return Some(BlockingReason::RateLimited);
    }

    if lower.contains("not a bot")
        || lower.contains("captcha")
        || lower.contains("unusual traffic")
    {
        return Some(BlockingReason::BotDetection);
    }

    if lower.contains("403") || lower.contains("forbidden") {
        return Some(BlockingReason::Http403Forbidden);
    }

    if lower.contains("timeout")
        || lower.contains("timed out")
        || lower.contains("connection refused")
        || lower.contains("network unreachable")
    {
        return Some(BlockingReason::NetworkTimeout);
    }

    Some(BlockingReason::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit() {
        let reason = diagnose_error("ERROR: HTTP Error 429: Too Many Requests");
        assert_eq!(reason, Some(BlockingReason::RateLimited));
        assert!(reason.unwrap().proxy_might_help());
    }

    #[test]
    fn test_bot_detection() {
        let reason = diagnose_error("Sign in to confirm you're not a bot");
        assert_eq!(reason, Some(BlockingReason::BotDetection));
        assert_eq!(reason.unwrap().hint(), Some("try --cookies or --proxy"));
    }

    #[test]
    fn test_age_restricted() {
        let reason = diagnose_error("Sign in to confirm your age. This video may be inappropriate");
        assert_eq!(reason, Some(BlockingReason::AgeRestricted));
        assert_eq!(reason.unwrap().hint(), Some("try --cookies"));
    }

    #[test]
    fn test_removed_video_is_permanent() {
        let reason = diagnose_error("ERROR: [youtube] abc: Video unavailable").unwrap();
        assert!(reason.is_permanent());
        assert_eq!(reason.hint(), None);
    }

    #[test]
    fn test_drm_is_permanent() {
        let reason = diagnose_error("ERROR: This video is DRM protected").unwrap();
        assert_eq!(reason, BlockingReason::DrmProtected);
        assert!(reason.is_permanent());
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(diagnose_error("   "), None);
        assert_eq!(diagnose_error("weird"), Some(BlockingReason::Unknown));
    }
}
