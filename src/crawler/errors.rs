// Error types shared by the crawl engine and its collaborators

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// Network timeout while talking to YouTube or the renderer
    #[error("Network timeout: upstream is not responding")]
    NetworkTimeout,

    /// YouTube refused the request (429, bot detection, etc.)
    #[error("YouTube is throttling or blocking requests from this address")]
    Blocked,

    /// yt-dlp (or another helper) not found in the system
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// URL could not be understood by the platform helpers
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse yt-dlp or renderer output
    #[error("Parse error: {0}")]
    ParseError(String),

    /// External command ran but reported failure
    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// Bad profile or run configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Unknown error with details
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// yt-dlp reports everything on stderr; sort it into a variant
impl From<String> for CrawlError {
    fn from(s: String) -> Self {
        let lower = s.to_lowercase();

        if lower.contains("timeout") || lower.contains("timed out") {
            // A timeout against youtube.com is almost always soft IP throttling
            if lower.contains("youtube.com") {
                return Self::Blocked;
            }
            return Self::NetworkTimeout;
        }

        if lower.contains("429") || lower.contains("not a bot") || lower.contains("blocked") {
            return Self::Blocked;
        }

        if lower.contains("not found")
            || lower.contains("no such file")
            || lower.contains("command not found")
        {
            return Self::ToolNotFound(s);
        }

        if lower.contains("parse") || lower.contains("json") {
            return Self::ParseError(s);
        }

        if lower.contains("invalid url") || lower.contains("unsupported url") {
            return Self::InvalidUrl(s);
        }

        Self::Unknown(s)
    }
}

pub type Result<T, E = CrawlError> = std::result::Result<T, E>;
