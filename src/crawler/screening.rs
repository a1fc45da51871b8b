// Screening - turns a resolved video into a record or a reason to drop it

use super::classifier::Classifier;
use super::config::CrawlConfig;
use super::models::{Label, RawVideo, VideoRecord};

/// Why a resolved video was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    LiveStream,
    TooLong { duration: u64, limit: u64 },
    TooFewViews { views: u64, minimum: u64 },
    Classifier { category: String },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LiveStream => write!(f, "live stream"),
            Self::TooLong { duration, limit } => write!(f, "too long ({}s > {}s)", duration, limit),
            Self::TooFewViews { views, minimum } => {
                write!(f, "too few views ({} < {})", views, minimum)
            }
            Self::Classifier { .. } => write!(f, "does not meet content criteria"),
        }
    }
}

pub struct Screen {
    classifier: Classifier,
    label: Label,
    min_views: u64,
    max_duration: Option<u64>,
}

impl Screen {
    pub fn from_config(config: &CrawlConfig) -> Self {
        Self {
            classifier: config.profile.classifier(),
            label: config.profile.label,
            min_views: config.min_views,
            max_duration: config.max_duration,
        }
    }

    /// Apply the filters in order: live, duration, views, keywords
    pub fn screen(
        &self,
        raw: RawVideo,
        captured_at: String,
        origin_host: String,
    ) -> Result<VideoRecord, Rejection> {
        if raw.is_live || raw.was_live {
            return Err(Rejection::LiveStream);
        }

        let duration = raw.duration_seconds();
        if let Some(limit) = self.max_duration {
            if duration > limit {
                return Err(Rejection::TooLong { duration, limit });
            }
        }

        let views = raw.views();
        if views < self.min_views {
            return Err(Rejection::TooFewViews {
                views,
                minimum: self.min_views,
            });
        }

        let verdict = self.classifier.classify(&raw.text_blob());
        if !verdict.accepted {
            return Err(Rejection::Classifier {
                category: verdict.category,
            });
        }

        Ok(VideoRecord::new(
            raw,
            self.label,
            verdict.category,
            captured_at,
            origin_host,
        ))
    }
}
