// Crawler module - frontier-driven collection of short-form videos

pub mod backends;
pub mod classifier;
pub mod config;
pub mod dedup;
pub mod errors;
pub mod events;
pub mod frontier;
pub mod models;
pub mod orchestrator;
pub mod profiles;
pub mod screening;
pub mod store;
pub mod traits;
pub mod utils;
pub mod youtube;

pub use classifier::{CategoryRule, Classifier, Verdict};
pub use config::{CrawlConfig, Pacing, Profile};
pub use dedup::DuplicateIndex;
pub use errors::{CrawlError, Result};
pub use events::{
    CrawlEvent, CrawlObserver, RecordingObserver, RunOutcome, RunStats, RunSummary, SkipReason,
    TracingObserver,
};
pub use frontier::{Frontier, FrontierItem};
pub use models::{IndexEntry, IndexStats, Label, RawVideo, VideoRecord};
pub use orchestrator::Crawler;
pub use store::OutputLayout;
pub use traits::{Discoverer, Downloader, Resolver};
pub use utils::YtDlpOptions;
