// Shorts crawler - frontier-driven collection of labeled short-form videos

pub mod crawler;

pub use crawler::{
    CrawlConfig, CrawlError, CrawlEvent, CrawlObserver, Crawler, Discoverer, Downloader,
    DuplicateIndex, Profile, Resolver, RunOutcome, RunSummary,
};
