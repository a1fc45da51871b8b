// Command-line surface: argument parsing and the three subcommands

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tokio_util::sync::CancellationToken;

use shorts_crawler::crawler::backends::{
    RenderedPageDiscoverer, YtDlpDiscoverer, YtDlpDownloader, YtDlpResolver,
};
use shorts_crawler::crawler::config::default_output_root;
use shorts_crawler::crawler::{
    profiles, CrawlConfig, CrawlError, Crawler, Discoverer, DuplicateIndex, OutputLayout, Pacing,
    Profile, Result, RunSummary, YtDlpOptions,
};

#[derive(Parser)]
#[command(name = "shorts-crawler")]
#[command(about = "Collect labeled YouTube Shorts incrementally, skipping anything seen before")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Crawl until the target is reached or the frontier runs dry
    Run(RunArgs),

    /// List built-in profiles
    Profiles,

    /// Show duplicate-index statistics for a profile without crawling
    Stats(ProfileArgs),
}

#[derive(Args, Clone)]
pub struct ProfileArgs {
    /// Built-in profile name
    #[arg(short, long, default_value = "crypto-legit", env = "SHORTS_PROFILE")]
    pub profile: String,

    /// Load the profile from a TOML file instead
    #[arg(long, env = "SHORTS_PROFILE_FILE")]
    pub profile_file: Option<PathBuf>,

    /// Output root (default: ~/Desktop/<profile folder>)
    #[arg(short, long, env = "SHORTS_OUTPUT")]
    pub output: Option<PathBuf>,
}

impl ProfileArgs {
    fn load_profile(&self) -> Result<Profile> {
        match &self.profile_file {
            Some(path) => Profile::from_file(path),
            None => Profile::builtin(&self.profile).ok_or_else(|| {
                CrawlError::Config(format!(
                    "unknown profile '{}' (known: {})",
                    self.profile,
                    profiles::NAMES.join(", ")
                ))
            }),
        }
    }

    fn output_root(&self, profile: &Profile) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_root(&profile.default_folder))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiscoveryMode {
    /// List pages with yt-dlp --flat-playlist
    Ytdlp,
    /// Render pages through a Browserless instance
    Browserless,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// New videos to collect before stopping
    #[arg(short, long, default_value_t = 15)]
    pub target: usize,

    /// Result batches requested per page
    #[arg(long, default_value_t = 15)]
    pub scroll_rounds: u32,

    /// Save metadata only
    #[arg(long)]
    pub no_download: bool,

    #[arg(long, default_value_t = 500)]
    pub min_views: u64,

    /// Longest accepted video, in seconds
    #[arg(long, default_value_t = 60, conflicts_with = "no_duration_limit")]
    pub max_duration: u64,

    #[arg(long)]
    pub no_duration_limit: bool,

    #[arg(long, value_enum, default_value_t = DiscoveryMode::Ytdlp)]
    pub discovery: DiscoveryMode,

    #[arg(long, env = "BROWSERLESS_URL", default_value = "http://localhost:3000")]
    pub browserless_url: String,

    #[arg(long, env = "BROWSERLESS_TOKEN", hide_env_values = true)]
    pub browserless_token: Option<String>,

    /// Proxy passed to yt-dlp (socks5://host:port, http://host:port)
    #[arg(long, env = "SHORTS_PROXY")]
    pub proxy: Option<String>,

    /// cookies.txt passed to yt-dlp
    #[arg(long)]
    pub cookies: Option<PathBuf>,

    #[arg(long, default_value_t = 2000)]
    pub min_delay_ms: u64,

    #[arg(long, default_value_t = 5000)]
    pub max_delay_ms: u64,
}

impl RunArgs {
    fn config(&self, profile: Profile) -> CrawlConfig {
        let root = self.profile.output_root(&profile);
        let max_duration = (!self.no_duration_limit).then_some(self.max_duration);
        CrawlConfig::new(profile, root)
            .with_target(self.target)
            .with_scroll_rounds(self.scroll_rounds)
            .with_download(!self.no_download)
            .with_min_views(self.min_views)
            .with_max_duration(max_duration)
            .with_pacing(Pacing {
                min: Duration::from_millis(self.min_delay_ms),
                max: Duration::from_millis(self.max_delay_ms),
            })
    }

    fn ytdlp_options(&self) -> YtDlpOptions {
        YtDlpOptions::default()
            .with_proxy(self.proxy.clone())
            .with_cookies_path(self.cookies.as_ref().map(|p| p.to_string_lossy().to_string()))
    }

    fn discoverer(&self, options: &YtDlpOptions, config: &CrawlConfig) -> Result<Arc<dyn Discoverer>> {
        let rounds = config.scroll_rounds as usize;
        Ok(match self.discovery {
            DiscoveryMode::Ytdlp => Arc::new(YtDlpDiscoverer::new(options.clone(), rounds)),
            DiscoveryMode::Browserless => Arc::new(RenderedPageDiscoverer::new(
                &self.browserless_url,
                self.browserless_token.as_deref(),
                rounds,
                options.command_timeout,
            )?),
        })
    }
}

pub async fn run(args: RunArgs, cancel: CancellationToken) -> Result<RunSummary> {
    let profile = args.profile.load_profile()?;
    let config = args.config(profile);
    let options = args.ytdlp_options();

    tracing::info!(
        binary = %options.binary,
        discovery = ?args.discovery,
        output = %config.layout.root().display(),
        "Run configured"
    );

    let discoverer = args.discoverer(&options, &config)?;
    let mut crawler = Crawler::new(
        config,
        discoverer,
        Arc::new(YtDlpResolver::new(options.clone())),
        Arc::new(YtDlpDownloader::new(options)),
    )?;

    Ok(crawler.run(&cancel).await)
}

pub fn list_profiles() {
    for name in profiles::NAMES {
        if let Some(profile) = Profile::builtin(name) {
            println!(
                "{:<16} {:<9} {:<32} {} queries, {} include, {} exclude",
                profile.name,
                profile.label.as_str(),
                profile.slug,
                profile.queries.len(),
                profile.include.len(),
                profile.exclude.len()
            );
        }
    }
}

pub fn show_stats(args: ProfileArgs) -> Result<()> {
    let profile = args.load_profile()?;
    let layout = OutputLayout::new(
        args.output_root(&profile),
        &profile.slug,
        &profile.index_file,
    );
    let index = DuplicateIndex::load(layout.index_path());
    let stats = index.stats();

    println!("Profile:          {}", profile.name);
    println!("Index:            {}", layout.index_path().display());
    println!("Indexed videos:   {}", stats.count);
    println!("First collected:  {}", stats.oldest.as_deref().unwrap_or("-"));
    println!("Last collected:   {}", stats.newest.as_deref().unwrap_or("-"));
    println!("Metadata files:   {}", layout.metadata_count());
    Ok(())
}

pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("Crawl {}", summary.outcome);
    println!(
        "  Collected:          {}/{}",
        summary.stats.collected, summary.target
    );
    println!("  Downloaded:         {}", summary.stats.downloaded);
    println!("  Duplicates skipped: {}", summary.stats.duplicates_skipped);
    println!("  Discarded:          {}", summary.stats.discarded);
    println!(
        "  Pages crawled:      {} ({} failed)",
        summary.stats.pages_crawled, summary.stats.pages_failed
    );
    println!("  Indexed in total:   {}", summary.indexed_total);
    println!("  Index:              {}", summary.index_path.display());
    println!("  Metadata:           {}", summary.metadata_dir.display());
    println!("  Videos:             {}", summary.media_dir.display());
}
