// Run configuration - one immutable value handed to the crawler at construction

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::classifier::{CategoryRule, Classifier};
use super::errors::{CrawlError, Result};
use super::models::Label;
use super::profiles;
use super::store::OutputLayout;

/// Keyword sets, seeds and labels that turn the engine into one concrete crawler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub label: Label,
    /// Sub-directory name under `metadata/` and `videos/`
    pub slug: String,
    /// File name of the duplicate index, relative to the output root
    pub index_file: String,
    /// Folder created under the desktop when no output root is given
    pub default_folder: String,
    pub queries: Vec<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    #[serde(default)]
    pub categories: Vec<CategoryRule>,
    pub default_category: String,
}

impl Profile {
    pub fn classifier(&self) -> Classifier {
        Classifier::new(
            &self.include,
            &self.exclude,
            &self.categories,
            &self.default_category,
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.queries.is_empty() {
            return Err(CrawlError::Config(format!(
                "profile '{}' has no seed queries",
                self.name
            )));
        }
        if self.include.is_empty() {
            return Err(CrawlError::Config(format!(
                "profile '{}' has no inclusion keywords",
                self.name
            )));
        }
        if self.slug.is_empty() || self.slug.contains(['/', '\\']) {
            return Err(CrawlError::Config(format!(
                "profile '{}' has an invalid slug '{}'",
                self.name, self.slug
            )));
        }
        Ok(())
    }

    /// Read a profile from a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let profile: Profile = toml::from_str(content)
            .map_err(|e| CrawlError::Config(format!("invalid profile: {}", e)))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Built-in profile by name
    pub fn builtin(name: &str) -> Option<Self> {
        profiles::builtin(name)
    }
}

/// Random pause between accepted candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub min: Duration,
    pub max: Duration,
}

impl Pacing {
    pub fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    pub fn pick(&self) -> Duration {
        use rand::Rng;

        if self.max <= self.min {
            return self.min;
        }
        let (low, high) = (self.min.as_millis() as u64, self.max.as_millis() as u64);
        Duration::from_millis(rand::rng().random_range(low..=high))
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            min: Duration::from_secs(2),
            max: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub profile: Profile,
    /// Stop once this many new videos were collected
    pub target: usize,
    /// Result batches requested per discovered page
    pub scroll_rounds: u32,
    pub download: bool,
    pub min_views: u64,
    /// `None` means no duration limit
    pub max_duration: Option<u64>,
    pub pacing: Pacing,
    pub layout: OutputLayout,
}

impl CrawlConfig {
    /// Stock run settings, output under `root`
    pub fn new(profile: Profile, root: impl Into<PathBuf>) -> Self {
        let layout = OutputLayout::new(root, &profile.slug, &profile.index_file);
        Self {
            profile,
            target: 15,
            scroll_rounds: 15,
            download: true,
            min_views: 500,
            max_duration: Some(60),
            pacing: Pacing::default(),
            layout,
        }
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = target;
        self
    }

    pub fn with_scroll_rounds(mut self, rounds: u32) -> Self {
        self.scroll_rounds = rounds;
        self
    }

    pub fn with_download(mut self, enabled: bool) -> Self {
        self.download = enabled;
        self
    }

    pub fn with_min_views(mut self, views: u64) -> Self {
        self.min_views = views;
        self
    }

    pub fn with_max_duration(mut self, seconds: Option<u64>) -> Self {
        self.max_duration = seconds;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.profile.validate()?;
        if self.target == 0 {
            return Err(CrawlError::Config("target must be at least 1".to_string()));
        }
        if self.pacing.max < self.pacing.min {
            return Err(CrawlError::Config(
                "maximum delay is shorter than minimum delay".to_string(),
            ));
        }
        Ok(())
    }
}

/// `~/Desktop/<folder>`, or `./<folder>` when no desktop is known
pub fn default_output_root(folder: &str) -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join("Desktop")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_validate() {
        for name in profiles::NAMES {
            let profile = Profile::builtin(name).expect("builtin exists");
            profile.validate().expect("builtin is valid");
        }
    }

    #[test]
    fn profile_round_trips_through_toml() {
        let toml = r#"
name = "custom"
label = "SCAM"
slug = "custom_scam"
index_file = "index_custom.json"
default_folder = "custom_crawl"
queries = ["free robux"]
include = ["free robux"]
exclude = ["scam warning"]
default_category = "Robux Scam"

[[categories]]
label = "Generator"
keywords = ["generator", "hack"]
"#;
        let profile = Profile::from_toml(toml).unwrap();
        assert_eq!(profile.label, Label::Scam);
        assert_eq!(profile.categories.len(), 1);
        assert_eq!(profile.classifier().category("robux GENERATOR"), "Generator");
    }

    #[test]
    fn profile_without_queries_is_rejected() {
        let mut profile = Profile::builtin("crypto-legit").unwrap();
        profile.queries.clear();
        assert!(matches!(profile.validate(), Err(CrawlError::Config(_))));
    }

    #[test]
    fn config_rejects_zero_target() {
        let profile = Profile::builtin("crypto-legit").unwrap();
        let config = CrawlConfig::new(profile, "/tmp/out").with_target(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn pacing_stays_in_bounds() {
        let pacing = Pacing {
            min: Duration::from_millis(5),
            max: Duration::from_millis(10),
        };
        for _ in 0..50 {
            let d = pacing.pick();
            assert!(d >= pacing.min && d <= pacing.max);
        }
        assert_eq!(Pacing::none().pick(), Duration::ZERO);
    }
}
