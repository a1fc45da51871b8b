// Duplicate index - persistent record of every video already collected
//
// On disk: one JSON object mapping normalized URL -> entry, rewritten in full
// after every add. An unreadable file means "no history" rather than an error.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::errors::Result;
use super::models::{IndexEntry, IndexStats};
use super::youtube;

pub struct DuplicateIndex {
    path: PathBuf,
    entries: BTreeMap<String, IndexEntry>,
    // content id -> normalized key, kept in step with `entries`
    by_content_id: HashMap<String, String>,
}

impl DuplicateIndex {
    /// Load the index at `path`; missing or corrupt files start empty
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let entries = if path.exists() {
            match read_entries(&path) {
                Ok(entries) => {
                    tracing::info!(
                        path = %path.display(),
                        count = entries.len(),
                        "Loaded previously collected videos from index"
                    );
                    entries
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Index unreadable, starting fresh"
                    );
                    BTreeMap::new()
                }
            }
        } else {
            tracing::info!(path = %path.display(), "Starting new video index");
            BTreeMap::new()
        };

        let by_content_id = entries
            .iter()
            .map(|(key, entry)| (entry.content_id.clone(), key.clone()))
            .collect();

        Self {
            path,
            entries,
            by_content_id,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical key for a URL
    pub fn normalize(url: &str) -> String {
        youtube::normalize_url(url)
    }

    /// True if the URL's key is known, or if `content_id` is already indexed
    pub fn contains(&self, url: &str, content_id: Option<&str>) -> bool {
        if self.entries.contains_key(&Self::normalize(url)) {
            return true;
        }
        content_id.is_some_and(|id| self.contains_content_id(id))
    }

    pub fn contains_content_id(&self, content_id: &str) -> bool {
        self.by_content_id.contains_key(content_id)
    }

    pub fn get(&self, url: &str) -> Option<&IndexEntry> {
        self.entries.get(&Self::normalize(url))
    }

    /// Upsert the entry for `url` and flush the whole index to disk.
    ///
    /// A failed flush is logged; the in-memory index stays authoritative.
    pub fn add(&mut self, url: &str, entry: IndexEntry) {
        let key = Self::normalize(url);

        if let Some(previous) = self.entries.get(&key) {
            if previous.content_id != entry.content_id
                && self.by_content_id.get(&previous.content_id) == Some(&key)
            {
                self.by_content_id.remove(&previous.content_id);
            }
        }

        self.by_content_id
            .insert(entry.content_id.clone(), key.clone());
        self.entries.insert(key, entry);

        if let Err(e) = self.save() {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to save index, continuing with in-memory copy"
            );
        }
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            count: self.entries.len(),
            oldest: self.entries.values().map(|e| e.first_seen.clone()).min(),
            newest: self.entries.values().map(|e| e.first_seen.clone()).max(),
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;

        // Write beside the target and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, IndexEntry>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, at: &str) -> IndexEntry {
        IndexEntry {
            content_id: id.to_string(),
            first_seen: at.to_string(),
            title: "title".to_string(),
            uploader: "uploader".to_string(),
            channel: "channel".to_string(),
        }
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let index = DuplicateIndex::load(dir.path().join("index.json"));
        assert!(index.is_empty());
        assert_eq!(
            index.stats(),
            IndexStats {
                count: 0,
                oldest: None,
                newest: None
            }
        );
    }

    #[test]
    fn add_then_contains_across_url_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let mut index = DuplicateIndex::load(dir.path().join("index.json"));

        index.add(
            "https://www.youtube.com/watch?v=abc&t=1",
            entry("youtube_abc", "2025-01-01 00:00:00"),
        );

        assert!(index.contains("https://www.youtube.com/shorts/abc", None));
        assert!(index.contains("https://www.youtube.com/watch?v=abc", None));
        assert!(!index.contains("https://www.youtube.com/shorts/other", None));
        assert!(index.contains("https://www.youtube.com/shorts/other", Some("youtube_abc")));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn re_adding_same_url_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut index = DuplicateIndex::load(dir.path().join("index.json"));

        index.add("https://www.youtube.com/shorts/abc", entry("youtube_abc", "2025-01-01 00:00:00"));
        index.add("https://www.youtube.com/watch?v=abc", entry("youtube_abc", "2025-02-01 00:00:00"));

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get("https://www.youtube.com/shorts/abc").unwrap().first_seen,
            "2025-02-01 00:00:00"
        );
    }

    #[test]
    fn index_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("index.json");

        {
            let mut index = DuplicateIndex::load(&path);
            index.add("https://www.youtube.com/shorts/a", entry("youtube_a", "2025-01-02 00:00:00"));
            index.add("https://www.youtube.com/shorts/b", entry("youtube_b", "2025-01-01 00:00:00"));
        }

        let index = DuplicateIndex::load(&path);
        assert_eq!(index.len(), 2);
        assert!(index.contains_content_id("youtube_b"));
        let stats = index.stats();
        assert_eq!(stats.oldest.as_deref(), Some("2025-01-01 00:00:00"));
        assert_eq!(stats.newest.as_deref(), Some("2025-01-02 00:00:00"));
    }

    #[test]
    fn corrupt_file_falls_back_to_empty_and_is_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut index = DuplicateIndex::load(&path);
        assert!(index.is_empty());

        index.add("https://www.youtube.com/shorts/a", entry("youtube_a", "2025-01-01 00:00:00"));

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, IndexEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed.contains_key("https://www.youtube.com/shorts/a"));
    }

    #[test]
    fn unwritable_path_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every save fail
        let path = dir.path().join("index.json");
        std::fs::create_dir_all(&path).unwrap();

        let mut index = DuplicateIndex::load(&path);
        index.add("https://www.youtube.com/shorts/a", entry("youtube_a", "2025-01-01 00:00:00"));
        assert!(index.contains("https://www.youtube.com/shorts/a", None));
    }
}
