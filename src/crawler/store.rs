// On-disk layout for metadata, media and the duplicate index

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::errors::Result;
use super::models::VideoRecord;

/// ```text
/// <root>/
/// ├── <index file>
/// ├── metadata/<slug>/<content id>.json
/// └── videos/<slug>/<content id>.mp4
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    slug: String,
    index_file: String,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>, slug: &str, index_file: &str) -> Self {
        Self {
            root: root.into(),
            slug: slug.to_string(),
            index_file: index_file.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join("metadata").join(&self.slug)
    }

    pub fn media_dir(&self) -> PathBuf {
        self.root.join("videos").join(&self.slug)
    }

    pub fn metadata_path(&self, content_id: &str) -> PathBuf {
        self.metadata_dir().join(format!("{}.json", content_id))
    }

    pub fn media_path(&self, content_id: &str) -> PathBuf {
        self.media_dir().join(format!("{}.mp4", content_id))
    }

    pub fn has_media(&self, content_id: &str) -> bool {
        self.media_path(content_id).exists()
    }

    /// Write the record once. Returns `false` when a file for this content id
    /// already exists; the existing file is left untouched.
    ///
    /// The JSON is staged in `<id>.json.tmp` and hard-linked into place, so a
    /// failed write never leaves a partial `<id>.json` behind.
    pub fn save_metadata(&self, record: &VideoRecord) -> Result<bool> {
        let path = self.metadata_path(&record.content_id);
        if path.exists() {
            return Ok(false);
        }

        let json = serde_json::to_string_pretty(record)?;
        std::fs::create_dir_all(self.metadata_dir())?;

        let tmp = path.with_extension("json.tmp");
        if let Err(e) = std::fs::write(&tmp, json.as_bytes()) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }

        // hard_link refuses to replace an existing file
        let linked = std::fs::hard_link(&tmp, &path);
        let _ = std::fs::remove_file(&tmp);
        match linked {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Number of metadata files currently on disk
    pub fn metadata_count(&self) -> usize {
        std::fs::read_dir(self.metadata_dir())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
                    .count()
            })
            .unwrap_or(0)
    }
}
