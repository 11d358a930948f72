// src/store.rs
// On-disk poem cache

use std::path::{Path, PathBuf};

use rand::Rng;
use tokio::fs;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// File-per-poem cache. Keys are `{date}__{spine}` with spaces replaced
/// by underscores; the content is the rendered poem, nothing else.
///
/// The store has no retention policy: the original service treated this
/// as an ephemeral cache that container restarts may wipe.
#[derive(Debug, Clone)]
pub struct PoemStore {
    dir: PathBuf,
}

impl PoemStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the store directory if it is missing.
    pub async fn ensure(&self) -> Result<()> {
        if fs::metadata(&self.dir).await.is_err() {
            info!(dir = %self.dir.display(), "store directory not found, creating");
            fs::create_dir_all(&self.dir).await?;
        }
        Ok(())
    }

    fn poem_path(&self, date: &str, spine: &str) -> PathBuf {
        let key = format!("{date}__{}", spine.replace(' ', "_"));
        self.dir.join(key)
    }

    /// Write a poem unless its file already exists. Returns the path and
    /// whether a new file was written.
    pub async fn write_new(&self, date: &str, spine: &str, poem: &str) -> Result<(PathBuf, bool)> {
        let path = self.poem_path(date, spine);

        if fs::metadata(&path).await.is_ok() {
            debug!(path = %path.display(), "poem exists, skipping write");
            return Ok((path, false));
        }

        fs::write(&path, poem).await?;
        Ok((path, true))
    }

    pub async fn read(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }

    /// Chance operation: pick one existing poem at random. Returns the
    /// file name (which doubles as the poem title) and the poem, or
    /// `None` when the store is empty.
    pub async fn random(&self) -> Result<Option<(String, String)>> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                files.push(entry.path());
            }
        }

        if files.is_empty() {
            return Ok(None);
        }

        let pick = rand::rng().random_range(0..files.len());
        let path = &files[pick];
        let title = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| Error::Store("unreadable store file name".to_string()))?;
        let poem = self.read(path).await?;
        Ok(Some((title, poem)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_new_skips_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PoemStore::new(tmp.path());

        let (path, created) = store.write_new("2000-01-01", "craque", "a poem").await.unwrap();
        assert!(created);
        assert!(path.ends_with("2000-01-01__craque"));

        let (_, created) = store.write_new("2000-01-01", "craque", "other").await.unwrap();
        assert!(!created);
        assert_eq!(store.read(&path).await.unwrap(), "a poem");
    }

    #[tokio::test]
    async fn spaces_in_spine_become_underscores() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PoemStore::new(tmp.path());

        let (path, _) = store
            .write_new("2000-01-01", "The Millennium", "poem")
            .await
            .unwrap();
        assert!(path.ends_with("2000-01-01__The_Millennium"));
    }

    #[tokio::test]
    async fn random_returns_none_on_empty_store() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PoemStore::new(tmp.path());
        assert!(store.random().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn random_picks_a_stored_poem() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PoemStore::new(tmp.path());

        store.write_new("2000-01-01", "alpha", "first").await.unwrap();
        store.write_new("2000-01-02", "beta", "second").await.unwrap();

        let (title, poem) = store.random().await.unwrap().unwrap();
        assert!(title.starts_with("2000-01-0"));
        assert!(poem == "first" || poem == "second");
    }

    #[tokio::test]
    async fn ensure_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PoemStore::new(tmp.path().join("store"));
        store.ensure().await.unwrap();
        assert!(store.dir().is_dir());
    }
}
