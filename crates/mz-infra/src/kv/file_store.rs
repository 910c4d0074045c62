//! File-based key-value store
//!
//! Persists every key in one pretty-printed JSON object in the application
//! data directory. Writes go to a temp file that is renamed over the target,
//! so the file is always either the previous or the new snapshot.
//!
//! A file that does not parse is reported as `StorageError::Parse` on reads.
//! Writes move it aside to `<name>.json.corrupt` and start a fresh object, so
//! a damaged file never blocks the store for good.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mz_core::config::DEFAULT_STORE_FILE_NAME;
use mz_core::ports::{KeyValueStorePort, StorageError};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Key-value store backed by a single JSON file.
///
/// 基于单个 JSON 文件的键值存储。
///
/// All access goes through an in-process mutex, so concurrent `set` calls on
/// different keys never drop each other.
pub struct FileKeyValueStore {
    path: PathBuf,
    // serializes access to the backing file within this process
    io_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Creates a store that persists to the given file path.
    ///
    /// 使用指定的文件路径创建存储。
    ///
    /// Nothing touches the filesystem until the first write; a missing file
    /// reads as an empty store.
    ///
    /// # Examples
    ///
    /// ```
    /// use mz_infra::FileKeyValueStore;
    ///
    /// let store = FileKeyValueStore::new("/tmp/menuz/store.json");
    /// assert_eq!(store.path(), std::path::Path::new("/tmp/menuz/store.json"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    /// Create store with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self::new(base_dir.join(filename.into()))
    }

    /// Create store with defaults
    ///
    /// 使用默认文件名 `menuz_store.json` 创建存储。
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                StorageError::Io(format!("create store dir failed: {}: {e}", dir.display()))
            })?;
        }
        Ok(())
    }

    /// Moves an unparseable store file aside so the next write starts fresh.
    async fn quarantine_corrupt_file(&self, reason: &StorageError) -> Result<(), StorageError> {
        let corrupt_path = self.path.with_extension("json.corrupt");
        warn!(
            path = %self.path.display(),
            moved_to = %corrupt_path.display(),
            error = %reason,
            "store file is corrupt, starting a fresh store"
        );
        fs::rename(&self.path, &corrupt_path).await.map_err(|e| {
            StorageError::Io(format!(
                "move corrupt store aside failed: {} -> {}: {e}",
                self.path.display(),
                corrupt_path.display()
            ))
        })
    }

    /// Reads the current entries for a write, recovering from a corrupt file.
    ///
    /// 为写入读取当前条目；文件损坏时将其移走并返回空存储。
    async fn entries_for_write(&self) -> Result<Entries, StorageError> {
        match self.read_entries().await {
            Err(err @ StorageError::Parse(_)) => {
                self.quarantine_corrupt_file(&err).await?;
                Ok(Entries::new())
            }
            other => other,
        }
    }

    async fn read_entries(&self) -> Result<Entries, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(StorageError::Io(format!(
                    "read store failed: {}: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            StorageError::Parse(format!("store file {}: {e}", self.path.display()))
        })
    }

    async fn atomic_write(&self, entries: &Entries) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await.map_err(|e| {
            StorageError::Io(format!("write temp store failed: {}: {e}", tmp_path.display()))
        })?;

        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            StorageError::Io(format!(
                "rename temp store to target failed: {} -> {}: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    /// Reads one key from the store file.
    ///
    /// 从存储文件读取一个键。
    ///
    /// ## Behavior / 行为
    /// - Missing or empty file: `Ok(None)`.
    /// - File that is not a JSON object of strings: `Err(StorageError::Parse)`.
    ///   The file is left untouched so callers that fail open keep working.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.io_lock.lock().await;
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    /// Writes one key and rewrites the whole file atomically.
    ///
    /// 写入一个键，并以原子方式重写整个文件。
    ///
    /// ## Behavior / 行为
    /// - Creates missing parent directories.
    /// - A corrupt file is moved to `<name>.json.corrupt` and replaced by a
    ///   fresh object holding only this key.
    ///
    /// # Errors
    ///
    /// `StorageError::Io` when the directory, temp file or rename fails.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.io_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.atomic_write(&entries).await?;
        debug!(key, path = %self.path.display(), "store key written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.io_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        if entries.remove(key).is_some() {
            self.atomic_write(&entries).await?;
            debug!(key, path = %self.path.display(), "store key removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_returns_none_when_file_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("nonexistent.json"));

        assert_eq!(store.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("store.json");
        let store = FileKeyValueStore::new(path.clone());

        store.set("k", "v").await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_empty_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "").await.unwrap();

        let store = FileKeyValueStore::new(path);

        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_json_returns_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "{invalid json").await.unwrap();

        let store = FileKeyValueStore::new(path);
        let result = store.get("k").await;

        assert!(matches!(result, Err(StorageError::Parse(_))));
    }

    #[tokio::test]
    async fn test_remove_on_corrupt_file_moves_it_aside() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "garbage").await.unwrap();

        let store = FileKeyValueStore::new(path.clone());
        store.remove("k").await.unwrap();

        assert!(!path.exists());
        assert!(path.with_extension("json.corrupt").exists());
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_missing_key_does_not_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        let store = FileKeyValueStore::new(path.clone());

        store.remove("k").await.unwrap();

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::with_defaults(temp_dir.path().to_path_buf());

        assert_eq!(store.path(), temp_dir.path().join(DEFAULT_STORE_FILE_NAME));
    }

    #[tokio::test]
    async fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store =
            FileKeyValueStore::with_base_dir(temp_dir.path().to_path_buf(), "custom.json");

        assert_eq!(store.path(), temp_dir.path().join("custom.json"));
    }
}
