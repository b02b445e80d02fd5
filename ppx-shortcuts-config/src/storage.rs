//! Key-value storage areas backing the settings store.
//!
//! A storage area maps string keys to JSON values, like a browser
//! extension's sync storage. Both operations are asynchronous and may fail;
//! failures are returned to the caller, never retried here.

use crate::error::StorageError;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Asynchronous key-value storage.
pub trait StorageProvider {
    /// Read the value under `key`; `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Value>, StorageError>> + Send;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: Value) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// In-process storage area. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    area: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage area pre-populated with one value.
    pub fn with_value(key: impl Into<String>, value: Value) -> Self {
        let storage = Self::new();
        storage.area.lock().insert(key.into(), value);
        storage
    }

    /// Snapshot of the value under `key`.
    pub fn peek(&self, key: &str) -> Option<Value> {
        self.area.lock().get(key).cloned()
    }
}

impl StorageProvider for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.area.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.area.lock().insert(key.to_string(), value);
        Ok(())
    }
}

/// Storage area kept as one JSON object in a file.
///
/// Writes are atomic: the new contents go to a temp file which is then
/// renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default location (see [`FileStorage::default_path`]).
    pub fn at_default_location() -> Result<Self, StorageError> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `~/.config/ppx-shortcuts/storage.json` (XDG convention), or the
    /// platform config dir on Windows.
    pub fn default_path() -> Result<PathBuf, StorageError> {
        #[cfg(target_os = "windows")]
        let config_dir = dirs::config_dir();
        #[cfg(not(target_os = "windows"))]
        let config_dir = dirs::home_dir().map(|home| home.join(".config"));
        Self::path_in_config_dir(config_dir)
    }

    fn path_in_config_dir(config_dir: Option<PathBuf>) -> Result<PathBuf, StorageError> {
        config_dir
            .map(|dir| dir.join("ppx-shortcuts").join("storage.json"))
            .ok_or_else(|| {
                StorageError::Unavailable("no config directory for this user".to_string())
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_area(&self) -> Result<Map<String, Value>, StorageError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&contents)? {
            Value::Object(area) => Ok(area),
            other => Err(StorageError::Transport(format!(
                "{:?} does not hold a JSON object (found {})",
                self.path,
                json_kind(&other)
            ))),
        }
    }

    async fn write_area(&self, area: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(area)?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, json).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl StorageProvider for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let mut area = self.read_area().await?;
        Ok(area.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut area = self.read_area().await?;
        area.insert(key.to_string(), value);
        self.write_area(&area).await?;
        log::debug!("Wrote storage key '{}' to {:?}", key, self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_default_path_needs_config_dir() {
        let err = FileStorage::path_in_config_dir(None).unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert_eq!(
            err.to_string(),
            "storage unavailable: no config directory for this user"
        );

        assert_eq!(
            FileStorage::path_in_config_dir(Some(PathBuf::from("/cfg"))).unwrap(),
            Path::new("/cfg/ppx-shortcuts/storage.json")
        );
    }

    #[tokio::test]
    async fn test_memory_storage_shared_between_clones() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("answer", json!(42)).await.unwrap();
        assert_eq!(other.get("answer").await.unwrap(), Some(json!(42)));
        assert_eq!(other.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let storage = FileStorage::new(&path);

        storage.set("a", json!({"x": 1})).await.unwrap();
        storage.set("b", json!([true])).await.unwrap();

        assert_eq!(storage.get("a").await.unwrap(), Some(json!({"x": 1})));
        assert_eq!(storage.get("b").await.unwrap(), Some(json!([true])));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_storage_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get("a").await,
            Err(StorageError::Transport(_))
        ));
        assert!(matches!(
            storage.set("a", json!(1)).await,
            Err(StorageError::Transport(_))
        ));
        // Failed write leaves the file untouched
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
    }

    #[tokio::test]
    async fn test_file_storage_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get("a").await, Err(StorageError::Json(_))));
    }
}
