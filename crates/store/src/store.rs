use hw_core::{Result, WidgetError};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Key holding the content pushed by the host application.
pub const WIDGET_DATA_KEY: &str = "widgetData";
/// Key holding the style/config document.
pub const WIDGET_CONFIG_KEY: &str = "widgetConfig";

/// Key-value container shared between the host application and the widget.
///
/// Values are opaque bytes; both sides store JSON documents.
pub trait SharedStore: Send + Sync {
    /// Read the value under `key`.  A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}

impl<S: SharedStore + ?Sized> SharedStore for &S {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-process store, mostly for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SharedStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never sees a half-written document.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the container directory at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| {
            WidgetError::AppGroup(format!("cannot open container '{}': {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(WidgetError::InvalidArgument(format!("bad store key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SharedStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(WIDGET_DATA_KEY).unwrap(), None);

        store.set(WIDGET_DATA_KEY, b"{}").unwrap();
        assert_eq!(store.get(WIDGET_DATA_KEY).unwrap().as_deref(), Some(&b"{}"[..]));
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get(WIDGET_CONFIG_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("group.test")).unwrap();

        store.set(WIDGET_CONFIG_KEY, br#"{"a":1}"#).unwrap();
        store.set(WIDGET_CONFIG_KEY, br#"{"a":2}"#).unwrap();

        assert_eq!(store.get(WIDGET_CONFIG_KEY).unwrap().unwrap(), br#"{"a":2}"#.to_vec());
        assert!(store.dir().join("widgetConfig.json").exists());
        assert!(!store.dir().join(".widgetConfig.json.tmp").exists());
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.set("../escape", b"x"),
            Err(WidgetError::InvalidArgument(_))
        ));
    }
}
