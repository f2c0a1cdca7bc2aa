use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ThemeConfig;
use crate::constants::storage;

/// Failure of the durable store. Never shown to the user:
/// `Persistence` logs it and carries on as if nothing was stored.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode theme: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored theme is corrupt: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Namespaced text slots that outlive the process
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per slot under a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// `<config dir>/theme-studio`, or the working directory when the
    /// platform has no config dir
    pub fn default_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(storage::APP_DIR);
        path
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{}", storage::SLOT_EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.slot_path(key);
        fs::write(&path, value).map_err(|source| StorageError::Io { path, source })
    }
}

/// Slots that live only as long as the process (`--ephemeral`).
/// Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Best-effort persistence of the theme under the versioned key.
/// Every failure is absorbed.
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: storage::THEME_KEY.to_string(),
        }
    }

    /// Read the stored theme; `None` when absent, unreadable or corrupt
    pub fn load(&self) -> Option<ThemeConfig> {
        match self.try_load() {
            Ok(Some(config)) => {
                info!(key = %self.key, "Loaded persisted theme");
                Some(config)
            }
            Ok(None) => {
                info!(key = %self.key, "No persisted theme, using defaults");
                None
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "Ignoring unreadable persisted theme");
                None
            }
        }
    }

    pub fn save(&mut self, config: &ThemeConfig) {
        match self.try_save(config) {
            Ok(()) => debug!(key = %self.key, "Persisted theme"),
            Err(err) => warn!(key = %self.key, error = %err, "Failed to persist theme"),
        }
    }

    fn try_load(&self) -> Result<Option<ThemeConfig>, StorageError> {
        let Some(contents) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let config: ThemeConfig = serde_json::from_str(&contents).map_err(StorageError::Decode)?;
        Ok(Some(config.sanitized()))
    }

    fn try_save(&mut self, config: &ThemeConfig) -> Result<(), StorageError> {
        let contents = serde_json::to_string(config).map_err(StorageError::Encode)?;
        self.store.set(&self.key, &contents)
    }
}
