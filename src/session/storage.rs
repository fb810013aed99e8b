/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Key-value storage backends for locally cached state

use crate::error::AppError;
use crate::utils::id::get_id;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Synchronous string key-value storage
pub trait KeyValueStorage: Send + Sync {
    /// Raw value stored under `key`
    fn get_raw(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set_raw(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Process local storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Storage("memory storage lock poisoned".to_string())
}

impl KeyValueStorage for MemoryStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.remove(key);
        Ok(())
    }
}

/// Storage keeping one file per key inside a directory
///
/// Values are written to a uniquely named temporary file and renamed over the
/// target, so concurrent writers never leave a partially written value behind
/// and the last rename wins.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`; the directory is created on first write
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Storage directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `key`
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] for keys that are not plain file names.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(AppError::Storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let temp_path = self.dir.join(format!(".{key}.{}.tmp", get_id()));

        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&temp_path, &path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        debug!("Stored {} bytes in {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Value read back from storage
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    /// The stored text parsed as JSON
    Json(Value),
    /// The stored text as is, when it is not JSON
    Raw(String),
}

/// JSON codec over a [`KeyValueStorage`]
#[derive(Debug, Clone)]
pub struct JsonStorage<S> {
    inner: S,
}

impl<S: KeyValueStorage> JsonStorage<S> {
    /// Wraps `inner`
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Underlying storage
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Serializes `value` and stores it under `key`
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let text = serde_json::to_string(value)?;
        self.inner.set_raw(key, &text)
    }

    /// Value under `key` decoded as `T`
    ///
    /// Missing keys, unreadable storage and values that do not decode as `T`
    /// all read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.inner.get_raw(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Cannot read {}: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Stored value for {} cannot be decoded: {}", key, e);
                None
            }
        }
    }

    /// Value under `key`, parsed as JSON when possible
    pub fn get_value(&self, key: &str) -> Option<StoredValue> {
        let raw = match self.inner.get_raw(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Cannot read {}: {}", key, e);
                return None;
            }
        };
        Some(match serde_json::from_str::<Value>(&raw) {
            Ok(value) => StoredValue::Json(value),
            Err(_) => StoredValue::Raw(raw),
        })
    }

    /// Removes `key`
    pub fn remove(&self, key: &str) -> Result<(), AppError> {
        self.inner.remove(key)
    }
}
