/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::SESSION_STORAGE_KEY;
use crate::error::AppError;
use crate::model::auth::{Role, UserSession};
use crate::session::storage::{FileStorage, JsonStorage, KeyValueStorage, MemoryStorage};
use std::sync::Arc;
use tracing::{debug, info};

/// Locally cached identity of the logged in user
///
/// Presence of a decodable session is the only authentication signal kept on
/// this side. Clones share the same storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<JsonStorage<Box<dyn KeyValueStorage>>>,
    key: String,
}

impl KeyValueStorage for Box<dyn KeyValueStorage> {
    fn get_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        (**self).remove(key)
    }
}

impl SessionStore {
    /// Store over `storage` under the default key
    pub fn new<S: KeyValueStorage + 'static>(storage: S) -> Self {
        Self::with_key(storage, SESSION_STORAGE_KEY)
    }

    /// Store over `storage` under `key`
    pub fn with_key<S: KeyValueStorage + 'static>(storage: S, key: &str) -> Self {
        let inner: Box<dyn KeyValueStorage> = Box::new(storage);
        Self {
            storage: Arc::new(JsonStorage::new(inner)),
            key: key.to_string(),
        }
    }

    /// Store kept in memory only
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// File backed store at the configured directory and key
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_key(
            FileStorage::new(&config.session.storage_dir),
            &config.session.storage_key,
        )
    }

    /// Storage key of the session
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Saves `session`, replacing the current one
    pub fn save(&self, session: &UserSession) -> Result<(), AppError> {
        self.storage.set(&self.key, session)?;
        info!("Session saved for user {}", session.id);
        Ok(())
    }

    /// Current session, `None` when absent or unreadable
    #[must_use]
    pub fn get(&self) -> Option<UserSession> {
        self.storage.get(&self.key)
    }

    /// Removes the session
    pub fn clear(&self) -> Result<(), AppError> {
        self.storage.remove(&self.key)?;
        debug!("Session cleared");
        Ok(())
    }

    /// Whether a session is stored
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.get().is_some()
    }

    /// Role of the current user
    #[must_use]
    pub fn user_role(&self) -> Option<Role> {
        self.get().map(|s| s.rol)
    }

    /// Whether the current user is an administrator
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user_role() == Some(Role::Administrador)
    }

    /// Whether the current user is a sponsor
    #[must_use]
    pub fn is_padrino(&self) -> bool {
        self.user_role() == Some(Role::Padrino)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("key", &self.key).finish()
    }
}
