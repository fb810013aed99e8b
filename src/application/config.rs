use crate::constants::{DEFAULT_API_URL, DEFAULT_SESSION_DIR, SESSION_STORAGE_KEY};
use crate::utils::config::{get_env_or_default, get_env_url};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the padrino client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Local session storage configuration
    pub session: SessionConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the backend, without trailing slash
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the locally cached session
pub struct SessionConfig {
    /// Directory used by file backed storage
    pub storage_dir: String,
    /// Key under which the session is stored
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `PADRINO_API_URL` | `http://localhost:3001/api` |
    /// | `PADRINO_SESSION_DIR` | `.padrino` |
    /// | `PADRINO_SESSION_KEY` | `user_data` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_url("PADRINO_API_URL", DEFAULT_API_URL),
            },
            session: SessionConfig {
                storage_dir: get_env_or_default(
                    "PADRINO_SESSION_DIR",
                    String::from(DEFAULT_SESSION_DIR),
                ),
                storage_key: get_env_or_default(
                    "PADRINO_SESSION_KEY",
                    String::from(SESSION_STORAGE_KEY),
                ),
            },
        }
    }

    /// Creates a configuration pointing at `base_url` with default session settings
    ///
    /// Does not read the environment.
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
            },
            session: SessionConfig {
                storage_dir: String::from(DEFAULT_SESSION_DIR),
                storage_key: String::from(SESSION_STORAGE_KEY),
            },
        }
    }
}
