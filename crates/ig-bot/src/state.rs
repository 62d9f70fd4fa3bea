//! Application state shared across all console commands.

use ig_core::config::BotConfig;
use ig_store::{SqliteSettingsStore, StoreError};
use std::path::PathBuf;
use std::sync::Arc;

pub struct AppState {
    /// Per-community settings (SQLite).
    pub store: Arc<SqliteSettingsStore>,

    pub config: BotConfig,

    /// Data directory for the app.
    pub data_dir: PathBuf,
}

impl AppState {
    /// Open the settings database configured for `data_dir`.
    pub fn open(data_dir: PathBuf, config: BotConfig) -> Result<Self, StoreError> {
        let path = config.database_path_in(&data_dir);
        let store = SqliteSettingsStore::open(&path)?;
        Ok(Self::with_store(store, config, data_dir))
    }

    pub fn with_store(store: SqliteSettingsStore, config: BotConfig, data_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(store),
            config,
            data_dir,
        }
    }
}
