//! ig-store: Per-community automod settings backed by SQLite.

pub mod store;

pub use store::SqliteSettingsStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
    #[error("corrupt settings for community {community}: {message}")]
    Corrupt { community: String, message: String },
}
