//! SQLite-backed settings store.

use crate::StoreError;
use ig_core::allowlist::AllowList;
use ig_core::community::CommunityId;
use ig_core::settings::SettingsStore;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Settings store backed by a single SQLite database.
/// Uses Mutex<Connection> for thread safety (rusqlite::Connection is !Sync);
/// the lock plus an immediate transaction make `update_allow_list` atomic.
pub struct SqliteSettingsStore {
    conn: Mutex<Connection>,
}

impl SqliteSettingsStore {
    /// Open (or create) the settings database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        let store = Self { conn: Mutex::new(conn) };
        store.initialize_schema()?;
        info!(path = %path.display(), "settings store opened");
        Ok(store)
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        let store = Self { conn: Mutex::new(conn) };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|e| StoreError::Database(e.to_string()))?;
        // community_id is TEXT: SQLite integers are signed 64-bit.
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS automod_settings (
                community_id TEXT PRIMARY KEY,
                whitelisted_invites TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }
}

fn read_list(conn: &Connection, community: CommunityId) -> Result<AllowList, StoreError> {
    let json: Option<String> = conn
        .query_row(
            "SELECT whitelisted_invites FROM automod_settings WHERE community_id = ?1",
            rusqlite::params![community.to_string()],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| StoreError::Database(e.to_string()))?;

    match json {
        Some(json) => serde_json::from_str(&json).map_err(|e| StoreError::Corrupt {
            community: community.to_string(),
            message: e.to_string(),
        }),
        None => Ok(AllowList::new()),
    }
}

fn write_list(conn: &Connection, community: CommunityId, list: &AllowList) -> Result<(), StoreError> {
    let json = serde_json::to_string(list).map_err(|e| StoreError::Database(e.to_string()))?;
    conn.execute(
        "INSERT INTO automod_settings (community_id, whitelisted_invites, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(community_id) DO UPDATE SET
            whitelisted_invites = excluded.whitelisted_invites,
            updated_at = excluded.updated_at",
        rusqlite::params![community.to_string(), json, chrono::Utc::now().to_rfc3339()],
    )
    .map_err(|e| StoreError::Database(e.to_string()))?;
    Ok(())
}

impl SettingsStore for SqliteSettingsStore {
    type Error = StoreError;

    fn allow_list(&self, community: CommunityId) -> Result<AllowList, StoreError> {
        let conn = self.conn.lock().map_err(|e| StoreError::Database(e.to_string()))?;
        read_list(&conn, community)
    }

    fn set_allow_list(&self, community: CommunityId, list: &AllowList) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|e| StoreError::Database(e.to_string()))?;
        write_list(&conn, community, list)
    }

    fn update_allow_list<T, F>(&self, community: CommunityId, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&AllowList) -> (Option<AllowList>, T),
    {
        let mut conn = self.conn.lock().map_err(|e| StoreError::Database(e.to_string()))?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let current = read_list(&tx, community)?;
        let (next, out) = f(&current);
        if let Some(next) = next {
            write_list(&tx, community, &next)?;
        }

        tx.commit().map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(out)
    }
}
