//! Bot configuration, loaded from a JSON file.

use crate::policy::{Permission, PermissionSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {message}")]
    Read { path: String, message: String },
    #[error("invalid config: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// SQLite settings database. Defaults to `settings.db` in the data dir.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Permissions held by whoever types into the console.
    #[serde(default = "default_operator_permissions")]
    pub operator_permissions: PermissionSet,
}

fn default_operator_permissions() -> PermissionSet {
    PermissionSet::granting([Permission::manage_server()])
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            operator_permissions: default_operator_permissions(),
        }
    }
}

impl BotConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Resolve the database location against the data directory.
    pub fn database_path_in(&self, data_dir: &Path) -> PathBuf {
        match &self.database_path {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => data_dir.join(p),
            None => data_dir.join("settings.db"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = BotConfig::from_json("{}").unwrap();
        assert_eq!(cfg, BotConfig::default());
        assert!(cfg.operator_permissions.is_allowed(&Permission::manage_server()));
    }

    #[test]
    fn explicit_permissions_replace_default() {
        let cfg = BotConfig::from_json(r#"{"operator_permissions": {"granted": []}}"#).unwrap();
        assert!(!cfg.operator_permissions.is_allowed(&Permission::manage_server()));
    }

    #[test]
    fn database_path_resolution() {
        let data = Path::new("/var/lib/inviteguard");
        let mut cfg = BotConfig::default();
        assert_eq!(cfg.database_path_in(data), data.join("settings.db"));

        cfg.database_path = Some(PathBuf::from("other.db"));
        assert_eq!(cfg.database_path_in(data), data.join("other.db"));

        cfg.database_path = Some(PathBuf::from("/tmp/abs.db"));
        assert_eq!(cfg.database_path_in(data), PathBuf::from("/tmp/abs.db"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(BotConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = BotConfig::load(Path::new("/nonexistent/inviteguard.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
