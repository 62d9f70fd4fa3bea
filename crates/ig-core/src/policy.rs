//! Permission types: capabilities a command invoker may hold.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Permission
// ---------------------------------------------------------------------------

/// A named capability, e.g. "manage_server".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Permission(pub String);

impl Permission {
    /// Capability to change a community's settings.
    pub const MANAGE_SERVER: &'static str = "manage_server";

    pub fn new(perm: impl Into<String>) -> Self {
        Self(perm.into())
    }

    pub fn manage_server() -> Self {
        Self::new(Self::MANAGE_SERVER)
    }
}

// ---------------------------------------------------------------------------
// Permission set (attached to whoever invokes a command)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionSet {
    /// Granted permissions.
    #[serde(default)]
    pub granted: Vec<Permission>,

    /// Explicitly denied permissions (overrides granted).
    #[serde(default)]
    pub denied: Vec<Permission>,
}

impl PermissionSet {
    pub fn granting(perms: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            granted: perms.into_iter().collect(),
            denied: vec![],
        }
    }

    pub fn is_allowed(&self, perm: &Permission) -> bool {
        if self.denied.contains(perm) {
            return false;
        }
        self.granted.contains(perm)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_set_check() {
        let ps = PermissionSet {
            granted: vec![Permission::manage_server(), Permission::new("kick_members")],
            denied: vec![Permission::new("kick_members")],
        };

        assert!(ps.is_allowed(&Permission::manage_server()));
        assert!(!ps.is_allowed(&Permission::new("kick_members"))); // denied overrides
        assert!(!ps.is_allowed(&Permission::new("ban_members"))); // not granted
    }

    #[test]
    fn empty_set_allows_nothing() {
        assert!(!PermissionSet::default().is_allowed(&Permission::manage_server()));
    }
}
