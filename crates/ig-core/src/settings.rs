//! Per-community automod settings and the storage collaborator contract.

use crate::allowlist::AllowList;
use crate::community::CommunityId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Settings record
// ---------------------------------------------------------------------------

/// The automod settings a community owns. Only the invite allow-list is
/// modelled here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomodSettings {
    /// Communities whose invite links are never penalised.
    #[serde(default)]
    pub whitelisted_invites: AllowList,
}

impl AutomodSettings {
    /// Whether an invite pointing at `target` is exempt from enforcement.
    pub fn is_invite_exempt(&self, target: CommunityId) -> bool {
        self.whitelisted_invites.contains(target)
    }
}

// ---------------------------------------------------------------------------
// Storage collaborator
// ---------------------------------------------------------------------------

/// Storage for per-community settings.
///
/// Unknown communities read as an empty allow-list.
pub trait SettingsStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn allow_list(&self, community: CommunityId) -> Result<AllowList, Self::Error>;

    fn set_allow_list(&self, community: CommunityId, list: &AllowList) -> Result<(), Self::Error>;

    /// Read-modify-write of one community's allow-list as a single atomic step.
    ///
    /// `f` receives the current list and returns the list to persist (if any)
    /// together with a value handed back to the caller. Concurrent calls for
    /// the same community are serialized.
    fn update_allow_list<T, F>(&self, community: CommunityId, f: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&AllowList) -> (Option<AllowList>, T);

    fn settings(&self, community: CommunityId) -> Result<AutomodSettings, Self::Error> {
        Ok(AutomodSettings {
            whitelisted_invites: self.allow_list(community)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exemption_follows_allow_list() {
        let settings = AutomodSettings {
            whitelisted_invites: [CommunityId(1), CommunityId(2)].into_iter().collect(),
        };
        assert!(settings.is_invite_exempt(CommunityId(2)));
        assert!(!settings.is_invite_exempt(CommunityId(3)));
    }

    #[test]
    fn missing_list_deserializes_empty() {
        let settings: AutomodSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.whitelisted_invites.is_empty());
    }
}
