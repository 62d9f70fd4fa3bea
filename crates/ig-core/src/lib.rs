//! ig-core: Shared types for InviteGuard
//!
//! This crate has zero internal crate dependencies and defines the
//! canonical types used across all other ig-* crates.

pub mod allowlist;
pub mod community;
pub mod config;
pub mod policy;
pub mod settings;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::allowlist::AllowList;
    pub use crate::community::CommunityId;
    pub use crate::config::BotConfig;
    pub use crate::policy::{Permission, PermissionSet};
    pub use crate::settings::{AutomodSettings, SettingsStore};
}
