//! Invocation checks run before a command touches any settings.

use crate::command::CommandSpec;
use crate::PolicyError;
use ig_core::community::CommunityId;
use ig_core::policy::PermissionSet;

/// Check whether `spec` may be invoked with the given permissions and context.
pub fn check_command_allowed(
    perms: &PermissionSet,
    spec: &CommandSpec,
    community: Option<CommunityId>,
) -> Result<(), PolicyError> {
    // 1. Community context
    if spec.guild_only && community.is_none() {
        return Err(PolicyError::CommunityOnly(spec.name.to_string()));
    }

    // 2. Permission check
    for perm in &spec.required_permissions {
        if !perms.is_allowed(perm) {
            return Err(PolicyError::PermissionDenied(format!(
                "command {} requires permission {} which is not granted",
                spec.name, perm.0
            )));
        }
    }

    Ok(())
}
