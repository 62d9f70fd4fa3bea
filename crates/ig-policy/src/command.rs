//! The `whitelist` command: permission gate, parse, atomic apply, reply.

use crate::engine::check_command_allowed;
use crate::manager::{apply, Outcome};
use crate::parser::parse;
use crate::response::{
    render_outcome, render_parse_error, render_policy_error, render_store_error, Reply,
};
use ig_core::community::CommunityId;
use ig_core::policy::{Permission, PermissionSet};
use ig_core::settings::SettingsStore;
use tracing::{debug, info, warn};

/// Static description of a chat command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub category: &'static str,
    pub arguments: &'static str,
    pub help: &'static str,
    pub description: &'static str,
    pub required_permissions: Vec<Permission>,
    /// Only usable inside a community.
    pub guild_only: bool,
}

/// One invocation of a command.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub community: Option<CommunityId>,
    pub permissions: &'a PermissionSet,
    pub args: &'a str,
}

pub struct WhitelistCommand;

impl WhitelistCommand {
    pub fn spec() -> CommandSpec {
        CommandSpec {
            name: "whitelist",
            category: "AutoMod",
            arguments: "<ADD GUILD_ID|REMOVE GUILD_ID|SHOW>",
            help: "if strikes for invites are enabled, add/remove whitelisted guilds",
            description: "Used to add/remove guilds from the invite whitelist. \
                          When an invite to a whitelisted guild is posted, no strikes are given.",
            required_permissions: vec![Permission::manage_server()],
            guild_only: true,
        }
    }

    pub fn execute<S: SettingsStore>(store: &S, inv: Invocation<'_>) -> Reply {
        let spec = Self::spec();

        if let Err(e) = check_command_allowed(inv.permissions, &spec, inv.community) {
            warn!(command = spec.name, "rejected: {e}");
            return render_policy_error(&e);
        }
        let Some(community) = inv.community else {
            return render_policy_error(&crate::PolicyError::CommunityOnly(spec.name.into()));
        };

        let op = match parse(inv.args) {
            Ok(op) => op,
            Err(e) => {
                debug!(%community, args = inv.args, "unparsable whitelist args: {e}");
                return render_parse_error(e, spec.description);
            }
        };

        let result = store.update_allow_list(community, |current| {
            let outcome = apply(current, op);
            (outcome.updated().cloned(), outcome)
        });

        match result {
            Ok(outcome) => {
                match &outcome {
                    Outcome::Updated(list) => {
                        info!(%community, ?op, entries = list.len(), "invite whitelist modified")
                    }
                    Outcome::Conflict(c) => debug!(%community, ?op, "whitelist conflict: {c:?}"),
                    Outcome::Display(_) => {}
                }
                render_outcome(&outcome)
            }
            Err(e) => {
                warn!(%community, ?op, "failed to update invite whitelist: {e}");
                render_store_error(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Tone;
    use ig_core::allowlist::AllowList;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, thiserror::Error)]
    #[error("store offline")]
    struct Offline;

    #[derive(Default)]
    struct MemoryStore {
        lists: Mutex<HashMap<CommunityId, AllowList>>,
        offline: bool,
    }

    impl SettingsStore for MemoryStore {
        type Error = Offline;

        fn allow_list(&self, community: CommunityId) -> Result<AllowList, Offline> {
            Ok(self.lists.lock().unwrap().get(&community).cloned().unwrap_or_default())
        }

        fn set_allow_list(&self, community: CommunityId, list: &AllowList) -> Result<(), Offline> {
            self.lists.lock().unwrap().insert(community, list.clone());
            Ok(())
        }

        fn update_allow_list<T, F>(&self, community: CommunityId, f: F) -> Result<T, Offline>
        where
            F: FnOnce(&AllowList) -> (Option<AllowList>, T),
        {
            if self.offline {
                return Err(Offline);
            }
            let mut lists = self.lists.lock().unwrap();
            let current = lists.get(&community).cloned().unwrap_or_default();
            let (next, out) = f(&current);
            if let Some(next) = next {
                lists.insert(community, next);
            }
            Ok(out)
        }
    }

    fn manager() -> PermissionSet {
        PermissionSet::granting([Permission::manage_server()])
    }

    fn run(store: &MemoryStore, perms: &PermissionSet, args: &str) -> Reply {
        WhitelistCommand::execute(
            store,
            Invocation { community: Some(CommunityId(1)), permissions: perms, args },
        )
    }

    #[test]
    fn add_show_remove_flow() {
        let store = MemoryStore::default();
        let perms = manager();

        assert_eq!(run(&store, &perms, "show").text, "Whitelisted Guild IDs:\nNone");
        assert_eq!(run(&store, &perms, "ADD 42").tone, Tone::Success);
        assert_eq!(run(&store, &perms, "add 7").tone, Tone::Success);
        assert_eq!(run(&store, &perms, "show").text, "Whitelisted Guild IDs:\n42, 7");

        let dup = run(&store, &perms, "add 42");
        assert_eq!(dup, Reply::warning("Given Guild was already whitelisted"));

        assert_eq!(run(&store, &perms, "remove 42").text, "Whitelist has been modified");
        let gone = run(&store, &perms, "remove 42");
        assert_eq!(gone, Reply::warning("Given Guild was not whitelisted"));

        let stored: Vec<CommunityId> = store.allow_list(CommunityId(1)).unwrap().into();
        assert_eq!(stored, vec![CommunityId(7)]);
    }

    #[test]
    fn communities_are_isolated() {
        let store = MemoryStore::default();
        let perms = manager();
        run(&store, &perms, "add 5");
        assert!(store.allow_list(CommunityId(2)).unwrap().is_empty());
    }

    #[test]
    fn parse_errors_do_not_touch_store() {
        let store = MemoryStore { offline: true, ..Default::default() };
        let perms = manager();
        assert_eq!(run(&store, &perms, "ADD abc").text, "Invalid Guild-ID provided!");
        assert!(run(&store, &perms, "foo").text.contains("Valid options are"));
    }

    #[test]
    fn store_failure_is_reported() {
        let store = MemoryStore { offline: true, ..Default::default() };
        let reply = run(&store, &manager(), "add 1");
        assert_eq!(reply.tone, Tone::Error);
        assert!(reply.text.contains("store offline"));
    }

    #[test]
    fn unauthorized_invoker_is_rejected() {
        let store = MemoryStore::default();
        let reply = run(&store, &PermissionSet::default(), "add 1");
        assert_eq!(reply.tone, Tone::Error);
        assert!(store.allow_list(CommunityId(1)).unwrap().is_empty());
    }

    #[test]
    fn direct_message_is_rejected() {
        let store = MemoryStore::default();
        let perms = manager();
        let reply = WhitelistCommand::execute(
            &store,
            Invocation { community: None, permissions: &perms, args: "show" },
        );
        assert_eq!(reply.tone, Tone::Error);
    }
}
