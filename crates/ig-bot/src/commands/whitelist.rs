//! `whitelist` console command, backed by AppState.

use crate::state::AppState;
use ig_core::community::CommunityId;
use ig_policy::command::{Invocation, WhitelistCommand};
use ig_policy::response::Reply;
use std::sync::Arc;

pub async fn whitelist(state: &AppState, community: Option<CommunityId>, args: String) -> Reply {
    let store = Arc::clone(&state.store);
    let permissions = state.config.operator_permissions.clone();

    // SQLite work runs off the async executor.
    let joined = tokio::task::spawn_blocking(move || {
        WhitelistCommand::execute(
            store.as_ref(),
            Invocation {
                community,
                permissions: &permissions,
                args: &args,
            },
        )
    })
    .await;

    match joined {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!("whitelist task failed: {e}");
            Reply::error(format!("Command failed: {e}"))
        }
    }
}
