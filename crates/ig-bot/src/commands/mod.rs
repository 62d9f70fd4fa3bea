//! Console command dispatch.
//!
//! One command per line: `<community_id|dm> <command> [args...]`, or the
//! bare words `help` and `quit`/`exit`.

pub mod whitelist;

use crate::state::AppState;
use ig_core::community::CommunityId;
use ig_policy::command::{CommandSpec, WhitelistCommand};
use ig_policy::response::Reply;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected `<community_id|dm> <command> [args...]`")]
    Malformed,
    #[error("invalid community id: {0}")]
    InvalidCommunity(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleLine {
    Empty,
    Help,
    Quit,
    Command {
        community: Option<CommunityId>,
        name: String,
        args: String,
    },
}

pub fn parse_line(line: &str) -> Result<ConsoleLine, LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ConsoleLine::Empty);
    }
    if line.eq_ignore_ascii_case("help") {
        return Ok(ConsoleLine::Help);
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Ok(ConsoleLine::Quit);
    }

    let (context, rest) = line.split_once(char::is_whitespace).ok_or(LineError::Malformed)?;
    let rest = rest.trim_start();
    let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));

    let community = if context.eq_ignore_ascii_case("dm") {
        None
    } else {
        let id = context
            .parse::<u64>()
            .map_err(|_| LineError::InvalidCommunity(context.to_string()))?;
        Some(CommunityId(id))
    };

    Ok(ConsoleLine::Command {
        community,
        name: name.to_ascii_lowercase(),
        args: args.trim().to_string(),
    })
}

/// All commands the console knows about.
pub fn registry() -> Vec<CommandSpec> {
    vec![WhitelistCommand::spec()]
}

pub fn help_text() -> String {
    let mut out = String::from("Commands (prefix each with a community id, or `dm`):");
    for spec in registry() {
        out.push_str(&format!(
            "\n  [{}] {} {} - {}",
            spec.category, spec.name, spec.arguments, spec.help
        ));
    }
    out
}

/// Run one console command. Returns `None` for lines that produce no reply.
pub async fn dispatch(state: &AppState, line: ConsoleLine) -> Option<Reply> {
    match line {
        ConsoleLine::Empty | ConsoleLine::Quit => None,
        ConsoleLine::Help => Some(Reply::success(help_text())),
        ConsoleLine::Command { community, name, args } => match name.as_str() {
            "whitelist" => Some(whitelist::whitelist(state, community, args).await),
            other => Some(Reply::warning(format!("Unknown command `{other}`. Type `help`."))),
        },
    }
}
