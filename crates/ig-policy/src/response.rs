//! Reply rendering. Every result, including conflicts and parse failures,
//! becomes an explicit [`Reply`].

use crate::manager::{Conflict, Outcome};
use crate::parser::ParseError;
use crate::PolicyError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub tone: Tone,
    pub text: String,
}

impl Reply {
    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { tone: Tone::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: Tone::Error, text: text.into() }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.tone {
            Tone::Success => "[OK]",
            Tone::Warning => "[WARN]",
            Tone::Error => "[ERR]",
        };
        write!(f, "{tag} {}", self.text)
    }
}

pub fn render_outcome(outcome: &Outcome) -> Reply {
    match outcome {
        Outcome::Display(list) => {
            let body = if list.is_empty() { "None".to_string() } else { list.to_string() };
            Reply::success(format!("Whitelisted Guild IDs:\n{body}"))
        }
        Outcome::Updated(_) => Reply::success("Whitelist has been modified"),
        Outcome::Conflict(Conflict::AlreadyPresent) => {
            Reply::warning("Given Guild was already whitelisted")
        }
        Outcome::Conflict(Conflict::NotPresent) => Reply::warning("Given Guild was not whitelisted"),
    }
}

/// `description` is the command's long description, shown with the usage hint.
pub fn render_parse_error(err: ParseError, description: &str) -> Reply {
    match err {
        ParseError::InvalidIdentifier => Reply::warning("Invalid Guild-ID provided!"),
        ParseError::UnrecognizedForm => Reply::warning(format!(
            "{description}\nValid options are `ADD GUILD_ID`, `REMOVE GUILD_ID` and `show`"
        )),
    }
}

pub fn render_policy_error(err: &PolicyError) -> Reply {
    match err {
        PolicyError::PermissionDenied(msg) => Reply::error(format!("Permission denied: {msg}")),
        PolicyError::CommunityOnly(_) => Reply::error("This command cannot be used outside a server"),
    }
}

pub fn render_store_error(err: &dyn std::error::Error) -> Reply {
    Reply::error(format!("Failed to update the whitelist: {err}"))
}
