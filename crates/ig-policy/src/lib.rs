//! ig-policy: Invite allow-list policy — parsing, set semantics, permission checks.

pub mod command;
pub mod engine;
pub mod manager;
pub mod parser;
pub mod response;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("command can only be used inside a community: {0}")]
    CommunityOnly(String),
}
