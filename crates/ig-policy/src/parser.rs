//! Turns raw command arguments into an [`Operation`].

use crate::manager::Operation;
use ig_core::community::CommunityId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `show`, `add <id>` or `remove <id>`")]
    UnrecognizedForm,
    #[error("invalid community identifier")]
    InvalidIdentifier,
}

/// Parse `show`, `add <id>` or `remove <id>`, case-insensitively.
///
/// Keywords are case-folded; the identifier token is not, since IDs are
/// purely numeric.
pub fn parse(input: &str) -> Result<Operation, ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [keyword] if keyword.eq_ignore_ascii_case("show") => Ok(Operation::Show),
        [keyword, id] if keyword.eq_ignore_ascii_case("add") => Ok(Operation::Add(parse_id(id)?)),
        [keyword, id] if keyword.eq_ignore_ascii_case("remove") => {
            Ok(Operation::Remove(parse_id(id)?))
        }
        _ => Err(ParseError::UnrecognizedForm),
    }
}

/// Unsigned decimal over the whole token. `u64::from_str` would accept a
/// leading `+`, so digits are checked first.
fn parse_id(token: &str) -> Result<CommunityId, ParseError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIdentifier);
    }
    token
        .parse::<u64>()
        .map(CommunityId)
        .map_err(|_| ParseError::InvalidIdentifier)
}
