//! Community identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a community (guild). Only equality is meaningful.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CommunityId(pub u64);

impl CommunityId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CommunityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CommunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_number() {
        let id = CommunityId::new(u64::MAX);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "18446744073709551615");

        let back: CommunityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn displays_decimal() {
        assert_eq!(CommunityId::from(42).to_string(), "42");
    }
}
