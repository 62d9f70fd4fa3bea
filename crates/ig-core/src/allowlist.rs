//! Allow-list of communities whose invite links are exempt from enforcement.

use crate::community::CommunityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, duplicate-free sequence of community IDs.
///
/// Insertion order is preserved. Any constructor that accepts arbitrary
/// input (including deserialization of a stored list) collapses duplicates,
/// keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CommunityId>", into = "Vec<CommunityId>")]
pub struct AllowList {
    ids: Vec<CommunityId>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: CommunityId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CommunityId> + '_ {
        self.ids.iter().copied()
    }

    pub fn as_slice(&self) -> &[CommunityId] {
        &self.ids
    }

    /// A new list with `id` appended at the end. Returns an unchanged copy
    /// if `id` is already present.
    pub fn appended(&self, id: CommunityId) -> Self {
        if self.contains(id) {
            return self.clone();
        }
        let mut ids = Vec::with_capacity(self.ids.len() + 1);
        ids.extend_from_slice(&self.ids);
        ids.push(id);
        Self { ids }
    }

    /// A new list without `id`, remaining entries in their original order.
    pub fn removed(&self, id: CommunityId) -> Self {
        Self {
            ids: self.ids.iter().copied().filter(|other| *other != id).collect(),
        }
    }
}

impl FromIterator<CommunityId> for AllowList {
    fn from_iter<I: IntoIterator<Item = CommunityId>>(iter: I) -> Self {
        let mut ids: Vec<CommunityId> = Vec::new();
        for id in iter {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

impl From<Vec<CommunityId>> for AllowList {
    fn from(ids: Vec<CommunityId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<AllowList> for Vec<CommunityId> {
    fn from(list: AllowList) -> Self {
        list.ids
    }
}

impl fmt::Display for AllowList {
    /// Comma-separated IDs; empty string for an empty list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
