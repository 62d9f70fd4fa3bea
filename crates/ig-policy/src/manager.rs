//! Allow-list manager. Applies an operation to a community's current list.
//!
//! `apply` is a pure function: it never mutates its input and holds no state
//! between calls. Callers persist [`Outcome::Updated`] themselves.

use ig_core::allowlist::AllowList;
use ig_core::community::CommunityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Show,
    Add(CommunityId),
    Remove(CommunityId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// `Add` of an ID already on the list.
    AlreadyPresent,
    /// `Remove` of an ID not on the list.
    NotPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The list to show; may be empty.
    Display(AllowList),
    /// The new list the caller must persist.
    Updated(AllowList),
    /// Nothing changed.
    Conflict(Conflict),
}

impl Outcome {
    /// The list to write back, if this outcome changed anything.
    pub fn updated(&self) -> Option<&AllowList> {
        match self {
            Outcome::Updated(list) => Some(list),
            _ => None,
        }
    }
}

pub fn apply(current: &AllowList, op: Operation) -> Outcome {
    match op {
        Operation::Show => Outcome::Display(current.clone()),
        Operation::Add(id) => {
            if current.contains(id) {
                Outcome::Conflict(Conflict::AlreadyPresent)
            } else {
                Outcome::Updated(current.appended(id))
            }
        }
        Operation::Remove(id) => {
            if !current.contains(id) {
                Outcome::Conflict(Conflict::NotPresent)
            } else {
                Outcome::Updated(current.removed(id))
            }
        }
    }
}
