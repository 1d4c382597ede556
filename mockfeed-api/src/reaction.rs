use std::collections::BTreeMap;

use crate::UserId;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Likes,
    Hearts,
    Angry,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 3] = [ReactionKind::Likes, ReactionKind::Hearts, ReactionKind::Angry];
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReactionCounts {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub hearts: u64,
    #[serde(default)]
    pub angry: u64,
}

impl ReactionCounts {
    pub fn get(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Likes => self.likes,
            ReactionKind::Hearts => self.hearts,
            ReactionKind::Angry => self.angry,
        }
    }

    pub fn get_mut(&mut self, kind: ReactionKind) -> &mut u64 {
        match kind {
            ReactionKind::Likes => &mut self.likes,
            ReactionKind::Hearts => &mut self.hearts,
            ReactionKind::Angry => &mut self.angry,
        }
    }
}

/// Reaction state of a comment or reply, flattened into its parent when serialized
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reactions {
    #[serde(default, rename = "reactions")]
    pub counts: ReactionCounts,

    /// At most one kind per user
    #[serde(default, rename = "userReactions")]
    pub by_user: BTreeMap<UserId, ReactionKind>,
}

impl Reactions {
    pub fn of(&self, user: &UserId) -> Option<ReactionKind> {
        self.by_user.get(user).copied()
    }
}
