use crate::{Author, Reactions, Time};

/// Shared by comments and replies
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct CommentId(pub i64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub author: Author,
    pub timestamp: Time,

    #[serde(flatten)]
    pub reactions: Reactions,

    /// Oldest first, replies are appended
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reply {
    pub id: CommentId,
    pub content: String,
    pub author: Author,
    pub timestamp: Time,

    #[serde(flatten)]
    pub reactions: Reactions,
}

impl Comment {
    pub fn reply(&self, id: CommentId) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == id)
    }

    pub fn max_id(&self) -> i64 {
        self.replies
            .iter()
            .map(|r| r.id.0)
            .fold(self.id.0, i64::max)
    }
}
