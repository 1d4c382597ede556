use crate::{Author, Comment, CommentId, Media, Time};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct PostId(pub i64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,

    #[serde(default)]
    pub content: String,

    pub author: Author,

    #[serde(default)]
    pub media: Vec<Media>,

    #[serde(default)]
    pub likes: u64,

    /// Newest first
    #[serde(default)]
    pub comments: Vec<Comment>,

    pub timestamp: Time,
}

impl Post {
    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn comment_mut(&mut self, id: CommentId) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == id)
    }

    /// Largest id used by this post or anything nested in it
    pub fn max_id(&self) -> i64 {
        self.comments
            .iter()
            .map(|c| c.max_id())
            .fold(self.id.0, i64::max)
    }
}
