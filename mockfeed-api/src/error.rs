use crate::{CommentId, PostId};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Cannot publish a post with neither text nor media")]
    EmptyPost,

    #[error("Cannot publish an empty comment")]
    EmptyComment,

    #[error("File is too large ({size} bytes), please pick a file smaller than {max} bytes")]
    MediaTooLarge { size: usize, max: usize },

    #[error("Post {0:?} not found")]
    PostNotFound(PostId),

    #[error("Comment {0:?} not found")]
    CommentNotFound(CommentId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Whether this error should be shown to the user rather than just logged
    ///
    /// A failed save drops the user's input, so storage errors are included.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::EmptyPost
                | Error::EmptyComment
                | Error::MediaTooLarge { .. }
                | Error::Storage(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_vanished_nodes_are_silent() {
        assert!(Error::EmptyPost.is_user_facing());
        assert!(Error::MediaTooLarge { size: 2, max: 1 }.is_user_facing());
        assert!(Error::Storage(String::from("QuotaExceededError")).is_user_facing());
        assert!(!Error::PostNotFound(PostId(1)).is_user_facing());
        assert!(!Error::CommentNotFound(CommentId(1)).is_user_facing());
    }
}
