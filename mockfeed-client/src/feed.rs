use crate::{
    api::{
        Author, Comment, CommentId, Error, Media, Post, PostId, ReactionKind, Reactions, Reply,
        Time, UserId,
    },
    parse_comment_input, ReactionsExt,
};

/// The node a reaction landed on
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Target {
    Comment(Comment),
    Reply { comment_id: CommentId, reply: Reply },
}

impl Target {
    pub fn reactions(&self) -> &Reactions {
        match self {
            Target::Comment(c) => &c.reactions,
            Target::Reply { reply, .. } => &reply.reactions,
        }
    }
}

/// In-memory content tree, newest post first
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Feed {
    pub posts: Vec<Post>,
}

impl Feed {
    pub fn new(posts: Vec<Post>) -> Feed {
        Feed { posts }
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn post_mut(&mut self, id: PostId) -> Result<&mut Post, Error> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::PostNotFound(id))
    }

    /// Largest id in use anywhere in the tree, 0 for an empty feed
    pub fn max_id(&self) -> i64 {
        self.posts.iter().map(|p| p.max_id()).fold(0, i64::max)
    }

    pub fn create_post(
        &mut self,
        id: PostId,
        date: Time,
        author: Author,
        content: &str,
        media: Vec<Media>,
    ) -> Result<&Post, Error> {
        let content = content.trim();
        if content.is_empty() && media.is_empty() {
            return Err(Error::EmptyPost);
        }
        self.posts.insert(
            0,
            Post {
                id,
                content: content.to_string(),
                author,
                media,
                likes: 0,
                comments: Vec::new(),
                timestamp: date,
            },
        );
        Ok(&self.posts[0])
    }

    pub fn delete_post(&mut self, id: PostId) -> Result<Post, Error> {
        let idx = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::PostNotFound(id))?;
        Ok(self.posts.remove(idx))
    }

    /// `currently_liked` is the state the user sees before clicking
    pub fn toggle_like(&mut self, id: PostId, currently_liked: bool) -> Result<&Post, Error> {
        let post = self.post_mut(id)?;
        post.likes = match currently_liked {
            true => post.likes.saturating_sub(1),
            false => post.likes + 1,
        };
        Ok(post)
    }

    /// `raw` may carry avatar and name overrides, see [`parse_comment_input`]
    pub fn add_comment(
        &mut self,
        post_id: PostId,
        id: CommentId,
        date: Time,
        profile: &Author,
        raw: &str,
    ) -> Result<&Comment, Error> {
        let input = parse_comment_input(raw);
        if input.content.is_empty() {
            return Err(Error::EmptyComment);
        }
        let post = self.post_mut(post_id)?;
        post.comments.insert(
            0,
            Comment {
                id,
                author: input.author(profile),
                content: input.content,
                timestamp: date,
                reactions: Reactions::default(),
                replies: Vec::new(),
            },
        );
        Ok(&post.comments[0])
    }

    pub fn edit_comment(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
        text: &str,
    ) -> Result<&Comment, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyComment);
        }
        let comment = self
            .post_mut(post_id)?
            .comment_mut(comment_id)
            .ok_or(Error::CommentNotFound(comment_id))?;
        comment.content = text.to_string();
        Ok(comment)
    }

    pub fn delete_comment(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<Comment, Error> {
        let post = self.post_mut(post_id)?;
        let idx = post
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(Error::CommentNotFound(comment_id))?;
        Ok(post.comments.remove(idx))
    }

    /// Replies are appended, unlike comments which are prepended
    pub fn add_reply(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
        id: CommentId,
        date: Time,
        author: Author,
        text: &str,
    ) -> Result<&Reply, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyComment);
        }
        let comment = self
            .post_mut(post_id)?
            .comment_mut(comment_id)
            .ok_or(Error::CommentNotFound(comment_id))?;
        comment.replies.push(Reply {
            id,
            content: text.to_string(),
            author,
            timestamp: date,
            reactions: Reactions::default(),
        });
        Ok(&comment.replies[comment.replies.len() - 1])
    }

    /// Comments are searched before replies, the first id match wins
    pub fn handle_reaction(
        &mut self,
        post_id: PostId,
        target: CommentId,
        user: &UserId,
        kind: ReactionKind,
    ) -> Result<Target, Error> {
        let post = self.post_mut(post_id)?;
        if let Some(c) = post.comment_mut(target) {
            c.reactions.toggle(user, kind);
            return Ok(Target::Comment(c.clone()));
        }
        for c in post.comments.iter_mut() {
            if let Some(r) = c.replies.iter_mut().find(|r| r.id == target) {
                r.reactions.toggle(user, kind);
                return Ok(Target::Reply {
                    comment_id: c.id,
                    reply: r.clone(),
                });
            }
        }
        Err(Error::CommentNotFound(target))
    }
}
