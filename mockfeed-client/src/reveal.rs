use std::{cmp::Reverse, collections::HashMap};

use crate::api::{Comment, CommentId, Post, PostId, Reply, Time};

/// Items of a thread, ordered newest-first
pub trait Dated {
    fn date(&self) -> Time;
    fn sort_id(&self) -> i64;
}

impl Dated for Comment {
    fn date(&self) -> Time {
        self.timestamp
    }

    fn sort_id(&self) -> i64 {
        self.id.0
    }
}

impl Dated for Reply {
    fn date(&self) -> Time {
        self.timestamp
    }

    fn sort_id(&self) -> i64 {
        self.id.0
    }
}

/// The visible slice of a thread
#[derive(Debug, Eq, PartialEq)]
pub struct Page<'a, T> {
    pub shown: Vec<&'a T>,
    pub hidden: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn has_more(&self) -> bool {
        self.hidden > 0
    }
}

pub fn page<T: Dated>(items: &[T], cutoff: usize) -> Page<'_, T> {
    let mut shown = items.iter().collect::<Vec<_>>();
    shown.sort_by_key(|t| Reverse((t.date(), t.sort_id())));
    let hidden = shown.len().saturating_sub(cutoff);
    shown.truncate(cutoff);
    Page { shown, hidden }
}

/// Per-thread reveal cutoffs, kept for the session only
///
/// Comment threads are keyed by post and reply threads by comment, each
/// starting at `step` and growing by `step` on every "show more".
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevealState {
    step: usize,
    comments: HashMap<PostId, usize>,
    replies: HashMap<CommentId, usize>,
}

fn grow(cutoff: &mut usize, step: usize, total: usize) -> usize {
    *cutoff = (*cutoff + step).min(total).max(step);
    *cutoff
}

impl RevealState {
    pub fn new(step: usize) -> RevealState {
        RevealState {
            step,
            comments: HashMap::new(),
            replies: HashMap::new(),
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn comment_cutoff(&self, post: PostId) -> usize {
        self.comments.get(&post).copied().unwrap_or(self.step)
    }

    pub fn reply_cutoff(&self, comment: CommentId) -> usize {
        self.replies.get(&comment).copied().unwrap_or(self.step)
    }

    pub fn comments<'a>(&self, post: &'a Post) -> Page<'a, Comment> {
        page(&post.comments, self.comment_cutoff(post.id))
    }

    pub fn replies<'a>(&self, comment: &'a Comment) -> Page<'a, Reply> {
        page(&comment.replies, self.reply_cutoff(comment.id))
    }

    /// Returns the new cutoff
    pub fn show_more_comments(&mut self, post: PostId, total: usize) -> usize {
        let step = self.step;
        grow(self.comments.entry(post).or_insert(step), step, total)
    }

    /// Returns the new cutoff
    pub fn show_more_replies(&mut self, comment: CommentId, total: usize) -> usize {
        let step = self.step;
        grow(self.replies.entry(comment).or_insert(step), step, total)
    }
}
