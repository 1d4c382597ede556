use crate::api::{CommentId, PostId, Time};

/// Creation-time-derived ids that never repeat, even within one millisecond
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IdGen {
    last: i64,
}

impl IdGen {
    pub fn new() -> IdGen {
        IdGen::default()
    }

    /// Make sure no id up to `id` will ever be handed out
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    pub fn next(&mut self, now: Time) -> i64 {
        let id = now.timestamp_millis().max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    pub fn next_post(&mut self, now: Time) -> PostId {
        PostId(self.next(now))
    }

    pub fn next_comment(&mut self, now: Time) -> CommentId {
        CommentId(self.next(now))
    }
}
