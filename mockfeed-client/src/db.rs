use std::collections::BTreeMap;

use chrono::Utc;

use crate::{
    api::{Author, Comment, CommentId, Error, Media, Post, PostId, ReactionKind, Reply},
    Config, Feed, IdGen, Store, Target,
};

fn storage_error(err: anyhow::Error) -> Error {
    Error::Storage(format!("{err:#}"))
}

/// Mutation operations committed to a [`Store`]
///
/// Each operation loads the whole feed, changes one node and saves the whole
/// feed back. Nothing is saved when the operation fails.
pub struct Db<S> {
    store: S,
    config: Config,
    ids: IdGen,
}

impl<S: Store> Db<S> {
    pub fn new(store: S, config: Config) -> Db<S> {
        Db {
            store,
            config,
            ids: IdGen::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profile(&self) -> &Author {
        &self.config.profile
    }

    pub fn feed(&self) -> Result<Feed, Error> {
        self.store
            .load_posts()
            .map(Feed::new)
            .map_err(storage_error)
    }

    fn mutate<R, F>(&mut self, op: &'static str, f: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Feed, &mut IdGen, &Config) -> Result<R, Error>,
    {
        let mut feed = self.feed()?;
        self.ids.observe(feed.max_id());
        let res = match f(&mut feed, &mut self.ids, &self.config) {
            Ok(res) => res,
            Err(err) => {
                tracing::debug!(op, %err, "feed mutation rejected");
                return Err(err);
            }
        };
        self.store
            .save_posts(&feed.posts)
            .map_err(storage_error)?;
        tracing::debug!(op, num_posts = feed.posts.len(), "feed mutation committed");
        Ok(res)
    }

    pub fn create_post(&mut self, content: &str, media: Vec<Media>) -> Result<Post, Error> {
        self.mutate("create_post", |feed, ids, config| {
            let now = Utc::now();
            let id = ids.next_post(now);
            feed.create_post(id, now, config.profile.clone(), content, media)
                .cloned()
        })
    }

    pub fn delete_post(&mut self, id: PostId) -> Result<Post, Error> {
        let res = self.mutate("delete_post", |feed, _, _| feed.delete_post(id))?;
        if let Err(err) = self.forget_comment_visibility(id) {
            tracing::warn!(?id, %err, "failed to drop comment panel state of deleted post");
        }
        Ok(res)
    }

    fn forget_comment_visibility(&mut self, id: PostId) -> Result<(), Error> {
        let mut visibility = self.comment_visibility()?;
        if visibility.remove(&id).is_some() {
            self.store
                .save_comment_visibility(&visibility)
                .map_err(storage_error)?;
        }
        Ok(())
    }

    pub fn toggle_like(&mut self, id: PostId, currently_liked: bool) -> Result<Post, Error> {
        self.mutate("toggle_like", |feed, _, _| {
            feed.toggle_like(id, currently_liked).cloned()
        })
    }

    pub fn add_comment(&mut self, post_id: PostId, raw: &str) -> Result<Comment, Error> {
        self.mutate("add_comment", |feed, ids, config| {
            let now = Utc::now();
            let id = ids.next_comment(now);
            feed.add_comment(post_id, id, now, &config.profile, raw)
                .cloned()
        })
    }

    pub fn edit_comment(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
        text: &str,
    ) -> Result<Comment, Error> {
        self.mutate("edit_comment", |feed, _, _| {
            feed.edit_comment(post_id, comment_id, text).cloned()
        })
    }

    pub fn delete_comment(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<Comment, Error> {
        self.mutate("delete_comment", |feed, _, _| {
            feed.delete_comment(post_id, comment_id)
        })
    }

    pub fn add_reply(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
        text: &str,
    ) -> Result<Reply, Error> {
        self.mutate("add_reply", |feed, ids, config| {
            let now = Utc::now();
            let id = ids.next_comment(now);
            feed.add_reply(post_id, comment_id, id, now, config.profile.clone(), text)
                .cloned()
        })
    }

    pub fn handle_reaction(
        &mut self,
        post_id: PostId,
        target: CommentId,
        kind: ReactionKind,
    ) -> Result<Target, Error> {
        self.mutate("handle_reaction", |feed, _, config| {
            feed.handle_reaction(post_id, target, &config.profile.user_id(), kind)
        })
    }

    pub fn comment_visibility(&self) -> Result<BTreeMap<PostId, bool>, Error> {
        self.store
            .load_comment_visibility()
            .map_err(storage_error)
    }

    /// Flip whether the comments of `post_id` are shown, returning the new state
    pub fn toggle_comments(&mut self, post_id: PostId) -> Result<bool, Error> {
        let mut visibility = self.comment_visibility()?;
        let shown = visibility.entry(post_id).or_insert(false);
        *shown = !*shown;
        let shown = *shown;
        self.store
            .save_comment_visibility(&visibility)
            .map_err(storage_error)?;
        tracing::debug!(?post_id, shown, "toggled comment panel");
        Ok(shown)
    }
}
