use std::collections::{BTreeMap, HashMap};

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::api::{Post, PostId};

pub const KEY_POSTS: &str = "posts";
pub const KEY_COMMENT_VISIBILITY: &str = "commentVisibility";

/// Flat key-value persistence of the whole feed
///
/// Every mutation is a full load followed by a full save, there are no partial
/// updates and no locking: with several writers, the last one wins.
pub trait Store {
    fn load_posts(&self) -> anyhow::Result<Vec<Post>>;
    fn save_posts(&mut self, posts: &[Post]) -> anyhow::Result<()>;

    /// Whether the comment panel of each post is open
    fn load_comment_visibility(&self) -> anyhow::Result<BTreeMap<PostId, bool>>;
    fn save_comment_visibility(&mut self, visibility: &BTreeMap<PostId, bool>)
        -> anyhow::Result<()>;
}

/// Missing keys decode to the default value, and so do unparseable ones so
/// that a corrupt store does not lock the user out of the page
pub fn decode_or_default<T: DeserializeOwned + Default>(key: &str, raw: Option<&str>) -> T {
    match raw.map(serde_json::from_str) {
        None => T::default(),
        Some(Ok(v)) => v,
        Some(Err(err)) => {
            tracing::warn!(key, ?err, "ignoring unparseable store value");
            T::default()
        }
    }
}

/// Store keeping serialized values in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v as &str)
    }

    pub fn set_raw(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn set<T: serde::Serialize + ?Sized>(&mut self, key: &str, value: &T) -> anyhow::Result<()> {
        let value =
            serde_json::to_string(value).with_context(|| format!("serializing {key:?}"))?;
        self.set_raw(key, value);
        Ok(())
    }
}

impl Store for MemoryStore {
    fn load_posts(&self) -> anyhow::Result<Vec<Post>> {
        Ok(decode_or_default(KEY_POSTS, self.raw(KEY_POSTS)))
    }

    fn save_posts(&mut self, posts: &[Post]) -> anyhow::Result<()> {
        self.set(KEY_POSTS, posts)
    }

    fn load_comment_visibility(&self) -> anyhow::Result<BTreeMap<PostId, bool>> {
        Ok(decode_or_default(
            KEY_COMMENT_VISIBILITY,
            self.raw(KEY_COMMENT_VISIBILITY),
        ))
    }

    fn save_comment_visibility(
        &mut self,
        visibility: &BTreeMap<PostId, bool>,
    ) -> anyhow::Result<()> {
        self.set(KEY_COMMENT_VISIBILITY, visibility)
    }
}
