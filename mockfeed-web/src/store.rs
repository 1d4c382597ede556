use std::collections::BTreeMap;

use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage};
use mockfeed_client::{
    api::{Post, PostId},
    decode_or_default, Store, KEY_COMMENT_VISIBILITY, KEY_POSTS,
};
use serde::{de::DeserializeOwned, Serialize};

/// The browser's local storage, shared by every tab of the page
pub struct LocalStorageStore;

fn get<T: DeserializeOwned + Default>(key: &str) -> anyhow::Result<T> {
    let raw = LocalStorage::raw()
        .get_item(key)
        .map_err(|e| anyhow!("reading {key:?} from local storage: {e:?}"))?;
    Ok(decode_or_default(key, raw.as_deref()))
}

fn set<T: Serialize + ?Sized>(key: &str, value: &T) -> anyhow::Result<()> {
    LocalStorage::set(key, value).map_err(|e| anyhow!("saving {key:?} to local storage: {e}"))
}

impl Store for LocalStorageStore {
    fn load_posts(&self) -> anyhow::Result<Vec<Post>> {
        get(KEY_POSTS)
    }

    fn save_posts(&mut self, posts: &[Post]) -> anyhow::Result<()> {
        set(KEY_POSTS, posts)
    }

    fn load_comment_visibility(&self) -> anyhow::Result<BTreeMap<PostId, bool>> {
        get(KEY_COMMENT_VISIBILITY)
    }

    fn save_comment_visibility(
        &mut self,
        visibility: &BTreeMap<PostId, bool>,
    ) -> anyhow::Result<()> {
        set(KEY_COMMENT_VISIBILITY, visibility)
    }
}
