mod config;
pub use config::Config;

mod db;
pub use db::Db;

mod feed;
pub use feed::{Feed, Target};

mod id;
pub use id::IdGen;

mod input;
pub use input::{parse_comment_input, CommentInput};

mod media;
pub use media::encode_media;

mod reaction;
pub use reaction::ReactionsExt;

mod reveal;
pub use reveal::{page, Dated, Page, RevealState};

mod store;
pub use store::{decode_or_default, MemoryStore, Store, KEY_COMMENT_VISIBILITY, KEY_POSTS};

mod time;
pub use time::format_time;

pub mod api {
    pub use mockfeed_api::*;
}

pub mod prelude {
    pub use crate::{Dated, ReactionsExt, Store};
}
