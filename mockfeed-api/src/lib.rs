use chrono::Utc;

pub use chrono;

mod auth;
pub use auth::{check_login, check_login_against, digest, Credential, LoginError, CREDENTIALS};

mod comment;
pub use comment::{Comment, CommentId, Reply};

mod error;
pub use error::Error;

mod media;
pub use media::{Media, MediaKind};

mod post;
pub use post::{Post, PostId};

mod reaction;
pub use reaction::{ReactionCounts, ReactionKind, Reactions};

mod user;
pub use user::{Author, UserId};

pub type Time = chrono::DateTime<Utc>;
