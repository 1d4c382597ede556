use std::{
    collections::{BTreeMap, HashSet},
    rc::Rc,
    time::Duration,
};

use chrono::Utc;
use mockfeed_client::{
    api::{CommentId, Error, Media, PostId, ReactionKind, Time},
    Config, Db, Feed, RevealState,
};
use yew::prelude::*;

use crate::{store::LocalStorageStore, ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct FeedViewProps {
    pub config: Rc<Config>,
    pub on_logout: Callback<()>,
}

/// Relative timestamps are refreshed this often
const CLOCK_TICK: Duration = Duration::from_secs(30);

/// Everything a user can do on the feed page, plus the clock tick
#[derive(Debug)]
pub enum FeedAction {
    CreatePost {
        content: String,
        media: Vec<Media>,
    },
    DeletePost(PostId),
    ToggleLike(PostId),
    ToggleComments(PostId),
    AddComment {
        post: PostId,
        raw: String,
    },
    EditComment {
        post: PostId,
        comment: CommentId,
        text: String,
    },
    DeleteComment {
        post: PostId,
        comment: CommentId,
    },
    AddReply {
        post: PostId,
        comment: CommentId,
        text: String,
    },
    React {
        post: PostId,
        target: CommentId,
        kind: ReactionKind,
    },
    ShowMoreComments(PostId),
    ShowMoreReplies {
        post: PostId,
        comment: CommentId,
    },
    Tick,
}

pub struct FeedView {
    db: Db<LocalStorageStore>,
    feed: Rc<Feed>,
    visibility: BTreeMap<PostId, bool>,
    // Likes have no per-user record in storage, so remembering them is per-session
    liked: HashSet<PostId>,
    reveal: Rc<RevealState>,
    now: Time,
    // Bumped on every published post, remounting the composer with an empty draft
    drafts: u64,
}

impl FeedView {
    fn schedule_tick(ctx: &Context<Self>) {
        ctx.link().send_future(async {
            if let Err(err) = wasm_timer::Delay::new(CLOCK_TICK).await {
                tracing::warn!(?err, "clock tick interrupted");
            }
            FeedAction::Tick
        });
    }

    fn refresh(&mut self) {
        match self.db.feed() {
            Ok(feed) => self.feed = Rc::new(feed),
            Err(err) => tracing::error!(%err, "failed to reload the feed"),
        }
    }

    fn apply(&mut self, action: FeedAction) -> Result<(), Error> {
        match action {
            FeedAction::CreatePost { content, media } => {
                let post = self.db.create_post(&content, media)?;
                tracing::info!(id = ?post.id, "published post");
                self.drafts += 1;
            }
            FeedAction::DeletePost(id) => {
                self.db.delete_post(id)?;
                self.liked.remove(&id);
            }
            FeedAction::ToggleLike(id) => {
                let liked = self.liked.contains(&id);
                self.db.toggle_like(id, liked)?;
                if liked {
                    self.liked.remove(&id);
                } else {
                    self.liked.insert(id);
                }
            }
            FeedAction::ToggleComments(id) => {
                let shown = self.db.toggle_comments(id)?;
                self.visibility.insert(id, shown);
            }
            FeedAction::AddComment { post, raw } => {
                self.db.add_comment(post, &raw)?;
            }
            FeedAction::EditComment {
                post,
                comment,
                text,
            } => {
                self.db.edit_comment(post, comment, &text)?;
            }
            FeedAction::DeleteComment { post, comment } => {
                self.db.delete_comment(post, comment)?;
            }
            FeedAction::AddReply {
                post,
                comment,
                text,
            } => {
                self.db.add_reply(post, comment, &text)?;
            }
            FeedAction::React { post, target, kind } => {
                self.db.handle_reaction(post, target, kind)?;
            }
            FeedAction::ShowMoreComments(_)
            | FeedAction::ShowMoreReplies { .. }
            | FeedAction::Tick => (),
        }
        Ok(())
    }
}

impl Component for FeedView {
    type Message = FeedAction;
    type Properties = FeedViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.props().config.as_ref().clone();
        let reveal = Rc::new(RevealState::new(config.reveal_step));
        let db = Db::new(LocalStorageStore, config);
        let feed = db.feed().unwrap_or_else(|err| {
            tracing::error!(%err, "failed to load the feed, starting empty");
            Feed::default()
        });
        let visibility = db.comment_visibility().unwrap_or_else(|err| {
            tracing::error!(%err, "failed to load comment panels, hiding them all");
            BTreeMap::new()
        });
        tracing::info!(posts = feed.posts.len(), "loaded feed");
        Self::schedule_tick(ctx);
        Self {
            db,
            feed: Rc::new(feed),
            visibility,
            liked: HashSet::new(),
            reveal,
            now: Utc::now(),
            drafts: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match &msg {
            FeedAction::Tick => {
                self.now = Utc::now();
                Self::schedule_tick(ctx);
                return true;
            }
            FeedAction::ShowMoreComments(post) => {
                let total = self.feed.post(*post).map_or(0, |p| p.comments.len());
                Rc::make_mut(&mut self.reveal).show_more_comments(*post, total);
                return true;
            }
            FeedAction::ShowMoreReplies { post, comment } => {
                let total = self
                    .feed
                    .post(*post)
                    .and_then(|p| p.comment(*comment))
                    .map_or(0, |c| c.replies.len());
                Rc::make_mut(&mut self.reveal).show_more_replies(*comment, total);
                return true;
            }
            FeedAction::DeletePost(_) => {
                if !util::confirm("Do you really want to delete this post?") {
                    return false;
                }
            }
            FeedAction::DeleteComment { .. } => {
                if !util::confirm("Do you really want to delete this comment?") {
                    return false;
                }
            }
            _ => (),
        }

        tracing::trace!(?msg, "applying feed action");
        match self.apply(msg) {
            Ok(()) => (),
            Err(err) if err.is_user_facing() => {
                util::alert(&err.to_string());
                return false;
            }
            // Most likely removed from another tab in the meantime
            Err(err) => tracing::warn!(%err, "feed action did not apply"),
        }
        self.refresh();
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let profile = &config.profile;
        let user = profile.user_id();
        let on_action = ctx.link().callback(|a: FeedAction| a);
        let now = self.now;
        html! {
            <div class="feed container">
                <header class="feed-header d-flex align-items-center my-3">
                    <img class="profile-avatar rounded-circle me-2" src={ profile.avatar.clone() } alt="Avatar" />
                    <div class="flex-fill">
                        <div class="profile-name fw-bold">{ &profile.name }</div>
                        <div class="profile-username text-muted">{ &profile.username }</div>
                    </div>
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        onclick={ ctx.props().on_logout.reform(|_| ()) }
                    >
                        { "Logout" }
                    </button>
                </header>
                <ui::Composer
                    key={ self.drafts.to_string() }
                    max_media_size={ config.max_media_size }
                    on_action={ on_action.clone() }
                />
                <div class="posts">
                    { for self.feed.posts.iter().map(|post| html! {
                        <ui::PostView
                            key={ post.id.0.to_string() }
                            post={ post.clone() }
                            liked={ self.liked.contains(&post.id) }
                            comments_shown={ self.visibility.get(&post.id).copied().unwrap_or(false) }
                            reveal={ self.reveal.clone() }
                            user={ user.clone() }
                            now={ now }
                            on_action={ on_action.clone() }
                        />
                    }) }
                </div>
            </div>
        }
    }
}
