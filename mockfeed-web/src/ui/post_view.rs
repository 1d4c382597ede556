use std::rc::Rc;

use mockfeed_client::{
    api::{Post, Time, UserId},
    format_time, RevealState,
};
use yew::prelude::*;

use crate::{
    ui::{self, composer::media_html, FeedAction},
    util,
};

#[derive(Clone, PartialEq, Properties)]
pub struct PostViewProps {
    pub post: Post,
    pub liked: bool,
    pub comments_shown: bool,
    pub reveal: Rc<RevealState>,
    pub user: UserId,
    pub now: Time,
    pub on_action: Callback<FeedAction>,
}

#[function_component(PostView)]
pub fn post_view(p: &PostViewProps) -> Html {
    let menu_open = use_state(|| false);
    let post = &p.post;
    let id = post.id;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let on_delete = {
        let menu_open = menu_open.clone();
        p.on_action.reform(move |_| {
            menu_open.set(false);
            FeedAction::DeletePost(id)
        })
    };

    let content = (!post.content.is_empty()).then(|| {
        html! { <p class="post-content">{ &post.content }</p> }
    });
    let media = (!post.media.is_empty()).then(|| {
        html! {
            <div class={ classes!("post-media", (post.media.len() == 1).then(|| "single-media")) }>
                { for post.media.iter().map(media_html) }
            </div>
        }
    });

    html! {
        <div class="post card mb-3" id={ format!("post-{}", id.0) }>
            <div class="card-body">
                <div class="post-header d-flex align-items-center mb-2">
                    <img class="avatar rounded-circle me-2" src={ post.author.avatar.clone() } alt="Avatar" />
                    <div class="flex-fill">
                        <div class="fw-bold">{ &post.author.name }</div>
                        <div class="text-muted small">
                            { &post.author.username }
                            { " · " }
                            { format_time(post.timestamp, p.now, &util::local_tz()) }
                        </div>
                    </div>
                    <div class="dropdown">
                        <button type="button" class="btn btn-sm bi-three-dots" onclick={ toggle_menu } />
                        <ul class={ classes!("dropdown-menu", (*menu_open).then(|| "show")) }>
                            <li>
                                <button type="button" class="dropdown-item text-danger" onclick={ on_delete }>
                                    { "Delete post" }
                                </button>
                            </li>
                        </ul>
                    </div>
                </div>
                { for content }
                { for media }
                <div class="post-actions d-flex mt-2">
                    <button
                        type="button"
                        class={ classes!("btn", "btn-sm", "like-button", p.liked.then(|| "active")) }
                        onclick={ p.on_action.reform(move |_| FeedAction::ToggleLike(id)) }
                    >
                        { format!("👍 {}", post.likes) }
                    </button>
                    <button
                        type="button"
                        class="btn btn-sm comment-button ms-2"
                        onclick={ p.on_action.reform(move |_| FeedAction::ToggleComments(id)) }
                    >
                        { format!("💬 {}", post.comments.len()) }
                    </button>
                </div>
                { if p.comments_shown { comments_section(p) } else { html! {} } }
            </div>
        </div>
    }
}

fn comments_section(p: &PostViewProps) -> Html {
    let post = &p.post;
    let id = post.id;
    let page = p.reveal.comments(post);
    let more = page.hidden.min(p.reveal.step());
    let show_more = page.has_more().then(|| {
        html! {
            <button
                type="button"
                class="btn btn-link btn-sm show-more"
                onclick={ p.on_action.reform(move |_| FeedAction::ShowMoreComments(id)) }
            >
                { format!("Show {more} more comments") }
            </button>
        }
    });
    html! {
        <div class="comments-section mt-3">
            <textarea
                class="form-control comment-input mb-2"
                rows="1"
                placeholder="Write a comment..."
                onkeydown={ ui::submit_on_enter(p.on_action.reform(move |raw| FeedAction::AddComment { post: id, raw })) }
            />
            <div class="comments">
                { for page.shown.iter().map(|comment| html! {
                    <ui::CommentView
                        key={ comment.id.0.to_string() }
                        post_id={ id }
                        comment={ (*comment).clone() }
                        reveal={ p.reveal.clone() }
                        user={ p.user.clone() }
                        now={ p.now }
                        on_action={ p.on_action.clone() }
                    />
                }) }
            </div>
            { for show_more }
        </div>
    }
}
