use std::rc::Rc;

use mockfeed_client::{
    api::{Author, Comment, CommentId, PostId, Reactions, Reply, Time, UserId},
    format_time, RevealState,
};
use yew::prelude::*;

use crate::{
    ui::{self, FeedAction},
    util,
};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentViewProps {
    pub post_id: PostId,
    pub comment: Comment,
    pub reveal: Rc<RevealState>,
    pub user: UserId,
    pub now: Time,
    pub on_action: Callback<FeedAction>,
}

#[function_component(CommentView)]
pub fn comment_view(p: &CommentViewProps) -> Html {
    let edit = use_state(|| None::<String>);
    let replying = use_state(|| false);
    let post = p.post_id;
    let comment = p.comment.id;

    let actions = {
        let start_edit = {
            let edit = edit.clone();
            let content = p.comment.content.clone();
            Callback::from(move |_| edit.set(Some(content.clone())))
        };
        let toggle_reply = {
            let replying = replying.clone();
            Callback::from(move |_| replying.set(!*replying))
        };
        html! {
            <div class="comment-actions d-flex align-items-center">
                { reaction_bar(p, comment, &p.comment.reactions) }
                <button type="button" class="btn btn-link btn-sm" onclick={ toggle_reply }>
                    { "Reply" }
                </button>
                <button type="button" class="btn btn-link btn-sm" onclick={ start_edit }>
                    { "Edit" }
                </button>
                <button
                    type="button"
                    class="btn btn-link btn-sm text-danger"
                    onclick={ p.on_action.reform(move |_| FeedAction::DeleteComment { post, comment }) }
                >
                    { "Delete" }
                </button>
            </div>
        }
    };

    let reply_form = replying.then(|| {
        let replying = replying.clone();
        let on_submit = p.on_action.reform(move |text| {
            replying.set(false);
            FeedAction::AddReply {
                post,
                comment,
                text,
            }
        });
        html! {
            <textarea
                class="form-control reply-input mt-1"
                rows="1"
                placeholder="Write a reply..."
                onkeydown={ ui::submit_on_enter(on_submit) }
            />
        }
    });

    html! {
        <div class="comment mb-2" id={ format!("comment-{}", comment.0) }>
            { header(&p.comment.author, p.comment.timestamp, p.now) }
            { body(p, edit) }
            { actions }
            { for reply_form }
            { replies(p) }
        </div>
    }
}

fn header(author: &Author, timestamp: Time, now: Time) -> Html {
    html! {
        <div class="d-flex align-items-center">
            <img class="avatar avatar-sm rounded-circle me-2" src={ author.avatar.clone() } alt="Avatar" />
            <span class="fw-bold me-1">{ &author.name }</span>
            <span class="text-muted small">
                { &author.username }
                { " · " }
                { format_time(timestamp, now, &util::local_tz()) }
            </span>
        </div>
    }
}

fn body(p: &CommentViewProps, edit: UseStateHandle<Option<String>>) -> Html {
    let (post, comment) = (p.post_id, p.comment.id);
    match (*edit).clone() {
        None => html! {
            <p class="comment-content mb-1">{ &p.comment.content }</p>
        },
        Some(text) => {
            let on_input = {
                let edit = edit.clone();
                Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    edit.set(Some(input.value()))
                })
            };
            let on_save = {
                let edit = edit.clone();
                let text = text.clone();
                p.on_action.reform(move |_| {
                    edit.set(None);
                    FeedAction::EditComment {
                        post,
                        comment,
                        text: text.clone(),
                    }
                })
            };
            html! {
                <div class="comment-edit">
                    <textarea class="form-control mb-1" value={ text } oninput={ on_input } />
                    <button type="button" class="btn btn-primary btn-sm me-1" onclick={ on_save }>
                        { "Save" }
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary btn-sm"
                        onclick={ Callback::from(move |_| edit.set(None)) }
                    >
                        { "Cancel" }
                    </button>
                </div>
            }
        }
    }
}

fn reaction_bar(p: &CommentViewProps, target: CommentId, reactions: &Reactions) -> Html {
    let post = p.post_id;
    html! {
        <ui::ReactionBar
            reactions={ reactions.clone() }
            user={ p.user.clone() }
            on_react={ p.on_action.reform(move |kind| FeedAction::React { post, target, kind }) }
        />
    }
}

fn replies(p: &CommentViewProps) -> Html {
    let (post, comment) = (p.post_id, p.comment.id);
    let page = p.reveal.replies(&p.comment);
    if page.shown.is_empty() {
        return html! {};
    }
    let more = page.hidden.min(p.reveal.step());
    let show_more = page.has_more().then(|| {
        html! {
            <button
                type="button"
                class="btn btn-link btn-sm show-more"
                onclick={ p.on_action.reform(move |_| FeedAction::ShowMoreReplies { post, comment }) }
            >
                { format!("Show {more} more replies") }
            </button>
        }
    });
    html! {
        <div class="replies ms-4">
            { for page.shown.iter().map(|reply| reply_html(p, reply)) }
            { for show_more }
        </div>
    }
}

fn reply_html(p: &CommentViewProps, reply: &Reply) -> Html {
    html! {
        <div class="reply mb-1" key={ reply.id.0.to_string() }>
            { header(&reply.author, reply.timestamp, p.now) }
            <p class="reply-content mb-1">{ &reply.content }</p>
            { reaction_bar(p, reply.id, &reply.reactions) }
        </div>
    }
}
